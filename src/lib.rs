//! Batch Vectorizer Library
//!
//! Reads a manifest of source files, detects each file's language, computes a
//! feature vector for its content and writes one JSON artifact per file plus
//! a single batch summary.

pub mod batch;
pub mod output;
pub mod processing;
pub mod types;
pub mod vectorizer;

pub use batch::{BatchError, BatchProcessor};
pub use output::{ArtifactWriter, VectorArtifact};
pub use processing::{ContentReader, FileError, FileProcessor, Language, LanguageDetector};
pub use types::{BatchManifest, BatchReport, BatchSummary, Settings};
pub use vectorizer::{build_vectorizer, Vectorization, Vectorizer, VectorizerKind};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::batch::*;
    pub use crate::processing::*;
    pub use crate::types::*;
    pub use crate::vectorizer::*;
}

/// Default byte ceiling for reading a single file (1MB)
pub const DEFAULT_MAX_FILE_SIZE: usize = 1024 * 1024;

/// Default maximum number of TF-IDF features
pub const DEFAULT_MAX_FEATURES: usize = 100;

/// Size reported by the mock vectorizer
pub const MOCK_VECTOR_SIZE: usize = 100;

/// Prefix for configuration environment variables
pub const ENV_PREFIX: &str = "VECBATCH";
