//! Base trait and result types for all vectorizers.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which vectorizer produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum VectorizerKind {
    /// Bag-of-terms TF-IDF over the document.
    Tfidf,
    /// Fixed placeholder result, no computation.
    Mock,
}

impl VectorizerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            VectorizerKind::Tfidf => "tfidf",
            VectorizerKind::Mock => "mock",
        }
    }
}

impl fmt::Display for VectorizerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Successful vectorization outcome as written into artifacts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Vectorization {
    pub success: bool,
    /// Dense vector. Absent for mock results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vector: Option<Vec<f64>>,
    pub vector_size: usize,
    pub vector_type: VectorizerKind,
}

impl Vectorization {
    /// A computed vector.
    pub fn dense(vector: Vec<f64>, vector_type: VectorizerKind) -> Self {
        Self {
            success: true,
            vector_size: vector.len(),
            vector: Some(vector),
            vector_type,
        }
    }

    /// A placeholder of the given size with no vector.
    pub fn placeholder(vector_size: usize) -> Self {
        Self {
            success: true,
            vector: None,
            vector_size,
            vector_type: VectorizerKind::Mock,
        }
    }
}

/// Failure while vectorizing a document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VectorizeError {
    #[error("empty vocabulary; perhaps the documents only contain stop words")]
    EmptyVocabulary,

    #[error("max_features must be positive")]
    NoFeatures,
}

/// The core trait that all vectorizers implement.
///
/// Exactly one implementation is chosen at startup and used for the whole
/// batch.
pub trait Vectorizer: Send + Sync {
    /// Get the kind of this vectorizer.
    fn kind(&self) -> VectorizerKind;

    /// Turn `content` into a vector. `path` is used only for diagnostics.
    fn vectorize(&self, content: &str, path: &Path) -> Result<Vectorization, VectorizeError>;
}
