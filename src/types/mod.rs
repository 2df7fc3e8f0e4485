//! Core types for the batch vectorizer.

mod config;
mod manifest;
mod result;

pub use config::Settings;
pub use manifest::{BatchManifest, ManifestError};
pub use result::{files_per_second, BatchReport, BatchSummary, FileFailure, ShortReport};
