//! Batch manifest supplied by the job scheduler.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("cannot read manifest {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid manifest {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Ordered list of files to vectorize in one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchManifest {
    files: Vec<String>,
}

impl BatchManifest {
    /// Load and parse a manifest file.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let raw = fs::read_to_string(path).map_err(|source| ManifestError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&raw).map_err(|source| ManifestError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse manifest JSON. The document must be an object; a missing or
    /// null `files` key reads as an empty list.
    pub fn parse(raw: &str) -> serde_json::Result<Self> {
        let mut document: Map<String, Value> = serde_json::from_str(raw)?;

        let files = match document.remove("files") {
            None | Some(Value::Null) => Vec::new(),
            Some(value) => serde_json::from_value(value)?,
        };

        Ok(Self { files })
    }

    pub fn files(&self) -> &[String] {
        &self.files
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
