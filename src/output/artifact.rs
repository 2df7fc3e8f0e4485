//! Per-file vector artifacts written next to each other in the output dir.
//!
//! Artifact names are `<bucket>_<basename>.vec.json` where `bucket` is a
//! stable hash of the source path modulo [`ARTIFACT_BUCKETS`]. Two paths that
//! share a basename and land in the same bucket write to the same artifact;
//! the later write wins.

use std::fs::File;
use std::hash::{Hash, Hasher};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use siphasher::sip::SipHasher24;
use thiserror::Error;
use tracing::debug;

use crate::processing::Language;
use crate::vectorizer::Vectorization;

/// Number of hash buckets used in artifact file names.
pub const ARTIFACT_BUCKETS: u64 = 10_000;

/// Suffix of every artifact file.
pub const ARTIFACT_SUFFIX: &str = ".vec.json";

/// The JSON document stored for one successfully vectorized file.
#[derive(Debug, Clone, Serialize)]
pub struct VectorArtifact {
    pub file: String,
    pub language: Language,
    /// Seconds since the Unix epoch.
    pub timestamp: f64,
    pub vectorization: Vectorization,
}

impl VectorArtifact {
    /// Build an artifact stamped with the current time.
    pub fn new(file: impl Into<String>, language: Language, vectorization: Vectorization) -> Self {
        let now = chrono::Utc::now();
        Self {
            file: file.into(),
            language,
            timestamp: now.timestamp_micros() as f64 / 1_000_000.0,
            vectorization,
        }
    }
}

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize artifact for {file}: {source}")]
    Serialize {
        file: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Writes vector artifacts into a single output directory.
#[derive(Debug, Clone)]
pub struct ArtifactWriter {
    output_dir: PathBuf,
}

impl ArtifactWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Where the artifact for `source_path` is written.
    pub fn artifact_path(&self, source_path: &str) -> PathBuf {
        let basename = Path::new(source_path)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        self.output_dir.join(format!(
            "{}_{}{}",
            path_bucket(source_path),
            basename,
            ARTIFACT_SUFFIX
        ))
    }

    /// Serialize `artifact` to its file, replacing any existing one.
    pub fn write(&self, artifact: &VectorArtifact) -> Result<PathBuf, ArtifactError> {
        let path = self.artifact_path(&artifact.file);

        let file = File::create(&path).map_err(|source| ArtifactError::Io {
            path: path.clone(),
            source,
        })?;
        let mut writer = BufWriter::new(file);

        serde_json::to_writer(&mut writer, artifact).map_err(|source| {
            ArtifactError::Serialize {
                file: artifact.file.clone(),
                source,
            }
        })?;
        writer.flush().map_err(|source| ArtifactError::Io {
            path: path.clone(),
            source,
        })?;

        debug!(artifact = %path.display(), "Wrote vector artifact");
        Ok(path)
    }
}

/// Stable bucket for a source path, in `0..ARTIFACT_BUCKETS`.
pub fn path_bucket(source_path: &str) -> u64 {
    let mut hasher = SipHasher24::new();
    source_path.hash(&mut hasher);
    hasher.finish() % ARTIFACT_BUCKETS
}
