//! File processor for the vectorization pipeline.
//!
//! Combines language detection, bounded reading, vectorization and artifact
//! writing for a single file.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::output::{ArtifactError, ArtifactWriter, VectorArtifact};
use crate::processing::language::{Language, LanguageDetector};
use crate::processing::reader::{ContentReader, ReadError};
use crate::vectorizer::{VectorizeError, Vectorizer, VectorizerKind};

/// A file that was vectorized and written out.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedFile {
    /// Path as listed in the manifest.
    pub path: String,
    /// Detected language.
    pub language: Language,
    /// Artifact location.
    pub output_file: PathBuf,
    /// Whether the content was cut at the size ceiling.
    pub truncated: bool,
}

/// Why a single file could not be processed.
#[derive(Debug, Error)]
pub enum FileError {
    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Unreadable file: {0}")]
    Unreadable(#[from] ReadError),

    #[error("Empty file: {0}")]
    Empty(String),

    #[error(transparent)]
    Vectorization(#[from] VectorizeError),

    #[error("Failed to write artifact: {0}")]
    Artifact(#[from] ArtifactError),
}

/// Turns one source file into one vector artifact.
pub struct FileProcessor {
    language_detector: LanguageDetector,
    reader: ContentReader,
    vectorizer: Box<dyn Vectorizer>,
    writer: ArtifactWriter,
}

impl FileProcessor {
    pub fn new(reader: ContentReader, vectorizer: Box<dyn Vectorizer>, writer: ArtifactWriter) -> Self {
        Self {
            language_detector: LanguageDetector::new(),
            reader,
            vectorizer,
            writer,
        }
    }

    /// Process a file and write its artifact.
    pub fn process(&self, path: &str) -> Result<ProcessedFile, FileError> {
        let source = Path::new(path);
        if !source.exists() {
            return Err(FileError::NotFound(path.to_string()));
        }

        let language = self.language_detector.detect(source);

        let content = self.reader.read(source)?;
        if content.is_empty() {
            return Err(FileError::Empty(path.to_string()));
        }

        let vectorization = self.vectorizer.vectorize(&content.text, source)?;

        let artifact = VectorArtifact::new(path, language, vectorization);
        let output_file = self.writer.write(&artifact)?;

        debug!(
            path,
            language = %language,
            bytes = content.bytes_read,
            "Processed file"
        );

        Ok(ProcessedFile {
            path: path.to_string(),
            language,
            output_file,
            truncated: content.truncated,
        })
    }

    pub fn vectorizer_kind(&self) -> VectorizerKind {
        self.vectorizer.kind()
    }

    pub fn writer(&self) -> &ArtifactWriter {
        &self.writer
    }
}
