//! Processing module for per-file work.
//!
//! This module provides:
//! - Language detection from file extensions
//! - Bounded, lossy content reading
//! - The file processor that ties detection, reading and vectorization together

pub mod file_processor;
pub mod language;
pub mod reader;

pub use file_processor::{FileError, FileProcessor, ProcessedFile};
pub use language::{Language, LanguageDetector};
pub use reader::{ContentReader, FileContent, ReadError};
