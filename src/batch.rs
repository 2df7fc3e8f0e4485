//! Batch orchestration: one manifest in, one summary out.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use thiserror::Error;
use tracing::{error, info, warn};

use crate::output::ArtifactWriter;
use crate::processing::{ContentReader, FileProcessor, Language};
use crate::types::{
    files_per_second, BatchManifest, BatchReport, BatchSummary, FileFailure, ManifestError,
    Settings, ShortReport,
};
use crate::vectorizer::build_vectorizer;

/// Errors that abort a batch before or instead of its file loop.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("cannot create output directory {path}: {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Manifest(#[from] ManifestError),
}

/// Runs every file in a manifest through a [`FileProcessor`], sequentially.
pub struct BatchProcessor {
    processor: FileProcessor,
}

impl BatchProcessor {
    /// Create a batch processor writing artifacts into `output_dir`.
    pub fn new(settings: &Settings, output_dir: impl Into<PathBuf>) -> Self {
        let processor = FileProcessor::new(
            ContentReader::new(settings.max_file_size),
            build_vectorizer(settings.vectorizer, settings.max_features),
            ArtifactWriter::new(output_dir),
        );
        Self::with_processor(processor)
    }

    pub fn with_processor(processor: FileProcessor) -> Self {
        Self { processor }
    }

    pub fn output_dir(&self) -> &Path {
        self.processor.writer().output_dir()
    }

    /// Process the batch described by `manifest_path`.
    ///
    /// Never fails: batch-level errors become a short report with
    /// `success == false`.
    pub fn process_batch(&self, manifest_path: &Path, job_id: &str) -> BatchReport {
        let start = Instant::now();

        match self.try_process_batch(manifest_path, job_id, start) {
            Ok(report) => report,
            Err(e) => {
                error!(job_id, error = %e, "Error processing batch");
                BatchReport::Short(ShortReport {
                    success: false,
                    message: format!("Batch processing error: {}", e),
                    files_processed: 0,
                    processing_time: start.elapsed().as_secs_f64(),
                })
            }
        }
    }

    fn try_process_batch(
        &self,
        manifest_path: &Path,
        job_id: &str,
        start: Instant,
    ) -> Result<BatchReport, BatchError> {
        let output_dir = self.output_dir();
        fs::create_dir_all(output_dir).map_err(|source| BatchError::OutputDir {
            path: output_dir.to_path_buf(),
            source,
        })?;

        let manifest = BatchManifest::load(manifest_path)?;
        if manifest.is_empty() {
            info!(job_id, "No files in batch");
            return Ok(BatchReport::Short(ShortReport {
                success: true,
                message: "No files in batch".to_string(),
                files_processed: 0,
                processing_time: start.elapsed().as_secs_f64(),
            }));
        }

        info!(
            job_id,
            files = manifest.files().len(),
            vectorizer = %self.processor.vectorizer_kind(),
            "Processing batch"
        );

        let summary = self.process_files(manifest.files(), job_id, start);

        info!(
            job_id,
            processed = summary.files_processed,
            failed = summary.files_failed,
            elapsed_secs = summary.processing_time,
            "Batch processing complete"
        );

        Ok(BatchReport::Summary(summary))
    }

    /// Process each path in order and tally the results.
    fn process_files(&self, files: &[String], job_id: &str, start: Instant) -> BatchSummary {
        let mut processed_count = 0;
        let mut failures = Vec::new();
        let mut languages: BTreeMap<&'static str, Language> = BTreeMap::new();

        for path in files {
            match self.processor.process(path) {
                Ok(file) => {
                    processed_count += 1;
                    languages.insert(file.language.as_str(), file.language);
                }
                Err(e) => {
                    warn!(job_id, path = %path, error = %e, "Failed to process file");
                    failures.push(FileFailure {
                        path: path.clone(),
                        error: e.to_string(),
                    });
                }
            }
        }

        let elapsed = start.elapsed().as_secs_f64();
        let failed_count = failures.len();

        BatchSummary {
            success: true,
            message: format!(
                "Processed {} files, {} failed",
                processed_count, failed_count
            ),
            files_processed: processed_count,
            files_failed: failed_count,
            vectors_created: processed_count,
            languages_detected: languages.into_values().collect(),
            processing_time: elapsed,
            files_per_second: files_per_second(processed_count, elapsed),
            failures,
        }
    }
}
