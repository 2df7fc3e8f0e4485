//! Batch summaries printed to stdout.

use serde::Serialize;

use crate::processing::Language;

/// A file that failed, kept for callers; not part of the JSON output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFailure {
    pub path: String,
    pub error: String,
}

/// Full summary of a batch that ran through its file list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchSummary {
    pub success: bool,
    pub message: String,
    pub files_processed: usize,
    pub files_failed: usize,
    pub vectors_created: usize,
    /// Distinct languages among successes, sorted by label.
    pub languages_detected: Vec<Language>,
    /// Elapsed wall-clock seconds.
    pub processing_time: f64,
    pub files_per_second: f64,
    #[serde(skip)]
    pub failures: Vec<FileFailure>,
}

/// Reduced summary for runs that never reached the file list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortReport {
    pub success: bool,
    pub message: String,
    pub files_processed: usize,
    pub processing_time: f64,
}

/// What one invocation reports.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum BatchReport {
    Summary(BatchSummary),
    Short(ShortReport),
}

impl BatchReport {
    pub fn success(&self) -> bool {
        match self {
            BatchReport::Summary(s) => s.success,
            BatchReport::Short(s) => s.success,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            BatchReport::Summary(s) => &s.message,
            BatchReport::Short(s) => &s.message,
        }
    }

    pub fn files_processed(&self) -> usize {
        match self {
            BatchReport::Summary(s) => s.files_processed,
            BatchReport::Short(s) => s.files_processed,
        }
    }

    pub fn summary(&self) -> Option<&BatchSummary> {
        match self {
            BatchReport::Summary(s) => Some(s),
            BatchReport::Short(_) => None,
        }
    }

    /// Serialize as a single JSON line.
    pub fn to_json_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Files per second, or 0 when no time has elapsed.
pub fn files_per_second(processed: usize, elapsed_secs: f64) -> f64 {
    if elapsed_secs > 0.0 {
        processed as f64 / elapsed_secs
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_throughput() {
        assert_eq!(files_per_second(10, 2.0), 5.0);
        assert_eq!(files_per_second(10, 0.0), 0.0);
        assert_eq!(files_per_second(0, 1.5), 0.0);
    }

    #[test]
    fn test_summary_shape() {
        let report = BatchReport::Summary(BatchSummary {
            success: true,
            message: "Processed 1 files, 1 failed".to_string(),
            files_processed: 1,
            files_failed: 1,
            vectors_created: 1,
            languages_detected: vec![Language::Python],
            processing_time: 0.5,
            files_per_second: 2.0,
            failures: vec![FileFailure {
                path: "missing.rs".to_string(),
                error: "File not found: missing.rs".to_string(),
            }],
        });

        let json: serde_json::Value =
            serde_json::from_str(&report.to_json_line().unwrap()).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "success": true,
                "message": "Processed 1 files, 1 failed",
                "files_processed": 1,
                "files_failed": 1,
                "vectors_created": 1,
                "languages_detected": ["python"],
                "processing_time": 0.5,
                "files_per_second": 2.0
            })
        );
    }

    #[test]
    fn test_short_shape() {
        let report = BatchReport::Short(ShortReport {
            success: false,
            message: "Batch processing error: boom".to_string(),
            files_processed: 0,
            processing_time: 0.25,
        });

        let line = report.to_json_line().unwrap();
        assert!(!line.contains('\n'));
        let json: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(json.as_object().unwrap().len(), 4);
        assert!(!report.success());
        assert!(report.summary().is_none());
    }
}
