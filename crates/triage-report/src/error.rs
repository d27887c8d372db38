//! Error types for the report boundary

use std::path::PathBuf;

/// Errors raised while discovering or parsing a metrics report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Reading the report file failed
    #[error("failed to read report {path}: {source}")]
    Io {
        /// Path that could not be read
        path: PathBuf,
        /// Underlying io error
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON
    #[error("malformed analysis document: {0}")]
    Parse(#[from] serde_json::Error),

    /// The document parses but lacks the score mapping
    #[error("analysis document has no overall_analysis.average_scores mapping")]
    MissingScores,

    /// No report file matching the naming pattern exists
    #[error("no analysis report matching {pattern} found in {dir}")]
    NoReportFound {
        /// Directory that was scanned
        dir: PathBuf,
        /// Naming pattern that was looked for
        pattern: String,
    },
}
