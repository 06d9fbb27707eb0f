//! Error types for the report pipeline.
//!
//! One error type per stage, plus a top-level wrapper:
//!
//! - [`InputError`] - reading and parsing the CSV export
//! - [`SchemaError`] - required columns missing from the export
//! - [`RenderError`] - writing the HTML report
//! - [`ReportError`] - top-level orchestration errors
//!
//! Conversion into [`ReportError`] is automatic via `From`,
//! so `?` works across stage boundaries.

use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// Input Errors
// =============================================================================

/// Errors while loading the CSV export.
#[derive(Debug, Error)]
pub enum InputError {
    /// File missing or unreadable.
    #[error("Cannot read '{}': {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Bytes are not valid in the requested encoding.
    #[error("Cannot decode input as {encoding}: {message}")]
    Encoding { encoding: String, message: String },

    /// Not valid delimited text.
    #[error("Malformed CSV at line {line}: {message}")]
    Malformed { line: u64, message: String },

    /// No header row.
    #[error("CSV file is empty")]
    EmptyFile,
}

impl InputError {
    /// Build a [`InputError::Malformed`] from a `csv` crate error.
    pub fn from_csv(err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line()).unwrap_or(0);
        let message = match err.kind() {
            csv::ErrorKind::UnequalLengths {
                expected_len, len, ..
            } => format!("found {} fields, expected {}", len, expected_len),
            _ => err.to_string(),
        };
        InputError::Malformed { line, message }
    }
}

// =============================================================================
// Schema Errors
// =============================================================================

/// Errors while projecting the export onto the report columns.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// One or more required columns are absent from the header row.
    #[error("Missing required column(s): {}", .0.join(", "))]
    MissingColumns(Vec<String>),
}

// =============================================================================
// Render Errors
// =============================================================================

/// Errors while writing the finished report.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Creating, writing or persisting the output file failed.
    #[error("Cannot write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// =============================================================================
// Report Errors (top-level)
// =============================================================================

/// Top-level error returned by [`crate::transform::pipeline::generate_report`].
#[derive(Debug, Error)]
pub enum ReportError {
    /// Loading failed.
    #[error(transparent)]
    Input(#[from] InputError),

    /// Required columns missing.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// Writing failed.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// No input path was supplied.
    #[error("No input file given")]
    NoInput,

    /// Reading the input path from the terminal failed.
    #[error("Cannot read input path from stdin: {0}")]
    Prompt(#[source] std::io::Error),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for loading.
pub type InputResult<T> = Result<T, InputError>;

/// Result type for projection.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Result type for the whole pipeline.
pub type ReportResult<T> = Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion_chain() {
        let input_err = InputError::EmptyFile;
        let report_err: ReportError = input_err.into();
        assert!(report_err.to_string().contains("empty"));

        let schema_err = SchemaError::MissingColumns(vec!["title".into()]);
        let report_err: ReportError = schema_err.into();
        assert!(report_err.to_string().contains("title"));
    }

    #[test]
    fn test_missing_columns_lists_all() {
        let err = SchemaError::MissingColumns(vec!["id".into(), "posted_at".into()]);
        assert_eq!(err.to_string(), "Missing required column(s): id, posted_at");
    }

    #[test]
    fn test_prompt_error_keeps_cause() {
        let cause = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "stdin closed");
        let err = ReportError::Prompt(cause);

        assert_eq!(err.to_string(), "Cannot read input path from stdin: stdin closed");
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "stdin closed");
    }

    #[test]
    fn test_unreadable_mentions_path() {
        let err = InputError::Unreadable {
            path: PathBuf::from("/nope/export.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/nope/export.csv"));
        assert!(msg.contains("not found"));
    }
}
