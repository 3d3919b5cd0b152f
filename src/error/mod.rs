//! Error types and handling infrastructure for CSV to bookmark conversion

use std::path::PathBuf;

/// Main error type for conversion operations
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("Malformed record at row {row}: expected at least 4 fields, found {fields}")]
    MalformedRecord { row: usize, fields: usize },

    #[error("CSV parse error: {message}")]
    Csv { message: String, line: Option<u64> },

    #[error("Invalid UTF-8 in input at byte {offset}")]
    Encoding { offset: usize },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
    },

    #[error("Input too large: {size} bytes (limit: {limit} bytes)")]
    InputTooLarge { size: u64, limit: usize },

    #[error("Invalid configuration: {message}")]
    Configuration { message: String },
}

impl ConversionError {
    pub fn malformed_record(row: usize, fields: usize) -> Self {
        Self::MalformedRecord { row, fields }
    }

    pub fn io(message: String, path: Option<PathBuf>) -> Self {
        Self::Io { message, path }
    }

    pub fn configuration(message: String) -> Self {
        Self::Configuration { message }
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::MalformedRecord { row, fields } => format!(
                "Row {} has {} field(s); each bookmark needs title, url, time added and tags",
                row, fields
            ),
            Self::Csv {
                message,
                line: Some(line),
            } => format!("CSV parse error at line {}: {}", line, message),
            Self::Io {
                message,
                path: Some(path),
            } => format!("IO error on {}: {}", path.display(), message),
            Self::Encoding { offset } => format!(
                "Input is not valid UTF-8 (first invalid byte at offset {})",
                offset
            ),
            _ => self.to_string(),
        }
    }
}

impl From<csv::Error> for ConversionError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|pos| pos.line());
        match err.kind() {
            csv::ErrorKind::Io(io) => Self::io(io.to_string(), None),
            csv::ErrorKind::Utf8 { err: utf8, .. } => Self::Encoding {
                offset: utf8.valid_up_to(),
            },
            _ => Self::Csv {
                message: err.to_string(),
                line,
            },
        }
    }
}

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;
