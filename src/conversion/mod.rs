//! CSV to bookmark conversion module
//!
//! This module contains the core conversion logic, configuration, and statistics.

pub mod config;
pub mod engine;
pub mod limits;
pub mod record;
pub mod stats;

pub use config::ConversionConfig;

pub use engine::{
    convert_all, convert_csv_string, convert_stream, BookmarkDocument, ConversionEngine,
    ConvertedBody, DocumentMetadata,
};
pub use record::{replace_tag_delimiter, BookmarkRecord};
pub use stats::ConversionStatistics;

/// Result type for conversion operations
pub use crate::error::ConversionResult;
