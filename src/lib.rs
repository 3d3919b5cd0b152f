//! Pocket CSV to Netscape bookmark converter
//!
//! Reads a Pocket export (`title,url,time_added,tags` rows) and renders a
//! Netscape bookmark HTML file that browsers can import.

pub mod cli;
pub mod conversion;
pub mod error;
pub mod formatter;
pub mod parser;

// Re-export commonly used types
pub use conversion::{
    convert_all, convert_stream, BookmarkDocument, BookmarkRecord, ConversionConfig,
    ConversionEngine,
};
pub use error::{ConversionError, ConversionResult};
pub use formatter::{render_footer, render_header, render_row};
pub use parser::{CsvSource, RawRecord};

/// Convert CSV text to a bookmark document with default configuration
pub fn convert_csv(csv: &str, subtitle: &str) -> Result<String, ConversionError> {
    let config = ConversionConfig::default();
    convert_csv_with_config(csv, subtitle, &config)
}

/// Convert CSV text to a bookmark document with custom configuration
pub fn convert_csv_with_config(
    csv: &str,
    subtitle: &str,
    config: &ConversionConfig,
) -> Result<String, ConversionError> {
    let document = conversion::convert_csv_string(csv, subtitle, config)?;
    Ok(document.content)
}
