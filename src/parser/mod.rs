//! CSV input sources and row parsing

pub mod rows;
pub mod validation;

use crate::conversion::ConversionConfig;
use crate::error::{ConversionError, ConversionResult};
use rows::{RowSpan, RowSplitter};
use csv::StringRecord;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

/// Positional access to the fields of one raw input row
pub trait RawRecord {
    /// Number of fields in the row
    fn field_count(&self) -> usize;

    /// Field at `index`, if present
    fn field(&self, index: usize) -> Option<&str>;
}

impl RawRecord for StringRecord {
    fn field_count(&self) -> usize {
        self.len()
    }

    fn field(&self, index: usize) -> Option<&str> {
        self.get(index)
    }
}

impl<S: AsRef<str>> RawRecord for [S] {
    fn field_count(&self) -> usize {
        self.len()
    }

    fn field(&self, index: usize) -> Option<&str> {
        self.get(index).map(AsRef::as_ref)
    }
}

impl<S: AsRef<str>> RawRecord for Vec<S> {
    fn field_count(&self) -> usize {
        self.len()
    }

    fn field(&self, index: usize) -> Option<&str> {
        self.as_slice().field(index)
    }
}

impl<R: RawRecord + ?Sized> RawRecord for &R {
    fn field_count(&self) -> usize {
        (**self).field_count()
    }

    fn field(&self, index: usize) -> Option<&str> {
        (**self).field(index)
    }
}

/// Where the CSV input comes from
#[derive(Debug, Clone, PartialEq)]
pub enum CsvSource {
    /// CSV text held in memory
    String(String),
    /// CSV file on disk
    File(PathBuf),
    /// Standard input stream
    Stdin,
}

impl CsvSource {
    /// Resolve a CLI path argument; `None` and `-` both mean standard input
    pub fn from_arg(arg: Option<&PathBuf>) -> Self {
        match arg {
            Some(path) if path.as_os_str() != "-" => CsvSource::File(path.clone()),
            _ => CsvSource::Stdin,
        }
    }

    /// Get a human-readable description of the source
    pub fn description(&self) -> String {
        match self {
            CsvSource::String(_) => "string input".to_string(),
            CsvSource::File(path) => format!("file: {}", path.display()),
            CsvSource::Stdin => "standard input".to_string(),
        }
    }

    /// Default heading for the document built from this source
    pub fn subtitle(&self) -> String {
        match self {
            CsvSource::String(_) => "Pocket export".to_string(),
            CsvSource::File(path) => path.display().to_string(),
            CsvSource::Stdin => "<stdin>".to_string(),
        }
    }

    /// Get the size of the source in bytes (if known before reading)
    pub fn estimated_size(&self) -> Option<u64> {
        match self {
            CsvSource::String(s) => Some(s.len() as u64),
            CsvSource::File(path) => std::fs::metadata(path).ok().map(|m| m.len()),
            CsvSource::Stdin => None,
        }
    }

    /// Open the source for reading. The handle is closed when the reader is dropped.
    pub fn open(&self) -> ConversionResult<Box<dyn Read + '_>> {
        match self {
            CsvSource::String(content) => Ok(Box::new(content.as_bytes())),
            CsvSource::File(path) => {
                let file = File::open(path)
                    .map_err(|e| ConversionError::io(e.to_string(), Some(path.clone())))?;
                Ok(Box::new(file))
            }
            CsvSource::Stdin => Ok(Box::new(std::io::stdin().lock())),
        }
    }
}

/// Build a CSV reader over `content` using the configured field delimiter.
///
/// Header handling is left to the converter, and rows of any width are accepted
/// so that short rows surface as malformed records rather than CSV errors.
pub fn csv_reader<'a>(content: &'a str, config: &ConversionConfig) -> csv::Reader<&'a [u8]> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(config.field_delimiter)
        .from_reader(content.as_bytes())
}

/// Parse one physical row into its fields. A blank row has no fields.
fn parse_row(row: RowSpan<'_>, config: &ConversionConfig) -> ConversionResult<StringRecord> {
    match csv_reader(row.text, config).into_records().next() {
        None => Ok(StringRecord::new()),
        Some(Ok(record)) => Ok(record),
        Some(Err(err)) => match ConversionError::from(err) {
            ConversionError::Csv { message, .. } => Err(ConversionError::Csv {
                message,
                line: Some(row.line),
            }),
            other => Err(other),
        },
    }
}

/// Iterate the rows of `content` in input order.
///
/// Quoting is strict: text after a closing quote or an unterminated quoted field
/// is a CSV error. Blank lines yield empty records.
pub fn parse_rows<'a>(
    content: &'a str,
    config: &'a ConversionConfig,
) -> impl Iterator<Item = ConversionResult<StringRecord>> + 'a {
    RowSplitter::new(content, config.field_delimiter)
        .map(move |row| row.and_then(|row| parse_row(row, config)))
}
