//! Core conversion engine for CSV to bookmark transformation

use crate::conversion::config::ConversionConfig;
use crate::conversion::limits;
use crate::conversion::record::Records;
use crate::conversion::ConversionResult;
use crate::error::ConversionError;
use crate::formatter::DocumentBuilder;
use crate::parser::validation::decode_utf8;
use crate::parser::{parse_rows, CsvSource, RawRecord};
use std::io::{Read, Write};
use std::time::Instant;
use tracing::{debug, info};

/// Converted body fragments without header or footer
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertedBody {
    pub content: String,
    pub record_count: usize,
    pub header_skipped: bool,
}

/// A complete bookmark document
#[derive(Debug, Clone)]
pub struct BookmarkDocument {
    pub content: String,
    pub metadata: DocumentMetadata,
}

impl BookmarkDocument {
    pub fn new(content: String, metadata: DocumentMetadata) -> Self {
        Self { content, metadata }
    }

    /// Get the rendered markup
    pub fn as_str(&self) -> &str {
        &self.content
    }

    /// Get the length of the output in bytes
    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Metadata about the conversion process
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentMetadata {
    pub record_count: usize,
    pub header_skipped: bool,
    pub input_size: u64,
    pub output_size: u64,
    pub processing_time_ms: u64,
}

/// Main conversion engine
pub struct ConversionEngine {
    config: ConversionConfig,
}

impl ConversionEngine {
    /// Create a new conversion engine
    pub fn new(config: ConversionConfig) -> Self {
        Self { config }
    }

    /// Convert rows into body fragments, stopping at the first failing row
    pub fn convert_records<I, R>(&self, rows: I) -> ConversionResult<ConvertedBody>
    where
        I: IntoIterator<Item = ConversionResult<R>>,
        R: RawRecord,
    {
        let mut records = Records::new(rows.into_iter(), &self.config);
        let mut content = String::new();
        let mut record_count = 0;

        while let Some(record) = records.next() {
            let record = record?;
            debug!(row = records.position(), url = %record.url, "converted bookmark");
            content.push_str(&record.render());
            record_count += 1;
        }

        Ok(ConvertedBody {
            content,
            record_count,
            header_skipped: records.header_skipped(),
        })
    }

    /// Convert rows into a full document with `subtitle` as its heading
    pub fn convert_document<I, R>(&self, rows: I, subtitle: &str) -> ConversionResult<BookmarkDocument>
    where
        I: IntoIterator<Item = ConversionResult<R>>,
        R: RawRecord,
    {
        let start_time = Instant::now();
        let body = self.convert_records(rows)?;

        let mut builder = DocumentBuilder::new(subtitle);
        builder.push_body(&body.content, body.record_count);
        let record_count = builder.fragment_count();
        let header_skipped = body.header_skipped;
        let content = builder.finish();

        let metadata = DocumentMetadata {
            record_count,
            header_skipped,
            input_size: 0,
            output_size: content.len() as u64,
            processing_time_ms: start_time.elapsed().as_millis() as u64,
        };

        Ok(BookmarkDocument::new(content, metadata))
    }

    /// Parse CSV text and convert it
    pub fn convert_str(&self, csv: &str, subtitle: &str) -> ConversionResult<BookmarkDocument> {
        let mut document = self.convert_document(parse_rows(csv, &self.config), subtitle)?;
        document.metadata.input_size = csv.len() as u64;
        Ok(document)
    }

    /// Read all of `reader`, decode it as UTF-8 and convert it
    pub fn convert_reader<R: Read>(&self, reader: R, subtitle: &str) -> ConversionResult<BookmarkDocument> {
        let start_time = Instant::now();
        let bytes = limits::read_to_limit(reader, &self.config)?;
        let content = decode_utf8(bytes)?;

        let mut document = self.convert_str(&content, subtitle)?;
        document.metadata.processing_time_ms = start_time.elapsed().as_millis() as u64;
        Ok(document)
    }

    /// Convert everything readable from `source`
    pub fn convert_from_source(&self, source: &CsvSource, subtitle: &str) -> ConversionResult<BookmarkDocument> {
        limits::check_source_size_before_read(source, &self.config)?;

        debug!(source = %source.description(), "reading input");
        let reader = source.open()?;
        self.convert_reader(reader, subtitle)
    }
}

/// Convert rows with explicit header and delimiter settings, returning only the body
pub fn convert_all<I, R>(
    rows: I,
    skip_header: bool,
    input_tag_delimiter: char,
    output_tag_delimiter: char,
) -> ConversionResult<String>
where
    I: IntoIterator<Item = R>,
    R: RawRecord,
{
    let config = ConversionConfig::default()
        .with_skip_header(skip_header)
        .with_tag_delimiters(input_tag_delimiter, output_tag_delimiter);
    let engine = ConversionEngine::new(config);
    let body = engine.convert_records(rows.into_iter().map(Ok))?;
    Ok(body.content)
}

/// Convert CSV text to a bookmark document
pub fn convert_csv_string(
    csv: &str,
    subtitle: &str,
    config: &ConversionConfig,
) -> ConversionResult<BookmarkDocument> {
    let engine = ConversionEngine::new(config.clone());
    engine.convert_str(csv, subtitle)
}

/// Convert the whole of `reader` and write the document to `writer` in one piece.
///
/// Nothing is written if reading or any row fails.
pub fn convert_stream<R: Read, W: Write>(
    reader: R,
    writer: &mut W,
    subtitle: &str,
    config: &ConversionConfig,
) -> ConversionResult<DocumentMetadata> {
    let engine = ConversionEngine::new(config.clone());
    let document = engine.convert_reader(reader, subtitle)?;

    writer
        .write_all(document.content.as_bytes())
        .and_then(|_| writer.flush())
        .map_err(|e| ConversionError::io(format!("Failed to write output: {}", e), None))?;

    info!(
        records = document.metadata.record_count,
        bytes = document.metadata.output_size,
        "wrote bookmark document"
    );
    Ok(document.metadata)
}
