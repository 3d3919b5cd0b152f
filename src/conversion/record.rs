//! Bookmark records extracted from raw rows

use crate::conversion::config::ConversionConfig;
use crate::error::{ConversionError, ConversionResult};
use crate::formatter::render_row;
use crate::parser::RawRecord;

/// Minimum number of positional fields in a bookmark row
pub const REQUIRED_FIELDS: usize = 4;

/// One bookmark, built from a single input row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkRecord {
    pub title: String,
    pub url: String,
    pub added_date: String,
    pub tags: String,
}

impl BookmarkRecord {
    /// Extract a record from `row`. `position` is the 1-based row number used in errors.
    pub fn from_raw<R: RawRecord + ?Sized>(
        row: &R,
        position: usize,
        config: &ConversionConfig,
    ) -> ConversionResult<Self> {
        let count = row.field_count();
        let field = |index: usize| {
            row.field(index)
                .ok_or_else(|| ConversionError::malformed_record(position, count))
        };

        let title = field(0)?.trim().to_string();
        let url = field(1)?.to_string();
        let added_date = field(2)?.to_string();
        let tags = replace_tag_delimiter(
            field(3)?,
            config.input_tag_delimiter,
            config.output_tag_delimiter,
        );

        Ok(Self {
            title,
            url,
            added_date,
            tags,
        })
    }

    /// Render this record as a `<DT>` fragment
    pub fn render(&self) -> String {
        render_row(&self.title, &self.url, &self.added_date, &self.tags)
    }
}

/// Replace every `from` in `tags` with `to`.
///
/// This is plain character substitution: a tag that already contained `to` cannot
/// be told apart from two tags afterwards.
pub fn replace_tag_delimiter(tags: &str, from: char, to: char) -> String {
    if from == to {
        return tags.to_string();
    }
    let mut buf = [0u8; 4];
    tags.replace(from, to.encode_utf8(&mut buf))
}

/// Iterator turning raw rows into records, honouring header skipping and row numbering
pub struct Records<'c, I> {
    rows: I,
    config: &'c ConversionConfig,
    position: usize,
    header_pending: bool,
    header_skipped: bool,
}

impl<'c, I> Records<'c, I> {
    pub fn new(rows: I, config: &'c ConversionConfig) -> Self {
        Self {
            rows,
            config,
            position: 0,
            header_pending: config.skip_header,
            header_skipped: false,
        }
    }

    /// True once a header row has actually been discarded
    pub fn header_skipped(&self) -> bool {
        self.header_skipped
    }

    /// Number of data rows seen so far
    pub fn position(&self) -> usize {
        self.position
    }
}

impl<'c, I, R> Iterator for Records<'c, I>
where
    I: Iterator<Item = ConversionResult<R>>,
    R: RawRecord,
{
    type Item = ConversionResult<BookmarkRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.header_pending {
            self.header_pending = false;
            match self.rows.next()? {
                Ok(_) => self.header_skipped = true,
                Err(e) => return Some(Err(e)),
            }
        }

        let row = match self.rows.next()? {
            Ok(row) => row,
            Err(e) => return Some(Err(e)),
        };
        self.position += 1;
        Some(BookmarkRecord::from_raw(&row, self.position, self.config))
    }
}
