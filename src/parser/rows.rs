//! Strict splitting of CSV text into physical rows
//!
//! Each row is cut out of the input before field parsing so that quoting errors
//! are reported instead of repaired, and blank lines stay visible as empty rows.

use crate::error::{ConversionError, ConversionResult};

const QUOTE: u8 = b'"';

/// One raw row and the 1-based line it starts on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowSpan<'a> {
    pub text: &'a str,
    pub line: u64,
}

/// Iterator over the rows of CSV text.
///
/// A quoted field must be closed, and its closing quote must be followed by the
/// field delimiter, a line break or the end of input. A quote inside an unquoted
/// field is literal. Iteration stops after the first error.
pub struct RowSplitter<'a> {
    content: &'a str,
    delimiter: u8,
    pos: usize,
    line: u64,
}

impl<'a> RowSplitter<'a> {
    pub fn new(content: &'a str, delimiter: u8) -> Self {
        Self {
            content,
            delimiter,
            pos: 0,
            line: 1,
        }
    }

    fn fail(&mut self, message: String) -> ConversionError {
        self.pos = self.content.len();
        ConversionError::Csv {
            message,
            line: Some(self.line),
        }
    }
}

impl<'a> Iterator for RowSplitter<'a> {
    type Item = ConversionResult<RowSpan<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        let content = self.content;
        let bytes = content.as_bytes();
        if self.pos >= bytes.len() {
            return None;
        }

        let start = self.pos;
        let start_line = self.line;
        let mut i = start;
        let mut in_quotes = false;
        let mut field_start = true;

        while i < bytes.len() {
            let b = bytes[i];

            if in_quotes {
                if b == QUOTE {
                    match bytes.get(i + 1) {
                        Some(&QUOTE) => i += 2,
                        None | Some(&b'\n') | Some(&b'\r') => {
                            in_quotes = false;
                            i += 1;
                        }
                        Some(&next) if next == self.delimiter => {
                            in_quotes = false;
                            i += 1;
                        }
                        Some(_) => {
                            let message =
                                format!("'{}' expected after '\"'", self.delimiter as char);
                            return Some(Err(self.fail(message)));
                        }
                    }
                    continue;
                }
                if b == b'\n' {
                    self.line += 1;
                }
                i += 1;
                continue;
            }

            match b {
                b'\n' | b'\r' => {
                    let text = &content[start..i];
                    i += if b == b'\r' && bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                    self.pos = i;
                    self.line += 1;
                    return Some(Ok(RowSpan {
                        text,
                        line: start_line,
                    }));
                }
                _ if b == self.delimiter => field_start = true,
                QUOTE if field_start => {
                    in_quotes = true;
                    field_start = false;
                }
                _ => field_start = false,
            }
            i += 1;
        }

        if in_quotes {
            return Some(Err(self.fail("unexpected end of data inside quoted field".to_string())));
        }

        self.pos = bytes.len();
        Some(Ok(RowSpan {
            text: &content[start..],
            line: start_line,
        }))
    }
}
