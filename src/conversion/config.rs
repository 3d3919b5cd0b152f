//! Configuration options for CSV to bookmark conversion

/// Default tag separator used by Pocket exports
pub const DEFAULT_INPUT_TAG_DELIMITER: char = '|';

/// Tag separator expected by browsers importing Netscape bookmark files
pub const DEFAULT_OUTPUT_TAG_DELIMITER: char = ',';

/// Conversion configuration options
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionConfig {
    /// Discard the first row of the input
    pub skip_header: bool,
    /// Character separating tags in the input tags column
    pub input_tag_delimiter: char,
    /// Character separating tags in the rendered TAGS attribute
    pub output_tag_delimiter: char,
    /// CSV field delimiter
    pub field_delimiter: u8,
    /// Maximum input size in bytes; `None` reads the whole input
    pub memory_limit: Option<usize>,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            skip_header: true,
            input_tag_delimiter: DEFAULT_INPUT_TAG_DELIMITER,
            output_tag_delimiter: DEFAULT_OUTPUT_TAG_DELIMITER,
            field_delimiter: b',',
            memory_limit: None,
        }
    }
}

impl ConversionConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Treat the first row as a header (or as data)
    pub fn with_skip_header(mut self, skip: bool) -> Self {
        self.skip_header = skip;
        self
    }

    /// Set the input and output tag delimiters
    pub fn with_tag_delimiters(mut self, input: char, output: char) -> Self {
        self.input_tag_delimiter = input;
        self.output_tag_delimiter = output;
        self
    }

    /// Set the CSV field delimiter. Only ASCII characters are accepted.
    pub fn with_field_delimiter(mut self, delimiter: char) -> Result<Self, String> {
        if !delimiter.is_ascii() {
            return Err(format!(
                "Field delimiter must be an ASCII character, got '{}'",
                delimiter
            ));
        }
        self.field_delimiter = delimiter as u8;
        Ok(self)
    }

    /// Cap the input size at `limit_bytes`
    pub fn with_memory_limit(mut self, limit_bytes: usize) -> Self {
        self.memory_limit = Some(limit_bytes);
        self
    }

    /// Validate configuration consistency
    pub fn validate(&self) -> Result<(), String> {
        if matches!(self.memory_limit, Some(limit) if limit < 1024) {
            return Err("Memory limit must be at least 1KB".to_string());
        }

        if self.field_delimiter == b'"' || self.field_delimiter == b'\n' {
            return Err(format!(
                "Field delimiter {:?} conflicts with CSV quoting or line breaks",
                self.field_delimiter as char
            ));
        }

        // A field delimiter of '|' would split the tags column before we ever see it
        if self.field_delimiter as char == self.input_tag_delimiter {
            return Err(format!(
                "Field delimiter and tag separator are both '{}'",
                self.input_tag_delimiter
            ));
        }

        Ok(())
    }
}
