use crate::conversion::config::ConversionConfig;
use crate::conversion::ConversionResult;
use crate::error::ConversionError;
use crate::parser::CsvSource;
use std::io::Read;

/// Check the source size before attempting to read it.
/// This avoids loading very large files into memory if the user-configured
/// limit is smaller than the file.
pub fn check_source_size_before_read(
    source: &CsvSource,
    config: &ConversionConfig,
) -> ConversionResult<()> {
    let Some(limit) = config.memory_limit else {
        return Ok(());
    };

    if let Some(size) = source.estimated_size() {
        if size > limit as u64 {
            return Err(ConversionError::InputTooLarge { size, limit });
        }
    }

    Ok(())
}

/// Read all of `reader`, failing once more than `memory_limit` bytes arrive.
/// Sources with no known size (stdin) are only bounded here.
pub fn read_to_limit<R: Read>(mut reader: R, config: &ConversionConfig) -> ConversionResult<Vec<u8>> {
    let mut bytes = Vec::new();
    let read_error = |e: std::io::Error| ConversionError::io(format!("Failed to read input: {}", e), None);

    let Some(limit) = config.memory_limit else {
        reader.read_to_end(&mut bytes).map_err(read_error)?;
        return Ok(bytes);
    };

    reader
        .take(limit as u64 + 1)
        .read_to_end(&mut bytes)
        .map_err(read_error)?;

    if bytes.len() > limit {
        return Err(ConversionError::InputTooLarge {
            size: bytes.len() as u64,
            limit,
        });
    }

    Ok(bytes)
}
