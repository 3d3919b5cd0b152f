//! Input decoding checks

use crate::error::{ConversionError, ConversionResult};

/// Decode `bytes` as UTF-8, reporting the offset of the first invalid byte
pub fn decode_utf8(bytes: Vec<u8>) -> ConversionResult<String> {
    String::from_utf8(bytes).map_err(|e| ConversionError::Encoding {
        offset: e.utf8_error().valid_up_to(),
    })
}
