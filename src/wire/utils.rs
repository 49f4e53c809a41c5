use std::ffi::CString;

use bson::Document;

use crate::utils::{u8_array_to_i32, u8_array_to_i64};
use crate::wire::error::{MessageEncodeError, MessageParseError};
use crate::wire::output::WireOutput;
use crate::wire::settings::MessageSettings;

pub fn parse_i32(buffer: &[u8]) -> Result<(i32, &[u8]), MessageParseError> {
    if buffer.len() < 4 {
        return Err(MessageParseError::NotEnoughBufferSize);
    }
    let mut bytes = [0u8; 4];
    bytes.copy_from_slice(&buffer[..4]);
    Ok((u8_array_to_i32(&bytes), &buffer[4..]))
}

pub fn parse_i64(buffer: &[u8]) -> Result<(i64, &[u8]), MessageParseError> {
    if buffer.len() < 8 {
        return Err(MessageParseError::NotEnoughBufferSize);
    }
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&buffer[..8]);
    Ok((u8_array_to_i64(&bytes), &buffer[8..]))
}

/// Namespace names go on the wire zero-terminated, so an interior zero byte
/// cannot be represented and is rejected before any bytes are written.
pub fn collection_name_to_cstring(name: &str) -> Result<CString, MessageEncodeError> {
    match CString::new(name) {
        Err(_nulerror) => Err(MessageEncodeError::CollectionNameContainsZeroByte),
        Ok(value) => Ok(value),
    }
}

/// Writes one document through the sink's codec and holds it to the
/// server's per-document size limit.
pub fn write_document_checked<O: WireOutput>(
    document: &Document,
    settings: &MessageSettings,
    out: &mut O,
) -> Result<(), MessageEncodeError> {
    let start = out.position();
    out.write_document(document)?;
    let document_size = out.position() - start;
    if document_size > settings.max_document_size as usize {
        return Err(MessageEncodeError::DocumentTooLarge(document_size));
    }
    Ok(())
}
