use std::ffi::CStr;

use bson::Document;

use crate::utils::{i32_to_u8_array, i64_to_u8_array};
use crate::wire::error::MessageEncodeError;

/// Byte sink the encoders write into. Integers are little-endian; strings are
/// zero-terminated. Encoded bytes are never read back, only `position` moves
/// forward and `write_i32_at` patches a previously reserved slot.
pub trait WireOutput {
    fn write_i32(&mut self, value: i32);

    fn write_i64(&mut self, value: i64);

    fn write_cstring(&mut self, value: &CStr);

    fn write_document(&mut self, document: &Document) -> Result<(), MessageEncodeError>;

    fn position(&self) -> usize;

    /// Overwrites 4 bytes at `position`. The slot must already have been
    /// written; patching outside the buffer is a programming error.
    fn write_i32_at(&mut self, position: usize, value: i32);
}

pub struct BufferOutput {
    buffer: Vec<u8>,
}

impl BufferOutput {
    pub fn new() -> BufferOutput {
        BufferOutput { buffer: Vec::new() }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.buffer
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer
    }
}

impl Default for BufferOutput {
    fn default() -> BufferOutput {
        BufferOutput::new()
    }
}

impl WireOutput for BufferOutput {
    fn write_i32(&mut self, value: i32) {
        self.buffer.extend_from_slice(&i32_to_u8_array(value));
    }

    fn write_i64(&mut self, value: i64) {
        self.buffer.extend_from_slice(&i64_to_u8_array(value));
    }

    fn write_cstring(&mut self, value: &CStr) {
        self.buffer.extend_from_slice(value.to_bytes_with_nul());
    }

    fn write_document(&mut self, document: &Document) -> Result<(), MessageEncodeError> {
        match bson::encode_document(&mut self.buffer, document) {
            Ok(_) => Ok(()),
            Err(error) => Err(MessageEncodeError::SerializeBsonError(error)),
        }
    }

    fn position(&self) -> usize {
        self.buffer.len()
    }

    fn write_i32_at(&mut self, position: usize, value: i32) {
        self.buffer[position..position + 4].copy_from_slice(&i32_to_u8_array(value));
    }
}
