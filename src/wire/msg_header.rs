// @see https://docs.mongodb.com/manual/reference/mongodb-wire-protocol/#standard-message-header

use crate::wire::error::MessageParseError;
use crate::wire::opcodes::{pick_op_code, MongoOpCode};
use crate::wire::output::WireOutput;
use crate::wire::utils::parse_i32;

pub const MSG_HEADER_LENGTH: usize = 16;

#[derive(Debug)]
pub struct MsgHeader {
    // total message size, including this
    pub message_length: i32,

    // identifier for this message
    pub request_id: i32,

    // requestID from the original request (used in responses from db)
    pub response_to: i32,

    // request type
    pub op_code: MongoOpCode,
}

/// Reserves the 16 header bytes at the front of an outbound message. The
/// length slot is written as zero and patched by `finalize` once the body
/// size is known; the actual byte count is never estimated up front.
pub struct MsgHeaderWriter {
    start: usize,
}

impl MsgHeaderWriter {
    pub fn write<O: WireOutput>(
        out: &mut O,
        request_id: i32,
        op_code: MongoOpCode,
    ) -> MsgHeaderWriter {
        let start = out.position();
        out.write_i32(0); // message length, patched in finalize
        out.write_i32(request_id);
        out.write_i32(0); // response_to is always 0 for new requests
        out.write_i32(op_code as i32);
        MsgHeaderWriter { start }
    }

    /// Patches the length slot with header + body size and returns it.
    pub fn finalize<O: WireOutput>(self, out: &mut O) -> usize {
        let total_length = out.position() - self.start;
        out.write_i32_at(self.start, total_length as i32);
        total_length
    }
}

pub fn parse_msg_header(buffer: &[u8]) -> Result<(MsgHeader, &[u8]), MessageParseError> {
    let (message_length, next_buffer) = parse_i32(buffer)?;
    let (request_id, next_buffer) = parse_i32(next_buffer)?;
    let (response_to, next_buffer) = parse_i32(next_buffer)?;
    let (op_code_i32, next_buffer) = parse_i32(next_buffer)?;
    let op_code = pick_op_code(op_code_i32)?;
    Ok((
        MsgHeader {
            message_length,
            request_id,
            response_to,
            op_code,
        },
        next_buffer,
    ))
}
