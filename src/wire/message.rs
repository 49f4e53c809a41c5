use std::sync::atomic::{AtomicI32, Ordering};

use crate::wire::error::MessageEncodeError;
use crate::wire::msg_header::MsgHeaderWriter;
use crate::wire::opcodes::MongoOpCode;
use crate::wire::ops::op::{op_code_for, write_op_body, MongoOp};
use crate::wire::output::WireOutput;
use crate::wire::settings::MessageSettings;

static GLOBAL_REQUEST_ID: AtomicI32 = AtomicI32::new(1);

/// Request ids are process-wide monotonic so concurrent encodings never
/// share one; the server echoes the id back in the responseTo slot.
pub fn next_request_id() -> i32 {
    GLOBAL_REQUEST_ID.fetch_add(1, Ordering::SeqCst)
}

#[derive(Debug)]
pub struct EncodingMetadata {
    pub final_position: usize,
}

/// One outbound legacy message: encoded exactly once into a sink, then
/// discarded. Never reused across requests.
#[derive(Debug)]
pub struct RequestMessage {
    pub request_id: i32,
    pub op: MongoOp,
    pub settings: MessageSettings,
}

impl RequestMessage {
    pub fn new(op: MongoOp, settings: MessageSettings) -> RequestMessage {
        RequestMessage {
            request_id: next_request_id(),
            op,
            settings,
        }
    }

    pub fn with_request_id(
        request_id: i32,
        op: MongoOp,
        settings: MessageSettings,
    ) -> RequestMessage {
        RequestMessage {
            request_id,
            op,
            settings,
        }
    }

    pub fn op_code(&self) -> MongoOpCode {
        op_code_for(&self.op)
    }

    /// Header prologue, body, then the back-patched total length. The
    /// patched length always equals the exact byte count written.
    pub fn encode<O: WireOutput>(
        &self,
        out: &mut O,
    ) -> Result<EncodingMetadata, MessageEncodeError> {
        let header = MsgHeaderWriter::write(out, self.request_id, self.op_code());
        write_op_body(&self.op, &self.settings, out)?;
        let total_length = header.finalize(out);
        if total_length > self.settings.max_message_size as usize {
            return Err(MessageEncodeError::MessageTooLarge(total_length));
        }
        Ok(EncodingMetadata {
            final_position: out.position(),
        })
    }
}
