use crate::wire::error::MessageEncodeError;
use crate::wire::output::WireOutput;

#[derive(Debug)]
/// @see https://docs.mongodb.com/manual/reference/mongodb-wire-protocol/#op-kill-cursors
pub struct OpKillCursors {
    // sequence of cursorIDs to close; may be empty, order is preserved on
    // the wire since servers process kills best-effort in sequence
    pub cursor_ids: Vec<i64>,
}

impl OpKillCursors {
    pub fn new(cursor_ids: Vec<i64>) -> OpKillCursors {
        OpKillCursors { cursor_ids }
    }
}

pub fn write_op_kill_cursors<O: WireOutput>(
    op: &OpKillCursors,
    out: &mut O,
) -> Result<(), MessageEncodeError> {
    out.write_i32(0); // reserved
    out.write_i32(op.cursor_ids.len() as i32); // count precedes the values
    for cursor_id in &op.cursor_ids {
        out.write_i64(*cursor_id);
    }
    Ok(())
}
