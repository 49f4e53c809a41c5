use crate::wire::error::MessageEncodeError;
use crate::wire::opcodes::MongoOpCode;
use crate::wire::ops::op_delete::{write_op_delete, OpDelete};
use crate::wire::ops::op_get_more::{write_op_get_more, OpGetMore};
use crate::wire::ops::op_insert::{write_op_insert, OpInsert};
use crate::wire::ops::op_kill_cursors::{write_op_kill_cursors, OpKillCursors};
use crate::wire::ops::op_query::{write_op_query, OpQuery};
use crate::wire::ops::op_update::{write_op_update, OpUpdate};
use crate::wire::output::WireOutput;
use crate::wire::settings::MessageSettings;

#[derive(Debug)]
pub enum MongoOp {
    Update(OpUpdate),
    Insert(OpInsert),
    Query(OpQuery),
    GetMore(OpGetMore),
    Delete(OpDelete),
    KillCursors(OpKillCursors),
}

pub fn op_code_for(op: &MongoOp) -> MongoOpCode {
    match op {
        MongoOp::Update(_) => MongoOpCode::OpUpdate,
        MongoOp::Insert(_) => MongoOpCode::OpInsert,
        MongoOp::Query(_) => MongoOpCode::OpQuery,
        MongoOp::GetMore(_) => MongoOpCode::OpGetMore,
        MongoOp::Delete(_) => MongoOpCode::OpDelete,
        MongoOp::KillCursors(_) => MongoOpCode::OpKillCursors,
    }
}

pub fn write_op_body<O: WireOutput>(
    op: &MongoOp,
    settings: &MessageSettings,
    out: &mut O,
) -> Result<(), MessageEncodeError> {
    match op {
        MongoOp::Update(op_update) => write_op_update(op_update, settings, out),
        MongoOp::Insert(op_insert) => write_op_insert(op_insert, settings, out),
        MongoOp::Query(op_query) => write_op_query(op_query, settings, out),
        MongoOp::GetMore(op_get_more) => write_op_get_more(op_get_more, out),
        MongoOp::Delete(op_delete) => write_op_delete(op_delete, settings, out),
        MongoOp::KillCursors(op_kill_cursors) => write_op_kill_cursors(op_kill_cursors, out),
    }
}
