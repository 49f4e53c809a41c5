use crate::wire::error::MessageParseError;

/// @see https://docs.mongodb.com/manual/reference/mongodb-wire-protocol/#request-opcodes
pub const OP_REPLY_CODE: i32 = 1;
pub const OP_UPDATE_CODE: i32 = 2001;
pub const OP_INSERT_CODE: i32 = 2002;
pub const OP_QUERY_CODE: i32 = 2004;
pub const OP_GET_MORE_CODE: i32 = 2005;
pub const OP_DELETE_CODE: i32 = 2006;
pub const OP_KILL_CURSORS_CODE: i32 = 2007;

#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(i32)]
pub enum MongoOpCode {
    OpReply = OP_REPLY_CODE,
    OpUpdate = OP_UPDATE_CODE,
    OpInsert = OP_INSERT_CODE,
    //    RESERVED = 2003
    OpQuery = OP_QUERY_CODE,
    OpGetMore = OP_GET_MORE_CODE,
    OpDelete = OP_DELETE_CODE,
    OpKillCursors = OP_KILL_CURSORS_CODE,
}

pub fn pick_op_code(op: i32) -> Result<MongoOpCode, MessageParseError> {
    match op {
        OP_REPLY_CODE => Ok(MongoOpCode::OpReply),
        OP_UPDATE_CODE => Ok(MongoOpCode::OpUpdate),
        OP_INSERT_CODE => Ok(MongoOpCode::OpInsert),
        OP_QUERY_CODE => Ok(MongoOpCode::OpQuery),
        OP_GET_MORE_CODE => Ok(MongoOpCode::OpGetMore),
        OP_DELETE_CODE => Ok(MongoOpCode::OpDelete),
        OP_KILL_CURSORS_CODE => Ok(MongoOpCode::OpKillCursors),
        _ => Err(MessageParseError::UnknownOpCode(op)),
    }
}
