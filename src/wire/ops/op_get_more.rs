use std::ffi::CString;

use crate::wire::error::MessageEncodeError;
use crate::wire::output::WireOutput;
use crate::wire::utils::collection_name_to_cstring;

#[derive(Debug)]
/// @see https://docs.mongodb.com/manual/reference/mongodb-wire-protocol/#op-get-more
pub struct OpGetMore {
    // "dbname.collectionname"
    pub full_collection_name: CString,

    // number of documents to return; 0 lets the server pick the batch size,
    // a negative value tells the server to close the cursor after one batch
    pub number_to_return: i32,

    // cursorID from the OP_REPLY
    pub cursor_id: i64,
}

impl OpGetMore {
    pub fn new(
        full_collection_name: &str,
        number_to_return: i32,
        cursor_id: i64,
    ) -> Result<OpGetMore, MessageEncodeError> {
        let full_collection_name = collection_name_to_cstring(full_collection_name)?;
        Ok(OpGetMore {
            full_collection_name,
            number_to_return,
            cursor_id,
        })
    }
}

pub fn write_op_get_more<O: WireOutput>(
    op: &OpGetMore,
    out: &mut O,
) -> Result<(), MessageEncodeError> {
    out.write_i32(0); // reserved
    out.write_cstring(&op.full_collection_name);
    out.write_i32(op.number_to_return);
    out.write_i64(op.cursor_id);
    Ok(())
}
