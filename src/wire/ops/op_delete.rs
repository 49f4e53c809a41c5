use std::ffi::CString;

use bson::Document;

use crate::wire::error::MessageEncodeError;
use crate::wire::output::WireOutput;
use crate::wire::settings::MessageSettings;
use crate::wire::utils::{collection_name_to_cstring, write_document_checked};

#[derive(Debug)]
/// @see https://docs.mongodb.com/manual/reference/mongodb-wire-protocol/#op-delete
pub struct OpDelete {
    // "dbname.collectionname"
    pub full_collection_name: CString,

    // bit vector: bit 0 single-remove
    pub flags: i32,

    // query object selecting the documents to delete
    pub selector: Document,
}

impl OpDelete {
    pub fn new(
        full_collection_name: &str,
        flags: i32,
        selector: Document,
    ) -> Result<OpDelete, MessageEncodeError> {
        let full_collection_name = collection_name_to_cstring(full_collection_name)?;
        Ok(OpDelete {
            full_collection_name,
            flags,
            selector,
        })
    }
}

pub fn write_op_delete<O: WireOutput>(
    op: &OpDelete,
    settings: &MessageSettings,
    out: &mut O,
) -> Result<(), MessageEncodeError> {
    out.write_i32(0); // reserved
    out.write_cstring(&op.full_collection_name);
    out.write_i32(op.flags);
    write_document_checked(&op.selector, settings, out)?;
    Ok(())
}
