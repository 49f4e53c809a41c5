use std::ffi::CString;

use bson::Document;

use crate::wire::error::MessageEncodeError;
use crate::wire::output::WireOutput;
use crate::wire::settings::MessageSettings;
use crate::wire::utils::{collection_name_to_cstring, write_document_checked};

/// @see https://docs.mongodb.com/manual/reference/mongodb-wire-protocol/#op-query
#[derive(Debug)]
pub struct OpQuery {
    // bit vector of query options
    pub flags: i32,

    // "dbname.collectionname"
    pub full_collection_name: CString,

    // number of documents to skip
    pub number_to_skip: i32,

    // number of documents to return in the first OP_REPLY batch
    pub number_to_return: i32,

    // query object
    pub query: Document,

    // Optional. Selector indicating the fields to return.
    pub return_fields_selector: Option<Document>,
}

impl OpQuery {
    pub fn new(
        flags: i32,
        full_collection_name: &str,
        number_to_skip: i32,
        number_to_return: i32,
        query: Document,
        return_fields_selector: Option<Document>,
    ) -> Result<OpQuery, MessageEncodeError> {
        let full_collection_name = collection_name_to_cstring(full_collection_name)?;
        Ok(OpQuery {
            flags,
            full_collection_name,
            number_to_skip,
            number_to_return,
            query,
            return_fields_selector,
        })
    }
}

pub fn write_op_query<O: WireOutput>(
    op: &OpQuery,
    settings: &MessageSettings,
    out: &mut O,
) -> Result<(), MessageEncodeError> {
    out.write_i32(op.flags);
    out.write_cstring(&op.full_collection_name);
    out.write_i32(op.number_to_skip);
    out.write_i32(op.number_to_return);
    write_document_checked(&op.query, settings, out)?;
    if let Some(return_fields_selector) = &op.return_fields_selector {
        write_document_checked(return_fields_selector, settings, out)?;
    }
    Ok(())
}
