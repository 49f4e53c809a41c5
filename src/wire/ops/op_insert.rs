use std::ffi::CString;

use bson::Document;

use crate::wire::error::MessageEncodeError;
use crate::wire::output::WireOutput;
use crate::wire::settings::MessageSettings;
use crate::wire::utils::{collection_name_to_cstring, write_document_checked};

#[derive(Debug)]
/// @see https://docs.mongodb.com/manual/reference/mongodb-wire-protocol/#op-insert
pub struct OpInsert {
    // bit vector
    pub flags: i32,

    // "dbname.collectionname"
    pub full_collection_name: CString,

    // one or more documents to insert into the collection
    pub documents: Vec<Document>,
}

impl OpInsert {
    pub fn new(
        flags: i32,
        full_collection_name: &str,
        documents: Vec<Document>,
    ) -> Result<OpInsert, MessageEncodeError> {
        if documents.is_empty() {
            return Err(MessageEncodeError::EmptyDocumentList);
        }
        let full_collection_name = collection_name_to_cstring(full_collection_name)?;
        Ok(OpInsert {
            flags,
            full_collection_name,
            documents,
        })
    }
}

pub fn write_op_insert<O: WireOutput>(
    op: &OpInsert,
    settings: &MessageSettings,
    out: &mut O,
) -> Result<(), MessageEncodeError> {
    if op.documents.len() > settings.max_batch_count as usize {
        return Err(MessageEncodeError::TooManyDocuments(op.documents.len()));
    }
    out.write_i32(op.flags);
    out.write_cstring(&op.full_collection_name);
    for document in &op.documents {
        write_document_checked(document, settings, out)?;
    }
    Ok(())
}

#[cfg(test)]
mod op_insert_tests {
    use crate::wire::error::MessageEncodeError;
    use crate::wire::ops::op_insert::{write_op_insert, OpInsert};
    use crate::wire::output::BufferOutput;
    use crate::wire::settings::MessageSettings;

    #[test]
    fn test_write_op_insert() {
        let mut document = bson::Document::new();
        document.insert("a", 1);
        let op = OpInsert::new(0, "db.coll", vec![document]).unwrap();
        let mut out = BufferOutput::new();
        write_op_insert(&op, &MessageSettings::default(), &mut out).unwrap();
        let expected = [
            0x00, 0x00, 0x00, 0x00, // flags
            0x64, 0x62, 0x2e, 0x63, 0x6f, 0x6c, 0x6c, 0x00, // "db.coll"
            0x0c, 0x00, 0x00, 0x00, // document length
            0x10, 0x61, 0x00, // int32 element "a"
            0x01, 0x00, 0x00, 0x00, // value 1
            0x00, // document terminator
        ];
        assert_eq!(out.bytes(), &expected[..]);
    }

    #[test]
    fn test_empty_document_list_fails_construction() {
        match OpInsert::new(0, "db.coll", vec![]) {
            Err(MessageEncodeError::EmptyDocumentList) => (),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_document_over_size_limit_is_rejected() {
        let mut document = bson::Document::new();
        document.insert("key", "0123456789");
        let op = OpInsert::new(0, "db.coll", vec![document]).unwrap();
        let settings = MessageSettings {
            max_document_size: 8,
            ..MessageSettings::default()
        };
        let mut out = BufferOutput::new();
        match write_op_insert(&op, &settings, &mut out) {
            Err(MessageEncodeError::DocumentTooLarge(_)) => (),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_batch_over_count_limit_is_rejected() {
        let op = OpInsert::new(
            0,
            "db.coll",
            vec![bson::Document::new(), bson::Document::new()],
        )
        .unwrap();
        let settings = MessageSettings {
            max_batch_count: 1,
            ..MessageSettings::default()
        };
        let mut out = BufferOutput::new();
        match write_op_insert(&op, &settings, &mut out) {
            Err(MessageEncodeError::TooManyDocuments(2)) => (),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
