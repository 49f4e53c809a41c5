use std::ffi::CString;

use bson::Document;

use crate::wire::error::MessageEncodeError;
use crate::wire::output::WireOutput;
use crate::wire::settings::MessageSettings;
use crate::wire::utils::{collection_name_to_cstring, write_document_checked};

/// @see https://docs.mongodb.com/manual/reference/mongodb-wire-protocol/#op-update
#[derive(Debug)]
pub struct OpUpdate {
    // "dbname.collectionname"
    pub full_collection_name: CString,

    // bit vector: bit 0 upsert, bit 1 multi-update
    pub flags: i32,

    // the query to select the document
    pub selector: Document,

    // specification of the update to perform
    pub update: Document,
}

impl OpUpdate {
    pub fn new(
        full_collection_name: &str,
        flags: i32,
        selector: Document,
        update: Document,
    ) -> Result<OpUpdate, MessageEncodeError> {
        let full_collection_name = collection_name_to_cstring(full_collection_name)?;
        Ok(OpUpdate {
            full_collection_name,
            flags,
            selector,
            update,
        })
    }
}

pub fn write_op_update<O: WireOutput>(
    op: &OpUpdate,
    settings: &MessageSettings,
    out: &mut O,
) -> Result<(), MessageEncodeError> {
    out.write_i32(0); // reserved
    out.write_cstring(&op.full_collection_name);
    out.write_i32(op.flags);
    write_document_checked(&op.selector, settings, out)?;
    write_document_checked(&op.update, settings, out)?;
    Ok(())
}

#[cfg(test)]
mod op_update_tests {
    use crate::wire::error::MessageEncodeError;
    use crate::wire::ops::op_update::{write_op_update, OpUpdate};
    use crate::wire::output::BufferOutput;
    use crate::wire::settings::MessageSettings;

    #[test]
    fn test_write_op_update() {
        let mut selector = bson::Document::new();
        selector.insert("a", 1);
        let op = OpUpdate::new("db.coll", 1, selector, bson::Document::new()).unwrap();
        let mut out = BufferOutput::new();
        write_op_update(&op, &MessageSettings::default(), &mut out).unwrap();
        let expected = [
            0x00, 0x00, 0x00, 0x00, // reserved
            0x64, 0x62, 0x2e, 0x63, 0x6f, 0x6c, 0x6c, 0x00, // "db.coll"
            0x01, 0x00, 0x00, 0x00, // flags: upsert
            0x0c, 0x00, 0x00, 0x00, // selector {"a": 1}
            0x10, 0x61, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00,
            0x05, 0x00, 0x00, 0x00, 0x00, // empty update document
        ];
        assert_eq!(out.bytes(), &expected[..]);
    }

    #[test]
    fn test_oversized_selector_is_rejected() {
        let mut selector = bson::Document::new();
        selector.insert("key", "0123456789");
        let op = OpUpdate::new("db.coll", 0, selector, bson::Document::new()).unwrap();
        let settings = MessageSettings {
            max_document_size: 8,
            ..MessageSettings::default()
        };
        let mut out = BufferOutput::new();
        match write_op_update(&op, &settings, &mut out) {
            Err(MessageEncodeError::DocumentTooLarge(_)) => (),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
