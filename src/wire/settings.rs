// Default server limits, as reported by mongod in the "ismaster" reply
// (maxBsonObjectSize, maxMessageSizeBytes, maxWriteBatchSize). A connected
// caller should overwrite these with the negotiated values.
pub const DEFAULT_MAX_DOCUMENT_SIZE: i32 = 16 * 1024 * 1024;
pub const DEFAULT_MAX_MESSAGE_SIZE: i32 = 48_000_000;
pub const DEFAULT_MAX_BATCH_COUNT: i32 = 1000;

#[derive(Debug, Clone, Copy)]
pub struct MessageSettings {
    pub max_document_size: i32,
    pub max_message_size: i32,
    pub max_batch_count: i32,
}

impl Default for MessageSettings {
    fn default() -> MessageSettings {
        MessageSettings {
            max_document_size: DEFAULT_MAX_DOCUMENT_SIZE,
            max_message_size: DEFAULT_MAX_MESSAGE_SIZE,
            max_batch_count: DEFAULT_MAX_BATCH_COUNT,
        }
    }
}
