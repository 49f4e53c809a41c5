#[derive(Debug)]
pub enum MessageEncodeError {
    CollectionNameContainsZeroByte,
    EmptyDocumentList,
    DocumentTooLarge(usize),
    MessageTooLarge(usize),
    TooManyDocuments(usize),
    SerializeBsonError(bson::EncoderError),
}

#[derive(Debug)]
pub enum MessageParseError {
    NotEnoughBufferSize,
    UnknownOpCode(i32),
}
