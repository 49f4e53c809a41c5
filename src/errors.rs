use crate::commands::error::CommandError;
use crate::wire::error::{MessageEncodeError, MessageParseError};

#[derive(Debug)]
pub enum WireError {
    MessageEncode(MessageEncodeError),
    MessageParse(MessageParseError),
    Command(CommandError),
}

impl std::convert::From<MessageEncodeError> for WireError {
    fn from(error: MessageEncodeError) -> WireError {
        WireError::MessageEncode(error)
    }
}

impl std::convert::From<MessageParseError> for WireError {
    fn from(error: MessageParseError) -> WireError {
        WireError::MessageParse(error)
    }
}

impl std::convert::From<CommandError> for WireError {
    fn from(error: CommandError) -> WireError {
        WireError::Command(error)
    }
}

pub type WireResult<T> = Result<T, WireError>;
