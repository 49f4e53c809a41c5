#[derive(Debug, PartialEq)]
pub enum CommandError {
    // every legacy command reply must carry "ok"; a reply without it means
    // the server or the transport broke the protocol
    MissingOkField,
    UnexpectedOkValue(String),
    CommandFailure {
        command_name: Option<String>,
        message: String,
    },
    WriteError {
        code: i32,
        message: String,
    },
}
