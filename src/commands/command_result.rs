use bson::{Bson, Document};

use crate::commands::error::CommandError;

/// Outcome of interpreting one command reply. Derived on demand from the
/// reply document, never cached.
#[derive(Debug, PartialEq)]
pub enum CommandOutcome {
    Success,
    CommandFailure {
        command_name: Option<String>,
        message: String,
    },
    WriteError {
        code: i32,
        message: String,
    },
}

/// Wraps the reply to one command together with the command document it
/// answers and the address of the server that produced it.
#[derive(Debug)]
pub struct CommandResult {
    command: Option<Document>,
    response: Document,
    server_address: String,
}

impl CommandResult {
    pub fn new(
        command: Option<Document>,
        mut response: Document,
        server_address: &str,
    ) -> CommandResult {
        // recorded so the reply shows its origin when dumped for diagnosis
        response.insert("serverUsed", server_address);
        CommandResult {
            command,
            response,
            server_address: server_address.to_string(),
        }
    }

    pub fn response(&self) -> &Document {
        &self.response
    }

    pub fn server_used(&self) -> &str {
        &self.server_address
    }

    /// The name of the command this reply answers: the first key of the
    /// command document, when one was recorded.
    pub fn command_name(&self) -> Option<String> {
        match &self.command {
            None => None,
            Some(command) => command.keys().next().map(|key| key.to_string()),
        }
    }

    /// Whether the server accepted the command. "ok" is 1/true on success;
    /// numeric values are truncated to integer before the comparison.
    pub fn ok(&self) -> Result<bool, CommandError> {
        match self.response.get("ok") {
            None => Err(CommandError::MissingOkField),
            Some(Bson::Boolean(value)) => Ok(*value),
            Some(Bson::FloatingPoint(value)) => Ok(*value as i32 == 1),
            Some(Bson::I32(value)) => Ok(*value == 1),
            Some(Bson::I64(value)) => Ok(*value as i32 == 1),
            Some(other) => Err(CommandError::UnexpectedOkValue(format!("{:?}", other))),
        }
    }

    /// The "errmsg" field, stringified whatever its BSON type.
    pub fn error_message(&self) -> Option<String> {
        match self.response.get("errmsg") {
            None => None,
            Some(Bson::String(message)) => Some(message.clone()),
            Some(other) => Some(other.to_string()),
        }
    }

    /// Interprets the reply with fixed precedence: a command-level failure
    /// ("ok" not 1/true) always wins over the getLastError-style "err"
    /// signal, which is only consulted on an otherwise successful reply.
    pub fn outcome(&self) -> Result<CommandOutcome, CommandError> {
        if !self.ok()? {
            return Ok(CommandOutcome::CommandFailure {
                command_name: self.command_name(),
                message: self.error_message().unwrap_or_default(),
            });
        }
        match self.err_field() {
            Some(message) => Ok(CommandOutcome::WriteError {
                code: self.error_code(),
                message,
            }),
            None => Ok(CommandOutcome::Success),
        }
    }

    /// The `throwOnError` counterpart: maps either failure signal to an
    /// error the caller can propagate with `?`.
    pub fn check(&self) -> Result<(), CommandError> {
        match self.outcome()? {
            CommandOutcome::Success => Ok(()),
            CommandOutcome::CommandFailure {
                command_name,
                message,
            } => Err(CommandError::CommandFailure {
                command_name,
                message,
            }),
            CommandOutcome::WriteError { code, message } => {
                Err(CommandError::WriteError { code, message })
            }
        }
    }

    // "err" counts only when present, a string, and non-empty
    fn err_field(&self) -> Option<String> {
        match self.response.get("err") {
            Some(Bson::String(message)) if !message.is_empty() => Some(message.clone()),
            _ => None,
        }
    }

    // -1 when "code" is missing or non-numeric
    fn error_code(&self) -> i32 {
        match self.response.get("code") {
            Some(Bson::I32(code)) => *code,
            Some(Bson::I64(code)) => *code as i32,
            Some(Bson::FloatingPoint(code)) => *code as i32,
            _ => -1,
        }
    }
}
