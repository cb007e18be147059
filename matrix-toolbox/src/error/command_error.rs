use thiserror::Error;

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Unknown command '{0}' (type 'help' for the list of commands)")]
    Unknown(String),

    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("Invalid {name}: '{value}'")]
    InvalidNumber { name: &'static str, value: String },

    #[error("Too many values: expected {expected}, found {found}")]
    TooManyValues { expected: usize, found: usize },

    #[error("Unexpected argument '{0}'")]
    UnexpectedArgument(String),

    #[error("No current matrix")]
    NoCurrentMatrix,

    #[error("Input ended before the matrix was complete")]
    UnexpectedEof,
}
