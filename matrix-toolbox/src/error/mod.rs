mod command_error;

pub use command_error::CommandError;
use derive_more::From;

use matrix_core::MatrixError;

pub type Result<T> = core::result::Result<T, ToolboxError>;

#[derive(Debug, From)]
pub enum ToolboxError {
    // -- Externals
    #[from]
    Io(std::io::Error),

    #[from]
    Matrix(MatrixError),

    #[from]
    Command(CommandError),
}

// region:    --- Error Boilerplate

impl core::fmt::Display for ToolboxError {
    fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::result::Result<(), core::fmt::Error> {
        match self {
            ToolboxError::Io(err) => write!(fmt, "I/O error: {err}"),
            ToolboxError::Matrix(err) => write!(fmt, "{err}"),
            ToolboxError::Command(err) => write!(fmt, "{err}"),
        }
    }
}

impl std::error::Error for ToolboxError {}

// endregion: --- Error Boilerplate
