//! Errors surfaced to the user when a formatting attempt fails.

use crate::formatter::Formatter;

/// Why a formatting attempt was aborted.
#[derive(Debug)]
pub enum FormatError {
    /// No formatter handles the buffer's language
    NoFormatter(String),
    /// The formatter applies but no usable executable was found
    BinaryNotFound(Formatter),
    /// Formatter command failed to spawn
    SpawnFailed(String),
    /// Formatter exited non-zero; `message` is its stderr, or stdout when stderr was empty
    NonZeroExit { code: i32, message: String },
    /// Formatter exited non-zero without printing anything
    UnknownFailure { code: i32 },
    /// I/O error while talking to the formatter
    IoError(std::io::Error),
}

impl std::fmt::Display for FormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoFormatter(what) => write!(f, "no formatter available for {}", what),
            Self::BinaryNotFound(formatter) => {
                write!(f, "could not find a {} executable", formatter)
            }
            Self::SpawnFailed(cmd) => write!(f, "failed to spawn formatter: {}", cmd),
            Self::NonZeroExit { message, .. } => f.write_str(message),
            Self::UnknownFailure { code } => write!(f, "unknown error {}", code),
            Self::IoError(e) => write!(f, "formatter I/O error: {}", e),
        }
    }
}

impl std::error::Error for FormatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for FormatError {
    fn from(e: std::io::Error) -> Self {
        Self::IoError(e)
    }
}
