use serde::{de, ser};
use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by checked decoding, skipping and the serde adapters.
///
/// Missing or conflicting rules are not represented here: they are rejected
/// by the compiler before any data is seen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A custom error message from serde
    Message(String),

    /// More bytes were requested than remain in the buffer
    InsufficientData { required: usize, available: usize },

    /// The serde data model item has no fixed-width packed representation
    Unsupported(&'static str),

    /// An I/O error occurred during writing
    Io(String),
}

impl Error {
    /// Shorthand used by the cursor and the facade.
    pub(crate) fn insufficient(required: usize, available: usize) -> Self {
        Error::InsufficientData {
            required,
            available,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Message(msg) => write!(f, "{}", msg),
            Error::InsufficientData {
                required,
                available,
            } => write!(
                f,
                "insufficient data: required bytes: {}, available bytes: {}",
                required, available
            ),
            Error::Unsupported(t) => write!(f, "fixed-layout encoding does not support type: {}", t),
            Error::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

impl de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}
