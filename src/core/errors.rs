//! Shared error types for the crate

use thiserror::Error;

/// Main error type for analysis operations
#[derive(Debug, Error)]
pub enum Error {
    /// Source text that could not be parsed into a syntax tree
    #[error("parse error at {line}:{column}: {message}")]
    Parse {
        line: usize,
        column: usize,
        message: String,
    },

    /// The Python grammar could not be loaded into the parser
    #[error("failed to load Python grammar")]
    Grammar(#[from] tree_sitter::LanguageError),

    /// Source text could not be read
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a parse error with a 1-based source location
    pub fn parse(line: usize, column: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            column,
            message: message.into(),
        }
    }
}

/// Result type alias using the crate error
pub type Result<T> = std::result::Result<T, Error>;
