//! Error types for rendering operations

use std::io;
use thiserror::Error;

/// Errors that can occur while building indentation or rendering a tree
#[derive(Debug, Error)]
pub enum MarkupError {
    /// Indentation was decremented below level 0
    #[error("cannot decrement indentation below level 0 (level {level}, increment {increment})")]
    Underflow { level: usize, increment: usize },

    /// The output sink rejected a write
    #[error("failed to write markup: {0}")]
    Write(#[from] io::Error),

    /// Rendered output could not be collected into a `String`
    #[error("rendered markup is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

impl MarkupError {
    /// Whether this error came from the sink rather than the tree
    pub fn is_write(&self) -> bool {
        matches!(self, MarkupError::Write(_))
    }
}
