//! Error types for the argument parser.

use thiserror::Error;

/// Errors produced while parsing an argument string.
///
/// The two variants deliberately separate "come back with more bytes" from
/// "this input can never parse": callers branch on the variant, not on any
/// magnitude.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The buffer ends in the middle of a token.
    ///
    /// Recoverable. Append at least `needed` more bytes to the same logical
    /// line, then parse again from the start of the line. The parser is a
    /// pure function of the text, so the retry restarts cleanly. Never
    /// carries `needed == 0`.
    #[error("incomplete input: at least {needed} more byte(s) required")]
    Incomplete {
        /// Minimum number of additional bytes required before retrying.
        needed: usize,
    },

    /// The input cannot be parsed no matter how many bytes are appended.
    #[error("malformed input at position {position}: {message}")]
    Malformed {
        /// Byte position where the error occurred.
        position: usize,
        /// Description of what went wrong.
        message: String,
    },
}

impl Error {
    /// Returns the number of additional bytes required, if this is the
    /// recoverable truncation signal.
    #[must_use]
    pub const fn bytes_needed(&self) -> Option<usize> {
        match self {
            Self::Incomplete { needed } => Some(*needed),
            Self::Malformed { .. } => None,
        }
    }

    /// Truncation signal. Clamped so the caller is always asked for at
    /// least one byte.
    pub(crate) const fn incomplete(needed: usize) -> Self {
        Self::Incomplete {
            needed: if needed == 0 { 1 } else { needed },
        }
    }
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
