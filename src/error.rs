//! Error types for path data parsing.

use thiserror::Error;

/// Errors that can occur while parsing path data.
///
/// Parsing stops at the first error. Primitives emitted for earlier
/// segments stay with the consumer; nothing is emitted for the failing one.
/// Every variant carries the byte offset into the input where the problem
/// was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PathError {
    /// The first command is not a move-to.
    #[error("path data must start with a move-to command (offset {offset})")]
    MissingInitialMoveTo {
        /// Offset of the first command or number.
        offset: usize,
    },

    /// A character is neither a command letter nor a valid continuation.
    #[error("unknown command at offset {offset}")]
    UnknownCommand {
        /// Offset of the unrecognized character.
        offset: usize,
    },

    /// A number literal does not follow the path data grammar.
    #[error("malformed number at offset {offset}")]
    MalformedNumber {
        /// Offset where the number starts.
        offset: usize,
    },

    /// A number does not fit in a double.
    #[error("number out of range at offset {offset}")]
    NumericOverflow {
        /// Offset where the number starts.
        offset: usize,
    },

    /// A number's exponent lies outside `[-37, 38]`.
    #[error("exponent out of range at offset {offset}")]
    ExponentOutOfRange {
        /// Offset where the number starts.
        offset: usize,
    },

    /// An arc flag is something other than `0` or `1`.
    #[error("invalid arc flag at offset {offset}")]
    InvalidArcFlag {
        /// Offset of the flag character.
        offset: usize,
    },

    /// The input ended while a command still needed arguments.
    #[error("unexpected end of path data at offset {offset}")]
    UnexpectedEndOfInput {
        /// Length of the input.
        offset: usize,
    },
}

impl PathError {
    /// Returns the byte offset into the input where the error was found.
    pub fn offset(&self) -> usize {
        match *self {
            PathError::MissingInitialMoveTo { offset }
            | PathError::UnknownCommand { offset }
            | PathError::MalformedNumber { offset }
            | PathError::NumericOverflow { offset }
            | PathError::ExponentOutOfRange { offset }
            | PathError::InvalidArcFlag { offset }
            | PathError::UnexpectedEndOfInput { offset } => offset,
        }
    }
}
