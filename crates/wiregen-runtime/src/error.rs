//! Decode errors

use thiserror::Error;

/// Result type alias for decode operations
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Malformed or truncated input.
///
/// Skipping an unknown message tag is not an error; it never produces one
/// of these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Input ended in the middle of a value
    #[error(
        "unexpected end of input at offset {position}: needed {needed} bytes, {remaining} remaining"
    )]
    UnexpectedEof {
        position: usize,
        needed: usize,
        remaining: usize,
    },

    /// Element count is larger than the rest of the input could hold
    #[error(
        "count {count} at offset {position} needs at least {needed} bytes, {remaining} remaining"
    )]
    CountExceedsInput {
        position: usize,
        count: usize,
        needed: usize,
        remaining: usize,
    },

    /// String payload is not valid UTF-8
    #[error("invalid UTF-8 in string at offset {position}")]
    InvalidUtf8 { position: usize },

    /// Message length points past the end of the input
    #[error("message frame ends at offset {end} but input is only {available} bytes")]
    FrameOutOfBounds { end: usize, available: usize },

    /// Reader reached the end of a message frame without seeing the terminator
    #[error("message frame ending at offset {end} has no terminator")]
    MissingTerminator { end: usize },

    /// Seek target lies outside the input
    #[error("cannot seek to offset {target}: input is only {available} bytes")]
    SeekOutOfBounds { target: usize, available: usize },
}
