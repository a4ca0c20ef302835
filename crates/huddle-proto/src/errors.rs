//! Protocol error types.

use thiserror::Error;

/// Result alias for decoding operations.
pub type Result<T> = std::result::Result<T, ProtocolError>;

/// Errors produced while decoding user messages.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// Destination byte does not name a print target.
    #[error("unknown print destination: {0}")]
    UnknownDestination(u8),

    /// Message name is not handled by the chat element.
    #[error("unknown user message: {0}")]
    UnknownMessage(String),

    /// String longer than the wire capacity when encoding.
    #[error("string too long: {len} bytes exceeds {max}")]
    StringTooLong {
        /// Actual length in bytes
        len: usize,
        /// Maximum permitted length in bytes, excluding the terminator
        max: usize,
    },

    /// String contains an interior NUL and cannot be terminated.
    #[error("string contains an interior NUL at byte {0}")]
    InteriorNul(usize),
}
