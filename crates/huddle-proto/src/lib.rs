//! Wire format for Huddle HUD chat messages.
//!
//! The engine dispatches three user messages to the chat element:
//!
//! - [`SayText`]: a pre-formatted line from a client slot.
//! - [`SayText2`]: a localisable template plus name, text and two extras.
//! - [`TextMsg`]: a system text message with a destination and four args.
//!
//! All strings are NUL-terminated. Decoding is lenient in the same way the
//! engine's bit reader is: reading past the end yields zero bytes and empty
//! strings and marks the reader as overflowed instead of failing. The only
//! hard error is a structurally meaningless value such as an unknown print
//! destination.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod errors;
mod messages;
mod reader;

pub use errors::{ProtocolError, Result};
pub use messages::{
    Destination, MessageKind, SayText, SayText2, TextMsg, UserMessage, CHAT_STRING_CAPACITY,
    TEXT_MSG_STRING_CAPACITY,
};
pub use reader::MessageReader;
