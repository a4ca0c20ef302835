//! User message payloads.
//!
//! Each message has a fixed field order on the wire. Decoders never reject a
//! short payload (missing fields read as empty); encoders are strict so the
//! harness cannot build payloads the engine would never send.

use std::fmt;

use bytes::BufMut;

use crate::{
    MessageReader,
    errors::{ProtocolError, Result},
};

/// Buffer size for strings in chat messages (`SayText`, `SayText2`).
pub const CHAT_STRING_CAPACITY: usize = 256;

/// Buffer size for strings in system text messages (`TextMsg`).
pub const TEXT_MSG_STRING_CAPACITY: usize = 2048;

/// User message names handled by the chat element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    /// Pre-formatted chat line.
    SayText,
    /// Localised chat line with substitution arguments.
    SayText2,
    /// System text message routed by destination.
    TextMsg,
}

impl MessageKind {
    /// Engine-side message name.
    pub fn name(self) -> &'static str {
        match self {
            Self::SayText => "SayText",
            Self::SayText2 => "SayText2",
            Self::TextMsg => "TextMsg",
        }
    }

    /// Look up a kind by its engine-side name.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "SayText" => Ok(Self::SayText),
            "SayText2" => Ok(Self::SayText2),
            "TextMsg" => Ok(Self::TextMsg),
            other => Err(ProtocolError::UnknownMessage(other.to_owned())),
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Print destination of a [`TextMsg`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Destination {
    /// Transient notification area.
    Notify = 1,
    /// Developer console.
    Console = 2,
    /// Chat pane.
    Talk = 3,
    /// Centre-screen print.
    Center = 4,
}

impl TryFrom<u8> for Destination {
    type Error = ProtocolError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            1 => Ok(Self::Notify),
            2 => Ok(Self::Console),
            3 => Ok(Self::Talk),
            4 => Ok(Self::Center),
            other => Err(ProtocolError::UnknownDestination(other)),
        }
    }
}

impl From<Destination> for u8 {
    fn from(destination: Destination) -> Self {
        destination as u8
    }
}

/// Pre-formatted chat line.
///
/// Wire: `[client: u8][text]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SayText {
    /// Sending client slot.
    pub client: u8,
    /// Line text, displayed verbatim.
    pub text: String,
}

impl SayText {
    fn decode(reader: &mut MessageReader<'_>) -> Self {
        let client = reader.read_byte();
        let text = reader.read_string(CHAT_STRING_CAPACITY);
        Self { client, text }
    }

    fn encode(&self, dst: &mut impl BufMut) -> Result<()> {
        dst.put_u8(self.client);
        put_string(dst, &self.text, CHAT_STRING_CAPACITY)
    }
}

/// Localised chat line.
///
/// Wire: `[client: u8][wants_to_chat: u8][template][name][text][extra1][extra2]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SayText2 {
    /// Sending client slot.
    pub client: u8,
    /// Also echo the line to the console.
    pub wants_to_chat: bool,
    /// Template text or `#` key.
    pub template: String,
    /// Player name, used literally.
    pub name: String,
    /// Chat text, used literally.
    pub text: String,
    /// Extra arguments, text or `#` keys.
    pub extras: [String; 2],
}

impl SayText2 {
    fn decode(reader: &mut MessageReader<'_>) -> Self {
        let client = reader.read_byte();
        let wants_to_chat = reader.read_byte() != 0;
        let template = reader.read_string(CHAT_STRING_CAPACITY);
        let name = reader.read_string(CHAT_STRING_CAPACITY);
        let text = reader.read_string(CHAT_STRING_CAPACITY);
        let extras =
            [reader.read_string(CHAT_STRING_CAPACITY), reader.read_string(CHAT_STRING_CAPACITY)];
        Self { client, wants_to_chat, template, name, text, extras }
    }

    fn encode(&self, dst: &mut impl BufMut) -> Result<()> {
        dst.put_u8(self.client);
        dst.put_u8(u8::from(self.wants_to_chat));
        for field in [&self.template, &self.name, &self.text, &self.extras[0], &self.extras[1]] {
            put_string(dst, field, CHAT_STRING_CAPACITY)?;
        }
        Ok(())
    }
}

/// System text message.
///
/// Wire: `[destination: u8][template][arg1][arg2][arg3][arg4]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextMsg {
    /// Where the line is printed.
    pub destination: Destination,
    /// Template text or `#` key.
    pub template: String,
    /// Substitution arguments, text or `#` keys. Unused slots are empty.
    pub args: [String; 4],
}

impl TextMsg {
    fn decode(reader: &mut MessageReader<'_>) -> Result<Self> {
        let destination = Destination::try_from(reader.read_byte())?;
        let template = reader.read_string(TEXT_MSG_STRING_CAPACITY);
        let args = [
            reader.read_string(TEXT_MSG_STRING_CAPACITY),
            reader.read_string(TEXT_MSG_STRING_CAPACITY),
            reader.read_string(TEXT_MSG_STRING_CAPACITY),
            reader.read_string(TEXT_MSG_STRING_CAPACITY),
        ];
        Ok(Self { destination, template, args })
    }

    fn encode(&self, dst: &mut impl BufMut) -> Result<()> {
        dst.put_u8(u8::from(self.destination));
        put_string(dst, &self.template, TEXT_MSG_STRING_CAPACITY)?;
        for arg in &self.args {
            put_string(dst, arg, TEXT_MSG_STRING_CAPACITY)?;
        }
        Ok(())
    }
}

/// Any user message handled by the chat element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserMessage {
    /// See [`SayText`].
    SayText(SayText),
    /// See [`SayText2`].
    SayText2(SayText2),
    /// See [`TextMsg`].
    TextMsg(TextMsg),
}

impl UserMessage {
    /// Kind of this message.
    pub fn kind(&self) -> MessageKind {
        match self {
            Self::SayText(_) => MessageKind::SayText,
            Self::SayText2(_) => MessageKind::SayText2,
            Self::TextMsg(_) => MessageKind::TextMsg,
        }
    }

    /// Decode a payload dispatched under `kind`.
    ///
    /// # Errors
    ///
    /// - `ProtocolError::UnknownDestination` if a `TextMsg` names no known
    ///   print target.
    pub fn decode(kind: MessageKind, payload: &[u8]) -> Result<Self> {
        let mut reader = MessageReader::new(payload);
        let message = match kind {
            MessageKind::SayText => Self::SayText(SayText::decode(&mut reader)),
            MessageKind::SayText2 => Self::SayText2(SayText2::decode(&mut reader)),
            MessageKind::TextMsg => Self::TextMsg(TextMsg::decode(&mut reader)?),
        };
        Ok(message)
    }

    /// Encode the payload (without the kind, which travels out of band).
    ///
    /// # Errors
    ///
    /// - `ProtocolError::StringTooLong` if a string does not fit its buffer.
    /// - `ProtocolError::InteriorNul` if a string contains a NUL byte.
    pub fn encode(&self, dst: &mut impl BufMut) -> Result<()> {
        match self {
            Self::SayText(m) => m.encode(dst),
            Self::SayText2(m) => m.encode(dst),
            Self::TextMsg(m) => m.encode(dst),
        }
    }

    /// Encode into a fresh buffer.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.encode(&mut buf)?;
        Ok(buf)
    }
}

fn put_string(dst: &mut impl BufMut, text: &str, capacity: usize) -> Result<()> {
    if let Some(pos) = text.bytes().position(|b| b == 0) {
        return Err(ProtocolError::InteriorNul(pos));
    }
    let max = capacity.saturating_sub(1);
    if text.len() > max {
        return Err(ProtocolError::StringTooLong { len: text.len(), max });
    }
    dst.put_slice(text.as_bytes());
    dst.put_u8(0);
    Ok(())
}
