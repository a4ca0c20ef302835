//! Lenient reader for user message payloads.

use bytes::Buf;

/// Cursor over a user message payload.
///
/// Mirrors the engine's bit reader semantics: reads past the end never fail,
/// they return zero / empty and set [`MessageReader::overflowed`]. Strings
/// longer than the caller's capacity are consumed in full but only the first
/// `capacity - 1` bytes are kept, which sets [`MessageReader::truncated`].
#[derive(Debug, Clone)]
pub struct MessageReader<'a> {
    buf: &'a [u8],
    overflowed: bool,
    truncated: bool,
}

impl<'a> MessageReader<'a> {
    /// Create a reader over `payload`.
    pub fn new(payload: &'a [u8]) -> Self {
        Self { buf: payload, overflowed: false, truncated: false }
    }

    /// Read one byte. Returns 0 past the end.
    pub fn read_byte(&mut self) -> u8 {
        if !self.buf.has_remaining() {
            self.overflowed = true;
            return 0;
        }
        self.buf.get_u8()
    }

    /// Read a NUL-terminated string into a buffer of `capacity` bytes.
    ///
    /// `capacity` counts the terminator, so at most `capacity - 1` bytes of
    /// text are kept. A missing terminator at the end of the payload ends the
    /// string. Invalid UTF-8 is replaced lossily before the cut, and the cut
    /// always lands on a character boundary.
    pub fn read_string(&mut self, capacity: usize) -> String {
        if !self.buf.has_remaining() {
            self.overflowed = true;
            return String::new();
        }

        let (raw, consumed) = match self.buf.iter().position(|&b| b == 0) {
            Some(end) => (&self.buf[..end], end + 1),
            None => (self.buf, self.buf.len()),
        };

        let mut text = String::from_utf8_lossy(raw).into_owned();
        let keep = capacity.saturating_sub(1);
        if text.len() > keep {
            let mut cut = keep;
            while !text.is_char_boundary(cut) {
                cut -= 1;
            }
            text.truncate(cut);
            self.truncated = true;
        }

        self.buf.advance(consumed);
        text
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.buf.remaining()
    }

    /// A read went past the end of the payload.
    pub fn overflowed(&self) -> bool {
        self.overflowed
    }

    /// A string was cut to fit its capacity.
    pub fn truncated(&self) -> bool {
        self.truncated
    }
}
