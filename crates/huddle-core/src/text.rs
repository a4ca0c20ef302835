//! Display text pipeline.
//!
//! Helpers shared by every formatting path: template substitution in the
//! two styles the engine uses, line terminator handling, colour markup
//! removal, and [`BoundedText`], the explicit replacement for fixed-size
//! string buffers.

use std::fmt;

/// Leading byte routing a console line into the notify buffer.
pub const NOTIFY_SENTINEL: char = '\u{1}';

/// Colour control: hex RGB follows (6 characters).
const COLOR_HEXCODE: char = '\u{7}';

/// Colour control: hex RGBA follows (8 characters).
const COLOR_ALPHAHEXCODE: char = '\u{8}';

/// How `%` sequences in a template select arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubstitutionStyle {
    /// Localisation tables: `%s1`..`%s9` pick an argument by position, a bare
    /// `%s` takes the next argument in order. Any other `%` is literal.
    Localized,
    /// C `printf`: `%s` takes the next argument, `%%` is a literal `%`, any
    /// other conversion is copied verbatim.
    Printf,
}

/// Substitute `args` into `template`.
///
/// Missing arguments substitute as empty text.
pub fn substitute(template: &str, args: &[&str], style: SubstitutionStyle) -> String {
    let mut out = String::with_capacity(template.len());
    let mut next = 0usize;
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        match (style, chars.peek().copied()) {
            (_, Some('s')) => {
                chars.next();
                let positional = match style {
                    SubstitutionStyle::Localized => {
                        chars.peek().and_then(|d| d.to_digit(10)).filter(|&d| d > 0)
                    },
                    SubstitutionStyle::Printf => None,
                };
                let index = match positional {
                    Some(digit) => {
                        chars.next();
                        digit as usize - 1
                    },
                    None => {
                        next += 1;
                        next - 1
                    },
                };
                out.push_str(args.get(index).copied().unwrap_or_default());
            },
            (SubstitutionStyle::Printf, Some('%')) => {
                chars.next();
                out.push('%');
            },
            _ => out.push('%'),
        }
    }
    out
}

/// Convert carriage returns to newlines.
pub fn convert_cr_to_nl(text: &str) -> String {
    text.replace('\r', "\n")
}

/// Drop one trailing `\n` or `\r`.
pub fn strip_trailing_newline(text: &mut String) {
    if text.ends_with(['\n', '\r']) {
        text.pop();
    }
}

/// Remove chat colour control characters.
///
/// Controls `0x01..=0x08` are dropped. `0x07` and `0x08` also drop the six or
/// eight hex digits that follow them.
pub fn remove_color_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        match c {
            COLOR_HEXCODE => {
                chars.by_ref().take(6).for_each(drop);
            },
            COLOR_ALPHAHEXCODE => {
                chars.by_ref().take(8).for_each(drop);
            },
            '\u{1}'..='\u{6}' => {},
            _ => out.push(c),
        }
    }
    out
}

/// Text with a fixed byte capacity.
///
/// Writes past the capacity are cut at the last character boundary that
/// fits and the buffer remembers that it truncated. Nothing is ever
/// silently lost: callers can check [`BoundedText::is_truncated`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedText {
    text: String,
    capacity: usize,
    truncated: bool,
}

impl BoundedText {
    /// Empty buffer holding at most `capacity` bytes.
    pub fn new(capacity: usize) -> Self {
        Self { text: String::new(), capacity, truncated: false }
    }

    /// Buffer initialised from `text`, cut to `capacity`.
    pub fn from_text(text: &str, capacity: usize) -> Self {
        let mut bounded = Self::new(capacity);
        bounded.push_str(text);
        bounded
    }

    /// Append as much of `text` as fits.
    ///
    /// Returns `true` if all of it fit.
    pub fn push_str(&mut self, text: &str) -> bool {
        let room = self.remaining();
        if text.len() <= room {
            self.text.push_str(text);
            return true;
        }

        let mut cut = room;
        while !text.is_char_boundary(cut) {
            cut -= 1;
        }
        self.text.push_str(&text[..cut]);
        self.truncated = true;
        false
    }

    /// Append one character if it fits.
    pub fn push(&mut self, c: char) -> bool {
        let mut utf8 = [0u8; 4];
        self.push_str(c.encode_utf8(&mut utf8))
    }

    /// Current contents.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Take the contents.
    pub fn into_string(self) -> String {
        self.text
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// No contents.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Maximum length in bytes.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Bytes still available.
    pub fn remaining(&self) -> usize {
        self.capacity.saturating_sub(self.text.len())
    }

    /// Some write was cut short.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }
}

impl fmt::Display for BoundedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn localized_bare_placeholders_take_args_in_order() {
        let out = substitute("%s: %s", &["Alice", "hello", "", ""], SubstitutionStyle::Localized);
        assert_eq!(out, "Alice: hello");
    }

    #[test]
    fn localized_positional_placeholders() {
        let out = substitute(
            "(%s3) %s1 :  %s2",
            &["Bob", "gg", "DEAD", ""],
            SubstitutionStyle::Localized,
        );
        assert_eq!(out, "(DEAD) Bob :  gg");
    }

    #[test]
    fn printf_ignores_digits_after_placeholder() {
        let out = substitute("%s1", &["x"], SubstitutionStyle::Printf);
        assert_eq!(out, "x1");
    }

    #[test]
    fn printf_escapes_and_unknown_conversions() {
        let out = substitute("100%% %d %s%", &["done"], SubstitutionStyle::Printf);
        assert_eq!(out, "100% %d done%");
    }

    #[test]
    fn missing_args_are_empty() {
        let out = substitute("[%s][%s]", &["a"], SubstitutionStyle::Printf);
        assert_eq!(out, "[a][]");
    }

    #[test]
    fn strips_one_trailing_terminator() {
        let mut text = String::from("line\n\n");
        strip_trailing_newline(&mut text);
        assert_eq!(text, "line\n");

        let mut text = String::from("line\r");
        strip_trailing_newline(&mut text);
        assert_eq!(text, "line");
    }

    #[test]
    fn carriage_returns_become_newlines() {
        assert_eq!(convert_cr_to_nl("a\rb\r\n"), "a\nb\n\n");
    }

    #[test]
    fn color_markup_is_removed() {
        let text = "\u{3}Alice\u{1}: \u{7}FF0000red \u{8}00FF00FFgreen";
        assert_eq!(remove_color_markup(text), "Alice: red green");
    }

    #[test]
    fn truncated_hex_code_at_end_is_dropped() {
        assert_eq!(remove_color_markup("hi\u{7}FF"), "hi");
    }

    #[test]
    fn bounded_text_cuts_on_char_boundary() {
        let mut text = BoundedText::new(4);
        assert!(text.push_str("ab"));
        assert!(!text.push_str("çd"));
        assert_eq!(text.as_str(), "abç");
        assert!(text.is_truncated());
        assert_eq!(text.remaining(), 0);

        let mut narrow = BoundedText::new(3);
        assert!(!narrow.push_str("abç"));
        assert_eq!(narrow.as_str(), "ab");
    }
}
