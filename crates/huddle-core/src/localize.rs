//! Symbolic key lookup.

use std::collections::HashMap;

/// Prefix marking a symbolic key rather than display text.
const SYMBOL_PREFIX: char = '#';

/// Resolved values that are themselves keys are followed this many times.
pub const MAX_LOOKUP_DEPTH: usize = 4;

/// Localisation table.
pub trait Localizer {
    /// Look up `token` (the key without its `#` prefix).
    fn find(&self, token: &str) -> Option<String>;
}

impl Localizer for HashMap<String, String> {
    fn find(&self, token: &str) -> Option<String> {
        self.get(token).cloned()
    }
}

impl<L: Localizer + ?Sized> Localizer for &L {
    fn find(&self, token: &str) -> Option<String> {
        (**self).find(token)
    }
}

/// `text` names a localisation entry.
pub fn is_symbolic(text: &str) -> bool {
    text.starts_with(SYMBOL_PREFIX)
}

/// Resolve `text` for display.
///
/// Plain text is returned as is. A symbolic key is looked up; a miss returns
/// the key itself, prefix included. A hit that is again symbolic is looked up
/// again, at most [`MAX_LOOKUP_DEPTH`] times in total.
pub fn resolve<L: Localizer + ?Sized>(localizer: &L, text: &str) -> String {
    let mut current = text.to_owned();
    for _ in 0..MAX_LOOKUP_DEPTH {
        let Some(token) = current.strip_prefix(SYMBOL_PREFIX) else {
            return current;
        };
        match localizer.find(token) {
            Some(found) => current = found,
            None => return current,
        }
    }

    if is_symbolic(&current) {
        tracing::debug!(key = text, last = %current, "lookup depth exceeded");
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect()
    }

    #[test]
    fn plain_text_is_verbatim() {
        let strings = table(&[("hello", "should not be used")]);
        assert_eq!(resolve(&strings, "hello"), "hello");
    }

    #[test]
    fn missing_key_passes_through() {
        let strings = table(&[]);
        assert_eq!(resolve(&strings, "#Missing_Key"), "#Missing_Key");
    }

    #[test]
    fn nested_keys_are_followed() {
        let strings = table(&[("Outer", "#Inner"), ("Inner", "done")]);
        assert_eq!(resolve(&strings, "#Outer"), "done");
    }

    #[test]
    fn cyclic_keys_stop_at_depth() {
        let strings = table(&[("A", "#B"), ("B", "#A")]);
        // Four lookups: A -> #B -> #A -> #B -> #A
        assert_eq!(resolve(&strings, "#A"), "#A");
    }
}
