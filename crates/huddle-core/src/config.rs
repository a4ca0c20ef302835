//! Externally configured HUD switches.

use serde::{Deserialize, Serialize};

/// HUD chat configuration.
///
/// Defaults match the stock client. Missing fields in a config file take
/// their default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HudConfig {
    /// Display system text messages at all (`cl_showtextmsg`).
    pub show_text_messages: bool,

    /// Reproduce the stock client's stop-typing latch.
    ///
    /// When set, the idle transition leaves the local typing flag raised, so
    /// "n" is republished on every idle tick and "y" is never published again
    /// until message mode closes.
    pub legacy_typing_latch: bool,

    /// Most typing members listed by name before switching to a count.
    pub max_named_typists: usize,
}

impl Default for HudConfig {
    fn default() -> Self {
        Self { show_text_messages: true, legacy_typing_latch: false, max_named_typists: 3 }
    }
}
