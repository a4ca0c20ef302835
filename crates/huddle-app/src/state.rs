//! Observable HUD state.
//!
//! These structures are the view model handed to the driver's render step:
//! the subset of HUD state needed to draw, with names and titles already
//! resolved so the renderer needs no access to the collaborators.

use huddle_core::SessionId;

use crate::{MessageMode, SettingsPage};

/// Snapshot of everything the HUD draws.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HudView {
    /// Joined lobby. `None` if not in one.
    pub session: Option<SessionId>,
    /// Open chat input. `None` if closed.
    pub message_mode: Option<MessageMode>,
    /// Typing indicator line. `None` if nothing to draw.
    pub typing_summary: Option<String>,
    /// Settings dialog. `None` unless shown.
    pub settings: Option<SettingsView>,
}

/// Visible settings dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsView {
    /// Tabs in order with their resolved titles.
    pub tabs: Vec<(SettingsPage, String)>,
    /// Selected tab.
    pub active: SettingsPage,
}
