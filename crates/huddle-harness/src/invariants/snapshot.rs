//! Observable HUD state for invariant checks.

use huddle_app::Hud;
use huddle_core::{Localizer, MemberId, Membership, SessionId};

/// State extracted from a [`Hud`] after an event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HudSnapshot {
    /// Local member, once known.
    pub local: Option<MemberId>,
    /// Joined lobby.
    pub session: Option<SessionId>,
    /// Chat input open.
    pub input_open: bool,
    /// Local typing flag.
    pub local_typing: bool,
    /// Remote typing members in order.
    pub typing: Vec<MemberId>,
    /// Indicator line as it would be drawn.
    pub typing_summary: Option<String>,
    /// Settings dialog exists.
    pub settings_created: bool,
    /// Settings dialog shown.
    pub settings_visible: bool,
}

impl HudSnapshot {
    /// Capture `hud`.
    pub fn from_hud<M: Membership, L: Localizer>(hud: &Hud<M, L>) -> Self {
        Self {
            local: Some(hud.session().local()),
            session: hud.session().session(),
            input_open: hud.session().message_mode().is_some(),
            local_typing: hud.session().is_typing(),
            typing: hud.typing().members().to_vec(),
            typing_summary: hud.typing_summary(),
            settings_created: hud.settings().is_created(),
            settings_visible: hud.settings().is_visible(),
        }
    }
}
