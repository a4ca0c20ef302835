//! HUD input events.
//!
//! This module defines [`HudEvent`], the set of inputs that drive the
//! [`crate::Hud`] state machine.
//!
//! Events originate from three sources:
//! - The engine: per-frame think ticks, message mode, user messages.
//! - The platform lobby service: enter, chat updates, member data, chat log.
//! - The console: settings dialog commands.

use huddle_core::{MemberId, MemberStateChange, SessionId};

use crate::SettingsCommand;

/// Which chat input was opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageMode {
    /// Say to everyone.
    Say,
    /// Say to team.
    SayTeam,
}

/// Events processed by the Hud state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HudEvent {
    /// Per-frame update while the element is alive.
    Think {
        /// The chat input line holds text.
        has_text: bool,
    },

    /// Chat input opened.
    StartMessageMode {
        /// Which input.
        mode: MessageMode,
    },

    /// Chat input closed.
    StopMessageMode,

    /// Result of a lobby enter request.
    LobbyEntered {
        /// Lobby that was entered.
        session: SessionId,
        /// The platform accepted the enter.
        success: bool,
    },

    /// A lobby member's state changed.
    LobbyChatUpdate {
        /// Lobby the change happened in.
        session: SessionId,
        /// Member whose state changed.
        member: MemberId,
        /// What changed.
        change: MemberStateChange,
    },

    /// Lobby or member data changed.
    LobbyDataUpdated {
        /// Lobby the data belongs to.
        session: SessionId,
        /// Member whose data changed; equals the lobby for lobby-wide data.
        member: MemberId,
        /// The platform completed the update.
        success: bool,
    },

    /// A lobby chat entry arrived.
    LobbyChatMessage {
        /// Lobby the entry was posted to.
        session: SessionId,
        /// Author of the entry.
        sender: MemberId,
        /// Entry index in the lobby chat log.
        chat_id: u32,
    },

    /// The local member was kicked from a lobby.
    LobbyKicked {
        /// Lobby the kick came from.
        session: SessionId,
    },

    /// Engine user message, not yet decoded.
    UserMessage {
        /// Engine-side message name.
        name: String,
        /// Raw payload.
        payload: Vec<u8>,
    },

    /// Settings dialog command.
    Settings(SettingsCommand),

    /// Host is shutting the element down.
    Shutdown,
}
