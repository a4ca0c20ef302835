//! HUD side-effects and intents.
//!
//! This module defines the [`HudAction`] enum, which represents instructions
//! produced by the [`crate::Hud`] state machine for the runtime to execute.

use huddle_core::{ChatFilter, HudConfig, SessionId, TypingStatus};

/// Display surface a line is written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sink {
    /// Chat pane.
    Chat {
        /// Client slot the line is attributed to. `None` for unattributed lines.
        sender: Option<u8>,
        /// Category bits used by the pane's filter.
        filter: ChatFilter,
    },
    /// Console log. A leading notify sentinel routes the line to the notify
    /// buffer instead.
    Console,
    /// Centre-screen print.
    Center,
}

impl Sink {
    /// Chat pane line with no sender and no category.
    pub const CHAT: Self = Self::Chat { sender: None, filter: ChatFilter::NONE };
}

/// Actions produced by the Hud state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HudAction {
    /// Redraw the HUD from [`crate::Hud::view`].
    Render,

    /// Stop the runtime.
    Quit,

    /// Write a finished line to a display sink.
    Print {
        /// Target surface.
        sink: Sink,
        /// Finished display text.
        text: String,
    },

    /// Publish the local typing attribute to the session.
    PublishTyping {
        /// Session to publish in.
        session: SessionId,
        /// Value to publish.
        status: TypingStatus,
    },

    /// Settings dialog was closed (the `OnClose` signal).
    SettingsClosed,

    /// Settings were applied; the new configuration is in effect.
    ConfigApplied(HudConfig),
}

impl HudAction {
    /// Shorthand for [`HudAction::Print`].
    pub fn print(sink: Sink, text: impl Into<String>) -> Self {
        Self::Print { sink, text: text.into() }
    }
}
