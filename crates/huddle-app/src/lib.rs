//! Application layer for the Huddle HUD chat.
//!
//! Pure state machines and a generic runtime, so the same code runs against
//! the engine and inside deterministic simulation.
//!
//! # Components
//!
//! - [`Hud`]: chat element state machine (lobby events, user messages, ticks)
//! - [`TypingTracker`]: which remote members are composing a message
//! - [`ChatFormatter`]: inbound message to display line
//! - [`SettingsDialog`]: tabbed settings shell lifecycle
//! - [`Driver`]: trait for platform-specific I/O
//! - [`Runtime`]: generic orchestration loop using Driver

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod driver;
mod event;
mod formatter;
mod hud;
mod runtime;
mod session;
mod settings;
mod state;
mod typing;

pub use action::{HudAction, Sink};
pub use driver::Driver;
pub use event::{HudEvent, MessageMode};
pub use formatter::{
    ARG_CAPACITY, ChatFormatter, LOBBY_ENTRY_CAPACITY, NAME_CAPACITY, SYSTEM_LINE_CAPACITY,
    TEMPLATED_LINE_CAPACITY, UNKNOWN_NAME,
};
pub use hud::Hud;
pub use runtime::Runtime;
pub use session::SessionContext;
pub use settings::{SHOW_SETTINGS_COMMAND, SettingsCommand, SettingsDialog, SettingsEdit, SettingsPage};
pub use state::{HudView, SettingsView};
pub use typing::TypingTracker;
