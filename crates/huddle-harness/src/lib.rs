//! Deterministic simulation harness for the Huddle HUD chat.
//!
//! In-memory doubles for every collaborator the HUD reads from or writes
//! to, so the production [`huddle_app::Runtime`] and [`huddle_app::Hud`] run
//! unchanged inside tests.
//!
//! # Components
//!
//! - [`SimLobby`]: shared in-memory lobby service (names, member data, chat log)
//! - [`standard_strings`]: localisation table with the stock chat keys
//! - [`SimDriver`]: scripted event inbox with recorded output
//! - [`Scenario`]: seeded generator of lobby traffic
//! - [`invariants`]: properties checked after every event

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod invariants;
mod scenario;
mod sim_driver;
mod sim_lobby;
mod strings;

pub use scenario::{Scenario, ScenarioConfig, user_message_event};
pub use sim_driver::{Output, SimDriver, SimDriverError};
pub use sim_lobby::SimLobby;
pub use strings::standard_strings;
