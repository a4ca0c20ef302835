//! Headless runner for the Huddle HUD chat.
//!
//! A thin shell over [`huddle_app::Driver`] that feeds the generic
//! [`huddle_app::Runtime`] from a seeded simulated lobby and writes every
//! display sink to the log. All HUD logic lives in `huddle-app`.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod config;
pub mod driver;

pub use config::{ConfigError, load_config, save_config};
pub use driver::{DriverError, LogDriver};
pub use huddle_app::{Driver, Hud, Runtime};
