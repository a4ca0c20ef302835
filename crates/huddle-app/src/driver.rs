//! Driver trait for abstracting I/O operations.
//!
//! The [`Driver`] trait decouples the HUD runtime from the host. Each host
//! implements the trait to provide event delivery and display sinks, while
//! the generic [`crate::Runtime`] handles all orchestration.

use std::future::Future;

use huddle_core::{HudConfig, SessionId, TypingStatus};

use crate::{HudEvent, HudView, Sink};

/// Abstracts host I/O for the HUD runtime.
///
/// # Implementations
///
/// - **CLI**: seeded simulated lobby, sinks written through `tracing`
/// - **Simulation**: scripted inbox with recorded output for tests
///
/// All calls happen on one thread, one event at a time. Sink writes and
/// typing publication are best effort: an error is the driver's own failure,
/// not a platform refusal.
pub trait Driver {
    /// Host-specific error type.
    type Error: std::error::Error + 'static;

    /// Wait for the next event.
    ///
    /// Returns `None` when the host has no more events and the runtime
    /// should stop.
    fn poll_event(&mut self) -> impl Future<Output = Result<Option<HudEvent>, Self::Error>>;

    /// Write a finished line to a display sink.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink is gone.
    fn print(&mut self, sink: Sink, text: &str) -> Result<(), Self::Error>;

    /// Publish the local typing attribute.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform handle is gone.
    fn publish_typing(&mut self, session: SessionId, status: TypingStatus) -> Result<(), Self::Error>;

    /// Store a newly applied configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be written.
    fn persist_config(&mut self, config: &HudConfig) -> Result<(), Self::Error>;

    /// Draw the HUD.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    fn render(&mut self, view: &HudView) -> Result<(), Self::Error>;

    /// Release host resources.
    fn stop(&mut self);
}
