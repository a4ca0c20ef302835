//! Simulation driver implementing the Driver trait.
//!
//! `SimDriver` provides the same interface as the CLI's log driver but for
//! deterministic testing. It implements [`Driver`] so the same
//! [`huddle_app::Runtime`] orchestration code runs in both the binary and
//! simulation.

#![allow(clippy::disallowed_types, reason = "Synchronous locking operations only")]

use std::{
    collections::VecDeque,
    fmt::Write as _,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use huddle_app::{Driver, Hud, HudEvent, HudView, Sink};
use huddle_core::{HudConfig, Localizer, Membership, SessionId, TypingStatus};

use crate::{
    SimLobby,
    invariants::{HudSnapshot, InvariantRegistry},
};

/// Error type for simulation driver.
#[derive(Debug, Clone)]
pub struct SimDriverError(pub String);

impl std::fmt::Display for SimDriverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SimDriverError: {}", self.0)
    }
}

impl std::error::Error for SimDriverError {}

/// Side effect recorded by the driver, in execution order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// Line written to a sink.
    Print {
        /// Target surface.
        sink: Sink,
        /// Line text.
        text: String,
    },
    /// Local typing attribute published.
    Published {
        /// Session published in.
        session: SessionId,
        /// Published value.
        status: TypingStatus,
    },
    /// Configuration stored.
    Persisted(HudConfig),
}

impl std::fmt::Display for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Print { sink: Sink::Chat { sender, filter }, text } => {
                let sender = sender.map_or_else(|| "-".to_owned(), |s| s.to_string());
                write!(f, "chat[{sender}] filter={:#04x} {text:?}", filter.bits())
            },
            Self::Print { sink: Sink::Console, text } => write!(f, "console {text:?}"),
            Self::Print { sink: Sink::Center, text } => write!(f, "center {text:?}"),
            Self::Published { session, status } => {
                write!(f, "publish {} isTyping={}", session.0, status.as_attribute())
            },
            Self::Persisted(config) => write!(f, "persist {config:?}"),
        }
    }
}

/// Shared state for event injection.
///
/// This allows injection from outside async contexts.
#[derive(Default)]
struct SharedState {
    pending_events: VecDeque<HudEvent>,
    outputs: Vec<Output>,
    renders: Vec<HudView>,
    stopped: bool,
}

/// Simulation driver for deterministic testing.
///
/// Implements [`Driver`] trait so the same [`huddle_app::Runtime`]
/// orchestration code runs in both the binary and simulation tests. With a
/// lobby attached, typing publications are written to the lobby and echoed
/// back as data updates, the way the platform reports a member's own writes.
pub struct SimDriver {
    state: Arc<Mutex<SharedState>>,
    lobby: Option<SimLobby>,
    invariants: Option<InvariantRegistry>,
}

impl Default for SimDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl SimDriver {
    /// Create a new simulation driver.
    pub fn new() -> Self {
        Self { state: Arc::new(Mutex::new(SharedState::default())), lobby: None, invariants: None }
    }

    /// Publish typing state into `lobby`.
    #[must_use]
    pub fn with_lobby(mut self, lobby: SimLobby) -> Self {
        self.lobby = Some(lobby);
        self
    }

    /// Enable invariant checking.
    #[must_use]
    pub fn with_invariants(mut self, registry: InvariantRegistry) -> Self {
        self.invariants = Some(registry);
        self
    }

    fn lock(&self) -> MutexGuard<'_, SharedState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Inject a `HudEvent` for processing.
    pub fn inject_event(&self, event: HudEvent) {
        self.lock().pending_events.push_back(event);
    }

    /// Inject several events in order.
    pub fn inject_events(&self, events: impl IntoIterator<Item = HudEvent>) {
        self.lock().pending_events.extend(events);
    }

    /// Check if there are pending events to process.
    pub fn has_pending(&self) -> bool {
        !self.lock().pending_events.is_empty()
    }

    /// Take all recorded outputs.
    pub fn take_outputs(&self) -> Vec<Output> {
        std::mem::take(&mut self.lock().outputs)
    }

    /// Lines written to sinks so far.
    pub fn printed(&self) -> Vec<(Sink, String)> {
        self.lock()
            .outputs
            .iter()
            .filter_map(|output| match output {
                Output::Print { sink, text } => Some((*sink, text.clone())),
                _ => None,
            })
            .collect()
    }

    /// Typing publications so far.
    pub fn published(&self) -> Vec<(SessionId, TypingStatus)> {
        self.lock()
            .outputs
            .iter()
            .filter_map(|output| match output {
                Output::Published { session, status } => Some((*session, *status)),
                _ => None,
            })
            .collect()
    }

    /// Last rendered view.
    pub fn last_render(&self) -> Option<HudView> {
        self.lock().renders.last().cloned()
    }

    /// Number of renders so far.
    pub fn render_count(&self) -> usize {
        self.lock().renders.len()
    }

    /// `stop` was called.
    pub fn is_stopped(&self) -> bool {
        self.lock().stopped
    }

    /// Recorded outputs, one per line, for snapshot tests.
    pub fn transcript(&self) -> String {
        let mut transcript = String::new();
        for output in &self.lock().outputs {
            let _ = writeln!(transcript, "{output}");
        }
        transcript
    }

    /// Check invariants against Hud state.
    pub fn check_invariants<M: Membership, L: Localizer>(&self, hud: &Hud<M, L>, context: &str) {
        if let Some(ref registry) = self.invariants {
            let snapshot = HudSnapshot::from_hud(hud);
            registry.assert_all(&snapshot, context);
        }
    }
}

impl Driver for SimDriver {
    type Error = SimDriverError;

    async fn poll_event(&mut self) -> Result<Option<HudEvent>, Self::Error> {
        Ok(self.lock().pending_events.pop_front())
    }

    fn print(&mut self, sink: Sink, text: &str) -> Result<(), Self::Error> {
        self.lock().outputs.push(Output::Print { sink, text: text.to_owned() });
        Ok(())
    }

    fn publish_typing(&mut self, session: SessionId, status: TypingStatus) -> Result<(), Self::Error> {
        let echo = self
            .lobby
            .as_ref()
            .map(|lobby| lobby.set_typing(session, lobby.local_member(), status));

        let mut state = self.lock();
        state.outputs.push(Output::Published { session, status });
        state.pending_events.extend(echo);
        Ok(())
    }

    fn persist_config(&mut self, config: &HudConfig) -> Result<(), Self::Error> {
        self.lock().outputs.push(Output::Persisted(config.clone()));
        Ok(())
    }

    fn render(&mut self, view: &HudView) -> Result<(), Self::Error> {
        self.lock().renders.push(view.clone());
        Ok(())
    }

    fn stop(&mut self) {
        self.lock().stopped = true;
    }
}

#[cfg(test)]
mod tests {
    use huddle_core::{ChatFilter, MemberId};

    use super::*;

    #[test]
    fn inject_event_queues_event() {
        let driver = SimDriver::new();
        driver.inject_event(HudEvent::Shutdown);

        assert!(driver.has_pending());
    }

    #[test]
    fn outputs_render_one_per_line() {
        let mut driver = SimDriver::new();
        driver.print(Sink::Chat { sender: Some(2), filter: ChatFilter::NONE }, "Alice: hi").unwrap();
        driver.print(Sink::Console, "\u{1}note").unwrap();
        driver.publish_typing(SessionId(100), TypingStatus::Typing).unwrap();

        insta::assert_snapshot!(driver.transcript(), @r#"
        chat[2] filter=0x00 "Alice: hi"
        console "\u{1}note"
        publish 100 isTyping=y
        "#);
    }

    #[test]
    fn publication_echoes_through_attached_lobby() {
        let lobby = SimLobby::new(MemberId(1), "me");
        let mut driver = SimDriver::new().with_lobby(lobby.clone());

        driver.publish_typing(SessionId(100), TypingStatus::Typing).unwrap();

        assert_eq!(driver.published(), vec![(SessionId(100), TypingStatus::Typing)]);
        assert!(driver.has_pending());
        assert_eq!(lobby.member_data(SessionId(100), MemberId(1), "isTyping").as_deref(), Some("y"));
    }
}
