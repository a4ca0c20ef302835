//! Log driver for the headless runner.
//!
//! Implements the [`Driver`] trait over a seeded [`Scenario`]: events come
//! from simulated lobby traffic, every sink is written to the log under its
//! own target, and typing publications go back into the simulated lobby.

use std::{collections::VecDeque, path::PathBuf, time::Duration};

use huddle_app::{Driver, HudEvent, HudView, Sink};
use huddle_core::{HudConfig, Membership, SessionId, TypingStatus, text::NOTIFY_SENTINEL};
use huddle_harness::{Scenario, SimLobby};
use thiserror::Error;

use crate::{ConfigError, save_config};

/// Log driver errors.
#[derive(Debug, Error)]
pub enum DriverError {
    /// Applied configuration could not be stored.
    #[error("failed to persist config: {0}")]
    Config(#[from] ConfigError),
}

/// Driver that plays a scenario and logs what the HUD shows.
pub struct LogDriver {
    scenario: Scenario,
    lobby: SimLobby,
    pending: VecDeque<HudEvent>,
    remaining: usize,
    tick: Duration,
    config_path: Option<PathBuf>,
    last_summary: Option<String>,
}

impl LogDriver {
    /// Play `events` scenario events, one per `tick`.
    pub fn new(scenario: Scenario, lobby: SimLobby, events: usize, tick: Duration) -> Self {
        Self {
            scenario,
            lobby,
            pending: VecDeque::new(),
            remaining: events,
            tick,
            config_path: None,
            last_summary: None,
        }
    }

    /// Store applied configuration at `path`.
    #[must_use]
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Deliver `event` before any scenario traffic.
    pub fn push_event(&mut self, event: HudEvent) {
        self.pending.push_back(event);
    }

    /// Scenario events still to be played.
    pub fn remaining(&self) -> usize {
        self.remaining
    }
}

impl Driver for LogDriver {
    type Error = DriverError;

    async fn poll_event(&mut self) -> Result<Option<HudEvent>, Self::Error> {
        if let Some(event) = self.pending.pop_front() {
            return Ok(Some(event));
        }
        if self.remaining == 0 {
            return Ok(Some(HudEvent::Shutdown));
        }

        tokio::time::sleep(self.tick).await;
        self.remaining -= 1;
        let event = self.scenario.next_event();
        tracing::trace!(?event, "scenario event");
        Ok(Some(event))
    }

    fn print(&mut self, sink: Sink, text: &str) -> Result<(), Self::Error> {
        let line = text.escape_debug();
        match sink {
            Sink::Chat { sender, filter } => {
                tracing::info!(target: "huddle::chat", ?sender, filter = filter.bits(), "{line}");
            },
            Sink::Console => match text.strip_prefix(NOTIFY_SENTINEL) {
                Some(notify) => tracing::info!(target: "huddle::notify", "{}", notify.escape_debug()),
                None => tracing::info!(target: "huddle::console", "{line}"),
            },
            Sink::Center => tracing::info!(target: "huddle::center", "{line}"),
        }
        Ok(())
    }

    fn publish_typing(&mut self, session: SessionId, status: TypingStatus) -> Result<(), Self::Error> {
        tracing::debug!(%session, status = status.as_attribute(), "publishing typing state");
        let echo = self.lobby.set_typing(session, self.lobby.local_member(), status);
        self.pending.push_back(echo);
        Ok(())
    }

    fn persist_config(&mut self, config: &HudConfig) -> Result<(), Self::Error> {
        match &self.config_path {
            Some(path) => {
                save_config(path, config)?;
                tracing::info!(path = %path.display(), "config saved");
            },
            None => tracing::info!(?config, "config applied, no file to save to"),
        }
        Ok(())
    }

    fn render(&mut self, view: &HudView) -> Result<(), Self::Error> {
        if view.typing_summary != self.last_summary {
            match &view.typing_summary {
                Some(summary) => tracing::info!(target: "huddle::typing", "{summary}"),
                None => tracing::debug!(target: "huddle::typing", "indicator cleared"),
            }
            self.last_summary.clone_from(&view.typing_summary);
        }
        tracing::trace!(?view, "render");
        Ok(())
    }

    fn stop(&mut self) {
        let chat_entries = self.lobby.chat_len(self.scenario.session());
        tracing::info!(remaining = self.remaining, chat_entries, "stopping");
    }
}

#[cfg(test)]
mod tests {
    use huddle_app::{Hud, Runtime};
    use huddle_core::MemberId;
    use huddle_harness::{ScenarioConfig, standard_strings};

    use super::*;

    fn driver(events: usize) -> (LogDriver, SimLobby) {
        let lobby = SimLobby::new(MemberId(1), "me");
        let scenario = Scenario::new(42, lobby.clone(), ScenarioConfig::default());
        (LogDriver::new(scenario, lobby.clone(), events, Duration::ZERO), lobby)
    }

    #[tokio::test]
    async fn shuts_down_after_scenario() {
        let (mut driver, _lobby) = driver(2);
        driver.push_event(HudEvent::StopMessageMode);

        assert_eq!(driver.poll_event().await.unwrap(), Some(HudEvent::StopMessageMode));
        assert!(matches!(driver.poll_event().await.unwrap(), Some(HudEvent::LobbyEntered { .. })));
        assert!(driver.poll_event().await.unwrap().is_some());
        assert_eq!(driver.remaining(), 0);
        assert_eq!(driver.poll_event().await.unwrap(), Some(HudEvent::Shutdown));
    }

    #[tokio::test]
    async fn publication_is_echoed_through_lobby() {
        let (mut driver, lobby) = driver(0);
        driver.publish_typing(SessionId(5), TypingStatus::Typing).unwrap();

        assert_eq!(driver.poll_event().await.unwrap(), Some(HudEvent::LobbyDataUpdated {
            session: SessionId(5),
            member: MemberId(1),
            success: true,
        }));
        assert_eq!(lobby.member_data(SessionId(5), MemberId(1), "isTyping").as_deref(), Some("y"));
    }

    #[tokio::test]
    async fn runtime_plays_scenario_to_completion() {
        let (driver, lobby) = driver(500);
        let hud = Hud::new(lobby, standard_strings(), HudConfig::default());

        Runtime::new(driver, hud).run().await.unwrap();
    }
}
