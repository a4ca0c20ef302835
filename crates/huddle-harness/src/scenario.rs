//! Seeded lobby traffic.
//!
//! A [`Scenario`] plays a small lobby: remote members come and go, type,
//! post to the lobby chat log, and the server sends chat and system user
//! messages while the local member opens and closes the chat input. Each
//! step mutates the shared [`SimLobby`] first and then yields the callback
//! the platform would deliver, so the HUD always reads the state the event
//! describes. The same seed always yields the same traffic.

use huddle_app::{HudEvent, MessageMode};
use huddle_core::{MemberId, MemberStateChange, SessionId, TypingStatus};
use huddle_proto::{Destination, SayText2, TextMsg, UserMessage};
use rand::{Rng, SeedableRng, seq::SliceRandom};
use rand_chacha::ChaCha8Rng;

use crate::SimLobby;

const LINES: &[&str] = &["gg", "nice run", "anyone up for bhop_monster?", "brb", "wr pace!"];

const SYSTEM_TEMPLATES: &[&str] = &["#Game_connected", "#Game_disconnected", "#Game_over"];

/// Shape of a generated scenario.
#[derive(Debug, Clone)]
pub struct ScenarioConfig {
    /// Lobby the scenario plays in.
    pub session: SessionId,
    /// Remote members that may join, in roster order.
    pub roster: Vec<(MemberId, String)>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        let roster = ["Alice", "Bob", "Carol", "Dave", "Erin"]
            .iter()
            .enumerate()
            .map(|(i, name)| (MemberId(0x0110_0001_0000_0010 + i as u64), (*name).to_owned()))
            .collect();
        Self { session: SessionId(0x0186_0000_0000_0001), roster }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct RemoteState {
    present: bool,
    typing: bool,
}

/// Seeded generator of lobby traffic.
pub struct Scenario {
    rng: ChaCha8Rng,
    lobby: SimLobby,
    config: ScenarioConfig,
    remotes: Vec<RemoteState>,
    entered: bool,
    input_open: bool,
    has_text: bool,
}

impl Scenario {
    /// Scenario playing into `lobby`.
    pub fn new(seed: u64, lobby: SimLobby, config: ScenarioConfig) -> Self {
        let remotes = vec![RemoteState::default(); config.roster.len()];
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            lobby,
            config,
            remotes,
            entered: false,
            input_open: false,
            has_text: false,
        }
    }

    /// Lobby the scenario plays in.
    pub fn session(&self) -> SessionId {
        self.config.session
    }

    /// Produce the next event.
    pub fn next_event(&mut self) -> HudEvent {
        let session = self.config.session;
        if !self.entered {
            self.entered = true;
            return HudEvent::LobbyEntered { session, success: true };
        }

        match self.rng.gen_range(0..10) {
            0 | 1 => self.roster_change(),
            2 | 3 => self.remote_typing(),
            4 => self.remote_chat(),
            5..=7 => self.local_input(),
            8 => self.server_chat(),
            _ => self.system_message(),
        }
    }

    fn pick_member(&mut self, present: bool) -> Option<usize> {
        let candidates: Vec<usize> =
            (0..self.remotes.len()).filter(|&i| self.remotes[i].present == present).collect();
        candidates.choose(&mut self.rng).copied()
    }

    fn roster_change(&mut self) -> HudEvent {
        let session = self.config.session;
        let joining = self.rng.gen_bool(0.5);
        match (self.pick_member(!joining), joining) {
            (Some(index), true) => {
                self.remotes[index].present = true;
                let (member, name) = &self.config.roster[index];
                self.lobby.join(session, *member, name)
            },
            (Some(index), false) => {
                self.remotes[index] = RemoteState::default();
                let change = if self.rng.gen_bool(0.8) {
                    MemberStateChange::LEFT
                } else {
                    MemberStateChange::DISCONNECTED
                };
                self.lobby.leave(session, self.config.roster[index].0, change)
            },
            (None, _) => self.local_input(),
        }
    }

    fn remote_typing(&mut self) -> HudEvent {
        let Some(index) = self.pick_member(true) else {
            return self.roster_change();
        };
        let remote = &mut self.remotes[index];
        remote.typing = !remote.typing;
        let status = TypingStatus::from(remote.typing);
        self.lobby.set_typing(self.config.session, self.config.roster[index].0, status)
    }

    fn remote_chat(&mut self) -> HudEvent {
        let Some(index) = self.pick_member(true) else {
            return self.roster_change();
        };
        let line = LINES.choose(&mut self.rng).copied().unwrap_or_default();
        self.lobby.post_chat(self.config.session, self.config.roster[index].0, line)
    }

    fn local_input(&mut self) -> HudEvent {
        if !self.input_open {
            self.input_open = true;
            self.has_text = false;
            let mode = if self.rng.gen_bool(0.8) { MessageMode::Say } else { MessageMode::SayTeam };
            return HudEvent::StartMessageMode { mode };
        }
        if self.rng.gen_bool(0.2) {
            self.input_open = false;
            return HudEvent::StopMessageMode;
        }
        if self.rng.gen_bool(0.5) {
            self.has_text = !self.has_text;
        }
        HudEvent::Think { has_text: self.has_text }
    }

    fn server_chat(&mut self) -> HudEvent {
        let Some(index) = self.pick_member(true) else {
            return self.local_input();
        };
        let name = self.config.roster[index].1.clone();
        let text = LINES.choose(&mut self.rng).copied().unwrap_or_default().to_owned();
        let template = if self.rng.gen_bool(0.8) { "#Chat_All" } else { "#Chat_Team" };
        let message = UserMessage::SayText2(SayText2 {
            client: index as u8 + 1,
            wants_to_chat: true,
            template: template.to_owned(),
            name,
            text,
            extras: [String::new(), String::new()],
        });
        user_message_event(&message)
    }

    fn system_message(&mut self) -> HudEvent {
        let destination = *[Destination::Notify, Destination::Console, Destination::Talk, Destination::Center]
            .choose(&mut self.rng)
            .unwrap_or(&Destination::Console);
        let template = SYSTEM_TEMPLATES.choose(&mut self.rng).copied().unwrap_or_default();
        let name = self
            .config
            .roster
            .choose(&mut self.rng)
            .map(|(_, name)| name.clone())
            .unwrap_or_default();
        let message = UserMessage::TextMsg(TextMsg {
            destination,
            template: template.to_owned(),
            args: [name, "timed out".to_owned(), String::new(), String::new()],
        });
        user_message_event(&message)
    }
}

/// Wrap a user message the way the engine delivers it.
///
/// A message the encoder refuses is delivered with an empty payload, which
/// decodes to a message with empty fields.
pub fn user_message_event(message: &UserMessage) -> HudEvent {
    let payload = message.to_bytes().unwrap_or_else(|e| {
        tracing::warn!(kind = %message.kind(), error = %e, "scenario built an unencodable message");
        Vec::new()
    });
    HudEvent::UserMessage { name: message.kind().name().to_owned(), payload }
}
