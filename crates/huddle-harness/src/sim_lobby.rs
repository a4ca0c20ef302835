//! In-memory lobby service.
//!
//! `SimLobby` implements [`Membership`] over shared state, so a test (or the
//! CLI's scripted bots) can keep a handle and mutate the lobby while the
//! [`huddle_app::Hud`] owns another handle and reads from it. Each mutator
//! returns the platform callback the real service would deliver.

#![allow(clippy::disallowed_types, reason = "Synchronous locking operations only")]

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use huddle_app::HudEvent;
use huddle_core::{MemberId, MemberStateChange, Membership, SessionId, TYPING_KEY, TypingStatus};

#[derive(Debug, Default)]
struct LobbyState {
    names: HashMap<MemberId, String>,
    data: HashMap<(SessionId, MemberId, String), String>,
    chat: HashMap<SessionId, Vec<String>>,
}

/// Shared in-memory lobby.
///
/// Clones share state.
#[derive(Debug, Clone)]
pub struct SimLobby {
    local: MemberId,
    state: Arc<Mutex<LobbyState>>,
}

impl SimLobby {
    /// Lobby service seen from `local`, whose name is `local_name`.
    pub fn new(local: MemberId, local_name: &str) -> Self {
        let lobby = Self { local, state: Arc::new(Mutex::new(LobbyState::default())) };
        lobby.add_member(local, local_name);
        lobby
    }

    fn lock(&self) -> MutexGuard<'_, LobbyState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Make a persona name resolvable.
    pub fn add_member(&self, member: MemberId, name: &str) {
        self.lock().names.insert(member, name.to_owned());
    }

    /// Make a persona name unresolvable.
    pub fn forget_name(&self, member: MemberId) {
        self.lock().names.remove(&member);
    }

    /// Store a raw member data value without delivering a callback.
    pub fn set_member_data(&self, session: SessionId, member: MemberId, key: &str, value: &str) {
        self.lock().data.insert((session, member, key.to_owned()), value.to_owned());
    }

    /// `member` publishes a typing attribute.
    pub fn set_typing(&self, session: SessionId, member: MemberId, status: TypingStatus) -> HudEvent {
        self.set_member_data(session, member, TYPING_KEY, status.as_attribute());
        HudEvent::LobbyDataUpdated { session, member, success: true }
    }

    /// `member` enters `session` under `name`.
    pub fn join(&self, session: SessionId, member: MemberId, name: &str) -> HudEvent {
        self.add_member(member, name);
        HudEvent::LobbyChatUpdate { session, member, change: MemberStateChange::ENTERED }
    }

    /// `member` leaves `session`. Their member data goes with them.
    pub fn leave(&self, session: SessionId, member: MemberId, change: MemberStateChange) -> HudEvent {
        self.lock().data.retain(|(s, m, _), _| !(*s == session && *m == member));
        HudEvent::LobbyChatUpdate { session, member, change }
    }

    /// `sender` posts `text` to the lobby chat log.
    pub fn post_chat(&self, session: SessionId, sender: MemberId, text: &str) -> HudEvent {
        let mut state = self.lock();
        let log = state.chat.entry(session).or_default();
        log.push(text.to_owned());
        let chat_id = (log.len() - 1) as u32;
        HudEvent::LobbyChatMessage { session, sender, chat_id }
    }

    /// Number of entries in a lobby's chat log.
    pub fn chat_len(&self, session: SessionId) -> usize {
        self.lock().chat.get(&session).map_or(0, Vec::len)
    }
}

impl Membership for SimLobby {
    fn local_member(&self) -> MemberId {
        self.local
    }

    fn persona_name(&self, member: MemberId) -> Option<String> {
        self.lock().names.get(&member).cloned()
    }

    fn member_data(&self, session: SessionId, member: MemberId, key: &str) -> Option<String> {
        self.lock().data.get(&(session, member, key.to_owned())).cloned()
    }

    fn chat_entry(&self, session: SessionId, chat_id: u32) -> Option<String> {
        self.lock().chat.get(&session)?.get(chat_id as usize).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOBBY: SessionId = SessionId(100);

    #[test]
    fn clones_share_state() {
        let lobby = SimLobby::new(MemberId(1), "me");
        let other = lobby.clone();
        other.add_member(MemberId(2), "Alice");

        assert_eq!(lobby.persona_name(MemberId(2)).as_deref(), Some("Alice"));
        assert_eq!(lobby.persona_name(MemberId(1)).as_deref(), Some("me"));
    }

    #[test]
    fn typing_writes_attribute_and_reports_update() {
        let lobby = SimLobby::new(MemberId(1), "me");
        let event = lobby.set_typing(LOBBY, MemberId(2), TypingStatus::Typing);

        assert_eq!(event, HudEvent::LobbyDataUpdated { session: LOBBY, member: MemberId(2), success: true });
        assert_eq!(lobby.member_data(LOBBY, MemberId(2), TYPING_KEY).as_deref(), Some("y"));
    }

    #[test]
    fn chat_ids_index_the_log() {
        let lobby = SimLobby::new(MemberId(1), "me");
        let _ = lobby.post_chat(LOBBY, MemberId(2), "first");
        let event = lobby.post_chat(LOBBY, MemberId(2), "second");

        assert_eq!(event, HudEvent::LobbyChatMessage { session: LOBBY, sender: MemberId(2), chat_id: 1 });
        assert_eq!(lobby.chat_entry(LOBBY, 1).as_deref(), Some("second"));
        assert_eq!(lobby.chat_entry(LOBBY, 2), None);
    }

    #[test]
    fn leaving_drops_member_data() {
        let lobby = SimLobby::new(MemberId(1), "me");
        let _ = lobby.set_typing(LOBBY, MemberId(2), TypingStatus::Typing);
        let _ = lobby.leave(LOBBY, MemberId(2), MemberStateChange::LEFT);

        assert_eq!(lobby.member_data(LOBBY, MemberId(2), TYPING_KEY), None);
    }
}
