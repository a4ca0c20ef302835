//! HUD chat state machine.
//!
//! This module defines the [`Hud`] state machine, which owns the chat
//! element's state completely decoupled from the engine and the platform.
//!
//! This is a pure state machine: it consumes [`crate::HudEvent`] inputs and
//! produces [`crate::HudAction`] instructions for the runtime to execute.
//! Collaborators are injected at construction and only read from.
//!
//! # Responsibilities
//!
//! - Tracks the joined lobby and which members are typing.
//! - Publishes the local typing attribute on composition changes.
//! - Formats user messages and lobby chat into display lines.
//! - Hosts the settings dialog and the configuration it edits.

use huddle_core::{
    HudConfig, Localizer, MemberId, MemberStateChange, Membership, SessionId, TYPING_KEY,
    TypingStatus,
};
use huddle_proto::{MessageKind, UserMessage};

use crate::{
    ChatFormatter, HudAction, HudEvent, HudView, SessionContext, SettingsDialog, SettingsPage,
    SettingsView, TypingTracker, UNKNOWN_NAME,
};

/// HUD chat state machine.
///
/// Generic over the membership and localisation collaborators so production
/// and simulation share the same code.
#[derive(Debug, Clone)]
pub struct Hud<M, L> {
    membership: M,
    formatter: ChatFormatter<L>,
    config: HudConfig,
    session: SessionContext,
    typing: TypingTracker,
    settings: SettingsDialog,
}

impl<M: Membership, L: Localizer> Hud<M, L> {
    /// Create a HUD that is not in a session.
    pub fn new(membership: M, localizer: L, config: HudConfig) -> Self {
        let session = SessionContext::new(membership.local_member());
        Self {
            membership,
            formatter: ChatFormatter::new(localizer),
            config,
            session,
            typing: TypingTracker::new(),
            settings: SettingsDialog::new(),
        }
    }

    /// Process an event and return actions.
    pub fn handle(&mut self, event: HudEvent) -> Vec<HudAction> {
        match event {
            HudEvent::Think { has_text } => self.think(has_text),
            HudEvent::StartMessageMode { mode } => {
                self.session.start_message_mode(mode);
                vec![HudAction::Render]
            },
            HudEvent::StopMessageMode => {
                let mut actions: Vec<HudAction> = self
                    .session
                    .stop_message_mode()
                    .map(|(session, status)| HudAction::PublishTyping { session, status })
                    .into_iter()
                    .collect();
                actions.push(HudAction::Render);
                actions
            },
            HudEvent::LobbyEntered { session, success } => {
                if !success {
                    tracing::debug!(%session, "lobby enter refused");
                    return vec![];
                }
                self.typing.clear();
                self.session.enter(session);
                vec![HudAction::Render]
            },
            HudEvent::LobbyChatUpdate { session: _, member, change } => {
                self.membership_changed(member, change)
            },
            HudEvent::LobbyDataUpdated { session, member, success } => {
                self.lobby_data_updated(session, member, success)
            },
            HudEvent::LobbyChatMessage { session, sender, chat_id } => {
                self.lobby_message(session, sender, chat_id)
            },
            HudEvent::LobbyKicked { session } => {
                tracing::info!(%session, "kicked from lobby");
                self.leave_session();
                vec![HudAction::Render]
            },
            HudEvent::UserMessage { name, payload } => self.user_message(&name, &payload),
            HudEvent::Settings(command) => self.settings.handle(command, &mut self.config),
            HudEvent::Shutdown => vec![HudAction::Quit],
        }
    }

    fn think(&mut self, has_text: bool) -> Vec<HudAction> {
        self.session
            .on_local_composition_changed(has_text, self.config.legacy_typing_latch)
            .map(|(session, status)| HudAction::PublishTyping { session, status })
            .into_iter()
            .collect()
    }

    fn leave_session(&mut self) {
        self.session.leave();
        self.typing.clear();
    }

    fn member_name(&self, member: MemberId) -> String {
        self.membership.persona_name(member).unwrap_or_else(|| UNKNOWN_NAME.to_owned())
    }

    fn membership_changed(&mut self, member: MemberId, change: MemberStateChange) -> Vec<HudAction> {
        if change.departed() && member == self.session.local() {
            tracing::info!(session = ?self.session.session(), "left lobby");
            self.leave_session();
            return vec![HudAction::Render];
        }

        let name = self.member_name(member);
        let mut actions = Vec::new();
        if change.entered() {
            actions.push(self.formatter.member_joined(&name));
        }
        if change.departed() {
            self.typing.remove(member);
            actions.push(self.formatter.member_left(&name));
            actions.push(HudAction::Render);
        }
        actions
    }

    fn lobby_data_updated(
        &mut self,
        session: SessionId,
        member: MemberId,
        success: bool,
    ) -> Vec<HudAction> {
        if !success {
            return vec![];
        }
        let Some(current) = self.session.session() else {
            return vec![];
        };
        if current != session {
            tracing::debug!(%session, %current, "data update for another lobby");
            return vec![];
        }
        if member == session.as_member() {
            return vec![];
        }
        if member == self.session.local() {
            tracing::debug!(%session, "ignoring own typing echo");
            return vec![];
        }

        let Some(status) = self
            .membership
            .member_data(current, member, TYPING_KEY)
            .as_deref()
            .and_then(TypingStatus::from_attribute)
        else {
            return vec![];
        };

        if self.typing.on_typing_state_published(current, member, status) {
            vec![HudAction::Render]
        } else {
            vec![]
        }
    }

    fn lobby_message(&mut self, session: SessionId, sender: MemberId, chat_id: u32) -> Vec<HudAction> {
        if sender == self.session.local() {
            tracing::debug!(chat_id, "ignoring own lobby message");
            return vec![];
        }

        let Some(text) = self.membership.chat_entry(session, chat_id) else {
            tracing::debug!(%session, chat_id, "lobby chat entry unavailable");
            return vec![];
        };
        let name = self.member_name(sender);
        vec![self.formatter.lobby_chat(&name, &text)]
    }

    fn user_message(&mut self, name: &str, payload: &[u8]) -> Vec<HudAction> {
        let message = match MessageKind::from_name(name)
            .and_then(|kind| UserMessage::decode(kind, payload))
        {
            Ok(message) => message,
            Err(e) => {
                tracing::warn!(kind = name, error = %e, "dropping user message");
                return vec![];
            },
        };

        match message {
            UserMessage::SayText(m) => vec![self.formatter.plain_chat(&m)],
            UserMessage::SayText2(m) => self.formatter.templated_chat(&m),
            UserMessage::TextMsg(m) => self
                .formatter
                .system_message(&m, self.config.show_text_messages)
                .into_iter()
                .collect(),
        }
    }

    /// Typing indicator line, if it should be drawn.
    ///
    /// Only drawn while the chat input is open.
    pub fn typing_summary(&self) -> Option<String> {
        if self.session.message_mode().is_none() {
            return None;
        }
        self.typing.summary(&self.membership, self.config.max_named_typists)
    }

    /// Snapshot for rendering.
    pub fn view(&self) -> HudView {
        let settings = self.settings.is_visible().then(|| SettingsView {
            tabs: SettingsPage::ALL
                .iter()
                .map(|&page| (page, self.formatter.resolve(page.title_key())))
                .collect(),
            active: self.settings.active_page(),
        });

        HudView {
            session: self.session.session(),
            message_mode: self.session.message_mode(),
            typing_summary: self.typing_summary(),
            settings,
        }
    }

    /// Session context.
    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    /// Remote typing members.
    pub fn typing(&self) -> &TypingTracker {
        &self.typing
    }

    /// Settings dialog.
    pub fn settings(&self) -> &SettingsDialog {
        &self.settings
    }

    /// Configuration in effect.
    pub fn config(&self) -> &HudConfig {
        &self.config
    }

    /// Membership collaborator.
    pub fn membership(&self) -> &M {
        &self.membership
    }

    /// Mutable membership collaborator, for doubles driven by the host.
    pub fn membership_mut(&mut self) -> &mut M {
        &mut self.membership
    }
}
