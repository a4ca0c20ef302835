//! Local session context.
//!
//! Tracks which lobby the local member is in, whether the chat input is open,
//! and the last typing state published for the local member.

use huddle_core::{MemberId, SessionId, TypingStatus};

use crate::MessageMode;

/// Local view of the current session.
///
/// # Invariants
///
/// - No typing state is published while `session` is `None`.
/// - `typing` is cleared whenever message mode closes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    /// Joined lobby. `None` if not in one.
    session: Option<SessionId>,
    /// The local member.
    local: MemberId,
    /// Chat input open, and in which mode.
    message_mode: Option<MessageMode>,
    /// Last published typing state was "typing".
    typing: bool,
}

impl SessionContext {
    /// Context for `local`, not in a session.
    pub fn new(local: MemberId) -> Self {
        Self { session: None, local, message_mode: None, typing: false }
    }

    /// Record a successful enter.
    pub fn enter(&mut self, session: SessionId) {
        self.session = Some(session);
    }

    /// Forget the session. Returns the session that was left.
    pub fn leave(&mut self) -> Option<SessionId> {
        self.typing = false;
        self.session.take()
    }

    /// Chat input opened.
    pub fn start_message_mode(&mut self, mode: MessageMode) {
        self.message_mode = Some(mode);
    }

    /// Chat input closed.
    ///
    /// Returns the idle publication to make if a session exists. Nobody can
    /// be typing with the input closed, so the flag drops unconditionally.
    pub fn stop_message_mode(&mut self) -> Option<(SessionId, TypingStatus)> {
        self.message_mode = None;
        self.typing = false;
        self.session.map(|session| (session, TypingStatus::Idle))
    }

    /// Per-tick composition state while the input is open.
    ///
    /// Publishes on the no-text to text transition and back, never twice for
    /// the same state. With `legacy_latch` the idle transition leaves the
    /// flag raised, reproducing the stock client: idle is then republished on
    /// every tick and typing is never published again until message mode
    /// closes.
    pub fn on_local_composition_changed(
        &mut self,
        has_text: bool,
        legacy_latch: bool,
    ) -> Option<(SessionId, TypingStatus)> {
        let session = self.session?;
        if self.message_mode.is_none() {
            return None;
        }

        match (has_text, self.typing) {
            (true, false) => {
                self.typing = true;
                Some((session, TypingStatus::Typing))
            },
            (false, true) => {
                self.typing = legacy_latch;
                Some((session, TypingStatus::Idle))
            },
            _ => None,
        }
    }

    /// Joined lobby. `None` if not in one.
    pub fn session(&self) -> Option<SessionId> {
        self.session
    }

    /// The local member.
    pub fn local(&self) -> MemberId {
        self.local
    }

    /// Open chat input. `None` if closed.
    pub fn message_mode(&self) -> Option<MessageMode> {
        self.message_mode
    }

    /// Last published typing state was "typing".
    pub fn is_typing(&self) -> bool {
        self.typing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOBBY: SessionId = SessionId(0x0186_0000_0000_0001);

    fn typing_context() -> SessionContext {
        let mut ctx = SessionContext::new(MemberId(7));
        ctx.enter(LOBBY);
        ctx.start_message_mode(MessageMode::Say);
        ctx
    }

    #[test]
    fn publishes_each_transition_once() {
        let mut ctx = typing_context();

        assert_eq!(
            ctx.on_local_composition_changed(true, false),
            Some((LOBBY, TypingStatus::Typing))
        );
        assert_eq!(ctx.on_local_composition_changed(true, false), None);
        assert_eq!(
            ctx.on_local_composition_changed(false, false),
            Some((LOBBY, TypingStatus::Idle))
        );
        assert_eq!(ctx.on_local_composition_changed(false, false), None);
        assert_eq!(
            ctx.on_local_composition_changed(true, false),
            Some((LOBBY, TypingStatus::Typing))
        );
    }

    #[test]
    fn legacy_latch_repeats_idle_and_never_types_again() {
        let mut ctx = typing_context();

        assert!(ctx.on_local_composition_changed(true, true).is_some());
        assert_eq!(
            ctx.on_local_composition_changed(false, true),
            Some((LOBBY, TypingStatus::Idle))
        );
        assert_eq!(
            ctx.on_local_composition_changed(false, true),
            Some((LOBBY, TypingStatus::Idle))
        );
        assert_eq!(ctx.on_local_composition_changed(true, true), None);

        // Closing the input clears the latch
        assert_eq!(ctx.stop_message_mode(), Some((LOBBY, TypingStatus::Idle)));
        ctx.start_message_mode(MessageMode::Say);
        assert_eq!(
            ctx.on_local_composition_changed(true, true),
            Some((LOBBY, TypingStatus::Typing))
        );
    }

    #[test]
    fn nothing_published_without_session() {
        let mut ctx = SessionContext::new(MemberId(7));
        ctx.start_message_mode(MessageMode::Say);

        assert_eq!(ctx.on_local_composition_changed(true, false), None);
        assert_eq!(ctx.stop_message_mode(), None);
    }

    #[test]
    fn nothing_published_with_input_closed() {
        let mut ctx = SessionContext::new(MemberId(7));
        ctx.enter(LOBBY);

        assert_eq!(ctx.on_local_composition_changed(true, false), None);
    }
}
