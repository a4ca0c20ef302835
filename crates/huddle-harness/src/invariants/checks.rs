//! Standard invariant checks.

use std::collections::HashSet;

use super::{HudSnapshot, Invariant, InvariantKind, InvariantResult, Violation};

/// A member appears in the typing set at most once.
pub struct TypingMembersUnique;

impl Invariant for TypingMembersUnique {
    fn kind(&self) -> InvariantKind {
        InvariantKind::TypingMembersUnique
    }

    fn check(&self, state: &HudSnapshot) -> InvariantResult {
        let mut seen = HashSet::new();
        for member in &state.typing {
            if !seen.insert(member) {
                return Err(Violation {
                    invariant: self.kind(),
                    message: format!("member {member} listed twice in {:?}", state.typing),
                });
            }
        }
        Ok(())
    }
}

/// Without a session nobody is typing, locally or remotely.
pub struct NoTypingWithoutSession;

impl Invariant for NoTypingWithoutSession {
    fn kind(&self) -> InvariantKind {
        InvariantKind::NoTypingWithoutSession
    }

    fn check(&self, state: &HudSnapshot) -> InvariantResult {
        if state.session.is_some() {
            return Ok(());
        }
        if !state.typing.is_empty() || state.local_typing {
            return Err(Violation {
                invariant: self.kind(),
                message: format!(
                    "no session but typing={:?} local_typing={}",
                    state.typing, state.local_typing
                ),
            });
        }
        Ok(())
    }
}

/// Lobby-wide data never registers the lobby itself as a typist.
pub struct SessionNotTracked;

impl Invariant for SessionNotTracked {
    fn kind(&self) -> InvariantKind {
        InvariantKind::SessionNotTracked
    }

    fn check(&self, state: &HudSnapshot) -> InvariantResult {
        let Some(session) = state.session else {
            return Ok(());
        };
        if state.typing.contains(&session.as_member()) {
            return Err(Violation {
                invariant: self.kind(),
                message: format!("session {session} tracked as typing"),
            });
        }
        Ok(())
    }
}

/// The local member's own typing echo never lists them as a typist.
pub struct LocalNotTracked;

impl Invariant for LocalNotTracked {
    fn kind(&self) -> InvariantKind {
        InvariantKind::LocalNotTracked
    }

    fn check(&self, state: &HudSnapshot) -> InvariantResult {
        match state.local {
            Some(local) if state.typing.contains(&local) => Err(Violation {
                invariant: self.kind(),
                message: format!("local member {local} tracked as typing"),
            }),
            _ => Ok(()),
        }
    }
}

/// The indicator is drawn only with the chat input open and someone typing,
/// and the local typing flag is only raised with the input open.
pub struct SummaryNeedsInput;

impl Invariant for SummaryNeedsInput {
    fn kind(&self) -> InvariantKind {
        InvariantKind::SummaryNeedsInput
    }

    fn check(&self, state: &HudSnapshot) -> InvariantResult {
        if let Some(summary) = &state.typing_summary {
            if !state.input_open || state.typing.is_empty() {
                return Err(Violation {
                    invariant: self.kind(),
                    message: format!(
                        "summary {summary:?} drawn with input_open={} typing={:?}",
                        state.input_open, state.typing
                    ),
                });
            }
        }
        if state.local_typing && !state.input_open {
            return Err(Violation {
                invariant: self.kind(),
                message: "local typing flag raised with the input closed".to_owned(),
            });
        }
        Ok(())
    }
}

/// The settings dialog is only shown once created.
pub struct SettingsVisibleOnlyWhenCreated;

impl Invariant for SettingsVisibleOnlyWhenCreated {
    fn kind(&self) -> InvariantKind {
        InvariantKind::SettingsVisibleOnlyWhenCreated
    }

    fn check(&self, state: &HudSnapshot) -> InvariantResult {
        if state.settings_visible && !state.settings_created {
            return Err(Violation {
                invariant: self.kind(),
                message: "settings dialog visible but never created".to_owned(),
            });
        }
        Ok(())
    }
}
