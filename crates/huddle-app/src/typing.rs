//! Remote typing indicator.

use huddle_core::{Membership, MemberId, SessionId, TypingStatus};

use crate::formatter::bounded_name;

/// Members currently composing a message.
///
/// # Invariants
///
/// - A member appears at most once.
/// - Members keep their insertion order, so the summary is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypingTracker {
    members: Vec<MemberId>,
}

impl TypingTracker {
    /// Empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a published typing attribute.
    ///
    /// `origin` is the identifier the update came from. Updates from the
    /// session itself are lobby-wide data, not a member's attribute, and are
    /// ignored. Returns `true` if the set changed.
    pub fn on_typing_state_published(
        &mut self,
        session: SessionId,
        origin: MemberId,
        status: TypingStatus,
    ) -> bool {
        if origin == session.as_member() {
            return false;
        }

        let position = self.members.iter().position(|&m| m == origin);
        match (status, position) {
            (TypingStatus::Typing, None) => {
                self.members.push(origin);
                true
            },
            (TypingStatus::Idle, Some(index)) => {
                self.members.remove(index);
                true
            },
            _ => false,
        }
    }

    /// Drop a member that left the session. Returns `true` if it was present.
    pub fn remove(&mut self, member: MemberId) -> bool {
        let before = self.members.len();
        self.members.retain(|&m| m != member);
        self.members.len() != before
    }

    /// Drop everyone.
    pub fn clear(&mut self) {
        self.members.clear();
    }

    /// Members in insertion order.
    pub fn members(&self) -> &[MemberId] {
        &self.members
    }

    /// Number of members typing.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Nobody typing.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Summary line, e.g. `"Alice, Bob typing..."` or `"5 people typing..."`.
    ///
    /// Up to `max_named` members are listed by name; names are resolved
    /// now, and members whose name cannot be resolved are skipped. Returns
    /// `None` when there is nothing to draw.
    pub fn summary<M: Membership + ?Sized>(&self, membership: &M, max_named: usize) -> Option<String> {
        if self.members.is_empty() {
            return None;
        }

        if self.members.len() > max_named {
            return Some(format!("{} people typing...", self.members.len()));
        }

        let names: Vec<String> = self
            .members
            .iter()
            .filter_map(|&member| {
                let name = membership.persona_name(member);
                if name.is_none() {
                    tracing::debug!(%member, "skipping typing member without a name");
                }
                name.map(|n| bounded_name(&n))
            })
            .collect();

        if names.is_empty() {
            return None;
        }
        Some(format!("{} typing...", names.join(", ")))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    const LOBBY: SessionId = SessionId(100);

    struct Names(HashMap<MemberId, String>);

    impl Membership for Names {
        fn local_member(&self) -> MemberId {
            MemberId(0)
        }

        fn persona_name(&self, member: MemberId) -> Option<String> {
            self.0.get(&member).cloned()
        }

        fn member_data(&self, _: SessionId, _: MemberId, _: &str) -> Option<String> {
            None
        }

        fn chat_entry(&self, _: SessionId, _: u32) -> Option<String> {
            None
        }
    }

    fn names(entries: &[(u64, &str)]) -> Names {
        Names(entries.iter().map(|&(id, name)| (MemberId(id), name.to_owned())).collect())
    }

    fn typing(tracker: &mut TypingTracker, ids: &[u64]) {
        for &id in ids {
            tracker.on_typing_state_published(LOBBY, MemberId(id), TypingStatus::Typing);
        }
    }

    #[test]
    fn empty_set_draws_nothing() {
        let tracker = TypingTracker::new();
        assert_eq!(tracker.summary(&names(&[]), 3), None);
    }

    #[test]
    fn three_members_are_named() {
        let mut tracker = TypingTracker::new();
        typing(&mut tracker, &[1, 2, 3]);

        let summary = tracker.summary(&names(&[(1, "A"), (2, "B"), (3, "C")]), 3);
        assert_eq!(summary.as_deref(), Some("A, B, C typing..."));
    }

    #[test]
    fn single_member_has_no_separator() {
        let mut tracker = TypingTracker::new();
        typing(&mut tracker, &[1]);

        assert_eq!(tracker.summary(&names(&[(1, "A")]), 3).as_deref(), Some("A typing..."));
    }

    #[test]
    fn more_than_three_members_are_counted() {
        let mut tracker = TypingTracker::new();
        typing(&mut tracker, &[1, 2, 3, 4, 5]);

        assert_eq!(tracker.summary(&names(&[]), 3).as_deref(), Some("5 people typing..."));
    }

    #[test]
    fn unresolved_names_are_skipped() {
        let mut tracker = TypingTracker::new();
        typing(&mut tracker, &[1, 2, 3]);

        let summary = tracker.summary(&names(&[(1, "A"), (3, "C")]), 3);
        assert_eq!(summary.as_deref(), Some("A, C typing..."));
        assert_eq!(tracker.summary(&names(&[]), 3), None);
    }

    #[test]
    fn duplicate_and_stale_updates_are_noops() {
        let mut tracker = TypingTracker::new();

        assert!(tracker.on_typing_state_published(LOBBY, MemberId(1), TypingStatus::Typing));
        assert!(!tracker.on_typing_state_published(LOBBY, MemberId(1), TypingStatus::Typing));
        assert!(!tracker.on_typing_state_published(LOBBY, MemberId(2), TypingStatus::Idle));
        assert_eq!(tracker.members(), &[MemberId(1)]);
    }

    #[test]
    fn removal_preserves_order() {
        let mut tracker = TypingTracker::new();
        typing(&mut tracker, &[1, 2, 3]);

        tracker.on_typing_state_published(LOBBY, MemberId(1), TypingStatus::Idle);
        assert_eq!(tracker.members(), &[MemberId(2), MemberId(3)]);
    }

    #[test]
    fn lobby_wide_updates_are_ignored() {
        let mut tracker = TypingTracker::new();
        assert!(!tracker.on_typing_state_published(LOBBY, LOBBY.as_member(), TypingStatus::Typing));
        assert!(tracker.is_empty());
    }
}
