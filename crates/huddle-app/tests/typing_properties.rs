//! Property-based tests for the typing tracker.

use std::collections::HashMap;

use huddle_app::{NAME_CAPACITY, TypingTracker};
use huddle_core::{MemberId, Membership, SessionId, TypingStatus};
use proptest::prelude::*;

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

/// Generate typing updates over a small id space so members repeat.
fn updates() -> impl Strategy<Value = Vec<(u64, bool)>> {
    prop::collection::vec((0u64..8, any::<bool>()), 0..100)
}

proptest! {
    #[test]
    fn set_holds_members_whose_latest_status_is_typing(updates in updates()) {
        let mut tracker = TypingTracker::new();
        let mut latest = HashMap::new();

        for (id, typing) in updates {
            tracker.on_typing_state_published(LOBBY, MemberId(id), TypingStatus::from(typing));
            latest.insert(id, typing);

            let mut members = tracker.members().to_vec();
            members.sort();
            members.dedup();
            prop_assert_eq!(members.len(), tracker.len());

            let typing_now = latest.values().filter(|&&t| t).count();
            prop_assert_eq!(tracker.len(), typing_now);
        }
    }

    #[test]
    fn change_flag_reports_membership_changes(updates in updates()) {
        let mut tracker = TypingTracker::new();

        for (id, typing) in updates {
            let before = tracker.clone();
            let changed = tracker.on_typing_state_published(LOBBY, MemberId(id), TypingStatus::from(typing));
            prop_assert_eq!(changed, before != tracker);
        }
    }

    #[test]
    fn named_summary_entries_are_bounded(names in prop::collection::vec("\\PC{0,60}", 1..=3)) {
        let mut tracker = TypingTracker::new();
        let mut table = HashMap::new();
        for (i, name) in names.iter().enumerate() {
            let member = MemberId(i as u64 + 1);
            table.insert(member, name.clone());
            tracker.on_typing_state_published(LOBBY, member, TypingStatus::Typing);
        }

        let summary = tracker.summary(&Names(table), 3).unwrap_or_default();
        let listed = summary.strip_suffix(" typing...").unwrap_or_default();
        let budget = names.len() * NAME_CAPACITY + (names.len() - 1) * 2;
        prop_assert!(listed.len() <= budget);
    }
}
