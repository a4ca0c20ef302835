//! Chat pane category filters.

use std::ops::{BitOr, BitOrAssign};

use serde::{Deserialize, Serialize};

/// Category bits attached to a chat pane line.
///
/// The chat pane hides lines whose category the player filtered out. Lines
/// with no category ([`ChatFilter::NONE`]) are always shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ChatFilter(u32);

impl ChatFilter {
    /// No category.
    pub const NONE: Self = Self(0);
    /// Player joined or left.
    pub const JOINLEAVE: Self = Self(0x01);
    /// Player changed name.
    pub const NAMECHANGE: Self = Self(0x02);
    /// Public chat.
    pub const PUBLICCHAT: Self = Self(0x04);
    /// Server message.
    pub const SERVERMSG: Self = Self(0x08);
    /// Team change.
    pub const TEAMCHANGE: Self = Self(0x10);
    /// Achievement announcement.
    pub const ACHIEVEMENT: Self = Self(0x20);

    /// Raw bits.
    pub fn bits(self) -> u32 {
        self.0
    }

    /// All bits of `other` are set in `self`.
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// No bits set.
    pub fn is_none(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for ChatFilter {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for ChatFilter {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combined_filters_contain_their_parts() {
        let filter = ChatFilter::JOINLEAVE | ChatFilter::SERVERMSG;
        assert_eq!(filter.bits(), 0x09);
        assert!(filter.contains(ChatFilter::JOINLEAVE));
        assert!(filter.contains(ChatFilter::SERVERMSG));
        assert!(!filter.contains(ChatFilter::PUBLICCHAT));
        assert!(ChatFilter::NONE.is_none());
    }
}
