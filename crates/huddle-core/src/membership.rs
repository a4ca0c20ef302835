//! Lobby membership service contract.
//!
//! Read-only view of the platform lobby. Writes (publishing the local typing
//! attribute) are not part of this trait; the HUD emits them as actions for
//! the driver to perform.

use crate::{MemberId, SessionId};

/// Member data key carrying the typing attribute.
pub const TYPING_KEY: &str = "isTyping";

/// Typing attribute value while composing.
pub const TYPING_YES: &str = "y";

/// Typing attribute value while idle.
pub const TYPING_NO: &str = "n";

/// Published typing attribute of a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypingStatus {
    /// Composing a message.
    Typing,
    /// Not composing.
    Idle,
}

impl TypingStatus {
    /// Parse an attribute value. Unknown values yield `None`.
    pub fn from_attribute(value: &str) -> Option<Self> {
        match value {
            TYPING_YES => Some(Self::Typing),
            TYPING_NO => Some(Self::Idle),
            _ => None,
        }
    }

    /// Attribute value to publish.
    pub fn as_attribute(self) -> &'static str {
        match self {
            Self::Typing => TYPING_YES,
            Self::Idle => TYPING_NO,
        }
    }

    /// Typing as a flag.
    pub fn is_typing(self) -> bool {
        matches!(self, Self::Typing)
    }
}

impl From<bool> for TypingStatus {
    fn from(typing: bool) -> Self {
        if typing { Self::Typing } else { Self::Idle }
    }
}

/// Membership change bits reported with a lobby chat update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MemberStateChange(u32);

impl MemberStateChange {
    /// Member entered the lobby.
    pub const ENTERED: Self = Self(0x01);
    /// Member left the lobby.
    pub const LEFT: Self = Self(0x02);
    /// Member dropped without leaving.
    pub const DISCONNECTED: Self = Self(0x04);
    /// Member was kicked.
    pub const KICKED: Self = Self(0x08);
    /// Member was banned.
    pub const BANNED: Self = Self(0x10);

    /// Build from raw platform bits.
    pub fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Raw bits.
    pub fn bits(self) -> u32 {
        self.0
    }

    /// Any bit of `other` is set in `self`.
    pub fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Member entered.
    pub fn entered(self) -> bool {
        self.intersects(Self::ENTERED)
    }

    /// Member is no longer in the lobby, for any reason.
    pub fn departed(self) -> bool {
        self.intersects(Self::LEFT | Self::DISCONNECTED | Self::KICKED | Self::BANNED)
    }
}

impl std::ops::BitOr for MemberStateChange {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Read access to the platform lobby service.
///
/// Calls are synchronous and best effort: a `None` means the platform had
/// nothing to report and the caller degrades gracefully.
pub trait Membership {
    /// The local member.
    fn local_member(&self) -> MemberId;

    /// Display name of a member. `None` if the platform cannot resolve it.
    fn persona_name(&self, member: MemberId) -> Option<String>;

    /// Member data value for `key` as published by `member` in `session`.
    fn member_data(&self, session: SessionId, member: MemberId, key: &str) -> Option<String>;

    /// Text of lobby chat entry `chat_id`. `None` if it is gone.
    fn chat_entry(&self, session: SessionId, chat_id: u32) -> Option<String>;
}

impl<M: Membership + ?Sized> Membership for &M {
    fn local_member(&self) -> MemberId {
        (**self).local_member()
    }

    fn persona_name(&self, member: MemberId) -> Option<String> {
        (**self).persona_name(member)
    }

    fn member_data(&self, session: SessionId, member: MemberId, key: &str) -> Option<String> {
        (**self).member_data(session, member, key)
    }

    fn chat_entry(&self, session: SessionId, chat_id: u32) -> Option<String> {
        (**self).chat_entry(session, chat_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_attribute_parses_only_known_values() {
        assert_eq!(TypingStatus::from_attribute("y"), Some(TypingStatus::Typing));
        assert_eq!(TypingStatus::from_attribute("n"), Some(TypingStatus::Idle));
        assert_eq!(TypingStatus::from_attribute(""), None);
        assert_eq!(TypingStatus::from_attribute("yes"), None);
    }

    #[test]
    fn kick_and_ban_count_as_departure() {
        assert!(MemberStateChange::KICKED.departed());
        assert!(MemberStateChange::BANNED.departed());
        assert!(MemberStateChange::DISCONNECTED.departed());
        assert!(!MemberStateChange::ENTERED.departed());
        assert!(MemberStateChange::from_bits(0x03).entered());
    }
}
