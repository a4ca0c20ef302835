//! Platform identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// 64-bit platform identifier of a lobby member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MemberId(pub u64);

/// 64-bit platform identifier of a lobby.
///
/// Lobby and member identifiers share one namespace on the platform, which
/// is how a lobby-wide data update is told apart from a per-member one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SessionId(pub u64);

impl SessionId {
    /// The same raw identifier viewed as a member.
    pub fn as_member(self) -> MemberId {
        MemberId(self.0)
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}
