//! Core contracts for the Huddle HUD chat.
//!
//! Everything the HUD needs from its host is expressed here as a trait or a
//! plain value type, so the state machines in `huddle-app` can run against
//! the real platform or against the in-memory doubles in `huddle-harness`.
//!
//! # Components
//!
//! - [`Membership`]: lobby membership service (names, member data, chat log)
//! - [`Localizer`]: symbolic `#` key lookup
//! - [`text`]: substitution, newline conversion, colour markup, bounded text
//! - [`HudConfig`]: externally configured switches

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod filter;
mod ids;
mod localize;
mod membership;
pub mod text;

pub use config::HudConfig;
pub use filter::ChatFilter;
pub use ids::{MemberId, SessionId};
pub use localize::{Localizer, MAX_LOOKUP_DEPTH, is_symbolic, resolve};
pub use membership::{
    MemberStateChange, Membership, TYPING_KEY, TYPING_NO, TYPING_YES, TypingStatus,
};
