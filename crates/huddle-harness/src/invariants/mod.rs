//! HUD invariants checked after every simulated event.
//!
//! A [`HudSnapshot`] copies what the HUD exposes after an event; each
//! [`Invariant`] looks at that copy and reports a [`Violation`] when the
//! HUD is in a state no event sequence should reach.
//!
//! # Usage
//!
//! ```ignore
//! let registry = InvariantRegistry::standard();
//! let snapshot = HudSnapshot::from_hud(&hud);
//! registry.check_all(&snapshot)?;
//! ```

mod checks;
mod snapshot;

pub use checks::{
    LocalNotTracked, NoTypingWithoutSession, SessionNotTracked, SettingsVisibleOnlyWhenCreated,
    SummaryNeedsInput, TypingMembersUnique,
};
pub use snapshot::HudSnapshot;

/// Invariant check result.
pub type InvariantResult = Result<(), Violation>;

/// Identifies an invariant in violation reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvariantKind {
    /// See [`TypingMembersUnique`].
    TypingMembersUnique,
    /// See [`NoTypingWithoutSession`].
    NoTypingWithoutSession,
    /// See [`SessionNotTracked`].
    SessionNotTracked,
    /// See [`LocalNotTracked`].
    LocalNotTracked,
    /// See [`SummaryNeedsInput`].
    SummaryNeedsInput,
    /// See [`SettingsVisibleOnlyWhenCreated`].
    SettingsVisibleOnlyWhenCreated,
}

impl std::fmt::Display for InvariantKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

/// A failed check.
#[derive(Debug, Clone)]
pub struct Violation {
    /// Failing invariant.
    pub invariant: InvariantKind,
    /// Offending state, in words.
    pub message: String,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.invariant, self.message)
    }
}

impl std::error::Error for Violation {}

/// A property of every reachable HUD state.
pub trait Invariant: Send + Sync {
    /// Which invariant this is.
    fn kind(&self) -> InvariantKind;

    /// Inspect one snapshot.
    fn check(&self, state: &HudSnapshot) -> InvariantResult;
}

/// Ordered set of invariants run against each snapshot.
///
/// [`InvariantRegistry::standard()`] holds every HUD check.
pub struct InvariantRegistry {
    invariants: Vec<Box<dyn Invariant>>,
}

impl Default for InvariantRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl InvariantRegistry {
    /// No checks.
    pub fn new() -> Self {
        Self { invariants: Vec::new() }
    }

    /// Every HUD check:
    /// - [`TypingMembersUnique`]: nobody is listed twice
    /// - [`NoTypingWithoutSession`]: no session, no typing state
    /// - [`SessionNotTracked`]: lobby-wide data is never a typist
    /// - [`LocalNotTracked`]: the player never sees themselves typing
    /// - [`SummaryNeedsInput`]: indicator only with the input open
    /// - [`SettingsVisibleOnlyWhenCreated`]: dialog lifecycle is ordered
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.add(TypingMembersUnique);
        registry.add(NoTypingWithoutSession);
        registry.add(SessionNotTracked);
        registry.add(LocalNotTracked);
        registry.add(SummaryNeedsInput);
        registry.add(SettingsVisibleOnlyWhenCreated);
        registry
    }

    /// Register another check.
    pub fn add<I: Invariant + 'static>(&mut self, invariant: I) {
        self.invariants.push(Box::new(invariant));
    }

    /// Run every check, collecting each violation.
    pub fn check_all(&self, state: &HudSnapshot) -> Result<(), Vec<Violation>> {
        let mut violations = Vec::new();
        for invariant in &self.invariants {
            if let Err(violation) = invariant.check(state) {
                violations.push(violation);
            }
        }

        if violations.is_empty() { Ok(()) } else { Err(violations) }
    }

    /// Run every check and panic listing all violations, tagged with
    /// `context` (usually the step and event that led here).
    #[allow(clippy::panic, reason = "Test harness reports violations by panicking")]
    pub fn assert_all(&self, state: &HudSnapshot, context: &str) {
        if let Err(violations) = self.check_all(state) {
            let messages: Vec<_> = violations.iter().map(ToString::to_string).collect();
            panic!("Invariant violation {context}:\n  {}", messages.join("\n  "));
        }
    }

    /// Registered check count.
    pub fn len(&self) -> usize {
        self.invariants.len()
    }

    /// No checks registered.
    pub fn is_empty(&self) -> bool {
        self.invariants.is_empty()
    }
}
