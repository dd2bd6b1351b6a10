//! First-class invariants for hangman rounds.
//!
//! Invariants are logical properties that must hold for every reachable
//! [`GameState`](crate::GameState). They are checked after each transition
//! in debug builds and can be tested independently.

/// A property every reachable round satisfies.
pub trait Invariant<S> {
    /// Whether the property holds for `state`.
    fn holds(state: &S) -> bool;

    /// What the property guarantees, for logs and reports.
    fn description() -> &'static str;
}

/// A broken invariant, named by its description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the broken property.
    pub description: &'static str,
}

impl InvariantViolation {
    /// Records a violation of `I`.
    pub fn of<S, I: Invariant<S>>() -> Self {
        Self {
            description: I::description(),
        }
    }
}

/// Invariants checked together as one step.
pub trait InvariantSet<S> {
    /// Checks every member, reporting all that fail rather than the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::of::<S, I>());
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        if violations.is_empty() { Ok(()) } else { Err(violations) }
    }
}

pub mod failure_bound;
pub mod mask_consistent;
pub mod terminal_status;

pub use failure_bound::FailureBoundInvariant;
pub use mask_consistent::MaskConsistentInvariant;
pub use terminal_status::TerminalStatusInvariant;

/// All hangman invariants as a composable set.
pub type HangmanInvariants = (
    MaskConsistentInvariant,
    FailureBoundInvariant,
    TerminalStatusInvariant,
);
