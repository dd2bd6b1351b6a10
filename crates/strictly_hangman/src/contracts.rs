//! Contract-based validation for guesses.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} guess {Q}. A guess whose precondition fails is ignored; a transition
//! whose postcondition fails is a bug.

use crate::letter::Letter;
use crate::{GameState, MAX_TRIES, Status};
use tracing::instrument;

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), ContractViolation>;

    /// Checks postconditions relating the state before and after a transition.
    fn post(before: &S, after: &S) -> Result<(), ContractViolation>;
}

/// Reason a guess contract did not hold.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ContractViolation {
    /// The round is already won or lost.
    #[display("Round is already over")]
    GameOver,

    /// Every allowed miss is used up, even if the outcome was not yet evaluated.
    #[display("No lives left ({} failed attempts)", _0)]
    NoLivesLeft(usize),

    /// The letter was guessed earlier this round.
    #[display("Letter '{}' was already tried", _0)]
    AlreadyTried(Letter),

    /// A revealed position became hidden again.
    #[display("Position {} was hidden again", _0)]
    MaskRegressed(usize),

    /// The set of tried letters lost an element.
    #[display("Tried letters shrank")]
    TriedLettersShrank,

    /// The failure counter went down.
    #[display("Failed attempts decreased from {} to {}", before, after)]
    FailuresDecreased {
        /// Counter before the transition.
        before: usize,
        /// Counter after the transition.
        after: usize,
    },

    /// A terminal status was left or replaced.
    #[display("Terminal status changed from {} to {}", before, after)]
    TerminalStatusChanged {
        /// Status before the transition.
        before: Status,
        /// Status after the transition.
        after: Status,
    },

    /// The secret word changed mid-round.
    #[display("Secret word changed")]
    SecretChanged,
}

impl std::error::Error for ContractViolation {}

/// Contract for guess transitions.
///
/// Preconditions:
/// - Round is not over
/// - Fewer than [`MAX_TRIES`] failed attempts
/// - Letter was not tried before
///
/// Postconditions:
/// - Revealed positions stay revealed
/// - Tried letters only grow
/// - Failed attempts only grow
/// - A terminal status never changes
/// - The secret word is fixed
pub struct GuessContract;

impl Contract<GameState, Letter> for GuessContract {
    #[instrument(skip(game))]
    fn pre(game: &GameState, letter: &Letter) -> Result<(), ContractViolation> {
        if game.is_over() {
            return Err(ContractViolation::GameOver);
        }
        if game.failed_attempts() >= MAX_TRIES {
            return Err(ContractViolation::NoLivesLeft(game.failed_attempts()));
        }
        if game.tried_letters().contains(*letter) {
            return Err(ContractViolation::AlreadyTried(*letter));
        }
        Ok(())
    }

    #[instrument(skip_all)]
    fn post(before: &GameState, after: &GameState) -> Result<(), ContractViolation> {
        if before.secret() != after.secret() {
            return Err(ContractViolation::SecretChanged);
        }

        if let Some(pos) = before
            .revealed_mask()
            .iter()
            .zip(after.revealed_mask())
            .position(|(was, is)| *was && !*is)
        {
            return Err(ContractViolation::MaskRegressed(pos));
        }

        if !before.tried_letters().is_subset(&after.tried_letters()) {
            return Err(ContractViolation::TriedLettersShrank);
        }

        if after.failed_attempts() < before.failed_attempts() {
            return Err(ContractViolation::FailuresDecreased {
                before: before.failed_attempts(),
                after: after.failed_attempts(),
            });
        }

        if before.is_over() && before.status() != after.status() {
            return Err(ContractViolation::TerminalStatusChanged {
                before: before.status(),
                after: after.status(),
            });
        }

        Ok(())
    }
}
