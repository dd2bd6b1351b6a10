//! Counter bounds for failures and reveals.

use super::Invariant;
use crate::{GameState, MAX_TRIES};

/// Invariant: failures never exceed [`MAX_TRIES`] and revealed letters never
/// exceed the alphabetic positions of the word.
pub struct FailureBoundInvariant;

impl Invariant<GameState> for FailureBoundInvariant {
    fn holds(game: &GameState) -> bool {
        game.failed_attempts() <= MAX_TRIES && game.revealed_alpha() <= game.alpha_total()
    }

    fn description() -> &'static str {
        "Failed attempts and revealed letters stay within bounds"
    }
}
