//! Game-state engine: word selection, masked word, guesses and outcomes.

mod outcome;
mod reveal;
mod state;

pub use outcome::{GuessResult, Outcome, Status};
pub use reveal::reveal_count;
pub use state::GameState;

/// Number of wrong guesses that ends the round.
pub const MAX_TRIES: usize = 6;

/// Character shown for an unrevealed letter.
pub const PLACEHOLDER: char = '_';
