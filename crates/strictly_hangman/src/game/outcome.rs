//! Results of guesses and round evaluation.

use serde::{Deserialize, Serialize};

/// Effect of a single guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum GuessResult {
    /// The guess was not processed: the round is over, the letter was
    /// already tried, or the character is not `a`-`z`.
    Ignored,
    /// At least one hidden position was revealed.
    Correct,
    /// No hidden position matched; one failed attempt was recorded.
    Incorrect,
}

/// Result of evaluating the round after a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Outcome {
    /// More guesses are accepted.
    Ongoing,
    /// Every letter is revealed.
    Won,
    /// The wrong-guess limit was reached.
    Lost,
}

/// Phase of a round.
///
/// Starts at `Ongoing`; `Won` and `Lost` are terminal until a new round is
/// initialized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Status {
    /// The round accepts guesses.
    #[default]
    Ongoing,
    /// The player revealed the whole word.
    Won,
    /// The player ran out of tries.
    Lost,
}

impl Status {
    /// Returns `true` for `Won` and `Lost`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Status::Ongoing)
    }
}

impl From<Status> for Outcome {
    fn from(status: Status) -> Self {
        match status {
            Status::Ongoing => Outcome::Ongoing,
            Status::Won => Outcome::Won,
            Status::Lost => Outcome::Lost,
        }
    }
}
