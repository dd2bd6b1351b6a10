//! Terminal status agrees with the counters that produced it.

use super::Invariant;
use crate::{GameState, MAX_TRIES, Status};

/// Invariant: `Won` means every letter is revealed; `Lost` means the failure
/// limit was reached with letters still hidden.
pub struct TerminalStatusInvariant;

impl Invariant<GameState> for TerminalStatusInvariant {
    fn holds(game: &GameState) -> bool {
        let complete = game.revealed_alpha() == game.alpha_total();
        match game.status() {
            Status::Ongoing => true,
            Status::Won => complete,
            Status::Lost => !complete && game.failed_attempts() >= MAX_TRIES,
        }
    }

    fn description() -> &'static str {
        "Terminal status matches revealed letters and failures"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WordEntry;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn start(word: &str) -> GameState {
        let entry = WordEntry::new("Test".to_string(), word.to_string());
        GameState::from_entry(&entry, &mut StdRng::seed_from_u64(13))
    }

    #[test]
    fn test_lost_round_holds() {
        let mut game = start("ant");
        for c in "bcdfgh".chars() {
            game.apply_guess(c);
        }
        game.evaluate_outcome();
        assert_eq!(game.status(), Status::Lost);
        assert!(TerminalStatusInvariant::holds(&game));
    }

    #[test]
    fn test_premature_win_violates() {
        let mut game = start("banana");
        game.force_status(Status::Won);
        assert!(!TerminalStatusInvariant::holds(&game));
    }

    #[test]
    fn test_loss_without_failures_violates() {
        let mut game = start("banana");
        game.force_status(Status::Lost);
        assert!(!TerminalStatusInvariant::holds(&game));
    }
}
