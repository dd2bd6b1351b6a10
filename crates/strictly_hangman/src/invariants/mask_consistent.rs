//! Mask consistency: the rendering agrees with the revealed flags.

use super::Invariant;
use crate::{GameState, PLACEHOLDER};

/// Invariant: every position shows the secret character iff it is revealed.
///
/// Hidden positions show [`PLACEHOLDER`]; non-alphabetic positions are
/// always revealed; all three sequences have the same length.
pub struct MaskConsistentInvariant;

impl Invariant<GameState> for MaskConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        let secret = game.secret();
        let guessed = game.guessed();
        let mask = game.revealed_mask();

        if guessed.len() != secret.len() || mask.len() != secret.len() {
            return false;
        }

        secret
            .iter()
            .zip(guessed)
            .zip(mask)
            .all(|((s, g), shown)| match shown {
                true => g == s,
                false => *g == PLACEHOLDER && s.is_ascii_alphabetic(),
            })
    }

    fn description() -> &'static str {
        "Masked word shows exactly the revealed positions"
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
        GameState::from_entry(&entry, &mut StdRng::seed_from_u64(5))
    }

    #[test]
    fn test_new_round_holds() {
        assert!(MaskConsistentInvariant::holds(&start("rock'n'roll")));
    }

    #[test]
    fn test_holds_after_guess() {
        let mut game = start("mississippi");
        game.apply_guess('s');
        assert!(MaskConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_revealed_flag_without_letter_violates() {
        let mut game = start("mississippi");
        let hidden = game.revealed_mask().iter().position(|r| !*r).unwrap();
        game.force_revealed(hidden, true);
        assert!(!MaskConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_hidden_punctuation_violates() {
        let mut game = start("a-b");
        game.force_revealed(1, false);
        assert!(!MaskConsistentInvariant::holds(&game));
    }
}
