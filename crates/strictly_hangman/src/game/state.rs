//! Mutable state of one hangman round.

use super::outcome::{GuessResult, Outcome, Status};
use super::reveal::{pre_reveal, reveal_count};
use super::{MAX_TRIES, PLACEHOLDER};
use crate::catalog::{WordCatalog, WordEntry};
use crate::contracts::{Contract, GuessContract};
#[cfg(debug_assertions)]
use crate::invariants::{HangmanInvariants, InvariantSet};
use crate::letter::{Letter, LetterSet};
use rand::Rng;
use serde::Serialize;
use tracing::{debug, info, instrument, trace};

/// State of a single round.
///
/// A round is created by [`GameState::new`] (or [`GameState::from_entry`]),
/// mutated only by [`GameState::apply_guess`] and
/// [`GameState::evaluate_outcome`], and replaced wholesale on restart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    /// Hint for the secret word.
    topic: String,
    /// Secret word, ASCII lower-cased.
    secret: Vec<char>,
    /// Rendering of the secret word with hidden letters as [`PLACEHOLDER`].
    guessed: Vec<char>,
    /// `true` where `guessed` shows the secret character.
    revealed: Vec<bool>,
    /// Letters already guessed this round.
    tried: LetterSet,
    /// Guesses that revealed nothing.
    failed_attempts: usize,
    /// Alphabetic positions in the secret word.
    alpha_total: usize,
    /// Distinct letters in the secret word.
    unique_letters: usize,
    /// Round phase.
    status: Status,
}

impl GameState {
    /// Starts a round with an entry chosen uniformly from the catalog.
    #[instrument(skip(catalog, rng), fields(catalog_len = catalog.len()))]
    pub fn new<R: Rng + ?Sized>(catalog: &WordCatalog, rng: &mut R) -> Self {
        let entry = catalog.choose(rng);
        Self::from_entry(entry, rng)
    }

    /// Starts a round for a specific entry.
    ///
    /// Non-alphabetic characters are revealed immediately; then
    /// [`reveal_count`] letters are pre-revealed at random positions.
    #[instrument(skip(entry, rng), fields(topic = %entry.topic()))]
    pub fn from_entry<R: Rng + ?Sized>(entry: &WordEntry, rng: &mut R) -> Self {
        let secret: Vec<char> = entry.word().chars().map(|c| c.to_ascii_lowercase()).collect();

        let mut revealed: Vec<bool> = secret.iter().map(|c| !c.is_ascii_alphabetic()).collect();
        let alpha_total = revealed.iter().filter(|r| !**r).count();
        let unique_letters = secret.iter().filter_map(|c| Letter::new(*c)).collect::<LetterSet>().len();

        let to_reveal = reveal_count(secret.len());
        pre_reveal(&secret, &mut revealed, to_reveal, rng);

        let guessed = secret
            .iter()
            .zip(&revealed)
            .map(|(c, shown)| if *shown { *c } else { PLACEHOLDER })
            .collect();

        debug!(
            length = secret.len(),
            alpha_total,
            unique_letters,
            reveal_count = to_reveal,
            "New round"
        );
        trace!(secret = %secret.iter().collect::<String>(), "Secret word");

        Self {
            topic: entry.topic().clone(),
            secret,
            guessed,
            revealed,
            tried: LetterSet::new(),
            failed_attempts: 0,
            alpha_total,
            unique_letters,
            status: Status::Ongoing,
        }
    }

    /// Applies one guessed letter.
    ///
    /// Returns [`GuessResult::Ignored`] without touching the state when the
    /// round is over, every allowed miss is used up, the letter was already
    /// tried, or `guess` is not a
    /// lowercase `a`-`z`. Otherwise the letter is recorded and every hidden
    /// position holding it is revealed; a guess that reveals nothing counts
    /// as one failed attempt.
    #[instrument(skip(self), fields(status = %self.status, failed = self.failed_attempts))]
    pub fn apply_guess(&mut self, guess: char) -> GuessResult {
        let Some(letter) = Letter::new(guess) else {
            debug!("Guess is not a lowercase letter");
            return GuessResult::Ignored;
        };

        if let Err(reason) = GuessContract::pre(self, &letter) {
            debug!(%reason, "Guess ignored");
            return GuessResult::Ignored;
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.tried.insert(letter);

        let mut found = false;
        for i in 0..self.secret.len() {
            if !self.revealed[i] && self.secret[i] == letter.as_char() {
                self.revealed[i] = true;
                self.guessed[i] = self.secret[i];
                found = true;
            }
        }

        let result = if found {
            GuessResult::Correct
        } else {
            self.failed_attempts += 1;
            GuessResult::Incorrect
        };

        #[cfg(debug_assertions)]
        self.assert_transition(&before);

        debug!(%letter, %result, failed = self.failed_attempts, "Guess applied");
        result
    }

    /// Evaluates win/loss after a guess.
    ///
    /// A fully revealed word wins even when the failure limit is reached at
    /// the same time. Once the round is terminal the stored result is
    /// returned unchanged.
    #[instrument(skip(self), fields(status = %self.status))]
    pub fn evaluate_outcome(&mut self) -> Outcome {
        if self.status.is_terminal() {
            return self.status.into();
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        if self.revealed_alpha() == self.alpha_total {
            self.status = Status::Won;
            info!(failed = self.failed_attempts, "Round won");
        } else if self.failed_attempts >= MAX_TRIES {
            self.status = Status::Lost;
            info!(revealed = self.revealed_alpha(), "Round lost");
        }

        #[cfg(debug_assertions)]
        self.assert_transition(&before);

        self.status.into()
    }

    /// Checks invariants and the guess contract after a transition.
    #[cfg(debug_assertions)]
    fn assert_transition(&self, before: &GameState) {
        if let Err(violations) = HangmanInvariants::check_all(self) {
            for v in &violations {
                tracing::warn!(violation = %v, "Invariant violated");
            }
            debug_assert!(violations.is_empty(), "Game state invariants violated");
        }
        if let Err(violation) = GuessContract::post(before, self) {
            tracing::warn!(%violation, "Guess contract violated");
            debug_assert!(false, "Guess contract violated: {}", violation);
        }
    }

    /// Returns the topic hint.
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Returns the lower-cased secret word.
    pub fn secret_word(&self) -> String {
        self.secret.iter().collect()
    }

    /// Returns the secret word characters.
    pub fn secret(&self) -> &[char] {
        &self.secret
    }

    /// Returns the masked word with [`PLACEHOLDER`] for hidden letters.
    pub fn guessed_word(&self) -> String {
        self.guessed.iter().collect()
    }

    /// Returns the masked word characters.
    pub fn guessed(&self) -> &[char] {
        &self.guessed
    }

    /// Returns the per-position revealed flags.
    pub fn revealed_mask(&self) -> &[bool] {
        &self.revealed
    }

    /// Returns the letters tried this round.
    pub fn tried_letters(&self) -> LetterSet {
        self.tried
    }

    /// Returns the number of guesses that revealed nothing.
    pub fn failed_attempts(&self) -> usize {
        self.failed_attempts
    }

    /// Returns the wrong guesses left before the round is lost.
    pub fn lives_remaining(&self) -> usize {
        MAX_TRIES.saturating_sub(self.failed_attempts)
    }

    /// Returns the number of alphabetic positions in the secret word.
    pub fn alpha_total(&self) -> usize {
        self.alpha_total
    }

    /// Returns the number of alphabetic positions currently revealed.
    pub fn revealed_alpha(&self) -> usize {
        self.secret
            .iter()
            .zip(&self.revealed)
            .filter(|(c, shown)| **shown && c.is_ascii_alphabetic())
            .count()
    }

    /// Returns the number of distinct letters in the secret word.
    pub fn unique_letters(&self) -> usize {
        self.unique_letters
    }

    /// Returns the round phase.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns `true` once the round is won or lost.
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Returns `true` if the round was won.
    pub fn is_win(&self) -> bool {
        self.status == Status::Won
    }
}

#[cfg(test)]
impl GameState {
    /// Overwrites a revealed flag without updating the rendering.
    pub(crate) fn force_revealed(&mut self, pos: usize, shown: bool) {
        self.revealed[pos] = shown;
    }

    /// Overwrites the failure counter.
    pub(crate) fn force_failed_attempts(&mut self, failed: usize) {
        self.failed_attempts = failed;
    }

    /// Overwrites the round phase.
    pub(crate) fn force_status(&mut self, status: Status) {
        self.status = status;
    }
}
