//! Strictly Hangman - pure game logic for a single-screen hangman game.
//!
//! This crate owns everything that decides how a round plays out. It has no
//! terminal or window dependencies; a front end polls input, resolves at most
//! one letter per frame and hands it to [`GameState::apply_guess`].
//!
//! # Architecture
//!
//! - **Catalog**: `topic:word` entries loaded from a flat text file, with a
//!   built-in fallback list
//! - **Game**: the secret word, its masked rendering, tried letters and the
//!   win/loss state machine
//! - **Keyboard**: the 26-key on-screen keyboard model (regions, pressed flags)
//! - **Invariants**: properties every game state must satisfy, checked in
//!   debug builds after each transition
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use strictly_hangman::{GameState, GuessResult, WordCatalog};
//!
//! let catalog = WordCatalog::fallback();
//! let mut rng = StdRng::seed_from_u64(7);
//! let mut game = GameState::new(&catalog, &mut rng);
//!
//! if game.apply_guess('a') != GuessResult::Ignored {
//!     let _outcome = game.evaluate_outcome();
//! }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod catalog;
mod contracts;
mod game;
mod invariants;
mod keyboard;
mod letter;

pub use catalog::{CatalogError, MAX_ENTRIES, MAX_FIELD_LEN, WordCatalog, WordEntry};
pub use contracts::{Contract, ContractViolation, GuessContract};
pub use game::{GameState, GuessResult, MAX_TRIES, Outcome, PLACEHOLDER, Status, reveal_count};
pub use invariants::{
    FailureBoundInvariant, HangmanInvariants, Invariant, InvariantSet, InvariantViolation,
    MaskConsistentInvariant, TerminalStatusInvariant,
};
pub use keyboard::{KEYBOARD_ROWS, KeyRegion, KeyboardKey, KeyboardLayout, OnScreenKeyboard};
pub use letter::{Letter, LetterSet};
