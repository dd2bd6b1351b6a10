//! Guessable letters and the tried-letter set.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A lowercase ASCII letter `a`-`z`.
///
/// Guesses, tried letters and keyboard keys all speak in `Letter`, so an
/// out-of-range character never reaches the game state.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
)]
#[serde(try_from = "char", into = "char")]
#[display("{}", char::from(*_0))]
pub struct Letter(u8);

impl Letter {
    /// All 26 letters in alphabetical order.
    pub const ALL: [Letter; 26] = {
        let mut all = [Letter(b'a'); 26];
        let mut i = 0;
        while i < 26 {
            all[i] = Letter(b'a' + i as u8);
            i += 1;
        }
        all
    };

    /// Creates a letter from a lowercase `a`-`z` character.
    #[instrument]
    pub fn new(c: char) -> Option<Self> {
        c.is_ascii_lowercase().then_some(Self(c as u8))
    }

    /// Creates a letter from a key press, folding `A`-`Z` to lowercase.
    #[instrument]
    pub fn from_key(c: char) -> Option<Self> {
        Self::new(c.to_ascii_lowercase())
    }

    /// Returns the letter for an alphabet index (0 = `a`).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Returns the alphabet index (0 = `a`, 25 = `z`).
    pub fn index(self) -> usize {
        usize::from(self.0 - b'a')
    }

    /// Returns the lowercase character.
    pub fn as_char(self) -> char {
        char::from(self.0)
    }

    /// Returns the uppercase character, as printed on keyboard keys.
    pub fn as_upper(self) -> char {
        self.as_char().to_ascii_uppercase()
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> Self {
        letter.as_char()
    }
}

impl TryFrom<char> for Letter {
    type Error = String;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Letter::new(c).ok_or_else(|| format!("'{}' is not a lowercase letter a-z", c))
    }
}

/// Set of letters, one bit per letter of the alphabet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LetterSet(u32);

impl LetterSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a letter. Returns `true` if it was not already present.
    pub fn insert(&mut self, letter: Letter) -> bool {
        let bit = 1 << letter.index();
        let added = self.0 & bit == 0;
        self.0 |= bit;
        added
    }

    /// Checks whether the letter is in the set.
    pub fn contains(&self, letter: Letter) -> bool {
        self.0 & (1 << letter.index()) != 0
    }

    /// Number of letters in the set.
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` if no letter has been added.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if every letter of `self` is also in `other`.
    pub fn is_subset(&self, other: &LetterSet) -> bool {
        self.0 & !other.0 == 0
    }

    /// Iterates the letters in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = Letter> + '_ {
        Letter::ALL.into_iter().filter(|l| self.contains(*l))
    }
}

impl FromIterator<Letter> for LetterSet {
    fn from_iter<I: IntoIterator<Item = Letter>>(iter: I) -> Self {
        let mut set = Self::new();
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}
