//! On-screen keyboard model: 26 keys in three rows with hit regions.
//!
//! The keyboard knows nothing about drawing. A front end positions it with
//! [`OnScreenKeyboard::relocate`], draws each [`KeyboardKey`] at its region
//! and asks [`OnScreenKeyboard::letter_at`] which letter a click selected.

use crate::letter::Letter;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Key rows, top to bottom.
pub const KEYBOARD_ROWS: [&str; 3] = ["ABCDEFGHI", "JKLMNOPQR", "STUVWXYZ"];

/// Axis-aligned rectangle covering one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyRegion {
    /// Left edge.
    pub x: u16,
    /// Top edge.
    pub y: u16,
    /// Width.
    pub width: u16,
    /// Height.
    pub height: u16,
}

impl KeyRegion {
    /// Checks whether a point lies inside (right and bottom edges excluded).
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && y >= self.y
            && u32::from(x) < u32::from(self.x) + u32::from(self.width)
            && u32::from(y) < u32::from(self.y) + u32::from(self.height)
    }
}

/// Geometry of the key grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyboardLayout {
    /// Left edge of the first key of the first row.
    pub origin_x: u16,
    /// Top edge of the first row.
    pub origin_y: u16,
    /// Width of a key.
    pub key_width: u16,
    /// Height of a key.
    pub key_height: u16,
    /// Horizontal space between keys.
    pub gap: u16,
    /// Vertical space between rows.
    pub row_gap: u16,
    /// Extra left offset of the last row.
    pub last_row_indent: u16,
}

impl KeyboardLayout {
    /// Layout in terminal cells.
    pub const fn terminal() -> Self {
        Self {
            origin_x: 0,
            origin_y: 0,
            key_width: 3,
            key_height: 1,
            gap: 1,
            row_gap: 1,
            last_row_indent: 2,
        }
    }

    /// Layout in pixels for a 1000x700 window.
    pub const fn pixels() -> Self {
        Self {
            origin_x: 40,
            origin_y: 420,
            key_width: 48,
            key_height: 48,
            gap: 12,
            row_gap: 12,
            last_row_indent: 24,
        }
    }

    /// Total width covered by the widest row.
    pub fn width(&self) -> u16 {
        KEYBOARD_ROWS
            .iter()
            .enumerate()
            .map(|(row, keys)| {
                let n = keys.len() as u16;
                self.row_indent(row) + n * self.key_width + n.saturating_sub(1) * self.gap
            })
            .max()
            .unwrap_or_default()
    }

    /// Total height of all rows.
    pub fn height(&self) -> u16 {
        let rows = KEYBOARD_ROWS.len() as u16;
        rows * self.key_height + (rows - 1) * self.row_gap
    }

    fn row_indent(&self, row: usize) -> u16 {
        if row + 1 == KEYBOARD_ROWS.len() {
            self.last_row_indent
        } else {
            0
        }
    }
}

impl Default for KeyboardLayout {
    fn default() -> Self {
        Self::terminal()
    }
}

/// One key of the on-screen keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct KeyboardKey {
    /// Letter the key guesses.
    letter: Letter,
    /// Hit and draw region.
    region: KeyRegion,
    /// Whether the letter has been guessed this round.
    pressed: bool,
    /// Whether the key is shown and clickable.
    visible: bool,
}

/// The 26-key on-screen keyboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnScreenKeyboard {
    layout: KeyboardLayout,
    keys: Vec<KeyboardKey>,
}

impl OnScreenKeyboard {
    /// Builds the keyboard with all keys visible and unpressed.
    #[instrument]
    pub fn new(layout: KeyboardLayout) -> Self {
        let mut keys = Vec::with_capacity(26);
        for (row, letters) in KEYBOARD_ROWS.iter().enumerate() {
            for c in letters.chars() {
                if let Some(letter) = Letter::from_key(c) {
                    keys.push(KeyboardKey {
                        letter,
                        region: KeyRegion {
                            x: 0,
                            y: 0,
                            width: layout.key_width,
                            height: layout.key_height,
                        },
                        pressed: false,
                        visible: true,
                    });
                }
            }
            debug!(row, keys = letters.len(), "Keyboard row built");
        }

        let mut keyboard = Self { layout, keys };
        keyboard.place_keys();
        keyboard
    }

    /// Moves the keyboard so its first key starts at `(x, y)`.
    pub fn relocate(&mut self, x: u16, y: u16) {
        if (self.layout.origin_x, self.layout.origin_y) == (x, y) {
            return;
        }
        self.layout.origin_x = x;
        self.layout.origin_y = y;
        self.place_keys();
    }

    fn place_keys(&mut self) {
        let layout = self.layout;
        let mut keys = self.keys.iter_mut();
        let mut y = layout.origin_y;
        for (row, letters) in KEYBOARD_ROWS.iter().enumerate() {
            let mut x = layout.origin_x.saturating_add(layout.row_indent(row));
            for key in keys.by_ref().take(letters.len()) {
                key.region.x = x;
                key.region.y = y;
                x = x.saturating_add(layout.key_width + layout.gap);
            }
            y = y.saturating_add(layout.key_height + layout.row_gap);
        }
    }

    /// Returns the keys in row order.
    pub fn keys(&self) -> &[KeyboardKey] {
        &self.keys
    }

    /// Returns the current layout.
    pub fn layout(&self) -> &KeyboardLayout {
        &self.layout
    }

    /// Width covered by the keys.
    pub fn width(&self) -> u16 {
        self.layout.width()
    }

    /// Height covered by the keys.
    pub fn height(&self) -> u16 {
        self.layout.height()
    }

    /// Returns the visible key under a point.
    pub fn key_at(&self, x: u16, y: u16) -> Option<&KeyboardKey> {
        self.keys.iter().find(|k| k.visible && k.region.contains(x, y))
    }

    /// Returns the letter a click at `(x, y)` selects.
    ///
    /// Only visible keys that are not yet pressed select a letter.
    pub fn letter_at(&self, x: u16, y: u16) -> Option<Letter> {
        self.key_at(x, y).filter(|k| !k.pressed).map(|k| k.letter)
    }

    /// Marks the key for a letter as pressed.
    pub fn press(&mut self, letter: Letter) {
        if let Some(key) = self.keys.iter_mut().find(|k| k.letter == letter) {
            key.pressed = true;
        }
    }

    /// Checks whether the key for a letter is pressed.
    pub fn is_pressed(&self, letter: Letter) -> bool {
        self.keys.iter().any(|k| k.letter == letter && k.pressed)
    }

    /// Clears every pressed flag.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        for key in &mut self.keys {
            key.pressed = false;
        }
    }
}

impl Default for OnScreenKeyboard {
    fn default() -> Self {
        Self::new(KeyboardLayout::default())
    }
}
