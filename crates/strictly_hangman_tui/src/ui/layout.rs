//! Screen regions shared by rendering and mouse hit-testing.

use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::widgets::Block;
use strictly_hangman::KeyboardLayout;

/// Width of the hangman figure panel.
const FIGURE_WIDTH: u16 = 26;

/// Width of the controls panel.
const CONTROLS_WIDTH: u16 = 22;

/// Every region of the game screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title and topic.
    pub header: Rect,
    /// Hangman figure panel.
    pub figure: Rect,
    /// Guessed-word panel.
    pub word: Rect,
    /// Controls panel (buttons and lives).
    pub controls: Rect,
    /// Restart button.
    pub restart_button: Rect,
    /// Quit button.
    pub quit_button: Rect,
    /// Lives counter line.
    pub lives: Rect,
    /// On-screen keyboard panel.
    pub keyboard: Rect,
    /// Top-left cell of the first key.
    pub keyboard_origin: (u16, u16),
    /// Help and feedback line.
    pub footer: Rect,
}

impl ScreenLayout {
    /// Splits the terminal area for a keyboard of the given geometry.
    pub fn compute(area: Rect, keys: &KeyboardLayout) -> Self {
        let keyboard_height = keys.height() + 2;

        let [header, body, keyboard, footer] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(8),
            Constraint::Length(keyboard_height),
            Constraint::Length(1),
        ])
        .areas(area);

        let [figure, word, controls] = Layout::horizontal([
            Constraint::Length(FIGURE_WIDTH),
            Constraint::Min(12),
            Constraint::Length(CONTROLS_WIDTH),
        ])
        .areas(body);

        let controls_inner = Block::bordered().inner(controls);
        let [restart_button, quit_button, lives] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .areas(controls_inner);

        let keyboard_inner = Block::bordered().inner(keyboard);
        let keyboard_origin = (
            keyboard_inner.x + keyboard_inner.width.saturating_sub(keys.width()) / 2,
            keyboard_inner.y,
        );

        Self {
            header,
            figure,
            word,
            controls,
            restart_button,
            quit_button,
            lives,
            keyboard,
            keyboard_origin,
            footer,
        }
    }

    /// Whether a click at `(x, y)` hits the restart button.
    pub fn hits_restart(&self, x: u16, y: u16) -> bool {
        self.restart_button.contains(Position::new(x, y))
    }

    /// Whether a click at `(x, y)` hits the quit button.
    pub fn hits_quit(&self, x: u16, y: u16) -> bool {
        self.quit_button.contains(Position::new(x, y))
    }
}

/// Returns a `width` x `height` rectangle centered in `area`.
pub fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
