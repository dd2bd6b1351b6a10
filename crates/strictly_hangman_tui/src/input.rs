//! Per-frame input collection and letter resolution.

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use std::time::Duration;
use strictly_hangman::Letter;
use tracing::{instrument, trace};

/// Everything the player did during one frame.
///
/// Only the first letter key and the first left click of a frame count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    key_letter: Option<Letter>,
    click: Option<(u16, u16)>,
    restart: bool,
    quit: bool,
}

impl FrameInput {
    /// Creates an empty frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one terminal event into the frame.
    pub fn record(&mut self, event: &Event) {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => self.record_key(key),
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                if self.click.is_none() {
                    self.click = Some((mouse.column, mouse.row));
                }
            }
            _ => {}
        }
    }

    fn record_key(&mut self, key: &KeyEvent) {
        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => self.quit = true,
            KeyCode::Enter => self.restart = true,
            KeyCode::Char(c) if self.key_letter.is_none() => {
                self.key_letter = Letter::from_key(c);
            }
            _ => {}
        }
    }

    /// Letter typed on the physical keyboard.
    pub fn key_letter(&self) -> Option<Letter> {
        self.key_letter
    }

    /// Screen cell of the first left click.
    pub fn click(&self) -> Option<(u16, u16)> {
        self.click
    }

    /// Whether a restart was requested from the keyboard.
    pub fn restart(&self) -> bool {
        self.restart
    }

    /// Whether quitting was requested from the keyboard.
    pub fn quit(&self) -> bool {
        self.quit
    }
}

/// Picks the single letter guessed this frame.
///
/// A physical key press wins; the on-screen keyboard is used only when no
/// letter key fired.
pub fn resolve_letter(physical: Option<Letter>, clicked: Option<Letter>) -> Option<Letter> {
    physical.or(clicked)
}

/// Waits up to one frame for input, then drains every queued event.
#[instrument(level = "trace")]
pub fn poll_frame(frame: Duration) -> std::io::Result<FrameInput> {
    let mut input = FrameInput::new();
    if !event::poll(frame)? {
        return Ok(input);
    }

    loop {
        let ev = event::read()?;
        trace!(event = ?ev, "Terminal event");
        input.record(&ev);
        if !event::poll(Duration::ZERO)? {
            break;
        }
    }
    Ok(input)
}
