//! Tests for frame handling: guesses, priority, restart and quit.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::layout::Rect;
use strictly_hangman::{GuessResult, Letter, MAX_TRIES, Status, WordCatalog, WordEntry};
use strictly_hangman_tui::{App, FrameInput};

fn app(word: &str) -> App {
    let catalog =
        WordCatalog::from_entries(vec![WordEntry::new("Fruits".to_string(), word.to_string())])
            .unwrap();
    let mut app = App::new(catalog, StdRng::seed_from_u64(11));
    app.sync_layout(Rect::new(0, 0, 80, 24));
    app
}

fn letter(c: char) -> Letter {
    Letter::new(c).unwrap()
}

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn click(column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn frame(events: &[Event]) -> FrameInput {
    let mut input = FrameInput::new();
    for ev in events {
        input.record(ev);
    }
    input
}

fn key_cell(app: &App, c: char) -> (u16, u16) {
    let key = app
        .keyboard()
        .keys()
        .iter()
        .find(|k| *k.letter() == letter(c))
        .unwrap();
    (key.region().x, key.region().y)
}

#[test]
fn test_typed_letter_is_applied() {
    let mut app = app("banana");
    app.handle_frame(&frame(&[key(KeyCode::Char('z'))]));

    assert_eq!(app.game().failed_attempts(), 1);
    assert!(app.keyboard().is_pressed(letter('z')));
    assert_eq!(app.last_guess(), Some((letter('z'), GuessResult::Incorrect)));
}

#[test]
fn test_clicked_key_is_applied() {
    let mut app = app("banana");
    let (x, y) = key_cell(&app, 'q');
    app.handle_frame(&frame(&[click(x, y)]));

    assert!(app.game().tried_letters().contains(letter('q')));
    assert!(app.keyboard().is_pressed(letter('q')));
}

#[test]
fn test_physical_key_beats_click_in_same_frame() {
    let mut app = app("banana");
    let (x, y) = key_cell(&app, 'z');
    app.handle_frame(&frame(&[click(x, y), key(KeyCode::Char('q'))]));

    let tried = app.game().tried_letters();
    assert!(tried.contains(letter('q')));
    assert!(!tried.contains(letter('z')));
    assert_eq!(tried.len(), 1);
    assert!(!app.keyboard().is_pressed(letter('z')));
}

#[test]
fn test_pressed_key_cannot_be_clicked_again() {
    let mut app = app("banana");
    app.handle_frame(&frame(&[key(KeyCode::Char('z'))]));
    let (x, y) = key_cell(&app, 'z');
    app.handle_frame(&frame(&[click(x, y)]));
    assert_eq!(app.game().failed_attempts(), 1);
}

#[test]
fn test_repeated_letter_is_ignored() {
    let mut app = app("banana");
    assert_eq!(app.guess(letter('z')), GuessResult::Incorrect);
    assert_eq!(app.guess(letter('z')), GuessResult::Ignored);
    assert_eq!(app.game().failed_attempts(), 1);
}

#[test]
fn test_guessing_every_letter_wins() {
    let mut app = app("banana");
    for c in ['b', 'a', 'n'] {
        app.handle_frame(&frame(&[key(KeyCode::Char(c))]));
    }
    assert_eq!(app.game().status(), Status::Won);
    assert_eq!(app.game().guessed_word(), "banana");
}

#[test]
fn test_six_misses_lose_and_freeze_the_round() {
    let mut app = app("banana");
    for c in ['z', 'q', 'x', 'w', 'v', 'y'] {
        app.handle_frame(&frame(&[key(KeyCode::Char(c))]));
    }
    assert_eq!(app.game().status(), Status::Lost);
    assert_eq!(app.game().failed_attempts(), MAX_TRIES);

    let before = app.game().clone();
    app.handle_frame(&frame(&[key(KeyCode::Char('b'))]));
    assert_eq!(app.game(), &before);
}

#[test]
fn test_enter_restarts_and_clears_keyboard() {
    let mut app = app("banana");
    for c in ['z', 'q', 'x', 'w', 'v', 'y'] {
        app.guess(letter(c));
    }
    assert!(app.game().is_over());

    app.handle_frame(&frame(&[key(KeyCode::Enter)]));

    assert_eq!(app.game().status(), Status::Ongoing);
    assert_eq!(app.game().failed_attempts(), 0);
    assert!(app.game().tried_letters().is_empty());
    assert!(app.keyboard().keys().iter().all(|k| !*k.pressed()));
    assert_eq!(app.last_guess(), None);
}

#[test]
fn test_restart_button_restarts_mid_round() {
    let mut app = app("banana");
    app.guess(letter('z'));
    let button = app.layout().restart_button;

    app.handle_frame(&frame(&[click(button.x + 1, button.y + 1)]));

    assert_eq!(app.game().failed_attempts(), 0);
    assert!(!app.should_quit());
}

#[test]
fn test_escape_quits() {
    let mut app = app("banana");
    app.handle_frame(&frame(&[key(KeyCode::Esc)]));
    assert!(app.should_quit());
}

#[test]
fn test_quit_button_quits() {
    let mut app = app("banana");
    let button = app.layout().quit_button;
    app.handle_frame(&frame(&[click(button.x, button.y)]));
    assert!(app.should_quit());
}

#[test]
fn test_click_outside_keys_does_nothing() {
    let mut app = app("banana");
    let before = app.game().clone();
    app.handle_frame(&frame(&[click(0, 0)]));
    assert_eq!(app.game(), &before);
    assert!(!app.should_quit());
}
