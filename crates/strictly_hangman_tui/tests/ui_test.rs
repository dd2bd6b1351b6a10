//! Rendering tests against an in-memory terminal.

use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::TestBackend, layout::Rect};
use strictly_hangman::{Letter, WordCatalog, WordEntry};
use strictly_hangman_tui::{App, ui};

fn app(word: &str) -> App {
    let catalog =
        WordCatalog::from_entries(vec![WordEntry::new("Fruits".to_string(), word.to_string())])
            .unwrap();
    let mut app = App::new(catalog, StdRng::seed_from_u64(5));
    app.sync_layout(Rect::new(0, 0, 80, 24));
    app
}

fn render(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal.draw(|f| ui::draw(f, app)).unwrap();
    let buffer = terminal.backend().buffer();
    let mut screen = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            screen.push_str(buffer[(x, y)].symbol());
        }
        screen.push('\n');
    }
    screen
}

fn guess_all(app: &mut App, letters: &str) {
    for c in letters.chars() {
        app.guess(Letter::new(c).unwrap());
    }
}

#[test]
fn test_initial_screen() {
    let app = app("banana");
    let screen = render(&app);

    assert!(screen.contains("HANGMAN"));
    assert!(screen.contains("Topic: Fruits"));
    assert!(screen.contains("Lives: 6 / 6"));
    assert!(screen.contains("Restart"));
    assert!(screen.contains("Quit"));
    assert!(screen.contains('_'));
    assert!(!screen.contains("GAME OVER!"));
}

#[test]
fn test_every_key_is_drawn() {
    let app = app("banana");
    let screen = render(&app);
    let keys_row_start = app.layout().keyboard.y as usize;
    let keyboard: String = screen
        .lines()
        .skip(keys_row_start)
        .take(app.layout().keyboard.height as usize)
        .collect();
    for c in 'A'..='Z' {
        assert!(keyboard.contains(c), "missing key {}", c);
    }
}

#[test]
fn test_lives_drop_after_miss() {
    let mut app = app("banana");
    guess_all(&mut app, "zq");
    let screen = render(&app);
    assert!(screen.contains("Lives: 4 / 6"));
    assert!(screen.contains("No 'q'"));
}

#[test]
fn test_loss_overlay() {
    let mut app = app("banana");
    guess_all(&mut app, "zqxwvy");
    let screen = render(&app);
    assert!(screen.contains("GAME OVER!"));
    assert!(screen.contains("The word was: banana"));
    assert!(screen.contains("Press Enter to restart or Esc to quit"));
}

#[test]
fn test_win_overlay() {
    let mut app = app("banana");
    guess_all(&mut app, "ban");
    let screen = render(&app);
    assert!(screen.contains("CONGRATULATIONS! You Win !!"));
    assert!(screen.contains("Word: banana"));
}

#[test]
fn test_small_terminal_does_not_panic() {
    let mut app = app("bangladesh");
    app.sync_layout(Rect::new(0, 0, 20, 6));
    let mut terminal = Terminal::new(TestBackend::new(20, 6)).unwrap();
    terminal.draw(|f| ui::draw(f, &app)).unwrap();
}
