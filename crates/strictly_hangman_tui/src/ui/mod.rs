//! UI rendering using ratatui.

mod figure;
mod layout;

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use strictly_hangman::{GameState, GuessResult, MAX_TRIES, OnScreenKeyboard, Status};

pub use figure::{FigurePart, draw_figure};
pub use layout::{ScreenLayout, center_rect};

/// Draws the whole game screen.
pub fn draw(f: &mut Frame, app: &App) {
    let layout = app.layout();
    let game = app.game();

    draw_header(f, layout.header, game);

    let figure_color = if game.is_over() && !game.is_win() {
        Color::Red
    } else {
        Color::DarkGray
    };
    draw_figure(f, layout.figure, game.failed_attempts(), figure_color);

    draw_word(f, layout.word, game);
    draw_controls(f, layout, game);
    draw_keyboard(f, layout.keyboard, app.keyboard());
    draw_footer(f, layout.footer, app);

    if game.is_over() {
        draw_game_over(f, game);
    }
}

fn draw_header(f: &mut Frame, area: Rect, game: &GameState) {
    let lines = vec![
        Line::from(Span::styled(
            "HANGMAN",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("Topic: ", Style::default().fg(Color::DarkGray)),
            Span::styled(game.topic().to_string(), Style::default().fg(Color::Yellow)),
        ]),
    ];
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// Renders the guessed word with one space between cells.
fn spaced(chars: &[char]) -> String {
    let mut out = String::with_capacity(chars.len() * 2);
    for (i, c) in chars.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(*c);
    }
    out
}

fn draw_word(f: &mut Frame, area: Rect, game: &GameState) {
    let block = Block::default().borders(Borders::ALL).title("Word");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let color = match game.status() {
        Status::Won => Color::Green,
        Status::Lost => Color::Red,
        Status::Ongoing => Color::White,
    };
    let text = spaced(game.guessed());
    let target = center_rect(inner, inner.width, 1);
    let word = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(word, target);
}

fn draw_controls(f: &mut Frame, layout: &ScreenLayout, game: &GameState) {
    f.render_widget(
        Block::default().borders(Borders::ALL).title("Controls"),
        layout.controls,
    );
    draw_button(f, layout.restart_button, "Restart", Color::Green);
    draw_button(f, layout.quit_button, "Quit", Color::Red);

    let remaining = game.lives_remaining();
    let color = match remaining {
        0..=1 => Color::Red,
        2..=3 => Color::Yellow,
        _ => Color::Green,
    };
    let lives = Paragraph::new(format!("Lives: {} / {}", remaining, MAX_TRIES))
        .style(Style::default().fg(color))
        .alignment(Alignment::Center);
    f.render_widget(lives, layout.lives);
}

fn draw_button(f: &mut Frame, area: Rect, label: &str, color: Color) {
    let button = Paragraph::new(label)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(color)));
    f.render_widget(button, area);
}

fn draw_keyboard(f: &mut Frame, area: Rect, keyboard: &OnScreenKeyboard) {
    f.render_widget(
        Block::default().borders(Borders::ALL).title("Keyboard"),
        area,
    );

    let bounds = f.area();
    for key in keyboard.keys() {
        if !*key.visible() {
            continue;
        }
        let region = key.region();
        let cell = Rect::new(region.x, region.y, region.width, region.height).intersection(bounds);
        if cell.is_empty() {
            continue;
        }
        let style = if *key.pressed() {
            Style::default().fg(Color::Black).bg(Color::DarkGray)
        } else {
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD)
        };
        let label = Paragraph::new(key.letter().as_upper().to_string())
            .style(style)
            .alignment(Alignment::Center);
        f.render_widget(label, cell);
    }
}

fn draw_footer(f: &mut Frame, area: Rect, app: &App) {
    let feedback = match app.last_guess() {
        Some((letter, GuessResult::Correct)) => {
            Span::styled(format!("'{}' is in the word", letter), Style::default().fg(Color::Green))
        }
        Some((letter, GuessResult::Incorrect)) => {
            Span::styled(format!("No '{}'", letter), Style::default().fg(Color::Red))
        }
        Some((_, GuessResult::Ignored)) | None => Span::raw(""),
    };
    let help = Span::styled(
        "Type or click a letter | Enter: Restart | Esc: Quit   ",
        Style::default().fg(Color::DarkGray),
    );
    f.render_widget(
        Paragraph::new(Line::from(vec![help, feedback])).alignment(Alignment::Center),
        area,
    );
}

fn draw_game_over(f: &mut Frame, game: &GameState) {
    let secret = game.secret_word();
    let (title, detail, color) = if game.is_win() {
        ("CONGRATULATIONS! You Win !!", format!("Word: {}", secret), Color::Green)
    } else {
        ("GAME OVER!", format!("The word was: {}", secret), Color::Red)
    };

    let width = (detail.chars().count().max(title.len()) as u16).saturating_add(6).max(40);
    let area = center_rect(f.area(), width, 7);

    let lines = vec![
        Line::from(Span::styled(
            title,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(detail),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to restart or Esc to quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(color))),
        area,
    );
}
