//! Application state and frame handling.

use crate::input::{FrameInput, resolve_letter};
use crate::ui::ScreenLayout;
use ratatui::layout::Rect;
use rand::rngs::StdRng;
use strictly_hangman::{
    GameState, GuessResult, KeyboardLayout, Letter, OnScreenKeyboard, Outcome, WordCatalog,
};
use tracing::{debug, info, instrument};

/// Main application state.
pub struct App {
    catalog: WordCatalog,
    game: GameState,
    keyboard: OnScreenKeyboard,
    rng: StdRng,
    layout: ScreenLayout,
    last_guess: Option<(Letter, GuessResult)>,
    should_quit: bool,
}

impl App {
    /// Creates an application and starts the first round.
    #[instrument(skip_all, fields(entries = catalog.len()))]
    pub fn new(catalog: WordCatalog, mut rng: StdRng) -> Self {
        let game = GameState::new(&catalog, &mut rng);
        info!(topic = game.topic(), "Round started");
        Self {
            catalog,
            game,
            keyboard: OnScreenKeyboard::new(KeyboardLayout::terminal()),
            rng,
            layout: ScreenLayout::default(),
            last_guess: None,
            should_quit: false,
        }
    }

    /// Gets the current round.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Gets the on-screen keyboard.
    pub fn keyboard(&self) -> &OnScreenKeyboard {
        &self.keyboard
    }

    /// Gets the screen regions of the last frame.
    pub fn layout(&self) -> &ScreenLayout {
        &self.layout
    }

    /// Gets the last applied guess and its result.
    pub fn last_guess(&self) -> Option<(Letter, GuessResult)> {
        self.last_guess
    }

    /// Whether the player asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Recomputes screen regions and moves the keyboard with them.
    pub fn sync_layout(&mut self, area: Rect) {
        let layout = ScreenLayout::compute(area, self.keyboard.layout());
        if layout != self.layout {
            debug!(?area, "Layout changed");
            let (x, y) = layout.keyboard_origin;
            self.keyboard.relocate(x, y);
            self.layout = layout;
        }
    }

    /// Starts a new round with a freshly chosen word.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.game = GameState::new(&self.catalog, &mut self.rng);
        self.keyboard.reset();
        self.last_guess = None;
        info!(topic = self.game.topic(), "Round restarted");
    }

    /// Applies everything the player did during one frame.
    #[instrument(level = "trace", skip(self))]
    pub fn handle_frame(&mut self, input: &FrameInput) {
        let click = input.click();

        if input.quit() || click.is_some_and(|(x, y)| self.layout.hits_quit(x, y)) {
            info!("Quit requested");
            self.should_quit = true;
            return;
        }

        if input.restart() || click.is_some_and(|(x, y)| self.layout.hits_restart(x, y)) {
            self.restart();
            return;
        }

        if self.game.is_over() {
            return;
        }

        let clicked = click.and_then(|(x, y)| self.keyboard.letter_at(x, y));
        if let Some(letter) = resolve_letter(input.key_letter(), clicked) {
            self.guess(letter);
        }
    }

    /// Applies one guess and settles the round when it counted.
    #[instrument(skip(self), fields(letter = %letter))]
    pub fn guess(&mut self, letter: Letter) -> GuessResult {
        let result = self.game.apply_guess(letter.as_char());
        debug!(%result, "Guess applied");
        if result == GuessResult::Ignored {
            return result;
        }

        self.keyboard.press(letter);
        self.last_guess = Some((letter, result));

        match self.game.evaluate_outcome() {
            Outcome::Won => debug!(word = %self.game.secret_word(), "Round won"),
            Outcome::Lost => debug!(word = %self.game.secret_word(), "Round lost"),
            Outcome::Ongoing => {}
        }
        result
    }
}
