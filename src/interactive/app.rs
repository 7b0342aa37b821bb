//! TUI application state and logic

use crate::commands::setup::{self, GameConfig};
use crate::commands::simple::summarize;
use crate::core::{Cell, Word};
use crate::game::{GameError, GameStatus, HangmanManager};
use crate::output::formatters::describe_occurrences;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Messages kept on screen
const MESSAGE_LIMIT: usize = 5;

/// Application state
pub struct App<'a> {
    pub words: &'a [Word],
    pub config: GameConfig,
    pub game: HangmanManager,
    pub rng: StdRng,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub input_mode: InputMode,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64
        }
    }
}

impl<'a> App<'a> {
    /// Set up the first game
    ///
    /// # Errors
    ///
    /// Returns an error if the game cannot be set up or no dictionary word has
    /// the chosen length.
    pub fn new(words: &'a [Word], config: GameConfig, mut rng: StdRng) -> Result<Self> {
        let game = start_game(words, &config, &mut rng)?;

        let mut app = Self {
            words,
            config,
            game,
            rng,
            messages: Vec::new(),
            stats: Statistics::default(),
            input_mode: InputMode::Guessing,
            should_quit: false,
        };
        app.greet();
        Ok(app)
    }

    /// Opening messages; a game that starts without lives ends right away
    fn greet(&mut self) {
        self.add_message(
            &format!(
                "Welcome to Hangman! The word has {} letters.",
                self.game.word_length()
            ),
            MessageStyle::Info,
        );
        self.add_message(
            &format!(
                "You have {} wrong guesses remaining. Type a letter to guess.",
                self.game.guesses_left()
            ),
            MessageStyle::Info,
        );

        if self.game.status().is_over() {
            self.finish_game();
        }
    }

    pub fn new_game(&mut self) {
        match start_game(self.words, &self.config, &mut self.rng) {
            Ok(game) => {
                self.game = game;
                self.messages.clear();
                self.input_mode = InputMode::Guessing;
                self.greet();
            }
            Err(err) => {
                tracing::warn!(error = %err, "could not start a new game");
                self.add_message(&format!("{err:#}"), MessageStyle::Error);
            }
        }
    }

    pub fn handle_guess(&mut self, letter: char) {
        match self.game.record(letter) {
            Ok(occurrences) => {
                let style = if occurrences == 0 {
                    MessageStyle::Error
                } else {
                    MessageStyle::Success
                };
                let letter = letter.to_ascii_lowercase();
                self.add_message(&describe_occurrences(letter, occurrences), style);

                if self.game.status().is_over() {
                    self.finish_game();
                }
            }
            Err(GameError::DuplicateGuess(letter)) => {
                self.add_message(
                    &format!("You already guessed {letter}. Try another letter."),
                    MessageStyle::Error,
                );
            }
            Err(GameError::InvalidLetter(_)) => {
                self.add_message("Enter a single letter.", MessageStyle::Error);
            }
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
        }
    }

    fn finish_game(&mut self) {
        let summary = summarize(&self.game, &mut self.rng);
        let word = summary.word.unwrap_or_else(|| "?".to_string());

        self.stats.total_games += 1;
        if summary.status == GameStatus::Won {
            self.stats.games_won += 1;
            self.add_message("Congratulations! You won!", MessageStyle::Success);
            self.add_message(&format!("The word was: {word}"), MessageStyle::Success);
        } else {
            self.add_message(
                &format!("You lost! The word was: {word}"),
                MessageStyle::Error,
            );
        }
        self.add_message("Press 'n' for a new game or 'q' to quit.", MessageStyle::Info);

        tracing::info!(
            status = ?summary.status,
            wrong = summary.wrong_guesses,
            "game finished"
        );
        self.input_mode = InputMode::GameOver;
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Guessing => {
                if let KeyCode::Char(c) = key.code {
                    self.handle_guess(c);
                }
            }
            InputMode::GameOver => match key.code {
                KeyCode::Char('q') => {
                    self.should_quit = true;
                }
                KeyCode::Char('n') => {
                    self.new_game();
                }
                _ => {}
            },
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MESSAGE_LIMIT {
            self.messages.remove(0);
        }
    }

    /// Letters revealed somewhere in the pattern
    #[must_use]
    pub fn is_hit(&self, letter: char) -> bool {
        self.game.pattern().is_ok_and(|pattern| {
            pattern
                .cells()
                .iter()
                .any(|cell| *cell == Cell::Revealed(letter as u8))
        })
    }
}

/// A new game that has at least one candidate
fn start_game(words: &[Word], config: &GameConfig, rng: &mut StdRng) -> Result<HangmanManager> {
    let game = setup::new_game(words, config, rng)?;
    game.pattern()?;
    Ok(game)
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup or restore fails.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
