//! Simple interactive CLI mode
//!
//! Text-based hangman against the engine, reading one letter per turn.

use super::log::{GameLog, discard_log};
use super::setup::{GameConfig, new_game};
use crate::core::Word;
use crate::game::{GameError, GameStatus, HangmanManager};
use crate::output::formatters::{describe_occurrences, format_guesses};
use anyhow::{Result, bail};
use colored::Colorize;
use rand::seq::IteratorRandom;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Options for the console game
#[derive(Debug, Clone)]
pub struct SimpleOptions {
    /// Where to write the per-game result log
    pub log_path: PathBuf,
    /// Keep the log file after the game instead of deleting it
    pub keep_log: bool,
}

/// How a finished console game ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    pub status: GameStatus,
    /// The revealed word on a win, one surviving candidate on a loss
    pub word: Option<String>,
    pub wrong_guesses: u32,
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if the game cannot be set up, no word of the chosen length
/// exists, or reading input or writing the log fails.
pub fn run_simple<R: rand::Rng + ?Sized>(
    words: &[Word],
    config: &GameConfig,
    options: &SimpleOptions,
    rng: &mut R,
) -> Result<()> {
    let mut game = new_game(words, config, rng)?;
    let mut log = GameLog::create(&options.log_path)?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let summary = play_console(&mut game, &mut input, &mut output, Some(&mut log), rng);

    // The log is closed either way; it only survives on request.
    let (status, word) = summary
        .as_ref()
        .map_or((GameStatus::Lost, None), |s| (s.status, s.word.as_deref()));
    let path = log.finish(status, word)?;
    if options.keep_log {
        println!("Game log kept at {}", path.display());
    } else {
        discard_log(&path);
    }

    summary?;
    println!("Thanks for playing Hangman! Goodbye!");
    Ok(())
}

/// Play one game over the given input and output
///
/// Prompts until the game is won or lost. Duplicate guesses are reported and
/// re-prompted without costing a turn.
///
/// # Errors
///
/// Returns an error if the input ends early, writing fails, or the engine
/// rejects a guess for any reason other than a repeated letter.
pub fn play_console<I, O, R>(
    game: &mut HangmanManager,
    input: &mut I,
    output: &mut O,
    mut log: Option<&mut GameLog>,
    rng: &mut R,
) -> Result<GameSummary>
where
    I: BufRead,
    O: Write,
    R: rand::Rng + ?Sized,
{
    writeln!(output, "Welcome to Hangman!")?;
    writeln!(output, "Guess the word by entering letters.")?;
    writeln!(
        output,
        "You have {} wrong guesses remaining.",
        game.guesses_left()
    )?;
    writeln!(output, "Let's begin!")?;
    writeln!(output)?;

    while game.status() == GameStatus::Active {
        writeln!(output, "Guesses left: {}", game.guesses_left())?;
        writeln!(output, "Guessed characters: {}", format_guesses(game.guesses()))?;
        writeln!(output, "Current pattern: {}", game.pattern()?)?;
        write!(output, "Enter your guess: ")?;
        output.flush()?;

        let guess = prompt_letter(input, output)?;
        match game.record(guess) {
            Ok(occurrences) => {
                tracing::debug!(%guess, occurrences, lives = game.guesses_left(), "guess recorded");
                writeln!(output, "{}", describe_occurrences(guess, occurrences))?;
                writeln!(output)?;
                if let Some(log) = log.as_deref_mut() {
                    log.record_guess(guess, occurrences)?;
                }
            }
            Err(GameError::DuplicateGuess(letter)) => {
                writeln!(output, "You already guessed {letter}. Try another letter.")?;
                writeln!(output)?;
            }
            Err(err) => return Err(err.into()),
        }
    }

    let summary = summarize(game, rng);
    report(output, &summary)?;
    Ok(summary)
}

/// Build the end-of-game summary, drawing a random survivor on a loss
pub fn summarize<R: rand::Rng + ?Sized>(game: &HangmanManager, rng: &mut R) -> GameSummary {
    let status = game.status();
    let word = match status {
        GameStatus::Won => game.pattern().ok().and_then(|p| p.revealed_word()),
        _ => game.words().iter().choose(rng).map(|w| w.text().to_string()),
    };

    GameSummary {
        status,
        word,
        wrong_guesses: game.wrong_guesses(),
    }
}

fn report<O: Write>(output: &mut O, summary: &GameSummary) -> Result<()> {
    let word = summary.word.as_deref().unwrap_or("?");
    writeln!(output)?;
    if summary.status == GameStatus::Won {
        writeln!(output, "{}", "Congratulations! You won!".green().bold())?;
        writeln!(output, "The word was: {}", word.bright_yellow().bold())?;
    } else {
        writeln!(
            output,
            "{} {}",
            "You lost! The word was:".red().bold(),
            word.bright_yellow().bold()
        )?;
    }
    Ok(())
}

/// Read lines until one holds exactly one letter, returned lowercased
fn prompt_letter<I: BufRead, O: Write>(input: &mut I, output: &mut O) -> Result<char> {
    loop {
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            bail!("input ended before the game finished");
        }

        let mut chars = line.trim().chars();
        if let (Some(letter), None) = (chars.next(), chars.next())
            && letter.is_ascii_alphabetic()
        {
            return Ok(letter.to_ascii_lowercase());
        }

        write!(output, "Invalid input. Enter a single letter: ")?;
        output.flush()?;
    }
}
