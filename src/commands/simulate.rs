//! Automated play against the engine
//!
//! Plays one game per word length with a letter-frequency player and collects
//! win/loss statistics.

use crate::core::Word;
use crate::game::{GameStatus, HangmanManager};
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Player that guesses the letter found in the most remaining candidates
///
/// Each candidate counts a letter once however often it appears. Ties go to
/// the alphabetically first letter.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrequencyPlayer;

impl FrequencyPlayer {
    /// Next letter to guess, or `None` if no candidate has an unguessed letter
    #[must_use]
    pub fn next_guess(&self, game: &HangmanManager) -> Option<char> {
        let mut counts: FxHashMap<u8, usize> = FxHashMap::default();
        for word in game.words() {
            for letter in word.distinct_letters() {
                if !game.guesses().contains(&char::from(letter)) {
                    *counts.entry(letter).or_insert(0) += 1;
                }
            }
        }

        counts
            .into_iter()
            .max_by(|(a_letter, a_count), (b_letter, b_count)| {
                a_count.cmp(b_count).then_with(|| b_letter.cmp(a_letter))
            })
            .map(|(letter, _)| char::from(letter))
    }
}

/// Outcome of one automated game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub length: usize,
    pub status: GameStatus,
    pub guesses: Vec<char>,
    pub wrong_guesses: u32,
    /// Candidates left when the game ended
    pub remaining: usize,
}

/// Statistics over all simulated games
#[derive(Debug)]
pub struct SimulationResult {
    /// One record per length, in ascending length order
    pub records: Vec<GameRecord>,
    pub wins: usize,
    pub losses: usize,
    pub duration: Duration,
}

impl SimulationResult {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        let total = self.wins + self.losses;
        if total == 0 {
            0.0
        } else {
            self.wins as f64 / total as f64
        }
    }
}

/// Play a game to the end with the frequency player
///
/// # Errors
///
/// Returns an error if the engine rejects a guess.
pub fn play_automated(mut game: HangmanManager, player: FrequencyPlayer) -> Result<GameRecord> {
    let mut guesses = Vec::new();

    while game.status() == GameStatus::Active && !game.words().is_empty() {
        let Some(letter) = player.next_guess(&game) else {
            break;
        };
        game.record(letter)?;
        guesses.push(letter);
    }

    let record = GameRecord {
        length: game.word_length(),
        status: game.status(),
        guesses,
        wrong_guesses: game.wrong_guesses(),
        remaining: game.words().len(),
    };
    tracing::debug!(
        length = record.length,
        status = ?record.status,
        wrong = record.wrong_guesses,
        "simulated game finished"
    );

    Ok(record)
}

/// Word lengths ordered by how many dictionary words have them
///
/// Most common first; ties go to the shorter length.
#[must_use]
pub fn lengths_by_frequency(words: &[Word]) -> Vec<(usize, usize)> {
    let mut counts: FxHashMap<usize, usize> = FxHashMap::default();
    for word in words {
        *counts.entry(word.len()).or_insert(0) += 1;
    }

    let mut lengths: Vec<(usize, usize)> = counts.into_iter().collect();
    lengths.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    lengths
}

/// Play one game per word length, in parallel
///
/// With `limit`, only the most common lengths are played.
///
/// # Errors
///
/// Returns an error if `max_wrong` is negative or a game fails.
///
/// # Panics
///
/// Panics if the progress bar template is invalid.
pub fn run_simulation(
    words: &[Word],
    max_wrong: i32,
    limit: Option<usize>,
    show_progress: bool,
) -> Result<SimulationResult> {
    let mut lengths: Vec<usize> = lengths_by_frequency(words)
        .into_iter()
        .map(|(length, _)| length)
        .collect();
    if let Some(limit) = limit {
        lengths.truncate(limit);
    }

    let pb = if show_progress {
        let pb = ProgressBar::new(lengths.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap()
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();

    let mut records = lengths
        .par_iter()
        .map(|&length| {
            let game = HangmanManager::from_words(words, length, max_wrong)?;
            let record = play_automated(game, FrequencyPlayer);
            pb.inc(1);
            record
        })
        .collect::<Result<Vec<_>>>()?;

    pb.finish_with_message("Complete!");
    records.sort_by_key(|record| record.length);

    let wins = records
        .iter()
        .filter(|record| record.status == GameStatus::Won)
        .count();

    Ok(SimulationResult {
        losses: records.len() - wins,
        wins,
        records,
        duration: start.elapsed(),
    })
}
