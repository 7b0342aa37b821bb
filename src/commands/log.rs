//! Per-game result log
//!
//! Appends each guess and its outcome to a text file while a console game
//! runs, followed by the final result.

use crate::game::GameStatus;
use crate::output::formatters::describe_occurrences;
use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Default log file name, created in the working directory
pub const DEFAULT_LOG_FILE: &str = "game_results.txt";

/// Open result log for one game
pub struct GameLog {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl GameLog {
    /// Create (or truncate) the log file at `path`
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created.
    pub fn create(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = File::create(&path)
            .with_context(|| format!("failed to create game log {}", path.display()))?;
        tracing::debug!(path = %path.display(), "game log created");

        Ok(Self {
            path,
            writer: BufWriter::new(file),
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one guess and its outcome
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the file fails.
    pub fn record_guess(&mut self, letter: char, occurrences: usize) -> Result<()> {
        writeln!(self.writer, "Your guess: {letter}")?;
        writeln!(self.writer, "{}", describe_occurrences(letter, occurrences))?;
        writeln!(self.writer)?;
        Ok(())
    }

    /// Append the final result, flush, and close the file
    ///
    /// Returns the path of the finished log.
    ///
    /// # Errors
    ///
    /// Returns an error if writing or flushing fails.
    pub fn finish(mut self, status: GameStatus, word: Option<&str>) -> Result<PathBuf> {
        let result = if status == GameStatus::Won { "Win" } else { "Loss" };
        writeln!(self.writer, "Game result: {result}")?;
        writeln!(self.writer, "The word was: {}", word.unwrap_or("?"))?;
        self.writer
            .flush()
            .with_context(|| format!("failed to write game log {}", self.path.display()))?;
        Ok(self.path)
    }
}

/// Delete a finished log, warning instead of failing if it cannot be removed
pub fn discard_log(path: &Path) {
    if !path.exists() {
        return;
    }
    match fs::remove_file(path) {
        Ok(()) => tracing::debug!(path = %path.display(), "game log deleted"),
        Err(err) => tracing::warn!(path = %path.display(), %err, "failed to delete game log"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_records_guesses_and_result() {
        let dir = tempfile::tempdir().unwrap();
        let mut log = GameLog::create(dir.path().join("log.txt")).unwrap();

        log.record_guess('e', 0).unwrap();
        log.record_guess('o', 2).unwrap();
        log.record_guess('d', 1).unwrap();
        let path = log.finish(GameStatus::Lost, Some("cool")).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "Your guess: e\nSorry, there are no e's\n\n\
             Your guess: o\nYes, there are 2 o's\n\n\
             Your guess: d\nYes, there is one d\n\n\
             Game result: Loss\nThe word was: cool\n"
        );
    }

    #[test]
    fn log_records_win() {
        let dir = tempfile::tempdir().unwrap();
        let log = GameLog::create(dir.path().join("log.txt")).unwrap();
        let path = log.finish(GameStatus::Won, Some("zzzz")).unwrap();

        let content = fs::read_to_string(path).unwrap();
        assert!(content.starts_with("Game result: Win\n"));
    }

    #[test]
    fn create_truncates_existing_log() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.txt");
        fs::write(&path, "stale contents\n").unwrap();

        let log = GameLog::create(&path).unwrap();
        log.finish(GameStatus::Won, Some("a")).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(!content.contains("stale"));
    }

    #[test]
    fn discard_removes_log() {
        let dir = tempfile::tempdir().unwrap();
        let log = GameLog::create(dir.path().join("log.txt")).unwrap();
        let path = log.finish(GameStatus::Lost, None).unwrap();
        assert!(path.exists());

        discard_log(&path);
        assert!(!path.exists());
        // Second call on a missing file is a no-op.
        discard_log(&path);
    }

    #[test]
    fn create_fails_in_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(GameLog::create(dir.path().join("missing").join("log.txt")).is_err());
    }
}
