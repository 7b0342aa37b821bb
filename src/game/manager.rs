//! Evil hangman game state
//!
//! The manager never commits to a secret word. It tracks every dictionary word
//! still consistent with the revealed pattern and answers each guess with the
//! largest surviving word family.

use super::error::GameError;
use super::partition::{Partition, partition};
use crate::core::{Pattern, Word};
use std::collections::BTreeSet;

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Lives remain and at least one cell is hidden
    Active,
    /// Every cell has been revealed
    Won,
    /// Out of lives with cells still hidden
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Active)
    }
}

/// State of one evil hangman game
///
/// Created once per game and mutated only through [`HangmanManager::record`].
#[derive(Debug, Clone)]
pub struct HangmanManager {
    candidates: BTreeSet<Word>,
    pattern: Pattern,
    guessed: BTreeSet<char>,
    lives: u32,
    word_length: usize,
    max_wrong: u32,
}

impl HangmanManager {
    /// Start a game over the dictionary words of exactly `length` letters
    ///
    /// An empty candidate set is accepted here; `pattern` and `record` report
    /// [`GameError::NoCandidates`] for it.
    ///
    /// # Errors
    /// Returns [`GameError::InvalidConfig`] if `length` is 0 or `max_wrong` is
    /// negative.
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::core::Word;
    /// use evil_hangman::game::HangmanManager;
    ///
    /// let dictionary = ["ally", "cool", "good", "hi"].map(|w| Word::new(w).unwrap());
    /// let game = HangmanManager::new(dictionary, 4, 10).unwrap();
    ///
    /// assert_eq!(game.words().len(), 3);
    /// assert_eq!(game.pattern().unwrap().to_string(), "- - - -");
    /// assert_eq!(game.guesses_left(), 10);
    /// ```
    pub fn new(
        dictionary: impl IntoIterator<Item = Word>,
        length: usize,
        max_wrong: i32,
    ) -> Result<Self, GameError> {
        let invalid = GameError::InvalidConfig { length, max_wrong };
        if length < 1 {
            return Err(invalid);
        }
        let max_wrong = u32::try_from(max_wrong).map_err(|_| invalid)?;

        let candidates = dictionary
            .into_iter()
            .filter(|word| word.len() == length)
            .collect();

        Ok(Self {
            candidates,
            pattern: Pattern::hidden(length),
            guessed: BTreeSet::new(),
            lives: max_wrong,
            word_length: length,
            max_wrong,
        })
    }

    /// Same as [`HangmanManager::new`] for a borrowed dictionary
    ///
    /// # Errors
    /// See [`HangmanManager::new`].
    pub fn from_words<'a>(
        dictionary: impl IntoIterator<Item = &'a Word>,
        length: usize,
        max_wrong: i32,
    ) -> Result<Self, GameError> {
        Self::new(
            dictionary
                .into_iter()
                .filter(|word| word.len() == length)
                .cloned(),
            length,
            max_wrong,
        )
    }

    /// Words still consistent with everything revealed so far
    #[inline]
    #[must_use]
    pub const fn words(&self) -> &BTreeSet<Word> {
        &self.candidates
    }

    /// Wrong guesses the player can still make
    #[inline]
    #[must_use]
    pub const fn guesses_left(&self) -> u32 {
        self.lives
    }

    /// Letters guessed so far, in alphabetical order
    #[inline]
    #[must_use]
    pub const fn guesses(&self) -> &BTreeSet<char> {
        &self.guessed
    }

    /// Current reveal pattern
    ///
    /// # Errors
    /// Returns [`GameError::NoCandidates`] if no word of the target length
    /// exists.
    pub fn pattern(&self) -> Result<&Pattern, GameError> {
        if self.candidates.is_empty() {
            return Err(GameError::NoCandidates);
        }
        Ok(&self.pattern)
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[inline]
    #[must_use]
    pub const fn max_wrong_guesses(&self) -> u32 {
        self.max_wrong
    }

    /// Wrong guesses made so far
    #[inline]
    #[must_use]
    pub const fn wrong_guesses(&self) -> u32 {
        self.max_wrong - self.lives
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.pattern.is_complete() {
            GameStatus::Won
        } else if self.lives == 0 {
            GameStatus::Lost
        } else {
            GameStatus::Active
        }
    }

    /// Record a guessed letter and return how many cells it revealed
    ///
    /// The candidates shrink to the largest family for the letter, the pattern
    /// becomes that family's pattern, and a guess revealing nothing costs one
    /// life. Uppercase letters are folded to lowercase.
    ///
    /// # Errors
    /// Checked in this order, each leaving the game untouched:
    /// - [`GameError::NoCandidates`] if no candidates exist
    /// - [`GameError::GuessesExhausted`] if no lives remain
    /// - [`GameError::InvalidLetter`] if `letter` is not an ASCII letter
    /// - [`GameError::DuplicateGuess`] if `letter` was already guessed
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::core::Word;
    /// use evil_hangman::game::HangmanManager;
    ///
    /// let dictionary = ["ally", "cool", "good"].map(|w| Word::new(w).unwrap());
    /// let mut game = HangmanManager::new(dictionary, 4, 10).unwrap();
    ///
    /// assert_eq!(game.record('e').unwrap(), 0);
    /// assert_eq!(game.guesses_left(), 9);
    /// assert_eq!(game.record('o').unwrap(), 2);
    /// assert_eq!(game.pattern().unwrap().to_string(), "- o o -");
    /// ```
    pub fn record(&mut self, letter: char) -> Result<usize, GameError> {
        if self.candidates.is_empty() {
            return Err(GameError::NoCandidates);
        }
        if self.lives < 1 {
            return Err(GameError::GuessesExhausted);
        }
        let letter = self.validate_letter(letter)?;

        let (pattern, words) = partition(&self.candidates, &self.pattern, letter as u8)
            .into_selected()
            .ok_or(GameError::NoCandidates)?;

        let occurrences = self.pattern.diff_count(&pattern);

        self.guessed.insert(letter);
        self.candidates = words;
        self.pattern = pattern;
        if occurrences == 0 {
            self.lives -= 1;
        }

        Ok(occurrences)
    }

    /// The word families `record` would choose between for `letter`
    ///
    /// Does not change the game and ignores remaining lives.
    ///
    /// # Errors
    /// Same as [`HangmanManager::record`], apart from
    /// [`GameError::GuessesExhausted`].
    pub fn preview(&self, letter: char) -> Result<Partition, GameError> {
        if self.candidates.is_empty() {
            return Err(GameError::NoCandidates);
        }
        let letter = self.validate_letter(letter)?;
        Ok(partition(&self.candidates, &self.pattern, letter as u8))
    }

    fn validate_letter(&self, letter: char) -> Result<char, GameError> {
        if !letter.is_ascii_alphabetic() {
            return Err(GameError::InvalidLetter(letter));
        }
        let letter = letter.to_ascii_lowercase();
        if self.guessed.contains(&letter) {
            return Err(GameError::DuplicateGuess(letter));
        }
        Ok(letter)
    }
}
