//! Hangman reveal pattern representation
//!
//! A pattern holds one cell per letter of the target length. Each cell is
//! either hidden or shows a revealed letter. Rendered, hidden cells display as
//! `-` and cells are separated by a single space, so an untouched four letter
//! pattern reads `- - - -` and revealing `o` in "cool" gives `- o o -`.
//!
//! Patterns order cell by cell with hidden cells before any letter. For two
//! patterns of the same length this matches the ordering of their rendered
//! strings, since `-` sorts before every lowercase letter.

use super::Word;
use std::fmt;
use thiserror::Error;

/// Display character for a hidden cell
pub const HIDDEN_CELL: char = '-';

/// Separator between rendered cells
pub const CELL_DELIMITER: char = ' ';

/// A single position of a pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Cell {
    /// Not yet revealed
    Hidden,
    /// Revealed lowercase ASCII letter
    Revealed(u8),
}

impl Cell {
    #[inline]
    #[must_use]
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }

    /// Character used when rendering this cell
    #[must_use]
    pub fn display_char(self) -> char {
        match self {
            Self::Hidden => HIDDEN_CELL,
            Self::Revealed(letter) => char::from(letter),
        }
    }
}

/// Error type for unparseable pattern strings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("Pattern must contain at least one cell")]
    Empty,
    #[error("Invalid pattern cell: {0:?}")]
    InvalidCell(String),
}

/// Per-position reveal state of the target word
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pattern {
    cells: Vec<Cell>,
}

impl Pattern {
    /// Pattern of `len` hidden cells
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::core::Pattern;
    ///
    /// assert_eq!(Pattern::hidden(4).to_string(), "- - - -");
    /// ```
    #[must_use]
    pub fn hidden(len: usize) -> Self {
        Self {
            cells: vec![Cell::Hidden; len],
        }
    }

    /// Build a pattern from explicit cells
    #[must_use]
    pub const fn from_cells(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    /// The pattern produced by revealing every occurrence of `letter` in `word`
    ///
    /// Cells revealed earlier are left untouched. `word` is expected to have
    /// the same length as the pattern; positions beyond the pattern are ignored.
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::core::{Pattern, Word};
    ///
    /// let word = Word::new("cool").unwrap();
    /// let pattern = Pattern::hidden(4).reveal(&word, b'o');
    /// assert_eq!(pattern.to_string(), "- o o -");
    /// assert_eq!(pattern.reveal(&word, b'l').to_string(), "- o o l");
    /// ```
    #[must_use]
    pub fn reveal(&self, word: &Word, letter: u8) -> Self {
        let mut cells = self.cells.clone();
        for &position in word.positions_of(letter) {
            if let Some(cell) = cells.get_mut(position)
                && cell.is_hidden()
            {
                *cell = Cell::Revealed(letter);
            }
        }
        Self { cells }
    }

    /// Number of positions at which two patterns differ
    ///
    /// Applied to the patterns before and after a guess this is the number of
    /// newly revealed cells. Extra cells of a longer pattern count as
    /// differences.
    #[must_use]
    pub fn diff_count(&self, other: &Self) -> usize {
        let shared = self
            .cells
            .iter()
            .zip(&other.cells)
            .filter(|(a, b)| a != b)
            .count();
        shared + self.cells.len().abs_diff(other.cells.len())
    }

    /// Number of cells
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of cells still hidden
    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_hidden()).count()
    }

    /// True once no hidden cell remains
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_hidden())
    }

    /// Check whether `word` could sit behind this pattern
    ///
    /// Revealed cells must match the word's letter, and hidden cells must not
    /// hold any letter in `guessed`.
    #[must_use]
    pub fn matches(&self, word: &Word, guessed: impl Fn(u8) -> bool) -> bool {
        word.len() == self.len()
            && self
                .cells
                .iter()
                .zip(word.chars())
                .all(|(cell, &letter)| match *cell {
                    Cell::Hidden => !guessed(letter),
                    Cell::Revealed(shown) => shown == letter,
                })
    }

    /// The word spelled out by a fully revealed pattern
    ///
    /// Returns `None` while any cell is hidden.
    #[must_use]
    pub fn revealed_word(&self) -> Option<String> {
        self.cells
            .iter()
            .map(|cell| match *cell {
                Cell::Hidden => None,
                Cell::Revealed(letter) => Some(char::from(letter)),
            })
            .collect()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 {
                write!(f, "{CELL_DELIMITER}")?;
            }
            write!(f, "{}", cell.display_char())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Pattern {
    type Err = PatternError;

    /// Parse a rendered pattern like `"- o o -"`
    ///
    /// Hidden cells may be written `-` or `_`; letters are case-folded.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .split_whitespace()
            .map(|token| {
                let mut chars = token.chars();
                match (chars.next(), chars.next()) {
                    (Some('-' | '_'), None) => Ok(Cell::Hidden),
                    (Some(ch), None) if ch.is_ascii_alphabetic() => {
                        Ok(Cell::Revealed(ch.to_ascii_lowercase() as u8))
                    }
                    _ => Err(PatternError::InvalidCell(token.to_string())),
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        if cells.is_empty() {
            return Err(PatternError::Empty);
        }

        Ok(Self { cells })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn hidden_pattern_renders_placeholders() {
        assert_eq!(Pattern::hidden(1).to_string(), "-");
        assert_eq!(Pattern::hidden(4).to_string(), "- - - -");
        assert_eq!(Pattern::hidden(4).hidden_count(), 4);
        assert!(!Pattern::hidden(4).is_complete());
    }

    #[test]
    fn reveal_marks_every_occurrence() {
        let pattern = Pattern::hidden(4).reveal(&word("good"), b'o');
        assert_eq!(pattern.to_string(), "- o o -");
        assert_eq!(pattern.hidden_count(), 2);
    }

    #[test]
    fn reveal_missing_letter_is_unchanged() {
        let start = Pattern::hidden(4);
        let pattern = start.reveal(&word("ally"), b'e');
        assert_eq!(pattern, start);
        assert_eq!(start.diff_count(&pattern), 0);
    }

    #[test]
    fn reveal_never_overwrites_revealed_cells() {
        let revealed = Pattern::from_cells(vec![
            Cell::Revealed(b'x'),
            Cell::Hidden,
            Cell::Hidden,
            Cell::Hidden,
        ]);
        // "good" has a 'g' at position 0, but that cell already shows 'x'.
        let pattern = revealed.reveal(&word("good"), b'g');
        assert_eq!(pattern.to_string(), "x - - -");
    }

    #[test]
    fn diff_count_counts_new_cells() {
        let before = Pattern::hidden(4);
        let after = before.reveal(&word("cool"), b'o');
        assert_eq!(before.diff_count(&after), 2);
        assert_eq!(after.diff_count(&before), 2);
        assert_eq!(after.diff_count(&after), 0);
    }

    #[test]
    fn completes_when_all_letters_revealed() {
        let w = word("ally");
        let pattern = [b'a', b'l', b'y']
            .iter()
            .fold(Pattern::hidden(4), |p, &letter| p.reveal(&w, letter));
        assert!(pattern.is_complete());
        assert_eq!(pattern.to_string(), "a l l y");
        assert_eq!(pattern.revealed_word().as_deref(), Some("ally"));
    }

    #[test]
    fn revealed_word_none_while_hidden() {
        let pattern = Pattern::hidden(3).reveal(&word("abc"), b'a');
        assert_eq!(pattern.revealed_word(), None);
    }

    #[test]
    fn ordering_matches_rendered_strings() {
        let patterns: Vec<Pattern> = ["- - - -", "- o o -", "a - - -", "- - - y", "- o - -"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();

        let mut by_cells = patterns.clone();
        by_cells.sort();
        let mut by_text = patterns;
        by_text.sort_by_key(ToString::to_string);

        assert_eq!(by_cells, by_text);
    }

    #[test]
    fn matches_checks_revealed_and_guessed() {
        let pattern: Pattern = "- o o -".parse().unwrap();
        let guessed = |letter: u8| matches!(letter, b'o' | b'e');

        assert!(pattern.matches(&word("cool"), guessed));
        assert!(pattern.matches(&word("good"), guessed));
        // Third 'o' would have been revealed.
        assert!(!pattern.matches(&word("oooo"), guessed));
        // Contains a guessed letter in a hidden cell.
        assert!(!pattern.matches(&word("eooe"), guessed));
        assert!(!pattern.matches(&word("ally"), guessed));
        assert!(!pattern.matches(&word("cools"), guessed));
    }

    #[test]
    fn parse_round_trips_display() {
        let pattern: Pattern = "- O o _".parse().unwrap();
        assert_eq!(pattern.to_string(), "- o o -");
    }

    #[test]
    fn parse_rejects_invalid_cells() {
        assert_eq!("".parse::<Pattern>(), Err(PatternError::Empty));
        assert_eq!(
            "- 1 -".parse::<Pattern>(),
            Err(PatternError::InvalidCell("1".to_string()))
        );
        assert_eq!(
            "-- o".parse::<Pattern>(),
            Err(PatternError::InvalidCell("--".to_string()))
        );
    }
}
