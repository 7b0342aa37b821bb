//! Position analysis command
//!
//! Replays a guess history and shows how the adversary would answer every
//! letter still available.

use crate::core::{Pattern, Word};
use crate::game::HangmanManager;
use anyhow::{Context, Result};

/// How the adversary would answer one letter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterAnalysis {
    pub letter: char,
    /// Number of word families the letter splits the candidates into
    pub families: usize,
    /// Size of the family the adversary keeps
    pub remaining: usize,
    /// Pattern shown after the adversary's answer
    pub pattern: Pattern,
    /// Cells the answer reveals; zero costs a life
    pub occurrences: usize,
}

/// Result of analyzing a position
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub length: usize,
    pub pattern: Pattern,
    pub guessed: Vec<char>,
    pub total_candidates: usize,
    /// Unguessed letters, fewest surviving words first
    pub letters: Vec<LetterAnalysis>,
}

/// Analyze the position reached by guessing `history` in order
///
/// The history is replayed with `max_wrong` wrong guesses allowed.
///
/// # Errors
///
/// Returns an error if:
/// - The length or budget is invalid, or no dictionary word has the length
/// - The history repeats a letter or contains a non-letter
/// - The history runs out of wrong guesses before it ends
pub fn analyze_position(
    words: &[Word],
    length: usize,
    max_wrong: i32,
    history: &str,
) -> Result<AnalysisResult> {
    let mut game = HangmanManager::from_words(words, length, max_wrong)?;

    for letter in history.chars().filter(|c| !c.is_whitespace()) {
        game.record(letter)
            .with_context(|| format!("cannot replay guess '{letter}'"))?;
    }

    let pattern = game.pattern()?.clone();

    let mut letters = Vec::new();
    for letter in 'a'..='z' {
        if game.guesses().contains(&letter) {
            continue;
        }

        let families = game.preview(letter)?;
        let family_count = families.len();
        if let Some((chosen, survivors)) = families.into_selected() {
            letters.push(LetterAnalysis {
                letter,
                families: family_count,
                remaining: survivors.len(),
                occurrences: pattern.diff_count(&chosen),
                pattern: chosen,
            });
        }
    }

    letters.sort_by_key(|analysis| (analysis.remaining, analysis.letter));

    Ok(AnalysisResult {
        length,
        pattern,
        guessed: game.guesses().iter().copied().collect(),
        total_candidates: game.words().len(),
        letters,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameError;
    use crate::wordlists::loader::words_from_slice;

    const DICTIONARY: &[&str] = &[
        "ally", "beta", "cool", "deal", "else", "flew", "good", "hope", "ibex",
    ];

    #[test]
    fn analyze_opening_position() {
        let words = words_from_slice(DICTIONARY);
        let result = analyze_position(&words, 4, 10, "").unwrap();

        assert_eq!(result.total_candidates, 9);
        assert_eq!(result.pattern, Pattern::hidden(4));
        assert!(result.guessed.is_empty());
        assert_eq!(result.letters.len(), 26);

        let e = result.letters.iter().find(|a| a.letter == 'e').unwrap();
        assert_eq!(e.families, 5);
        assert_eq!(e.remaining, 3);
        assert_eq!(e.occurrences, 0);
    }

    #[test]
    fn analyze_after_history() {
        let words = words_from_slice(DICTIONARY);
        let result = analyze_position(&words, 4, 10, "e o").unwrap();

        assert_eq!(result.pattern.to_string(), "- o o -");
        assert_eq!(result.guessed, vec!['e', 'o']);
        assert_eq!(result.total_candidates, 2);
        assert_eq!(result.letters.len(), 24);

        let d = result.letters.iter().find(|a| a.letter == 'd').unwrap();
        assert_eq!(d.families, 2);
        assert_eq!(d.remaining, 1);
        assert_eq!(d.pattern.to_string(), "- o o -");
        assert_eq!(d.occurrences, 0);
    }

    #[test]
    fn letters_sorted_by_remaining_then_letter() {
        let words = words_from_slice(DICTIONARY);
        let result = analyze_position(&words, 4, 10, "").unwrap();

        let keys: Vec<(usize, char)> = result
            .letters
            .iter()
            .map(|a| (a.remaining, a.letter))
            .collect();
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn analyze_rejects_repeated_history() {
        let words = words_from_slice(DICTIONARY);
        let err = analyze_position(&words, 4, 10, "ee").unwrap_err();
        assert_eq!(
            err.downcast_ref::<GameError>(),
            Some(&GameError::DuplicateGuess('e'))
        );
    }

    #[test]
    fn analyze_missing_length() {
        let words = words_from_slice(DICTIONARY);
        let err = analyze_position(&words, 9, 10, "").unwrap_err();
        assert_eq!(err.downcast_ref::<GameError>(), Some(&GameError::NoCandidates));
    }

    #[test]
    fn analyze_replays_within_budget() {
        let words = words_from_slice(DICTIONARY);
        // 'e' misses and costs the only life
        let err = analyze_position(&words, 4, 1, "ex").unwrap_err();
        assert_eq!(
            err.downcast_ref::<GameError>(),
            Some(&GameError::GuessesExhausted)
        );

        let result = analyze_position(&words, 4, 2, "e").unwrap();
        assert_eq!(result.total_candidates, 3);
    }

    #[test]
    fn analyze_rejects_negative_budget() {
        let words = words_from_slice(DICTIONARY);
        let err = analyze_position(&words, 4, -1, "").unwrap_err();
        assert_eq!(
            err.downcast_ref::<GameError>(),
            Some(&GameError::InvalidConfig {
                length: 4,
                max_wrong: -1
            })
        );
    }
}
