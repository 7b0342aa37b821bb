//! Game setup shared by the drivers
//!
//! Picks the target word length and builds the engine. All randomness used by
//! the drivers comes from here.

use crate::core::Word;
use crate::game::HangmanManager;
use anyhow::{Context, Result, bail};
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;

/// Default number of wrong guesses allowed
pub const DEFAULT_MAX_WRONG: i32 = 7;

/// How a new game is configured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Target word length; chosen at random when `None`
    pub length: Option<usize>,
    /// Wrong guesses allowed
    pub max_wrong: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            length: None,
            max_wrong: DEFAULT_MAX_WRONG,
        }
    }
}

/// Random source for the drivers, reproducible when seeded
#[must_use]
pub fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

/// Length of a random dictionary entry
///
/// Lengths shared by many words come up more often. Returns `None` for an
/// empty dictionary.
pub fn choose_length<R: rand::Rng + ?Sized>(words: &[Word], rng: &mut R) -> Option<usize> {
    words.choose(rng).map(Word::len)
}

/// Build a game from the dictionary and configuration
///
/// # Errors
///
/// Fails if no length was given and the dictionary is empty, or if the
/// configuration is rejected by the engine.
pub fn new_game<R: rand::Rng + ?Sized>(
    words: &[Word],
    config: &GameConfig,
    rng: &mut R,
) -> Result<HangmanManager> {
    let length = match config.length {
        Some(length) => length,
        None => match choose_length(words, rng) {
            Some(length) => length,
            None => bail!("the dictionary is empty"),
        },
    };

    let game = HangmanManager::from_words(words, length, config.max_wrong)
        .context("failed to start a new game")?;

    tracing::debug!(
        length,
        max_wrong = config.max_wrong,
        candidates = game.words().len(),
        "new game"
    );

    Ok(game)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameError;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn choose_length_picks_existing_length() {
        let words = words_from_slice(&["ally", "cat", "hello"]);
        let mut rng = make_rng(Some(7));
        for _ in 0..20 {
            let length = choose_length(&words, &mut rng).unwrap();
            assert!([3, 4, 5].contains(&length));
        }
    }

    #[test]
    fn choose_length_empty_dictionary() {
        let mut rng = make_rng(Some(1));
        assert_eq!(choose_length(&[], &mut rng), None);
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let words = words_from_slice(&["a", "to", "cat", "ally", "hello", "planet"]);
        let first: Vec<usize> = {
            let mut rng = make_rng(Some(42));
            (0..10).filter_map(|_| choose_length(&words, &mut rng)).collect()
        };
        let second: Vec<usize> = {
            let mut rng = make_rng(Some(42));
            (0..10).filter_map(|_| choose_length(&words, &mut rng)).collect()
        };
        assert_eq!(first, second);
    }

    #[test]
    fn new_game_uses_explicit_length() {
        let words = words_from_slice(&["ally", "cat", "good"]);
        let config = GameConfig {
            length: Some(4),
            max_wrong: 3,
        };
        let game = new_game(&words, &config, &mut make_rng(Some(0))).unwrap();
        assert_eq!(game.word_length(), 4);
        assert_eq!(game.words().len(), 2);
        assert_eq!(game.guesses_left(), 3);
    }

    #[test]
    fn new_game_random_length_has_candidates() {
        let words = words_from_slice(&["ally", "cat", "hello"]);
        let game = new_game(&words, &GameConfig::default(), &mut make_rng(Some(3))).unwrap();
        assert!(!game.words().is_empty());
        assert_eq!(game.guesses_left(), 7);
    }

    #[test]
    fn new_game_rejects_empty_dictionary() {
        let err = new_game(&[], &GameConfig::default(), &mut make_rng(Some(0))).unwrap_err();
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn new_game_surfaces_invalid_config() {
        let words = words_from_slice(&["ally"]);
        let config = GameConfig {
            length: Some(4),
            max_wrong: -1,
        };
        let err = new_game(&words, &config, &mut make_rng(Some(0))).unwrap_err();
        assert_eq!(
            err.downcast_ref::<GameError>(),
            Some(&GameError::InvalidConfig {
                length: 4,
                max_wrong: -1
            })
        );
    }
}
