//! Evil Hangman
//!
//! A hangman opponent that never commits to a secret word. Every guess is
//! answered with the largest family of dictionary words that stays consistent
//! with what has been revealed, so the player is kept guessing as long as
//! possible.
//!
//! # Quick Start
//!
//! ```rust
//! use evil_hangman::core::Word;
//! use evil_hangman::game::HangmanManager;
//!
//! let dictionary = ["ally", "beta", "cool", "deal", "else", "flew", "good", "hope", "ibex"]
//!     .map(|w| Word::new(w).unwrap());
//! let mut game = HangmanManager::new(dictionary, 4, 10).unwrap();
//!
//! // No word survives that would give away an 'e'
//! assert_eq!(game.record('e').unwrap(), 0);
//! assert_eq!(game.words().len(), 3);
//!
//! assert_eq!(game.record('o').unwrap(), 2);
//! assert_eq!(game.pattern().unwrap().to_string(), "- o o -");
//! ```

// Core domain types
pub mod core;

// Adversarial game engine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
