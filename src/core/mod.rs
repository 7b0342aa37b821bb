//! Core domain types for hangman
//!
//! This module contains the fundamental domain types: validated words and
//! the positional reveal pattern. Everything here is pure and deterministic.

mod pattern;
mod word;

pub use pattern::{CELL_DELIMITER, Cell, HIDDEN_CELL, Pattern, PatternError};
pub use word::{Word, WordError};
