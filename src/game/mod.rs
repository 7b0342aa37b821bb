//! Evil hangman engine
//!
//! Maintains the candidate words, partitions them into word families for each
//! guess and always answers with the family that keeps the most words alive.
//! Nothing in this module performs I/O or uses randomness.

mod error;
mod manager;
mod partition;
mod selection;


pub use error::GameError;
pub use manager::{GameStatus, HangmanManager};
pub use partition::{Partition, partition};
pub use selection::select_group;
