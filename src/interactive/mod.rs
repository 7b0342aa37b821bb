//! Interactive TUI interface

pub mod app;
mod rendering;

pub use app::{App, run_tui};
