//! Command implementations

pub mod analyze;
pub mod log;
pub mod setup;
pub mod simple;
pub mod simulate;

pub use analyze::{AnalysisResult, LetterAnalysis, analyze_position};
pub use log::{DEFAULT_LOG_FILE, GameLog};
pub use setup::{DEFAULT_MAX_WRONG, GameConfig, make_rng, new_game};
pub use simple::{GameSummary, SimpleOptions, run_simple};
pub use simulate::{FrequencyPlayer, GameRecord, SimulationResult, run_simulation};
