//! Command implementations

pub mod score;
pub mod setup;
pub mod simple;

pub use score::{ScoreResult, score_words};
pub use setup::{GameSetup, ValidatorMode, pick_target, prepare, source_from_name, validator_for};
pub use simple::run_simple;
