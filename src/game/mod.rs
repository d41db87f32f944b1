//! Round state machine
//!
//! The turn controller, the state it owns, and the observer interface the UI
//! plugs into.

mod controller;
mod observer;
mod state;
mod stats;

pub use controller::{InvalidWord, Submission, TurnController};
pub use observer::{RoundEvent, RoundObserver};
pub use state::{GuessRecord, RoundState, RoundStatus};
pub use stats::Statistics;
