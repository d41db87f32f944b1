//! UI boundary
//!
//! The controller reports every state change through a `RoundObserver`.
//! Front ends implement it (or hand over a channel sender) to redraw.

use super::{GuessRecord, RoundStatus};
use crate::core::Word;
use crate::warning::Warning;
use std::sync::mpsc;

/// Something that happened to the round
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundEvent {
    LetterAdded(char),
    LetterRemoved,
    SubmitStarted(Word),
    GuessRejected(Word),
    GuessScored {
        record: GuessRecord,
        status: RoundStatus,
    },
    Won {
        attempts: usize,
    },
    Lost {
        target: Word,
    },
    Reset {
        word_length: usize,
    },
    Warning(Warning),
}

/// Receives round events from the controller
pub trait RoundObserver {
    fn notify(&mut self, event: &RoundEvent);
}

impl RoundObserver for mpsc::Sender<RoundEvent> {
    fn notify(&mut self, event: &RoundEvent) {
        // A dropped receiver just means nobody is listening any more
        let _ = self.send(event.clone());
    }
}
