//! Remote language-model word service

mod client;

pub use client::{ChatClient, ChatError, parse_validation_answer, parse_words_payload};
