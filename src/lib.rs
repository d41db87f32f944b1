//! AI Wordle
//!
//! A Wordle-style guessing game whose words come from a language model, with a
//! built-in fallback list.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_ai::core::{Verdict, Word, score};
//!
//! let guess = Word::new("rooer").unwrap();
//! let target = Word::new("error").unwrap();
//!
//! let feedback = score(&guess, &target).unwrap();
//! assert_eq!(feedback.verdicts()[4], Verdict::Correct);
//! assert_eq!(feedback.to_emoji(), "🟨🟨⬜🟨🟩");
//! ```

// Core domain types
pub mod core;

// Round state machine
pub mod game;

// Word lists, sources and validators
pub mod words;

// Remote language-model client
pub mod remote;

// Runtime settings
pub mod config;

// Recoverable warnings
pub mod warning;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
