//! Terminal output formatting
//!
//! Display utilities for the line-mode game and the utility commands.

pub mod display;
pub mod formatters;

pub use display::{
    print_board, print_score_result, print_statistics, print_warning, print_word_table,
};
