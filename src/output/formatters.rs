//! Formatting utilities for terminal output

use crate::core::{Feedback, KeyboardHints, Verdict, Word};
use colored::{ColoredString, Colorize};

/// Keyboard rows in QWERTY order
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Render one letter as a colored tile
#[must_use]
pub fn letter_tile(letter: char, verdict: Verdict) -> ColoredString {
    let tile = format!(" {letter} ");
    match verdict {
        Verdict::Correct => tile.black().on_green().bold(),
        Verdict::Present => tile.black().on_yellow().bold(),
        Verdict::Absent => tile.white().on_bright_black(),
    }
}

/// Render a scored guess as a row of colored tiles
#[must_use]
pub fn guess_row(word: &Word, feedback: &Feedback) -> String {
    word.text()
        .chars()
        .zip(feedback.verdicts())
        .map(|(letter, &verdict)| letter_tile(letter, verdict).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render an unsubmitted row: typed letters then blanks
#[must_use]
pub fn pending_row(typed: &str, word_length: usize) -> String {
    typed
        .chars()
        .map(|c| format!("[{c}]"))
        .chain(std::iter::repeat_n("[ ]".to_string(), word_length.saturating_sub(typed.len())))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render the keyboard with each letter colored by its hint
#[must_use]
pub fn keyboard_lines(hints: &KeyboardHints) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: Vec<String> = row
                .chars()
                .map(|letter| match hints.get(letter) {
                    Some(Verdict::Correct) => letter.to_string().green().bold().to_string(),
                    Some(Verdict::Present) => letter.to_string().yellow().bold().to_string(),
                    Some(Verdict::Absent) => letter.to_string().bright_black().to_string(),
                    None => letter.to_string(),
                })
                .collect();
            format!("{}{}", " ".repeat(indent), keys.join(" "))
        })
        .collect()
}

/// Plain `G`/`Y`/`-` string for a feedback
#[must_use]
pub fn feedback_letters(feedback: &Feedback) -> String {
    feedback
        .verdicts()
        .iter()
        .map(|v| match v {
            Verdict::Correct => 'G',
            Verdict::Present => 'Y',
            Verdict::Absent => '-',
        })
        .collect()
}
