//! Display functions for command results

use super::formatters::{feedback_letters, guess_row, keyboard_lines, pending_row};
use crate::core::{Feedback, KeyboardHints, Word};
use crate::game::{RoundState, Statistics};
use crate::warning::Warning;
use crate::words::WordTable;
use colored::Colorize;

/// Print the result of scoring one guess
pub fn print_score_result(guess: &Word, target: &Word, feedback: &Feedback) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess {} against {}",
        guess.text().bright_white().bold(),
        target.text().bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    println!("\n  {}", guess_row(guess, feedback));
    println!("  {}  {}", feedback.to_emoji(), feedback_letters(feedback));
    println!(
        "\n  Correct: {}   Present: {}",
        feedback.count_correct().to_string().green().bold(),
        feedback.count_present().to_string().yellow().bold()
    );
    if feedback.is_solved() {
        println!("\n{}", "✅ Solved!".green().bold());
    }
}

/// Print a summary of a word table
pub fn print_word_table(table: &WordTable, length: Option<usize>) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "WORD LIST".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let lengths: Vec<usize> = match length {
        Some(len) => vec![len],
        None => table.lengths().collect(),
    };

    for len in lengths {
        let words = table.words_of_length(len);
        println!(
            "\n{} {}",
            format!("{len} letters").bright_cyan().bold(),
            format!("({})", words.len()).bright_black()
        );
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        for chunk in texts.chunks(8) {
            println!("   {}", chunk.join(" "));
        }
    }
    println!("\nTotal: {} words", table.len());
}

/// Print the board so far and the keyboard hints
pub fn print_board(state: &RoundState, hints: &KeyboardHints) {
    println!();
    for record in state.guesses() {
        println!("  {}", guess_row(&record.word, &record.feedback));
    }
    if !state.status().is_finished() {
        println!(
            "  {}",
            pending_row(state.current_guess(), state.word_length()).bright_black()
        );
    }
    println!();
    for line in keyboard_lines(hints) {
        println!("  {line}");
    }
    println!();
}

/// Print a recoverable warning
pub fn print_warning(warning: &Warning) {
    println!("{} {warning}", "⚠".yellow().bold());
}

/// Print session statistics
pub fn print_statistics(stats: &Statistics) {
    println!("\n📈 {}", "Statistics:".bright_cyan().bold());
    println!("   Played:      {}", stats.games_played);
    println!(
        "   Win rate:    {}",
        format!("{:.0}%", stats.win_rate()).bright_yellow().bold()
    );
    println!("   Streak:      {} (max {})", stats.current_streak, stats.max_streak);

    if stats.games_won == 0 {
        return;
    }
    for (&guesses, &count) in &stats.guess_distribution {
        let pct = count as f64 / stats.games_won as f64 * 100.0;
        let bar_width = (pct / 5.0) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(20_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {guesses}: {bar} {count:3}");
    }
}
