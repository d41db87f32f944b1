//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: one guess per line.

use super::setup::{GameSetup, pick_target};
use crate::config::GameConfig;
use crate::game::{InvalidWord, RoundStatus, Statistics, TurnController};
use crate::output::{print_board, print_statistics, print_warning};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::time::Duration;

/// Run the simple interactive CLI mode
///
/// Returns the statistics of every finished round.
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if the word
/// table has no word of the configured length.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub async fn run_simple(setup: &GameSetup, config: &GameConfig) -> Result<Statistics, String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    AI Wordle - Simple Mode                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the hidden AI term. After each guess:");
    println!("  - {} letter in the right spot", "green".green().bold());
    println!("  - {} letter elsewhere in the word", "yellow".yellow().bold());
    println!("  - {} letter not in the word\n", "gray".bright_black());
    println!(
        "Words: {} ({} loaded) | Validator: {}",
        setup.source_name,
        setup.table.len(),
        setup.validator.name()
    );
    println!("Commands: 'quit' to exit, 'new' to give up and start over\n");

    for warning in &setup.warnings {
        print_warning(warning);
    }

    let mut rng = rand::rng();
    let mut stats = Statistics::default();
    let target = pick_target(&setup.table, config.word_length, &mut rng)?;
    let mut controller = TurnController::new(target, config);

    loop {
        let state = controller.state();
        println!("────────────────────────────────────────────────────────────");
        println!(
            "Guess {}/{}: {} letters",
            state.current_row() + 1,
            state.max_attempts(),
            state.word_length()
        );
        println!("────────────────────────────────────────────────────────────");
        print_board(state, controller.hints());

        let input = get_user_input("Your guess")?;
        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(stats);
            }
            "new" | "n" => {
                println!(
                    "\nThe word was {}",
                    controller.state().target().text().bright_yellow().bold()
                );
                controller.reset_round(pick_target(&setup.table, config.word_length, &mut rng)?);
                println!("\n🔄 New game started!\n");
                continue;
            }
            _ => {}
        }

        if let Err(msg) = type_guess(&mut controller, &input) {
            println!("❌ {msg}\n");
            continue;
        }

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .map_err(|e| e.to_string())?,
        );
        spinner.set_message(format!("Checking {}...", input.to_uppercase()));
        spinner.enable_steady_tick(Duration::from_millis(80));

        let result = controller.submit_guess(&setup.validator).await;
        spinner.finish_and_clear();

        match result {
            Ok(Some(submission)) => {
                if let Some(warning) = &submission.warning {
                    print_warning(warning);
                }
            }
            Ok(None) => continue,
            Err(InvalidWord(word)) => {
                println!("❌ {} is not an accepted word. Try again.\n", word.text().bold());
                clear_guess(&mut controller);
                continue;
            }
        }

        let status = controller.status();
        if !status.is_finished() {
            continue;
        }

        print_board(controller.state(), controller.hints());
        print_outcome(&controller, status);
        stats.record(controller.state());
        print_statistics(&stats);

        match get_user_input("\nPlay again? (yes/no)")?
            .to_lowercase()
            .as_str()
        {
            "yes" | "y" => {
                controller.reset_round(pick_target(&setup.table, config.word_length, &mut rng)?);
                println!("\n🔄 New game started!\n");
            }
            _ => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(stats);
            }
        }
    }
}

/// Replace the typed letters with `input`
///
/// # Errors
///
/// Returns a message for the player if `input` is not a full-length guess.
fn type_guess(controller: &mut TurnController, input: &str) -> Result<(), String> {
    let word_length = controller.state().word_length();
    if !input.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err("Letters only, please".to_string());
    }
    if input.len() != word_length {
        return Err(format!("Guess must be {word_length} letters"));
    }

    clear_guess(controller);
    for ch in input.chars() {
        controller.add_letter(ch);
    }
    Ok(())
}

fn clear_guess(controller: &mut TurnController) {
    while controller.remove_letter() {}
}

fn print_outcome(controller: &TurnController, status: RoundStatus) {
    let state = controller.state();
    println!("{}", "═".repeat(70).bright_cyan());
    if status == RoundStatus::Won {
        let turn = state.current_row();
        let performance = match turn {
            1 => "🏆 Perfect! Hole in one!",
            2 => "⭐ Excellent!",
            3 => "💫 Great!",
            4 => "✨ Good!",
            _ => "👍 Solved!",
        };
        println!("  {}", performance.bright_yellow().bold());
        println!(
            "  Solved in {} {}",
            turn.to_string().bright_cyan().bold(),
            if turn == 1 { "guess" } else { "guesses" }
        );
    } else {
        println!("  {}", "Out of guesses!".red().bold());
        println!(
            "  The word was {}",
            state.target().text().bright_yellow().bold()
        );
    }

    println!("\n  Guess history:");
    for (i, record) in state.guesses().iter().enumerate() {
        println!(
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            record.word.text().bright_white().bold(),
            record.feedback.to_emoji()
        );
    }
    println!("{}", "═".repeat(70).bright_cyan());
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;
    if read == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}
