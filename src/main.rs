//! AI Wordle - CLI
//!
//! Wordle-style game with TUI and CLI modes. Words and validation come from an
//! OpenAI-compatible chat service, with a built-in word list as fallback.

use anyhow::Result;
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use wordle_ai::{
    commands::{GameSetup, ValidatorMode, prepare, run_simple, score_words},
    config::{DEFAULT_MAX_ATTEMPTS, GameConfig, RemoteConfig},
    core::{MAX_WORD_LEN, MIN_WORD_LEN},
    output::{print_score_result, print_statistics, print_warning, print_word_table},
};

#[derive(Parser)]
#[command(
    name = "wordle_ai",
    about = "Wordle-style guessing game with AI-themed words from a language model",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Words: 'remote' (default, language model), 'builtin', or path to file
    #[arg(short = 'w', long, global = true, default_value = "remote")]
    words: String,

    /// How guesses are checked
    #[arg(short = 'v', long, global = true, value_enum, default_value_t = ValidatorMode::Remote)]
    validator: ValidatorMode,

    /// Fixed word length (any length when omitted)
    #[arg(short, long, global = true, value_parser = parse_length)]
    length: Option<usize>,

    /// Guesses per round
    #[arg(short = 'm', long, global = true, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,

    /// API key for the chat service
    #[arg(long, global = true, env = "OPENAI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Base URL of the chat service
    #[arg(long, global = true, env = "OPENAI_BASE_URL", default_value = RemoteConfig::DEFAULT_BASE_URL)]
    api_base: String,

    /// Chat model name
    #[arg(long, global = true, default_value = RemoteConfig::DEFAULT_MODEL)]
    model: String,

    /// Seconds to wait for validation before accepting a guess
    #[arg(long, global = true, default_value_t = 10)]
    timeout_secs: u64,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line, no TUI)
    Simple,

    /// Score a guess against a target
    Score {
        /// The guessed word
        guess: String,

        /// The hidden word
        target: String,
    },

    /// List the words the game would use (filtered by --length)
    Words,
}

fn parse_length(s: &str) -> Result<usize, String> {
    let len: usize = s.parse().map_err(|_| format!("'{s}' is not a number"))?;
    if (MIN_WORD_LEN..=MAX_WORD_LEN).contains(&len) {
        Ok(len)
    } else {
        Err(format!("length must be {MIN_WORD_LEN}-{MAX_WORD_LEN}"))
    }
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            max_attempts: self.max_attempts,
            word_length: self.length,
            validate_timeout: Duration::from_secs(self.timeout_secs),
        }
    }

    fn remote_config(&self) -> Option<RemoteConfig> {
        let api_key = self.api_key.clone()?;
        Some(RemoteConfig {
            base_url: self.api_base.trim_end_matches('/').to_string(),
            model: self.model.clone(),
            ..RemoteConfig::new(api_key)
        })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.as_ref().unwrap_or(&Commands::Play);

    match command {
        Commands::Score { guess, target } => {
            let result = score_words(guess, target).map_err(|e| anyhow::anyhow!(e))?;
            print_score_result(&result.guess, &result.target, &result.feedback);
            Ok(())
        }
        Commands::Words => {
            let setup = load(&cli).await;
            for warning in &setup.warnings {
                print_warning(warning);
            }
            print_word_table(&setup.table, cli.length);
            Ok(())
        }
        Commands::Simple => {
            let setup = load(&cli).await;
            let stats = run_simple(&setup, &cli.game_config())
                .await
                .map_err(|e| anyhow::anyhow!(e))?;
            if stats.games_played > 0 {
                print_statistics(&stats);
            }
            Ok(())
        }
        Commands::Play => run_play_command(&cli).await,
    }
}

/// Load the word table with a spinner while the source responds
async fn load(cli: &Cli) -> GameSetup {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(format!("Loading words ({})...", cli.words));
    spinner.enable_steady_tick(Duration::from_millis(80));

    let setup = prepare(
        &cli.words,
        cli.validator,
        cli.length,
        cli.remote_config().as_ref(),
    )
    .await;
    spinner.finish_and_clear();
    setup
}

async fn run_play_command(cli: &Cli) -> Result<()> {
    use wordle_ai::interactive::{App, run_tui};

    let setup = load(cli).await;
    let app = App::new(setup, cli.game_config()).map_err(|e| anyhow::anyhow!(e))?;
    let stats = run_tui(app).await?;
    if stats.games_played > 0 {
        print_statistics(&stats);
    }
    Ok(())
}
