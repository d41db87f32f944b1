//! Game setup
//!
//! Resolves the word source and validator chosen on the command line into
//! concrete implementations, applying the fallbacks when the remote service
//! is not configured.

use crate::config::RemoteConfig;
use crate::core::Word;
use crate::remote::ChatClient;
use crate::warning::Warning;
use crate::words::{
    AcceptAll, BuiltinSource, FileSource, Source, TableValidator, Validator, WordTable,
    load_word_table,
};
use clap::ValueEnum;
use log::warn;
use rand::Rng;

/// Everything a front end needs to start playing
pub struct GameSetup {
    pub table: WordTable,
    pub validator: Validator,
    pub source_name: &'static str,
    pub warnings: Vec<Warning>,
}

/// Build a remote client if a key is configured
fn remote_client(remote: Option<&RemoteConfig>) -> Result<ChatClient, String> {
    let config = remote
        .filter(|c| !c.api_key.is_empty())
        .ok_or_else(|| "no API key configured".to_string())?;
    ChatClient::new(config.clone()).map_err(|e| e.to_string())
}

/// Choose the word source
///
/// Supported modes: "builtin", "remote" (default) or a path to a word file.
/// A remote source without a usable client degrades to the built-in list.
#[must_use]
pub fn source_from_name(mode: &str, remote: Option<&RemoteConfig>) -> (Source, Option<Warning>) {
    match mode {
        "builtin" => (Source::Builtin(BuiltinSource), None),
        "remote" => match remote_client(remote) {
            Ok(client) => (Source::Remote(client), None),
            Err(reason) => {
                warn!("remote word source disabled: {reason}");
                (
                    Source::Builtin(BuiltinSource),
                    Some(Warning::WordSourceUnavailable { reason }),
                )
            }
        },
        path => (Source::File(FileSource::new(path)), None),
    }
}

/// How submitted guesses are checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ValidatorMode {
    /// Ask the language model
    #[default]
    Remote,
    /// Accept only words in the loaded word list
    Table,
    /// Accept every well-formed word
    Accept,
}

/// Choose the validator
///
/// The table validator checks membership in `table`. A remote validator
/// without a usable client accepts every word.
#[must_use]
pub fn validator_for(
    mode: ValidatorMode,
    table: &WordTable,
    remote: Option<&RemoteConfig>,
) -> Validator {
    match mode {
        ValidatorMode::Table => Validator::Table(TableValidator::new(table.clone())),
        ValidatorMode::Accept => Validator::AcceptAll(AcceptAll),
        ValidatorMode::Remote => match remote_client(remote) {
            Ok(client) => Validator::Remote(client),
            Err(reason) => {
                warn!("remote validator disabled ({reason}); accepting all words");
                Validator::AcceptAll(AcceptAll)
            }
        },
    }
}

/// Load words and build the validator
///
/// `length` is the target length the rounds will need, if fixed.
pub async fn prepare(
    words_mode: &str,
    validator_mode: ValidatorMode,
    length: Option<usize>,
    remote: Option<&RemoteConfig>,
) -> GameSetup {
    let (source, source_warning) = source_from_name(words_mode, remote);
    let (table, load_warning) = load_word_table(&source, length).await;
    let validator = validator_for(validator_mode, &table, remote);

    GameSetup {
        table,
        validator,
        source_name: crate::words::WordSource::name(&source),
        warnings: source_warning.into_iter().chain(load_warning).collect(),
    }
}

/// Pick a target for a new round
///
/// # Errors
///
/// Returns an error if the table has no word of the requested length.
pub fn pick_target<R: Rng + ?Sized>(
    table: &WordTable,
    length: Option<usize>,
    rng: &mut R,
) -> Result<Word, String> {
    table.random_word(rng, length).cloned().ok_or_else(|| match length {
        Some(len) => format!("No {len}-letter words available"),
        None => "No words available".to_string(),
    })
}
