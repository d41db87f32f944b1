//! Runtime configuration
//!
//! Populated from the command line in `main`; the defaults here are what the
//! tests and the library use when nothing is specified.

use std::fmt;
use std::time::Duration;

/// Conventional number of guesses per round
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// Default bound on a single validation call
pub const DEFAULT_VALIDATE_TIMEOUT: Duration = Duration::from_secs(10);

/// Settings for a round of play
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Guesses allowed before the round is lost
    pub max_attempts: usize,
    /// Fixed target length, or any length when `None`
    pub word_length: Option<usize>,
    /// How long to wait for the validator before accepting the guess
    pub validate_timeout: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            word_length: None,
            validate_timeout: DEFAULT_VALIDATE_TIMEOUT,
        }
    }
}

/// Settings for the remote chat-completion service
#[derive(Clone, PartialEq)]
pub struct RemoteConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub request_timeout: Duration,
}

impl RemoteConfig {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.openai.com/v1";
    pub const DEFAULT_MODEL: &'static str = "gpt-4o";

    /// Defaults for everything except the key
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            model: Self::DEFAULT_MODEL.to_string(),
            temperature: 0.6,
            max_tokens: 1500,
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl fmt::Debug for RemoteConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = if self.api_key.is_empty() { "" } else { "<redacted>" };
        f.debug_struct("RemoteConfig")
            .field("api_key", &key)
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}
