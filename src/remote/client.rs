//! Chat-completion client for word generation and validation
//!
//! Speaks the OpenAI-compatible `POST /chat/completions` protocol.

use crate::config::RemoteConfig;
use crate::core::Word;
use crate::words::{ValidatorError, WordSource, WordSourceError, WordTable, WordValidator};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

const WORDS_SYSTEM_PROMPT: &str = "You are a helpful assistant that ONLY returns valid JSON. \
     Generate AI/technology-related words grouped by length 2-8. \
     Return exactly this shape:\n\
     { \"words\": { \"2\": [\"AI\", ...], \"3\": [...], \"4\": [...], \"5\": [...], \"6\": [...], \"7\": [...], \"8\": [...] } }";

const WORDS_USER_PROMPT: &str =
    "Produce at least 25 unique words for every length. UPPERCASE only. No commentary.";

const VALIDATE_SYSTEM_PROMPT: &str = "You are a validator. Reply ONLY 'true' or 'false'. \
     Return 'true' if the word is a valid English word.";

/// Failure talking to the chat endpoint
#[derive(Debug, Error)]
pub enum ChatError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("response contained no message content")]
    EmptyResponse,
}

impl From<ChatError> for WordSourceError {
    fn from(err: ChatError) -> Self {
        match err {
            ChatError::Http(e) => Self::Http(e),
            ChatError::EmptyResponse => Self::Parse(ChatError::EmptyResponse.to_string()),
        }
    }
}

impl From<ChatError> for ValidatorError {
    fn from(err: ChatError) -> Self {
        match err {
            ChatError::Http(e) => Self::Http(e),
            ChatError::EmptyResponse => Self::Protocol(ChatError::EmptyResponse.to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    max_tokens: u32,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WordsPayload {
    words: HashMap<String, Vec<String>>,
}

/// Client for an OpenAI-compatible chat endpoint
#[derive(Debug, Clone)]
pub struct ChatClient {
    http: reqwest::Client,
    config: RemoteConfig,
}

impl ChatClient {
    /// Build a client for the given endpoint
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: RemoteConfig) -> Result<Self, ChatError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self { http, config })
    }

    fn request<'a>(&'a self, system: &'a str, user: &'a str) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.config.model,
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
        }
    }

    async fn chat(&self, system: &str, user: &str) -> Result<String, ChatError> {
        let url = format!("{}/chat/completions", self.config.base_url.trim_end_matches('/'));
        debug!("POST {url} (model {})", self.config.model);

        let response: ChatResponse = self
            .http
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&self.request(system, user))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(ChatError::EmptyResponse)
    }
}

impl WordSource for ChatClient {
    async fn fetch_words(&self) -> Result<WordTable, WordSourceError> {
        let content = self.chat(WORDS_SYSTEM_PROMPT, WORDS_USER_PROMPT).await?;
        parse_words_payload(&content)
    }

    fn name(&self) -> &'static str {
        "remote"
    }
}

impl WordValidator for ChatClient {
    async fn validate(&self, word: &Word) -> Result<bool, ValidatorError> {
        let answer = self.chat(VALIDATE_SYSTEM_PROMPT, word.text()).await?;
        debug!("validator answered {answer:?} for {word}");
        Ok(parse_validation_answer(&answer))
    }
}

/// Parse the `{"words": {"5": [...]}}` document returned by the model
///
/// Markdown code fences around the JSON are tolerated. Non-numeric keys and
/// entries whose length disagrees with their key are dropped.
///
/// # Errors
/// Returns `WordSourceError::Parse` if the content is not that shape, and
/// `WordSourceError::Empty` if no usable words remain.
pub fn parse_words_payload(content: &str) -> Result<WordTable, WordSourceError> {
    let json = strip_code_fence(content);
    let payload: WordsPayload =
        serde_json::from_str(json).map_err(|e| WordSourceError::Parse(e.to_string()))?;

    let table = WordTable::from_grouped(
        payload
            .words
            .into_iter()
            .filter_map(|(len, words)| len.trim().parse::<usize>().ok().map(|len| (len, words))),
    );

    if table.is_empty() {
        return Err(WordSourceError::Empty);
    }
    Ok(table)
}

/// Interpret the validator's reply: only a bare `true`, in any case, accepts
#[must_use]
pub fn parse_validation_answer(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("true")
}

fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop an optional language tag on the opening fence
    let body = rest.split_once('\n').map_or(rest, |(_, body)| body);
    body.strip_suffix("```").unwrap_or(body).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_words_payload_groups_by_key() {
        let table = parse_words_payload(
            r#"{"words": {"2": ["AI", "ML"], "5": ["MODEL", "TOKEN", "PROMPT"], "x": ["NOPE"]}}"#,
        )
        .unwrap();

        assert_eq!(table.words_of_length(2).len(), 2);
        // PROMPT is filed under the wrong length and dropped
        assert_eq!(table.words_of_length(5).len(), 2);
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn parse_words_payload_uppercases() {
        let table = parse_words_payload(r#"{"words": {"4": ["rust", "Java"]}}"#).unwrap();
        let words: Vec<&str> = table.words_of_length(4).iter().map(Word::text).collect();
        assert_eq!(words, vec!["JAVA", "RUST"]);
    }

    #[test]
    fn parse_words_payload_tolerates_code_fence() {
        let content = "```json\n{\"words\": {\"3\": [\"GPU\"]}}\n```";
        let table = parse_words_payload(content).unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn parse_words_payload_missing_key() {
        assert!(matches!(
            parse_words_payload(r#"{"items": []}"#),
            Err(WordSourceError::Parse(_))
        ));
    }

    #[test]
    fn parse_words_payload_not_json() {
        assert!(matches!(
            parse_words_payload("Sure! Here are some words: MODEL, TOKEN"),
            Err(WordSourceError::Parse(_))
        ));
    }

    #[test]
    fn parse_words_payload_nothing_usable() {
        assert!(matches!(
            parse_words_payload(r#"{"words": {"9": ["ALGORITHM"]}}"#),
            Err(WordSourceError::Empty)
        ));
    }

    #[test]
    fn validation_answer_parsing() {
        assert!(parse_validation_answer("true"));
        assert!(parse_validation_answer(" True\n"));
        assert!(parse_validation_answer("TRUE"));
        assert!(!parse_validation_answer("'true'"));
        assert!(!parse_validation_answer("true."));
        assert!(!parse_validation_answer("false"));
        assert!(!parse_validation_answer("true, it is a word"));
        assert!(!parse_validation_answer(""));
    }

    #[test]
    fn request_body_shape() {
        let client = ChatClient::new(RemoteConfig::new("test-key")).unwrap();
        let body = serde_json::to_value(client.request("sys", "MODEL")).unwrap();

        assert_eq!(body["model"], "gpt-4o");
        assert_eq!(body["max_tokens"], 1500);
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["content"], "MODEL");
    }

    #[test]
    fn client_debug_hides_key() {
        let client = ChatClient::new(RemoteConfig::new("sk-secret-123")).unwrap();
        assert!(!format!("{client:?}").contains("sk-secret-123"));
    }
}
