use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{BackendError, Translator};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_TIMEOUT_MS: u64 = 120_000;

pub const SYSTEM_PROMPT: &str = "You are a translation model. Translate the following text accurately while maintaining its tone and context.";

pub fn user_prompt(locale: &str, text: &str) -> String {
    format!("Translate this text to {locale}: {text}")
}

#[derive(Clone)]
pub struct OpenAiOptions {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl OpenAiOptions {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }
}

impl std::fmt::Debug for OpenAiOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiOptions")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<Reply>,
}

#[derive(Debug, Deserialize)]
struct Reply {
    content: Option<String>,
}

/// Blocking chat-completions client (OpenAI wire format).
pub struct OpenAiTranslator {
    client: reqwest::blocking::Client,
    endpoint: String,
    api_key: String,
    model: String,
}

impl OpenAiTranslator {
    pub fn new(opts: OpenAiOptions) -> Result<Self, BackendError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("locsync/", env!("CARGO_PKG_VERSION")))
            .timeout(opts.timeout)
            .build()
            .map_err(|e| BackendError::Request(e.to_string()))?;
        Ok(Self {
            client,
            endpoint: format!("{}/chat/completions", opts.base_url.trim_end_matches('/')),
            api_key: opts.api_key,
            model: opts.model,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Translator for OpenAiTranslator {
    fn translate(&mut self, text: &str, locale: &str) -> Result<String, BackendError> {
        let prompt = user_prompt(locale, text);
        let body = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt,
                },
            ],
        };
        tracing::debug!(event = "backend_request", endpoint = %self.endpoint, model = %self.model, locale = locale, bytes = text.len());

        let resp = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .map_err(|e| BackendError::Request(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            return Err(BackendError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = resp
            .json()
            .map_err(|e| BackendError::Request(e.to_string()))?;
        first_answer(parsed)
    }
}

fn first_answer(resp: ChatResponse) -> Result<String, BackendError> {
    resp.choices
        .into_iter()
        .next()
        .and_then(|c| c.message)
        .and_then(|m| m.content)
        .filter(|s| !s.is_empty())
        .ok_or(BackendError::EmptyResponse)
}
