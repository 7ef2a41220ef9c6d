//! # Generation collaborator
//!
//! Drafts market-report markdown through a hosted text model. The model is
//! told which cards exist through a system instruction built from the
//! [`Registry`], so whatever it writes can be rendered by the same pipeline.
//!
//! This sits outside the render path: a render never waits on it, and every
//! failure is returned as a distinct [`GenerationError`] so a host can show a
//! targeted message (for example "set `API_KEY`").
//!
//! ## Configuration
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `API_KEY` | none | Model credential, required at call time |
//! | `CARDMARK_MODEL` | `gemini-3-flash-preview` | Model name |
//! | `CARDMARK_ENDPOINT` | Google Generative Language v1beta | API base URL |

use std::fmt::{Debug, Formatter};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;

use crate::http_client::{HttpClient, HttpRequest, ReqwestHttpClient};
use crate::registry::Registry;

pub const API_KEY_ENV: &str = "API_KEY";
pub const MODEL_ENV: &str = "CARDMARK_MODEL";
pub const ENDPOINT_ENV: &str = "CARDMARK_ENDPOINT";

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Failures of the generation collaborator.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GenerationError {
    #[error("prompt cannot be empty")]
    EmptyPrompt,

    #[error("model credential not found; set the {variable} environment variable")]
    MissingCredential { variable: &'static str },

    #[error("generation transport error: {message}")]
    Transport { message: String, retryable: bool },

    #[error("generation service returned status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("malformed generation response: {0}")]
    MalformedResponse(String),
}

impl GenerationError {
    pub const fn code(&self) -> &'static str {
        match self {
            Self::EmptyPrompt => "generation.empty_prompt",
            Self::MissingCredential { .. } => "generation.missing_credential",
            Self::Transport { .. } => "generation.transport",
            Self::Status { .. } => "generation.status",
            Self::MalformedResponse(_) => "generation.malformed_response",
        }
    }

    pub const fn retryable(&self) -> bool {
        match self {
            Self::Transport { retryable, .. } => *retryable,
            Self::Status { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

/// Settings for [`GeminiGenerator`].
#[derive(Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    api_key: Option<String>,
    pub model: String,
    pub endpoint: String,
    pub timeout_ms: u64,
}

impl GenerationConfig {
    /// Reads the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads settings through `lookup`; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        Self {
            api_key: read(API_KEY_ENV),
            model: read(MODEL_ENV).unwrap_or_else(|| DEFAULT_MODEL.to_owned()),
            endpoint: read(ENDPOINT_ENV).unwrap_or_else(|| DEFAULT_ENDPOINT.to_owned()),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl Debug for GenerationConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerationConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

/// System instruction listing every card the model may emit.
pub fn system_instruction(registry: &Registry) -> String {
    let cards = registry
        .iter()
        .map(|descriptor| {
            format!(
                "- \"{}\" to {} (e.g., \"{}\").",
                descriptor.usage,
                descriptor.description.to_lowercase(),
                descriptor.template
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "You are a helpful assistant for a Markdown editor.\n\
         You specialize in generating market reports.\n\
         You can use custom markdown tags, each on its own line:\n\
         {cards}\n\
         Always format the output in clean Markdown."
    )
}

/// Text generation seam.
pub trait TextGenerator: Send + Sync {
    fn generate<'a>(
        &'a self,
        prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, GenerationError>> + Send + 'a>>;
}

/// Client for the Gemini `generateContent` endpoint.
#[derive(Clone)]
pub struct GeminiGenerator {
    config: GenerationConfig,
    instruction: String,
    http_client: Arc<dyn HttpClient>,
}

impl GeminiGenerator {
    pub fn new(config: GenerationConfig, registry: &Registry) -> Self {
        Self::with_http_client(config, registry, Arc::new(ReqwestHttpClient::new()))
    }

    pub fn with_http_client(
        config: GenerationConfig,
        registry: &Registry,
        http_client: Arc<dyn HttpClient>,
    ) -> Self {
        Self {
            config,
            instruction: system_instruction(registry),
            http_client,
        }
    }

    pub fn instruction(&self) -> &str {
        &self.instruction
    }

    async fn call(&self, prompt: &str) -> Result<String, GenerationError> {
        if prompt.trim().is_empty() {
            return Err(GenerationError::EmptyPrompt);
        }
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(GenerationError::MissingCredential {
                variable: API_KEY_ENV,
            })?;

        let request = HttpRequest::post(self.config.generate_url())
            .with_header("x-goog-api-key", api_key)
            .with_json_body(request_body(&self.instruction, prompt))
            .with_timeout_ms(self.config.timeout_ms);

        tracing::debug!(
            model = %self.config.model,
            prompt_chars = prompt.chars().count(),
            "requesting generated content"
        );

        let response = self
            .http_client
            .execute(request)
            .await
            .map_err(|error| GenerationError::Transport {
                message: error.message().to_owned(),
                retryable: error.retryable(),
            })?;

        if !response.is_success() {
            tracing::warn!(status = response.status, "generation service rejected request");
            return Err(GenerationError::Status {
                status: response.status,
                message: upstream_message(&response.body),
            });
        }

        let parsed: GenerateResponse = serde_json::from_str(&response.body)
            .map_err(|error| GenerationError::MalformedResponse(error.to_string()))?;
        Ok(parsed.text())
    }
}

impl Debug for GeminiGenerator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiGenerator")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl TextGenerator for GeminiGenerator {
    fn generate<'a>(
        &'a self,
        prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, GenerationError>> + Send + 'a>> {
        Box::pin(self.call(prompt))
    }
}

fn request_body(instruction: &str, prompt: &str) -> String {
    serde_json::json!({
        "systemInstruction": { "parts": [{ "text": instruction }] },
        "contents": [{ "parts": [{ "text": prompt }] }],
    })
    .to_string()
}

#[derive(Debug, Default, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Content,
}

impl GenerateResponse {
    /// Text of the first candidate; empty when the model returned none.
    fn text(self) -> String {
        self.candidates
            .into_iter()
            .next()
            .map(|candidate| {
                candidate
                    .content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

fn upstream_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|parsed| parsed.error.message)
        .unwrap_or_else(|_| body.chars().take(200).collect())
}
