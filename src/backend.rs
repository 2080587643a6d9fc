//! The backend module holds the two interchangeable summarization clients:
//! an Azure OpenAI chat-completion endpoint and a locally hosted
//! Ollama-style chat endpoint.

use async_trait::async_trait;
use log::info;
use serde::Deserialize;
use serde_json::json;

use crate::config::{AzureConfig, OllamaConfig};
use crate::error::{Error, Result};
use crate::prompt::Message;

/// A service that turns a message sequence into generated summary text.
///
/// Implementations issue exactly one request per call; there is no retry or
/// backoff. Test suites substitute stub implementations at this seam.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Sends `messages` to the backend and returns the generated text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyPrompt`] for an empty message sequence,
    /// [`Error::Backend`] for a non-success response, [`Error::Transport`]
    /// when the request fails before a response arrives, and
    /// [`Error::MalformedResponse`] when the payload carries no usable
    /// summary.
    async fn complete(&self, messages: &[Message]) -> Result<String>;
}

/// Client for an Azure OpenAI chat-completion deployment.
pub struct AzureClient {
    http: reqwest::Client,
    config: AzureConfig,
}

impl AzureClient {
    pub fn new(http: reqwest::Client, config: AzureConfig) -> Self {
        Self { http, config }
    }

    /// The full chat-completions URL for the configured deployment.
    pub fn request_url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            self.config.endpoint.trim_end_matches('/'),
            self.config.deployment,
            self.config.api_version
        )
    }
}

#[async_trait]
impl ChatBackend for AzureClient {
    async fn complete(&self, messages: &[Message]) -> Result<String> {
        ensure_prompt(messages)?;

        let url = self.request_url();
        info!("Requesting summary from Azure OpenAI: {url}");

        let response = self
            .http
            .post(&url)
            .header("api-key", &self.config.api_key)
            .json(&json!({
                "model": self.config.deployment,
                "messages": messages,
            }))
            .send()
            .await
            .map_err(|e| Error::Transport {
                url: url.clone(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| Error::Transport {
            url,
            reason: format!("failed to read response body: {e}"),
        })?;

        if !status.is_success() {
            return Err(Error::Backend {
                status: status.as_u16(),
                body,
            });
        }

        parse_azure_response(&body)
    }
}

/// Client for a locally reachable Ollama-style chat endpoint.
pub struct OllamaClient {
    http: reqwest::Client,
    config: OllamaConfig,
}

impl OllamaClient {
    pub fn new(http: reqwest::Client, config: OllamaConfig) -> Self {
        Self { http, config }
    }
}

#[async_trait]
impl ChatBackend for OllamaClient {
    async fn complete(&self, messages: &[Message]) -> Result<String> {
        ensure_prompt(messages)?;

        let url = &self.config.endpoint;
        info!("Requesting summary from local model API: {url}");

        let response = self
            .http
            .post(url)
            .json(&json!({
                "model": self.config.model,
                "messages": messages,
                "stream": false,
            }))
            .send()
            .await
            .map_err(|e| Error::Transport {
                url: url.clone(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| Error::Transport {
            url: url.clone(),
            reason: format!("failed to read response body: {e}"),
        })?;

        if !status.is_success() {
            return Err(Error::Backend {
                status: status.as_u16(),
                body,
            });
        }

        parse_ollama_response(&body)
    }
}

#[derive(Deserialize)]
struct ReplyMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize)]
struct AzureChoice {
    message: ReplyMessage,
}

#[derive(Deserialize)]
struct AzureReply {
    #[serde(default)]
    choices: Vec<AzureChoice>,
}

#[derive(Deserialize)]
struct OllamaReply {
    #[serde(default)]
    message: Option<ReplyMessage>,
}

/// Extracts `choices[0].message.content` from an Azure chat-completion body.
///
/// # Errors
///
/// Returns [`Error::MalformedResponse`] when the body is not valid JSON,
/// `choices` is absent or empty, or the content is missing or blank.
pub fn parse_azure_response(body: &str) -> Result<String> {
    let reply: AzureReply = serde_json::from_str(body)
        .map_err(|e| Error::MalformedResponse(format!("invalid JSON from backend: {e}")))?;

    let content = reply
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| Error::MalformedResponse("no choices returned".to_string()))?
        .message
        .content;

    non_empty_summary(content)
}

/// Extracts `message.content` from a local chat endpoint body.
///
/// # Errors
///
/// Returns [`Error::MalformedResponse`] when the body is not valid JSON,
/// the `message` field is absent, or the content is missing or blank.
pub fn parse_ollama_response(body: &str) -> Result<String> {
    let reply: OllamaReply = serde_json::from_str(body)
        .map_err(|e| Error::MalformedResponse(format!("invalid JSON from backend: {e}")))?;

    let content = reply
        .message
        .ok_or_else(|| Error::MalformedResponse("no message returned".to_string()))?
        .content;

    non_empty_summary(content)
}

// One explicit policy for both variants: a missing or blank summary is an
// error, never silently replaced with placeholder text.
fn non_empty_summary(content: Option<String>) -> Result<String> {
    match content {
        Some(content) if !content.trim().is_empty() => Ok(content),
        _ => Err(Error::MalformedResponse(
            "backend returned an empty summary".to_string(),
        )),
    }
}

fn ensure_prompt(messages: &[Message]) -> Result<()> {
    if messages.is_empty() {
        return Err(Error::EmptyPrompt);
    }
    Ok(())
}
