//! The websum library fetches a single web page, extracts its visible text,
//! asks an LLM backend for a short markdown summary and writes the result to
//! a file, optionally rendered to HTML.

use std::fmt;

pub mod backend;
pub mod config;
pub mod constants;
pub mod error;
pub mod fetch;
pub mod prompt;
pub mod render;
pub mod summarize;

use crate::error::Error;

/// Enum representing the summarization backend.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Backend {
    /// Azure OpenAI chat-completion deployment.
    Gpt,
    /// Locally hosted Ollama-style chat endpoint.
    Llama,
}

impl std::str::FromStr for Backend {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_lowercase().as_str() {
            "gpt" => Ok(Backend::Gpt),
            "llama" => Ok(Backend::Llama),
            other => Err(Error::UnsupportedModel(other.to_string())),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Gpt => write!(formatter, "gpt"),
            Backend::Llama => write!(formatter, "llama"),
        }
    }
}

/// Enum representing the output format of the saved summary.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum OutputFormat {
    /// Write the summary markdown as returned by the backend.
    #[default]
    Markdown,
    /// Render the markdown to HTML before writing.
    Html,
}

impl OutputFormat {
    /// File extension used for the output file.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Markdown => "md",
            OutputFormat::Html => "html",
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.to_lowercase().as_str() {
            "md" | "markdown" => Ok(OutputFormat::Markdown),
            "html" => Ok(OutputFormat::Html),
            _ => Err(format!("Invalid output format: {input}")),
        }
    }
}

pub use backend::ChatBackend;
pub use config::AppConfig;
pub use fetch::{PageDocument, extract_document, fetch_page};
pub use prompt::{Message, build_messages};
pub use summarize::{RunOptions, run, summarize_document};
