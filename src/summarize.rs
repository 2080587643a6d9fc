//! The summarize module wires the pipeline together:
//! fetch -> prompt-build -> backend call -> render/save.

use std::path::PathBuf;
use std::time::Duration;

use log::info;
use url::Url;

use crate::backend::{AzureClient, ChatBackend, OllamaClient};
use crate::config::AppConfig;
use crate::constants::USER_AGENT;
use crate::error::{Error, Result};
use crate::fetch::{PageDocument, fetch_page};
use crate::prompt::build_messages;
use crate::render::{markdown_to_html, output_path, save_summary};
use crate::{Backend, OutputFormat};

/// Per-run pipeline settings beyond the URL and backend choice.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Output format for the saved summary.
    pub format: OutputFormat,
    /// Directory the summary file is written into.
    pub output_dir: PathBuf,
    /// HTTP request timeout applied to the page fetch and the backend call.
    pub timeout: Duration,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            output_dir: PathBuf::from("output"),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Runs the full pipeline for one URL and returns the path of the written
/// summary file.
///
/// Backend configuration is validated before any network I/O, so missing
/// cloud credentials fail the run without a single request being sent.
///
/// # Errors
///
/// Returns any pipeline error: [`Error::Config`] for missing backend
/// configuration, [`Error::Fetch`] when the page cannot be retrieved,
/// backend errors from the completion call, and [`Error::Io`] when the
/// summary cannot be written.
pub async fn run(
    url: &Url,
    backend: Backend,
    config: &AppConfig,
    options: &RunOptions,
) -> Result<PathBuf> {
    let http = build_http_client(options.timeout)?;
    let client = make_client(backend, config, http.clone())?;

    info!("Summarizing {url} with the {backend} backend");

    let document = fetch_page(&http, url).await?;
    let summary = summarize_document(&document, client.as_ref()).await?;

    let content = match options.format {
        OutputFormat::Markdown => summary,
        OutputFormat::Html => markdown_to_html(&summary),
    };

    let path = output_path(&options.output_dir, url, options.format)?;
    save_summary(&path, &content)?;

    Ok(path)
}

/// Sends an already-fetched document to the given backend and returns the
/// markdown summary. This is the transport-free seam the integration tests
/// drive with stub backends.
///
/// # Errors
///
/// Propagates any error from the backend's completion call.
pub async fn summarize_document(
    document: &PageDocument,
    client: &dyn ChatBackend,
) -> Result<String> {
    let messages = build_messages(document);
    client.complete(&messages).await
}

/// Selects and constructs the backend client for `backend`.
///
/// # Errors
///
/// Returns [`Error::Config`] when the cloud backend is selected and any of
/// its required configuration values is missing. No network I/O happens here.
pub fn make_client(
    backend: Backend,
    config: &AppConfig,
    http: reqwest::Client,
) -> Result<Box<dyn ChatBackend>> {
    match backend {
        Backend::Gpt => Ok(Box::new(AzureClient::new(http, config.azure()?))),
        Backend::Llama => Ok(Box::new(OllamaClient::new(http, config.ollama()))),
    }
}

/// Builds the HTTP client shared by the page fetch and the backend call.
///
/// # Errors
///
/// Returns [`Error::HttpClient`] when the underlying client cannot be
/// constructed.
pub fn build_http_client(timeout: Duration) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
        .map_err(|e| Error::HttpClient(e.to_string()))
}
