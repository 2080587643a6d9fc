//! The fetch module retrieves a single web page and extracts its visible
//! textual content into a [`PageDocument`].

use log::{debug, info};
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Node, Selector};
use url::Url;

use crate::constants::{NO_TITLE_SENTINEL, NOISE_TAGS};
use crate::error::{Error, Result};

static SENTENCE_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([.!?])\s*").expect("Failed to compile SENTENCE_BREAK regex"));

static NEWLINE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n{2,}").expect("Failed to compile NEWLINE_RUN regex"));

/// The normalized result of fetching and extracting text from a single page.
///
/// Immutable once produced; `text` holds the sentence-per-line body content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageDocument {
    /// The URL the document was fetched from.
    pub url: Url,
    /// The page title, or a sentinel when the page has none.
    pub title: String,
    /// The tag-stripped, sentence-segmented body text.
    pub text: String,
}

/// Fetches `url` and extracts its title and visible text.
///
/// Issues exactly one GET through the shared client; the user agent and
/// timeout are configured on the client itself.
///
/// # Errors
///
/// Returns [`Error::Fetch`] if the request fails at the transport level,
/// the server answers with a non-success status, or the body cannot be read.
pub async fn fetch_page(http: &reqwest::Client, url: &Url) -> Result<PageDocument> {
    info!("Fetching website: {url}");

    let response = http
        .get(url.clone())
        .send()
        .await
        .map_err(|e| Error::Fetch {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::Fetch {
            url: url.to_string(),
            reason: format!("server answered {status}"),
        });
    }

    let html = response.text().await.map_err(|e| Error::Fetch {
        url: url.to_string(),
        reason: format!("failed to read response body: {e}"),
    })?;

    let document = extract_document(url.clone(), &html);
    debug!(
        "Extracted {} characters of text from \"{}\"",
        document.text.len(),
        document.title
    );

    Ok(document)
}

/// Builds a [`PageDocument`] from raw HTML.
///
/// Pure counterpart of [`fetch_page`]: title extraction, noise-tag removal
/// and text normalization without any network involvement.
pub fn extract_document(url: Url, html: &str) -> PageDocument {
    let document = Html::parse_document(html);
    let title = extract_title(&document).unwrap_or_else(|| NO_TITLE_SENTINEL.to_string());
    let text = normalize_text(&body_text(&document));

    PageDocument { url, title, text }
}

/// Text of the first `<title>` element, if any.
fn extract_title(document: &Html) -> Option<String> {
    let title_selector = Selector::parse("title").ok()?;
    let title_element = document.select(&title_selector).next()?;
    let title_text = title_element
        .text()
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string();

    if title_text.is_empty() {
        None
    } else {
        Some(title_text)
    }
}

/// Concatenates the text nodes under `<body>`, skipping the subtrees of
/// non-content elements such as scripts, styles and form controls.
fn body_text(document: &Html) -> String {
    let Ok(body_selector) = Selector::parse("body") else {
        return String::new();
    };
    let Some(body) = document.select(&body_selector).next() else {
        return String::new();
    };

    let mut out = String::new();
    let mut stack = vec![*body];

    while let Some(node) = stack.pop() {
        match node.value() {
            Node::Element(element) if NOISE_TAGS.contains(&element.name()) => continue,
            Node::Text(text) => out.push_str(&text.text),
            _ => {}
        }

        let mut children: Vec<_> = node.children().collect();
        children.reverse();
        stack.append(&mut children);
    }

    out
}

/// Normalizes extracted body text into sentence-per-line form: a newline
/// after each sentence-terminal punctuation mark, newline runs collapsed,
/// surrounding whitespace trimmed. A terminal sentence keeps exactly one
/// trailing newline.
pub fn normalize_text(raw: &str) -> String {
    let segmented = SENTENCE_BREAK.replace_all(raw, "$1\n");
    let collapsed = NEWLINE_RUN.replace_all(&segmented, "\n");

    collapsed
        .trim_start()
        .trim_end_matches([' ', '\t', '\r'])
        .to_string()
}
