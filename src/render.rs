//! The render module writes the generated summary to disk, optionally
//! converting the markdown to HTML first.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use pulldown_cmark::{Parser, html};
use url::Url;

use crate::OutputFormat;
use crate::error::{Error, Result};

/// Converts markdown to an HTML fragment.
///
/// The renderer emits plain headers and links: no auto-generated header
/// anchors and no mailto obfuscation.
pub fn markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new(markdown);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

/// Destination file for a summary of `url`: `summary_<host>.<ext>` inside
/// `output_dir`.
///
/// # Errors
///
/// Returns [`Error::MissingHost`] when the URL has no host component to
/// derive the file name from.
pub fn output_path(output_dir: &Path, url: &Url, format: OutputFormat) -> Result<PathBuf> {
    let host = url
        .host_str()
        .ok_or_else(|| Error::MissingHost(url.to_string()))?;

    Ok(output_dir.join(format!("summary_{host}.{}", format.extension())))
}

/// Writes `content` to `path`, creating the parent directory if missing.
/// An existing file at that path is overwritten unconditionally.
///
/// # Errors
///
/// Returns [`Error::Io`] when directory creation or the write fails.
pub fn save_summary(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, content)?;
    info!("Summary saved to {}", path.display());

    Ok(())
}
