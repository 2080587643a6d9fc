//! websum is a CLI tool that summarizes a single web page with an LLM.
//!
//! It fetches the page, strips non-content markup, sends the extracted text
//! to either an Azure OpenAI deployment (`gpt`) or a locally hosted model
//! (`llama`), and saves the returned summary under the output directory as
//! markdown or HTML. URL and backend can be passed as arguments or entered
//! interactively when omitted.

use std::io::{self, Write};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;
use url::Url;

use websum::config::AppConfig;
use websum::summarize::{RunOptions, run};
use websum::{Backend, OutputFormat};

/// A CLI tool to summarize a web page with an LLM backend
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The website URL to summarize (prompted for when omitted)
    url: Option<String>,

    /// Backend to use: "gpt" (Azure OpenAI) or "llama" (local model);
    /// prompted for when omitted
    #[arg(long, short)]
    backend: Option<String>,

    /// Output format: "md" (default) or "html"
    #[arg(long, short, default_value = "md")]
    format: OutputFormat,

    /// Directory the summary file is written into
    #[arg(long, short, default_value = "output")]
    output_dir: PathBuf,

    /// HTTP request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    #[arg(long, short, action = clap::ArgAction::Count, help = "Output v(v...)erbosity: error (0), warn (1), info (2), debug (3), trace (4)", global = true, default_value_t = 2)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Error,
            1 => LevelFilter::Warn,
            2 => LevelFilter::Info,
            3 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .init();

    let url_input = match cli.url {
        Some(url) => url,
        None => ask("Enter the website URL: ")?,
    };
    let url = Url::parse(&url_input).map_err(|e| anyhow::anyhow!("Invalid website URL: {e}"))?;

    let backend_input = match cli.backend {
        Some(backend) => backend,
        None => ask("Choose model type (gpt, llama): ")?,
    };
    let backend = Backend::from_str(&backend_input)?;

    let config = AppConfig::from_env();
    let options = RunOptions {
        format: cli.format,
        output_dir: cli.output_dir,
        timeout: Duration::from_secs(cli.timeout),
    };

    let path = run(&url, backend, &config, &options).await?;
    println!("Summary saved to {}", path.display());

    Ok(())
}

/// Prints a question and reads one trimmed line from standard input.
fn ask(question: &str) -> Result<String> {
    print!("{question}");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut answer = String::new();
    io::stdin()
        .read_line(&mut answer)
        .context("Failed to read from stdin")?;

    Ok(answer.trim().to_string())
}
