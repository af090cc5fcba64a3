//! # GitHub Repository Search
//!
//! A small library and CLI for searching GitHub repositories by keyword.
//! Each invocation issues exactly one request to the repository search API
//! and prints one page of star-sorted results.
//!
//! ## Main Components
//!
//! - [`GitHubSearcher`]: Performs the search request and parses the response
//! - [`Args`]: Command line argument structure
//! - [`run`]: Validates, searches and renders, returning the process exit status
//!
//! ## Example
//!
//! ```no_run
//! use github_repo_search_lib::{run, Args};
//! use clap::Parser;
//!
//! #[tokio::main]
//! async fn main() {
//!     let args = Args::parse();
//!     let status = run(&args, &mut std::io::stdout()).await;
//!     std::process::exit(i32::from(status));
//! }
//! ```

mod args;
pub mod config;
pub mod error;
mod github_searcher;
pub mod models;
pub mod render;

use std::io::Write;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

pub use crate::args::Args;
pub use crate::config::SearchConfig;
pub use crate::error::SearchError;
pub use crate::github_searcher::GitHubSearcher;
pub use crate::models::{PageWindow, RepositorySummary, SearchRequest, SearchResult};

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

/// Runs one search and writes the report (or the error) to `out`.
///
/// Returns `0` on success, including when nothing matched, and `1` when the
/// page is invalid or the request fails. An invalid page never reaches the
/// network.
pub async fn run<W: Write>(args: &Args, out: &mut W) -> u8 {
    match execute(args, out).await {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            debug!(usage = e.is_usage(), "Search aborted: {}", e);
            // Nothing more can be reported if the output itself is broken.
            let _ = writeln!(out, "❌ Error: {e}");
            EXIT_FAILURE
        }
    }
}

async fn execute<W: Write>(args: &Args, out: &mut W) -> Result<(), SearchError> {
    let config = SearchConfig::from_args(args);
    let request = SearchRequest::new(args.query(), args.page, config.per_page)?;
    let searcher = GitHubSearcher::new(config)?;

    render::searching(out, &request.query)?;
    out.flush()?;

    let spinner = spinner(&request.query);
    let result = searcher.search(&request).await;
    spinner.finish_and_clear();
    let result = result?;

    if result.items.is_empty() {
        render::no_results(out)?;
    } else {
        render::results(out, &request, &result)?;
    }
    out.flush()?;
    Ok(())
}

fn spinner(query: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .template("{spinner:.green} [{elapsed_precise}] {wide_msg}")
        .map(|s| s.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"))
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    pb.set_style(style);
    pb.set_message(format!("Querying GitHub for '{}'", query));
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}
