use std::io;
use std::process::ExitCode;

use clap::Parser;
use github_repo_search_lib::{run, Args};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr so they never interleave with the report on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let status = run(&args, &mut io::stdout()).await;
    ExitCode::from(status)
}
