use clap::Parser;

use crate::config::DEFAULT_API_URL;

/// GitHub repository search CLI: finds repositories matching keywords, sorted
/// by star count, and prints one page of results at a time.
#[derive(Parser, Debug, Clone)]
#[clap(
    author,
    version,
    about,
    long_about = "Search GitHub repositories by keyword. Results are sorted by stars (descending) and shown ten per page."
)]
pub struct Args {
    /// Keywords to search for. Multiple keywords are joined with spaces.
    #[clap(num_args = 1.., required = true, value_name = "KEYWORDS")]
    pub keywords: Vec<String>,

    /// Page of results to display, starting at 1.
    #[clap(short, long, default_value_t = 1, allow_negative_numbers = true)]
    pub page: i64,

    /// Repository search endpoint.
    #[clap(long, value_name = "URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,
}

impl Args {
    /// The search phrase sent to the API.
    pub fn query(&self) -> String {
        self.keywords.join(" ")
    }
}
