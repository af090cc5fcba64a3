use std::time::Duration;

use crate::Args;

pub const DEFAULT_API_URL: &str = "https://api.github.com/search/repositories";
pub const DEFAULT_PER_PAGE: u32 = 10;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
pub const USER_AGENT: &str = "GitHub-Search-CLI";
pub const ACCEPT: &str = "application/vnd.github.v3+json";

/// Settings for a single search invocation.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub api_url: String,
    pub per_page: u32,
    pub timeout: Duration,
    pub user_agent: String,
    pub accept: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            per_page: DEFAULT_PER_PAGE,
            timeout: DEFAULT_TIMEOUT,
            user_agent: USER_AGENT.to_string(),
            accept: ACCEPT.to_string(),
        }
    }
}

impl SearchConfig {
    pub fn from_args(args: &Args) -> Self {
        Self {
            api_url: args.api_url.clone(),
            ..Self::default()
        }
    }
}
