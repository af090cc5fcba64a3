use chrono::{DateTime, Local};
use reqwest::header::{HeaderMap, ACCEPT};
use reqwest::{Client, StatusCode};
use tracing::{debug, info, warn};

use crate::config::SearchConfig;
use crate::error::{Result, SearchError};
use crate::models::{ApiErrorBody, SearchRequest, SearchResult};

pub struct GitHubSearcher {
    client: Client,
    config: SearchConfig,
}

impl GitHubSearcher {
    /// Create a new GitHubSearcher with the configured timeout and client identifier
    pub fn new(config: SearchConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()
            .map_err(SearchError::Client)?;

        Ok(GitHubSearcher { client, config })
    }

    /// Fetch one page of repositories, sorted by stars descending
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchResult> {
        debug!(
            "Requesting {} q='{}' page={} per_page={}",
            self.config.api_url, request.query, request.page, request.per_page
        );

        let response = self
            .client
            .get(&self.config.api_url)
            .header(ACCEPT, self.config.accept.as_str())
            .query(&[
                ("q", request.query.as_str()),
                ("sort", "stars"),
                ("order", "desc"),
            ])
            .query(&[("page", request.page), ("per_page", request.per_page)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            if let Some(err) = GitHubSearcher::rate_limit_error(status, response.headers()) {
                warn!("Rate limit exhausted for '{}'", request.query);
                return Err(err);
            }
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .ok()
                .and_then(|b| b.message);
            warn!(
                "API error {} for '{}' page {}",
                status, request.query, request.page
            );
            return Err(SearchError::Status { status, message });
        }

        let body = response.text().await?;
        let result = SearchResult::from_json(&body)?;

        info!(
            "Received {} of {} results for '{}' page {}",
            result.items.len(),
            result.total_count,
            request.query,
            request.page
        );
        Ok(result)
    }

    /// A 403/429 with no remaining quota is a rate limit rather than a plain
    /// status error. The reset time is reported but never waited on.
    fn rate_limit_error(status: StatusCode, headers: &HeaderMap) -> Option<SearchError> {
        if status != StatusCode::FORBIDDEN && status != StatusCode::TOO_MANY_REQUESTS {
            return None;
        }

        let remaining = headers
            .get("X-RateLimit-Remaining")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u32>().ok())?;
        if remaining != 0 {
            return None;
        }

        let reset = headers
            .get("X-RateLimit-Reset")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<i64>().ok())
            .and_then(|ts| DateTime::from_timestamp(ts, 0))
            .map(|at| {
                at.with_timezone(&Local)
                    .format("%Y-%m-%d %H:%M:%S")
                    .to_string()
            });

        Some(SearchError::RateLimited { reset })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    fn headers(remaining: &str, reset: Option<&str>) -> HeaderMap {
        let mut map = HeaderMap::new();
        map.insert(
            "X-RateLimit-Remaining",
            HeaderValue::from_str(remaining).unwrap(),
        );
        if let Some(reset) = reset {
            map.insert("X-RateLimit-Reset", HeaderValue::from_str(reset).unwrap());
        }
        map
    }

    #[test]
    fn exhausted_quota_is_rate_limit() {
        let err = GitHubSearcher::rate_limit_error(
            StatusCode::FORBIDDEN,
            &headers("0", Some("1700000000")),
        );
        match err {
            Some(SearchError::RateLimited { reset: Some(reset) }) => {
                assert_eq!(reset.len(), "2023-11-14 22:13:20".len());
            }
            other => panic!("expected rate limit, got {other:?}"),
        }
    }

    #[test]
    fn missing_reset_header_still_reports_rate_limit() {
        let err =
            GitHubSearcher::rate_limit_error(StatusCode::TOO_MANY_REQUESTS, &headers("0", None));
        assert!(matches!(err, Some(SearchError::RateLimited { reset: None })));
    }

    #[test]
    fn remaining_quota_is_not_rate_limit() {
        assert!(
            GitHubSearcher::rate_limit_error(StatusCode::FORBIDDEN, &headers("12", None)).is_none()
        );
        assert!(
            GitHubSearcher::rate_limit_error(StatusCode::FORBIDDEN, &HeaderMap::new()).is_none()
        );
        assert!(
            GitHubSearcher::rate_limit_error(StatusCode::BAD_GATEWAY, &headers("0", None)).is_none()
        );
    }
}
