use serde::Deserialize;

use crate::error::{Result, SearchError};

/// Placeholder for absent name, owner and URL fields.
pub const NOT_AVAILABLE: &str = "N/A";

/// A validated search: non-empty query and a 1-based page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub page: u32,
    pub per_page: u32,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>, page: i64, per_page: u32) -> Result<Self> {
        let query = query.into();
        if query.trim().is_empty() {
            return Err(SearchError::EmptyQuery);
        }
        let page = match u32::try_from(page) {
            Ok(p) if p >= 1 => p,
            _ => return Err(SearchError::InvalidPage(page)),
        };
        Ok(Self {
            query,
            page,
            per_page,
        })
    }
}

// Wire types. Every field is optional so that a sparse or `null`-laden item
// never fails the whole response.

#[derive(Debug, Deserialize)]
struct SearchResponse {
    total_count: Option<u64>,
    items: Option<Vec<RepositoryItem>>,
}

#[derive(Debug, Deserialize)]
struct RepositoryItem {
    full_name: Option<String>,
    description: Option<String>,
    stargazers_count: Option<u64>,
    html_url: Option<String>,
    owner: Option<RepositoryOwner>,
}

#[derive(Debug, Deserialize)]
struct RepositoryOwner {
    login: Option<String>,
}

/// Error payload GitHub attaches to non-success responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositorySummary {
    pub full_name: String,
    pub description: Option<String>,
    pub star_count: u64,
    pub owner_login: String,
    pub web_url: String,
}

impl RepositoryItem {
    fn into_summary(self) -> RepositorySummary {
        let na = || NOT_AVAILABLE.to_string();
        RepositorySummary {
            full_name: self.full_name.unwrap_or_else(na),
            description: self.description,
            star_count: self.stargazers_count.unwrap_or(0),
            owner_login: self.owner.and_then(|o| o.login).unwrap_or_else(na),
            web_url: self.html_url.unwrap_or_else(na),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResult {
    pub total_count: u64,
    pub items: Vec<RepositorySummary>,
}

impl SearchResult {
    /// Parses a repository search response body.
    pub fn from_json(body: &str) -> Result<Self> {
        let response: SearchResponse = serde_json::from_str(body)?;
        Ok(Self {
            total_count: response.total_count.unwrap_or(0),
            items: response
                .items
                .unwrap_or_default()
                .into_iter()
                .map(RepositoryItem::into_summary)
                .collect(),
        })
    }
}

/// Index range and page count for one page of results. Computed at display
/// time, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub start_index: u64,
    pub end_index: u64,
    pub total_pages: u64,
}

impl PageWindow {
    pub fn new(page: u32, per_page: u32, total_count: u64) -> Self {
        let page = u64::from(page);
        let per_page = u64::from(per_page.max(1));
        Self {
            start_index: page.saturating_sub(1) * per_page + 1,
            end_index: (page * per_page).min(total_count),
            total_pages: total_pages(total_count, per_page),
        }
    }
}

pub fn total_pages(total_count: u64, per_page: u64) -> u64 {
    total_count.div_ceil(per_page.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(100, 10), 10);
    }

    #[test]
    fn window_for_second_page() {
        let window = PageWindow::new(2, 10, 25);
        assert_eq!(window.start_index, 11);
        assert_eq!(window.end_index, 20);
        assert_eq!(window.total_pages, 3);
    }

    #[test]
    fn window_clamps_end_to_total() {
        let window = PageWindow::new(3, 10, 25);
        assert_eq!(window.start_index, 21);
        assert_eq!(window.end_index, 25);
    }

    #[test]
    fn request_rejects_page_below_one() {
        assert!(matches!(
            SearchRequest::new("rust", 0, 10),
            Err(SearchError::InvalidPage(0))
        ));
        assert!(matches!(
            SearchRequest::new("rust", -3, 10),
            Err(SearchError::InvalidPage(-3))
        ));
        assert_eq!(SearchRequest::new("rust", 1, 10).unwrap().page, 1);
    }

    #[test]
    fn request_rejects_blank_query() {
        assert!(matches!(
            SearchRequest::new("   ", 1, 10),
            Err(SearchError::EmptyQuery)
        ));
    }

    #[test]
    fn missing_fields_use_placeholders() {
        let body = json!({
            "total_count": 1,
            "items": [{ "description": null }]
        })
        .to_string();
        let result = SearchResult::from_json(&body).unwrap();
        assert_eq!(result.total_count, 1);
        assert_eq!(
            result.items[0],
            RepositorySummary {
                full_name: "N/A".into(),
                description: None,
                star_count: 0,
                owner_login: "N/A".into(),
                web_url: "N/A".into(),
            }
        );
    }

    #[test]
    fn missing_top_level_fields_default_to_empty() {
        let result = SearchResult::from_json("{}").unwrap();
        assert_eq!(result, SearchResult::default());
    }

    #[test]
    fn parses_full_item() {
        let body = json!({
            "total_count": 42,
            "incomplete_results": false,
            "items": [{
                "full_name": "rust-lang/rust",
                "description": "Empowering everyone to build reliable and efficient software.",
                "stargazers_count": 100000,
                "html_url": "https://github.com/rust-lang/rust",
                "owner": { "login": "rust-lang", "id": 5430905 }
            }]
        })
        .to_string();
        let result = SearchResult::from_json(&body).unwrap();
        let repo = &result.items[0];
        assert_eq!(repo.full_name, "rust-lang/rust");
        assert_eq!(repo.owner_login, "rust-lang");
        assert_eq!(repo.star_count, 100000);
        assert_eq!(repo.web_url, "https://github.com/rust-lang/rust");
    }

    #[test]
    fn rejects_malformed_body() {
        assert!(matches!(
            SearchResult::from_json("not json"),
            Err(SearchError::Decode(_))
        ));
    }
}
