use std::time::Duration;

use serde_json::Value;
use welf_core::constants::DEFAULT_API_URL;
use welf_core::env_config::env_string_with_default;
use welf_core::{StoryCategory, StoryPage};

use crate::error::FeedError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for `GET /api/stories`.
#[derive(Debug, Clone)]
pub struct StoryFeedClient {
    client: reqwest::Client,
    base_url: String,
}

impl StoryFeedClient {
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(base_url: &str) -> Result<Self, FeedError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| FeedError::ClientInit(e.to_string()))?;
        Ok(Self { client, base_url: base_url.trim_end_matches('/').to_owned() })
    }

    /// Client for the API named by `WELF_API_URL`.
    ///
    /// # Errors
    /// Same as [`StoryFeedClient::new`].
    pub fn from_env() -> Result<Self, FeedError> {
        Self::new(&env_string_with_default("WELF_API_URL", DEFAULT_API_URL))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches one page of stories.
    ///
    /// # Errors
    /// `Transport` when the request fails, `HttpStatus` for non-2xx answers,
    /// `MalformedPayload` when the body is not JSON or `data` is not an array.
    pub async fn fetch_page(
        &self,
        category: StoryCategory,
        page: usize,
        limit: usize,
    ) -> Result<StoryPage, FeedError> {
        let response = self
            .client
            .get(format!("{}/api/stories", self.base_url))
            .query(&[
                ("category", category.as_str().to_owned()),
                ("page", page.to_string()),
                ("limit", limit.to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        let json = serde_json::from_str::<Value>(&body);

        if !status.is_success() {
            let message = json
                .ok()
                .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_owned))
                .unwrap_or_else(|| "unknown error".to_owned());
            return Err(FeedError::HttpStatus { code: status.as_u16(), message });
        }
        let json =
            json.map_err(|e| FeedError::MalformedPayload(format!("body is not JSON: {e}")))?;
        parse_page(json)
    }
}

fn parse_page(json: Value) -> Result<StoryPage, FeedError> {
    if !json.get("data").is_some_and(Value::is_array) {
        return Err(FeedError::MalformedPayload("`data` is not an array".to_owned()));
    }
    serde_json::from_value(json).map_err(|e| FeedError::MalformedPayload(e.to_string()))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn data_must_be_an_array() {
        for body in [json!({}), json!({"data": null}), json!({"data": {"id": 1}})] {
            assert!(matches!(parse_page(body), Err(FeedError::MalformedPayload(_))));
        }
    }

    #[test]
    fn full_page_parses() {
        let page = parse_page(json!({
            "status": "success",
            "data": [],
            "total": 0,
            "page": 1,
            "totalPages": 0
        }))
        .unwrap();
        assert_eq!(page, StoryPage::empty(1));
    }
}
