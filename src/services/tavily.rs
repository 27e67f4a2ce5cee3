use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use tracing::debug;

use crate::error::{Result, ToolError};
use crate::services::blocking_http::REQUEST_TIMEOUT;

pub const TAVILY_SEARCH_URL: &str = "https://api.tavily.com/search";

/// External web search backend used by the web search tool
#[async_trait]
pub trait SearchProvider: Send + Sync + std::fmt::Debug {
    /// Run a search and return the provider's JSON response unchanged
    async fn search(&self, query: &str) -> Result<Value>;
}

/// Client for the Tavily search API
#[derive(Debug, Clone)]
pub struct TavilyClient {
    client: Client,
    api_key: String,
    endpoint: String,
    max_results: usize,
}

impl TavilyClient {
    pub fn new(api_key: impl Into<String>, max_results: usize) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            endpoint: TAVILY_SEARCH_URL.to_string(),
            max_results,
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn max_results(&self) -> usize {
        self.max_results
    }
}

#[async_trait]
impl SearchProvider for TavilyClient {
    async fn search(&self, query: &str) -> Result<Value> {
        debug!(query, max_results = self.max_results, "calling Tavily search");

        let response = self
            .client
            .post(&self.endpoint)
            .timeout(REQUEST_TIMEOUT)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&json!({
                "query": query,
                "max_results": self.max_results,
            }))
            .send()
            .await
            .map_err(|err| ToolError::Search(format!("Failed to call Tavily: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ToolError::Search(format!(
                "Tavily returned status {status}: {body}"
            )));
        }

        response
            .json::<Value>()
            .await
            .map_err(|err| ToolError::Search(format!("Failed to decode Tavily response: {err}")))
    }
}
