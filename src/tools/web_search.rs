use super::context::ToolContext;
use super::tool::{Tool, ToolFuture};
use crate::schemas::{deserialize_params, parameters_schema};
use crate::services::tavily::{SearchProvider, TavilyClient, TAVILY_SEARCH_URL};
use crate::{Result, ToolError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Parameters for web searches
#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct WebSearchParams {
    /// What to search the web for
    pub query: String,
}

/// General web search through the configured search provider.
///
/// The provider response is returned as-is and provider errors are passed
/// through to the caller.
#[derive(Debug, Clone)]
pub struct WebSearchTool {
    context: ToolContext,
    endpoint: String,
}

impl WebSearchTool {
    pub fn new(context: ToolContext) -> Self {
        Self {
            context,
            endpoint: TAVILY_SEARCH_URL.to_string(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn context(&self) -> &ToolContext {
        &self.context
    }

    pub async fn search(&self, query: &str) -> Result<Value> {
        let client = provider_for(&self.context)?.with_endpoint(self.endpoint.as_str());
        client.search(query).await
    }
}

/// Search with a provider client configured from `context`
pub async fn search(context: &ToolContext, query: &str) -> Result<Value> {
    provider_for(context)?.search(query).await
}

fn provider_for(context: &ToolContext) -> Result<TavilyClient> {
    let api_key = context.search_api_key.as_deref().ok_or_else(|| {
        ToolError::Config("TAVILY_API_KEY is required for web search".to_string())
    })?;
    Ok(TavilyClient::new(api_key, context.max_search_results))
}

impl Tool for WebSearchTool {
    fn name(&self) -> &'static str {
        "search"
    }

    fn description(&self) -> &'static str {
        "Search the web for current events and general information"
    }

    fn parameters_schema(&self) -> Value {
        parameters_schema::<WebSearchParams>()
    }

    fn execute(&self, parameters: Value) -> ToolFuture<'_> {
        Box::pin(async move {
            let params: WebSearchParams = deserialize_params(parameters)?;
            self.search(&params.query).await
        })
    }
}
