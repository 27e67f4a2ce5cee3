//! Run-time context shared by tools that need external configuration.

use crate::{Result, ToolError};

/// Number of search results requested when nothing else is configured
pub const DEFAULT_MAX_SEARCH_RESULTS: usize = 10;

/// Configuration supplied by the agent runtime
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolContext {
    /// Maximum number of results the web search tool asks for
    pub max_search_results: usize,
    /// API key for the search provider
    pub search_api_key: Option<String>,
}

impl Default for ToolContext {
    fn default() -> Self {
        Self {
            max_search_results: DEFAULT_MAX_SEARCH_RESULTS,
            search_api_key: None,
        }
    }
}

impl ToolContext {
    pub fn new(max_search_results: usize) -> Self {
        Self {
            max_search_results,
            ..Self::default()
        }
    }

    pub fn with_search_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.search_api_key = Some(api_key.into());
        self
    }

    /// Build a context from `MAX_SEARCH_RESULTS` and `TAVILY_API_KEY`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let max_search_results = match lookup("MAX_SEARCH_RESULTS") {
            Some(raw) => raw.trim().parse::<usize>().map_err(|e| {
                ToolError::Config(format!("MAX_SEARCH_RESULTS must be an integer: {e}"))
            })?,
            None => DEFAULT_MAX_SEARCH_RESULTS,
        };

        Ok(Self {
            max_search_results,
            search_api_key: lookup("TAVILY_API_KEY").filter(|key| !key.is_empty()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let context = ToolContext::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(context, ToolContext::default());
        assert_eq!(context.max_search_results, 10);
    }

    #[test]
    fn test_reads_values() {
        let context = ToolContext::from_lookup(lookup_from(&[
            ("MAX_SEARCH_RESULTS", " 5 "),
            ("TAVILY_API_KEY", "tvly-test"),
        ]))
        .unwrap();
        assert_eq!(context.max_search_results, 5);
        assert_eq!(context.search_api_key.as_deref(), Some("tvly-test"));
    }

    #[test]
    fn test_rejects_invalid_limit() {
        let err = ToolContext::from_lookup(lookup_from(&[("MAX_SEARCH_RESULTS", "many")]))
            .unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_ERROR");
    }
}
