//! agent-tool-belt: weather, job-board and web-search tools for LLM agents
//!
//! Each tool performs its outbound HTTP calls off the async scheduler and
//! returns a normalized result, or nothing when any step fails.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use agent_tool_belt::{default_tools, get_weather};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     if let Some(report) = get_weather("Taipei").await {
//!         println!("{}", report.place.resolved_location);
//!     }
//!
//!     let tools = default_tools();
//!     let jobs = tools
//!         .execute_function("search_104_jobs", serde_json::json!({"keyword": "Rust page=2"}))
//!         .await?;
//!     println!("{}", jobs);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod schemas;
pub mod services;
pub mod tools;

pub use error::{Result, ToolError};
pub use schemas::Validator;
pub use tools::{
    default_tools, get_weather, search, search_104_jobs, tools_with_context, FunctionFactory,
    JobQuery, JobSearchResult, Tool, ToolContext, ToolRegistry, WeatherReport,
};

#[cfg(feature = "cli")]
pub mod cli;
