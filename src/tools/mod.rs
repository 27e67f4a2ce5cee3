//! Tools module containing the tool abstractions and the built-in tools

pub mod context;
pub mod function_factory;
pub mod job_query;
pub mod jobs;
pub mod tool;
pub mod weather;
pub mod web_search;

pub use context::ToolContext;
pub use function_factory::FunctionFactory;
pub use job_query::JobQuery;
pub use jobs::{search_104_jobs, JobListing, JobSearchResult, JobSearchTool};
pub use tool::{Tool, ToolFuture, ToolRegistry};
pub use weather::{get_weather, ResolvedPlace, WeatherReport, WeatherTool};
pub use web_search::{search, WebSearchTool};

/// Weather and job search, in that order
pub fn default_tools() -> FunctionFactory {
    let mut factory = FunctionFactory::new();
    factory.register_tool(WeatherTool::new());
    factory.register_tool(JobSearchTool::new());
    factory
}

/// The default tools followed by web search configured from `context`
pub fn tools_with_context(context: ToolContext) -> FunctionFactory {
    let mut factory = default_tools();
    factory.register_tool(WebSearchTool::new(context));
    factory
}
