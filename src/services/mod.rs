pub(crate) mod blocking_http;
pub mod tavily;

pub use tavily::{SearchProvider, TavilyClient};
