//! Agent tools for the ice-breaker pipeline.
//!
//! Currently one built-in: [`TavilySearchTool`], the web-search resolver the
//! lookup agent uses to locate a person's LinkedIn profile URL.

pub mod tavily;

pub use tavily::{SearchResult, TavilyClient, TavilyConfig, TavilySearchTool};
