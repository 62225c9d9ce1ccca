//! LLM-driven stages of the ice-breaker pipeline.
//!
//! - [`LookupAgent`] resolves a person's name to a LinkedIn profile URL with a
//!   bounded reasoning loop over a web-search tool.
//! - [`SummaryGenerator`] turns scraped profile text into a schema-validated
//!   [`Summary`].

pub mod lookup;
pub mod summarize;

pub use lookup::{DEFAULT_MAX_STEPS, LookupAgent, LookupAgentBuilder};
pub use summarize::{Summary, SummaryGenerator, summary_schema};
