//! # icebreaker-core
//!
//! Core traits and types shared by the ice-breaker pipeline crates:
//!
//! - [`Llm`] - the swappable language-model backend
//! - [`Tool`] - a capability an agent can invoke while reasoning
//! - [`Content`] / [`Part`] - the conversation turns exchanged with a model
//! - [`IcebreakerError`] / [`Result`] - unified error handling
//!
//! The pipeline is linear and stateless: every request builds its own
//! conversation from scratch, so there is no session or state surface here.

pub mod error;
pub mod model;
pub mod tool;
pub mod types;

pub use error::{IcebreakerError, Result};
pub use model::{
    FinishReason, GenerateContentConfig, Llm, LlmRequest, LlmResponse, UsageMetadata,
};
pub use tool::{Tool, tool_declaration};
pub use types::{Content, FunctionResponseData, Part};
