//! OpenAI-compatible provider.
//!
//! # Example
//!
//! ```rust,ignore
//! use icebreaker_model::openai::{OpenAiClient, OpenAiConfig};
//!
//! // Hosted OpenAI, the original application's default model
//! let model = OpenAiClient::new(OpenAiConfig::gpt4o_mini(
//!     std::env::var("OPENAI_API_KEY").unwrap(),
//! ))?;
//!
//! // Local Ollama server through its OpenAI-compatible endpoint
//! let local = OpenAiClient::new(OpenAiConfig::ollama("llama3.3:latest", None))?;
//! ```

mod client;
mod config;
mod convert;

pub use client::OpenAiClient;
pub use config::{OPENAI_API_BASE, OpenAiConfig};
