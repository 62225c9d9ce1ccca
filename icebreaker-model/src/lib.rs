//! LLM backends for the ice-breaker pipeline.
//!
//! One concrete provider covers every hosted backend: [`openai::OpenAiClient`]
//! speaks the OpenAI chat-completions wire format, which OpenAI itself, most
//! hosted gateways, and a local Ollama server (via its `/v1` endpoint) all
//! accept. Swapping backends is a matter of constructing a different
//! [`openai::OpenAiConfig`]; callers only ever see `Arc<dyn Llm>`.
//!
//! [`MockLlm`] scripts responses for tests.

pub mod mock;
pub mod openai;

pub use mock::MockLlm;
pub use openai::{OpenAiClient, OpenAiConfig};
