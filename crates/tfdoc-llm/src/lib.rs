//! # tfdoc-llm
//!
//! Chat-completion providers used to explain resources.
//!
//! - [`LlmProvider`]: the model endpoint contract
//! - [`OpenAiProvider`]: OpenAI-compatible `/chat/completions` client
//! - [`MockLlmProvider`]: canned responses for tests

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod mock;
pub mod openai;
pub mod provider;

pub use mock::MockLlmProvider;
pub use openai::{DEFAULT_BASE_URL, DEFAULT_MODEL, OpenAiProvider};
pub use provider::{CompletionRequest, CompletionResponse, LlmProvider, Message, Role, TokenUsage};
