//! Provider-neutral completion types.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tfdoc_core::Result;

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Fixed instructions
    System,
    /// Per-call request
    User,
    /// Model output
    Assistant,
}

/// One chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Author
    pub role: Role,
    /// Text content
    pub content: String,
}

impl Message {
    /// Creates a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// Creates a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }
}

/// A single completion call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    /// Model identifier, e.g. `gpt-4o-mini`
    pub model: String,
    /// System instruction sent ahead of `messages`
    pub system_prompt: Option<String>,
    /// Conversation messages
    pub messages: Vec<Message>,
}

impl CompletionRequest {
    /// Creates a request for `model` with the given messages.
    pub fn new(model: impl Into<String>, messages: Vec<Message>) -> Self {
        Self {
            model: model.into(),
            system_prompt: None,
            messages,
        }
    }

    /// Sets the system instruction.
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    /// All messages in send order, system instruction first.
    pub fn chat_messages(&self) -> Vec<Message> {
        self.system_prompt
            .iter()
            .map(|s| Message::system(s.clone()))
            .chain(self.messages.iter().cloned())
            .collect()
    }
}

/// Token accounting reported by the endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenUsage {
    /// Prompt tokens
    pub input: u64,
    /// Completion tokens
    pub output: u64,
}

impl TokenUsage {
    /// Prompt plus completion tokens.
    pub fn total(&self) -> u64 {
        self.input.saturating_add(self.output)
    }
}

/// Result of a completion call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionResponse {
    /// Completion text; `None` when the endpoint returned no content
    pub content: Option<String>,
    /// Model that served the request
    pub model: String,
    /// Token accounting
    pub tokens_used: TokenUsage,
}

/// A language-model endpoint.
///
/// Implementations make exactly one call per `complete` and never retry.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Sends `request` and returns the single completion.
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse>;

    /// Short provider name for logs.
    fn name(&self) -> &str;
}
