//! Mock provider returning canned responses.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use tfdoc_core::{Error, Result};

use crate::provider::{CompletionRequest, CompletionResponse, LlmProvider, TokenUsage};

#[derive(Debug, Clone)]
enum Reply {
    Content(Option<String>),
    Fail(String),
}

/// Provider that replays queued responses and records every request.
///
/// Once the queue is drained the last response repeats.
#[derive(Debug)]
pub struct MockLlmProvider {
    replies: Mutex<VecDeque<Reply>>,
    last: Mutex<Option<Reply>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl MockLlmProvider {
    /// Creates a mock that answers with `responses` in order.
    pub fn new(responses: Vec<String>) -> Self {
        Self::from_replies(responses.into_iter().map(|r| Reply::Content(Some(r))))
    }

    /// Creates a mock that always answers with `response`.
    pub fn with_response(response: impl Into<String>) -> Self {
        Self::new(vec![response.into()])
    }

    /// Creates a mock whose completions carry no content.
    pub fn empty() -> Self {
        Self::from_replies([Reply::Content(None)])
    }

    /// Creates a mock that fails every call with an upstream error.
    pub fn failing(message: impl Into<String>) -> Self {
        Self::from_replies([Reply::Fail(message.into())])
    }

    fn from_replies(replies: impl IntoIterator<Item = Reply>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().collect()),
            last: Mutex::new(None),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Number of `complete` calls received.
    pub fn call_count(&self) -> usize {
        self.requests.lock().map(|r| r.len()).unwrap_or(0)
    }

    /// Copies of every request received, in order.
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }

    fn next_reply(&self) -> Result<Reply> {
        let mut replies = self.replies.lock().map_err(lock_error)?;
        let mut last = self.last.lock().map_err(lock_error)?;
        if let Some(reply) = replies.pop_front() {
            *last = Some(reply);
        }
        last.clone()
            .ok_or_else(|| Error::upstream("model", "mock provider has no responses"))
    }
}

fn lock_error<E: std::fmt::Display>(e: E) -> Error {
    Error::upstream("model", format!("mock provider lock poisoned: {e}"))
}

#[async_trait]
impl LlmProvider for MockLlmProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse> {
        let model = request.model.clone();
        self.requests.lock().map_err(lock_error)?.push(request);

        match self.next_reply()? {
            Reply::Content(content) => Ok(CompletionResponse {
                content,
                model,
                tokens_used: TokenUsage::default(),
            }),
            Reply::Fail(message) => Err(Error::upstream("model", message)),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}
