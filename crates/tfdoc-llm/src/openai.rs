//! OpenAI-compatible chat-completions provider.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tfdoc_core::{Error, Result};

use crate::provider::{CompletionRequest, CompletionResponse, LlmProvider, Message, TokenUsage};

/// Model used when the caller does not choose one.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Public OpenAI API root.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

const SERVICE: &str = "model";

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<Message>,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    model: Option<String>,
    #[serde(default)]
    choices: Vec<Choice>,
    #[serde(default)]
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    #[serde(default)]
    prompt_tokens: u64,
    #[serde(default)]
    completion_tokens: u64,
}

/// Chat-completions client.
///
/// The API key is optional at construction so that a missing credential
/// only fails the calls that need it.
#[derive(Debug, Clone)]
pub struct OpenAiProvider {
    client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
}

impl OpenAiProvider {
    /// Creates a provider against the public OpenAI API.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Points the provider at another OpenAI-compatible endpoint.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Whether a credential is configured.
    pub fn has_credential(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.is_empty())
    }

    fn api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                Error::config("OPENAI_API_KEY is not set. Set it to use LLM features.")
            })
    }
}

#[async_trait]
impl LlmProvider for OpenAiProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse> {
        let api_key = self.api_key()?;
        let url = format!("{}/chat/completions", self.base_url);
        let body = ChatRequest {
            model: &request.model,
            messages: request.chat_messages(),
        };

        tracing::debug!(model = %request.model, %url, messages = body.messages.len(), "Sending completion request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::upstream_with_source(SERVICE, format!("completion request failed: {e}"), e))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(Error::upstream_response(SERVICE, "completion", status, &text));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| Error::upstream_with_source(SERVICE, format!("completion response parse failed: {e}"), e))?;

        let tokens_used = parsed
            .usage
            .map(|u| TokenUsage {
                input: u.prompt_tokens,
                output: u.completion_tokens,
            })
            .unwrap_or_default();

        Ok(CompletionResponse {
            content: parsed.choices.into_iter().next().and_then(|c| c.message.content),
            model: parsed.model.unwrap_or(request.model),
            tokens_used,
        })
    }

    fn name(&self) -> &str {
        "openai"
    }
}
