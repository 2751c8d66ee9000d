//! Explanation pipeline: store read, context build, single model call.

use std::sync::Arc;

use tfdoc_core::{Result, build_context};
use tfdoc_llm::{CompletionRequest, DEFAULT_MODEL, LlmProvider, Message};
use tfdoc_store::{RecordStore, fetch_documented};

use crate::prompt::{self, Language};

/// Input for one explanation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplainRequest {
    /// Exact resource name to look up
    pub resource_name: String,

    /// Exact provider version to look up
    pub version: String,

    /// Output language
    pub language: Language,

    /// Model identifier passed to the provider
    pub model: String,
}

impl ExplainRequest {
    /// Creates a request in English using [`DEFAULT_MODEL`].
    pub fn new(resource_name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            resource_name: resource_name.into(),
            version: version.into(),
            language: Language::English,
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Sets the output language from a language code.
    pub fn with_language(mut self, code: &str) -> Self {
        self.language = Language::from_code(code);
        self
    }

    /// Sets the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

/// Produces grounded explanations of stored resources.
#[derive(Clone)]
pub struct ExplanationGenerator {
    store: Arc<dyn RecordStore>,
    llm: Arc<dyn LlmProvider>,
}

impl ExplanationGenerator {
    /// Creates a generator over a record store and a model provider.
    pub fn new(store: Arc<dyn RecordStore>, llm: Arc<dyn LlmProvider>) -> Self {
        Self { store, llm }
    }

    /// Explains the resource matching `request` exactly.
    ///
    /// Fails with [`Error::NotFound`](tfdoc_core::Error::NotFound) without
    /// calling the model when no resource matches. Returns an empty string
    /// when the model answers without content.
    pub async fn explain(&self, request: &ExplainRequest) -> Result<String> {
        tracing::info!(
            resource_name = %request.resource_name,
            version = %request.version,
            language = request.language.name(),
            model = %request.model,
            "Explaining resource"
        );

        let context = self
            .context_for(&request.resource_name, &request.version)
            .await?;

        let completion = CompletionRequest::new(
            request.model.clone(),
            vec![Message::user(prompt::user_prompt(
                &request.resource_name,
                &request.version,
                request.language,
                &context,
            ))],
        )
        .with_system_prompt(prompt::SYSTEM_PROMPT);

        let response = self.llm.complete(completion).await?;

        tracing::info!(
            provider = self.llm.name(),
            tokens = response.tokens_used.total(),
            empty = response.content.is_none(),
            "Explanation generated"
        );

        Ok(response.content.unwrap_or_default())
    }

    /// Resolves the resource and renders its context document.
    pub async fn context_for(&self, resource_name: &str, version: &str) -> Result<String> {
        let doc = fetch_documented(self.store.as_ref(), resource_name, version).await?;
        let context = build_context(&doc.resource, &doc.attributes);

        tracing::debug!(
            attributes = doc.attributes.len(),
            bytes = context.len(),
            "Built context document"
        );

        Ok(context)
    }
}
