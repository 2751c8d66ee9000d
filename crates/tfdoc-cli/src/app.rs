//! Wiring of settings into stores, providers, and the generator.

use std::sync::Arc;

use tfdoc_core::Result;
use tfdoc_explain::ExplanationGenerator;
use tfdoc_llm::OpenAiProvider;
use tfdoc_store::PostgrestStore;

use crate::settings::{ENV_LLM_API_KEY, Settings};

/// Builds the record store. Fails when the store URL or key is missing.
pub fn build_store(settings: &Settings) -> Result<PostgrestStore> {
    let credentials = settings.store_credentials()?;
    tracing::debug!(url = %credentials.url, "Using PostgREST store");
    Ok(PostgrestStore::new(credentials.url, credentials.service_key))
}

/// Logs warnings for optional settings that are missing and returns them.
///
/// A missing model API key is not fatal; explanation calls then fail with a
/// configuration error.
pub fn startup_warnings(settings: &Settings) -> Vec<String> {
    let mut warnings = Vec::new();
    if settings.llm_api_key().is_none() {
        warnings.push(format!(
            "{ENV_LLM_API_KEY} is not set. LLM features will not work until it is configured."
        ));
    }
    for warning in &warnings {
        tracing::warn!("{warning}");
    }
    warnings
}

/// Builds the model provider.
pub fn build_llm(settings: &Settings) -> OpenAiProvider {
    let api_key = settings.llm_api_key().map(str::to_string);
    OpenAiProvider::new(api_key).with_base_url(settings.llm_base_url())
}

/// Builds the explanation generator from settings.
pub fn build_generator(settings: &Settings) -> Result<ExplanationGenerator> {
    let store = build_store(settings)?;
    let llm = build_llm(settings);
    Ok(ExplanationGenerator::new(Arc::new(store), Arc::new(llm)))
}
