//! Process-wide settings, loaded once at startup.
//!
//! Values come from an optional TOML file and are overridden by
//! environment variables:
//!
//! ```toml
//! [store]
//! url = "https://project.supabase.co"
//! service_key = "..."
//!
//! [llm]
//! api_key = "sk-..."
//! base_url = "https://api.openai.com/v1"
//! default_model = "gpt-4o-mini"
//! ```

use std::path::Path;

use serde::Deserialize;
use tfdoc_core::{Error, Result};
use tfdoc_llm::{DEFAULT_BASE_URL, DEFAULT_MODEL};

/// Store URL variable.
pub const ENV_STORE_URL: &str = "SUPABASE_URL";
/// Store credential variable.
pub const ENV_STORE_KEY: &str = "SUPABASE_SERVICE_KEY";
/// Model credential variable.
pub const ENV_LLM_API_KEY: &str = "OPENAI_API_KEY";
/// Model endpoint variable.
pub const ENV_LLM_BASE_URL: &str = "OPENAI_BASE_URL";
/// Default model variable.
pub const ENV_LLM_MODEL: &str = "TFDOC_MODEL";

/// Record store connection settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StoreSettings {
    /// Project URL
    pub url: Option<String>,
    /// Service key
    pub service_key: Option<String>,
}

/// Model endpoint settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    /// API key; optional until an explanation is requested
    pub api_key: Option<String>,
    /// OpenAI-compatible API root
    pub base_url: Option<String>,
    /// Model used when `--model` is not given
    pub default_model: Option<String>,
}

/// All tfdoc settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Record store
    pub store: StoreSettings,
    /// Model endpoint
    pub llm: LlmSettings,
}

/// Validated store connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreCredentials {
    /// Project URL
    pub url: String,
    /// Service key
    pub service_key: String,
}

impl Settings {
    /// Loads the optional file at `path`, then applies process environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let settings = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(settings.with_env(|key| std::env::var(key).ok()))
    }

    /// Reads settings from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("Failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))
    }

    /// Parses settings from TOML text.
    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Overrides values with non-empty variables returned by `lookup`.
    pub fn with_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(v) = get(ENV_STORE_URL) {
            self.store.url = Some(v);
        }
        if let Some(v) = get(ENV_STORE_KEY) {
            self.store.service_key = Some(v);
        }
        if let Some(v) = get(ENV_LLM_API_KEY) {
            self.llm.api_key = Some(v);
        }
        if let Some(v) = get(ENV_LLM_BASE_URL) {
            self.llm.base_url = Some(v);
        }
        if let Some(v) = get(ENV_LLM_MODEL) {
            self.llm.default_model = Some(v);
        }
        self
    }

    /// Store URL and key; a missing value is a fatal configuration error.
    pub fn store_credentials(&self) -> Result<StoreCredentials> {
        match (non_empty(&self.store.url), non_empty(&self.store.service_key)) {
            (Some(url), Some(key)) => Ok(StoreCredentials {
                url: url.to_string(),
                service_key: key.to_string(),
            }),
            _ => Err(Error::config(format!(
                "{ENV_STORE_URL} or {ENV_STORE_KEY} is not set. \
                 Set them in the environment or in the [store] table of the config file."
            ))),
        }
    }

    /// Model API key, if configured.
    pub fn llm_api_key(&self) -> Option<&str> {
        non_empty(&self.llm.api_key)
    }

    /// Model API root.
    pub fn llm_base_url(&self) -> &str {
        non_empty(&self.llm.base_url).unwrap_or(DEFAULT_BASE_URL)
    }

    /// Model used when the caller does not pick one.
    pub fn default_model(&self) -> &str {
        non_empty(&self.llm.default_model).unwrap_or(DEFAULT_MODEL)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}
