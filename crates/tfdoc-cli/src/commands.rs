//! Command handlers.
//!
//! Each handler turns one request into the text printed on stdout and a
//! success flag. Startup problems (missing store settings, unreadable input
//! files) are returned as errors instead.

use std::path::Path;
use std::process::ExitCode;

use tfdoc_core::{ResourceInput, Result};
use tfdoc_explain::{ExplainRequest, ExplanationGenerator};
use tfdoc_store::{RecordStore, fetch_documented, ingest, ingest_resource};

use crate::app;
use crate::cli::{Cli, Command};
use crate::render;
use crate::settings::Settings;

/// Printed result of one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Text for stdout
    pub output: String,
    /// Whether the command succeeded
    pub success: bool,
}

impl Outcome {
    fn ok(output: String) -> Self {
        Self {
            output,
            success: true,
        }
    }

    fn failed(output: String) -> Self {
        Self {
            output,
            success: false,
        }
    }

    /// Process exit code for this outcome.
    pub fn exit_code(&self) -> ExitCode {
        if self.success {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

/// Explains a resource.
pub async fn explain(generator: &ExplanationGenerator, request: &ExplainRequest) -> Outcome {
    match generator.explain(request).await {
        Ok(explanation) => Outcome::ok(render::render_explanation(&explanation)),
        Err(e) => Outcome::failed(format!("Failed to generate explanation: {e}\n")),
    }
}

/// Renders a resource and its attributes.
pub async fn inspect(store: &dyn RecordStore, resource_name: &str, version: &str) -> Outcome {
    match fetch_documented(store, resource_name, version).await {
        Ok(doc) => Outcome::ok(format!("{}\n", render::render_inspection(&doc))),
        Err(e) => Outcome::failed(format!("{e}\n")),
    }
}

/// Inserts a resource and its attributes.
pub async fn ingest(store: &dyn RecordStore, input: &ResourceInput) -> Outcome {
    match ingest_resource(store, input).await {
        Ok(report) => Outcome::ok(format!(
            "Inserted {} attributes for resource '{}' version '{}'.\n",
            report.attributes_inserted, report.resource.resource_name, report.resource.version
        )),
        Err(e) => Outcome::failed(format!("Failed to ingest resource: {e}\n")),
    }
}

/// Reads a `ResourceInput` JSON file, or returns the built-in example.
pub fn read_input(path: Option<&Path>) -> Result<ResourceInput> {
    match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&content)?)
        }
        None => Ok(ingest::storage_account_example()),
    }
}

/// Loads settings, builds dependencies, and runs the parsed command.
pub async fn run(cli: Cli) -> Result<Outcome> {
    let settings = Settings::load(cli.config.as_deref())?;
    app::startup_warnings(&settings);

    let outcome = match cli.command {
        Command::Explain {
            resource,
            version,
            language,
            model,
        } => {
            let generator = app::build_generator(&settings)?;
            let model = model.unwrap_or_else(|| settings.default_model().to_string());
            let request = ExplainRequest::new(resource, version)
                .with_language(&language)
                .with_model(model);
            explain(&generator, &request).await
        }
        Command::Inspect { resource, version } => {
            let store = app::build_store(&settings)?;
            inspect(&store, &resource, &version).await
        }
        Command::Ingest { file } => {
            let store = app::build_store(&settings)?;
            let input = read_input(file.as_deref())?;
            ingest(&store, &input).await
        }
    };

    Ok(outcome)
}
