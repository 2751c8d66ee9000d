//! Failure propagation tests.

use std::sync::Arc;

use tfdoc_core::Error;
use tfdoc_explain::ExplainRequest;
use tfdoc_llm::{MockLlmProvider, OpenAiProvider};

use crate::common::{DownStore, TestHarness, storage_account_store};

#[tokio::test]
async fn test_unknown_version_is_not_found_without_model_call() {
    let harness = TestHarness::new(storage_account_store().await, MockLlmProvider::with_response("unused"));

    let err = harness
        .generator
        .explain(&ExplainRequest::new("azurerm_storage_account", "4.51.0"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        Error::NotFound { ref resource_name, ref version }
            if resource_name == "azurerm_storage_account" && version == "4.51.0"
    ));
    assert!(err.is_user_correctable());
    assert_eq!(harness.llm.call_count(), 0);
}

#[tokio::test]
async fn test_store_failure_is_upstream_without_model_call() {
    let harness = TestHarness::new(Arc::new(DownStore), MockLlmProvider::with_response("unused"));

    let err = harness
        .generator
        .explain(&ExplainRequest::new("azurerm_storage_account", "4.52.0"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Upstream { service: "store", .. }));
    assert_eq!(harness.llm.call_count(), 0);
}

#[tokio::test]
async fn test_model_failure_is_upstream() {
    let harness = TestHarness::new(storage_account_store().await, MockLlmProvider::failing("HTTP 503"));

    let err = harness
        .generator
        .explain(&ExplainRequest::new("azurerm_storage_account", "4.52.0"))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "model error: HTTP 503");
    assert_eq!(harness.llm.call_count(), 1);
}

#[tokio::test]
async fn test_missing_model_credential_is_configuration_error() {
    let generator = tfdoc_explain::ExplanationGenerator::new(
        storage_account_store().await,
        Arc::new(OpenAiProvider::new(None)),
    );

    let err = generator
        .explain(&ExplainRequest::new("azurerm_storage_account", "4.52.0"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Configuration { .. }));
}
