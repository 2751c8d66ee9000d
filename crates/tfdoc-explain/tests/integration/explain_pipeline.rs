//! End-to-end explanation tests.

use std::sync::Arc;

use tfdoc_core::ResourceInput;
use tfdoc_explain::ExplainRequest;
use tfdoc_explain::prompt::SYSTEM_PROMPT;
use tfdoc_llm::{MockLlmProvider, Role};
use tfdoc_store::{MemoryStore, ingest_resource};

use crate::common::{ReversedStore, TestHarness, bare_input, storage_account_store};

#[tokio::test]
async fn test_storage_account_prompt_contents() {
    let harness = TestHarness::new(
        storage_account_store().await,
        MockLlmProvider::with_response("The storage account resource..."),
    );

    let text = harness
        .generator
        .explain(&ExplainRequest::new("azurerm_storage_account", "4.52.0"))
        .await
        .unwrap();
    assert_eq!(text, "The storage account resource...");

    let request = &harness.llm.requests()[0];
    assert_eq!(request.model, "gpt-4o-mini");
    assert_eq!(request.system_prompt.as_deref(), Some(SYSTEM_PROMPT));
    assert_eq!(request.messages.len(), 1);
    assert_eq!(request.messages[0].role, Role::User);

    let prompt = harness.sent_user_prompt();
    assert!(prompt.contains("'azurerm_storage_account' for provider version '4.52.0' in English"));
    assert!(prompt.contains("Resource: azurerm.azurerm_storage_account (version 4.52.0)\n"));

    let name_at = prompt.find("- name\n").unwrap();
    let rg_at = prompt.find("- resource_group_name\n").unwrap();
    assert!(name_at < rg_at);
    assert_eq!(prompt.matches("  Required: required\n").count(), 2);
    assert_eq!(prompt.matches("  Since: 4.0.0\n").count(), 2);
}

#[tokio::test]
async fn test_context_embedded_verbatim() {
    let store = storage_account_store().await;
    let harness = TestHarness::new(store, MockLlmProvider::with_response("ok"));

    let context = harness
        .generator
        .context_for("azurerm_storage_account", "4.52.0")
        .await
        .unwrap();
    harness
        .generator
        .explain(&ExplainRequest::new("azurerm_storage_account", "4.52.0"))
        .await
        .unwrap();

    assert!(harness.sent_user_prompt().contains(&context));
}

#[tokio::test]
async fn test_german_language_path() {
    let harness = TestHarness::new(storage_account_store().await, MockLlmProvider::with_response("Erklärung"));

    let text = harness
        .generator
        .explain(&ExplainRequest::new("azurerm_storage_account", "4.52.0").with_language("de"))
        .await
        .unwrap();

    assert_eq!(text, "Erklärung");
    assert!(harness.sent_user_prompt().contains("in German."));
}

#[tokio::test]
async fn test_unrecognized_language_uses_english() {
    let harness = TestHarness::new(storage_account_store().await, MockLlmProvider::with_response("ok"));

    harness
        .generator
        .explain(&ExplainRequest::new("azurerm_storage_account", "4.52.0").with_language("fr"))
        .await
        .unwrap();

    assert!(harness.sent_user_prompt().contains("in English."));
}

#[tokio::test]
async fn test_custom_model_is_forwarded() {
    let harness = TestHarness::new(storage_account_store().await, MockLlmProvider::with_response("ok"));

    harness
        .generator
        .explain(&ExplainRequest::new("azurerm_storage_account", "4.52.0").with_model("gpt-4.1"))
        .await
        .unwrap();

    assert_eq!(harness.llm.requests()[0].model, "gpt-4.1");
}

#[tokio::test]
async fn test_empty_completion_is_empty_string() {
    let harness = TestHarness::new(storage_account_store().await, MockLlmProvider::empty());

    let text = harness
        .generator
        .explain(&ExplainRequest::new("azurerm_storage_account", "4.52.0"))
        .await
        .unwrap();

    assert_eq!(text, "");
}

#[tokio::test]
async fn test_attribute_order_independent_of_store_order() {
    let inner = MemoryStore::new();
    let input = ResourceInput {
        provider: "azurerm".to_string(),
        resource_name: "azurerm_resource_group".to_string(),
        version: "4.52.0".to_string(),
        doc_url: "https://example.invalid/resource_group".to_string(),
        attributes: vec![bare_input("tags"), bare_input("location"), bare_input("name")],
    };
    ingest_resource(&inner, &input).await.unwrap();

    let harness = TestHarness::new(Arc::new(ReversedStore(inner)), MockLlmProvider::with_response("ok"));
    let context = harness
        .generator
        .context_for("azurerm_resource_group", "4.52.0")
        .await
        .unwrap();

    let names: Vec<&str> = context.lines().filter_map(|l| l.strip_prefix("- ")).collect();
    assert_eq!(names, ["location", "name", "tags"]);
}

#[tokio::test]
async fn test_resource_without_attributes() {
    let store = MemoryStore::new();
    let mut input = tfdoc_store::ingest::storage_account_example();
    input.attributes.clear();
    ingest_resource(&store, &input).await.unwrap();

    let harness = TestHarness::new(Arc::new(store), MockLlmProvider::with_response("ok"));
    harness
        .generator
        .explain(&ExplainRequest::new("azurerm_storage_account", "4.52.0"))
        .await
        .unwrap();

    let prompt = harness.sent_user_prompt();
    assert!(prompt.contains("Attributes:\n  (no attributes found)\n\n"));
    assert!(!prompt.contains("Required:"));
}

#[tokio::test]
async fn test_ingested_default_version_is_rendered() {
    let store = MemoryStore::new();
    let mut input = tfdoc_store::ingest::storage_account_example();
    input.attributes.push(bare_input("access_tier"));
    ingest_resource(&store, &input).await.unwrap();

    let harness = TestHarness::new(Arc::new(store), MockLlmProvider::with_response("ok"));
    let context = harness
        .generator
        .context_for("azurerm_storage_account", "4.52.0")
        .await
        .unwrap();

    assert!(context.contains("- access_tier\n  Type: unknown\n  Required: optional\n  Since: 4.52.0\n"));
}
