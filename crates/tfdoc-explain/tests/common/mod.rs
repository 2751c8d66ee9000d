//! Common test utilities for explanation pipeline tests.

use std::sync::Arc;

use async_trait::async_trait;
use tfdoc_core::{Attribute, AttributeInput, Error, Resource, ResourceId, Result};
use tfdoc_explain::ExplanationGenerator;
use tfdoc_llm::MockLlmProvider;
use tfdoc_store::{MemoryStore, NewResource, RecordStore, ingest, ingest_resource};

/// Test harness wiring a store and a mock model into a generator.
pub struct TestHarness {
    /// Mock model provider
    pub llm: Arc<MockLlmProvider>,
    /// Generator under test
    pub generator: ExplanationGenerator,
}

impl TestHarness {
    /// Harness over `store` answering with `llm`.
    pub fn new(store: Arc<dyn RecordStore>, llm: MockLlmProvider) -> Self {
        let llm = Arc::new(llm);
        let generator = ExplanationGenerator::new(store, llm.clone());
        Self { llm, generator }
    }

    /// The user message of the only model call made so far.
    pub fn sent_user_prompt(&self) -> String {
        let requests = self.llm.requests();
        assert_eq!(requests.len(), 1, "expected exactly one model call");
        requests[0].messages[0].content.clone()
    }
}

/// Memory store seeded with the `azurerm_storage_account` example.
pub async fn storage_account_store() -> Arc<MemoryStore> {
    let store = Arc::new(MemoryStore::new());
    ingest_resource(store.as_ref(), &ingest::storage_account_example())
        .await
        .expect("seed store");
    store
}

/// Store whose attribute reads come back in reverse name order.
pub struct ReversedStore(pub MemoryStore);

#[async_trait]
impl RecordStore for ReversedStore {
    async fn get_resource(&self, resource_name: &str, version: &str) -> Result<Option<Resource>> {
        self.0.get_resource(resource_name, version).await
    }

    async fn get_attributes(&self, resource_id: ResourceId) -> Result<Vec<Attribute>> {
        let mut attributes = self.0.get_attributes(resource_id).await?;
        attributes.reverse();
        Ok(attributes)
    }

    async fn insert_resource(&self, resource: &NewResource) -> Result<Resource> {
        self.0.insert_resource(resource).await
    }

    async fn insert_attributes(&self, resource: &Resource, attributes: &[AttributeInput]) -> Result<usize> {
        self.0.insert_attributes(resource, attributes).await
    }
}

/// Store that is always unreachable.
pub struct DownStore;

#[async_trait]
impl RecordStore for DownStore {
    async fn get_resource(&self, _resource_name: &str, _version: &str) -> Result<Option<Resource>> {
        Err(Error::upstream("store", "connection refused"))
    }

    async fn get_attributes(&self, _resource_id: ResourceId) -> Result<Vec<Attribute>> {
        Err(Error::upstream("store", "connection refused"))
    }

    async fn insert_resource(&self, _resource: &NewResource) -> Result<Resource> {
        Err(Error::upstream("store", "connection refused"))
    }

    async fn insert_attributes(&self, _resource: &Resource, _attributes: &[AttributeInput]) -> Result<usize> {
        Err(Error::upstream("store", "connection refused"))
    }
}

/// Attribute input with only a name set.
pub fn bare_input(name: &str) -> AttributeInput {
    AttributeInput {
        attribute_name: name.to_string(),
        description: String::new(),
        required: None,
        attr_type: None,
        version_added: None,
        version_removed: None,
        doc_anchor: None,
    }
}
