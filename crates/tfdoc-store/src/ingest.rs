//! Ingestion path: writes one resource and its attributes.

use tfdoc_core::{AttributeInput, Resource, ResourceInput, Result};

use crate::RecordStore;
use crate::rows::NewResource;

/// Outcome of ingesting one resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestReport {
    /// The inserted resource row
    pub resource: Resource,
    /// Number of attribute rows written
    pub attributes_inserted: usize,
}

/// Inserts the resource row, then its attributes.
///
/// Attributes without a `version_added` are stored with the resource's
/// version. A failure after the resource insert leaves the resource row
/// in place.
pub async fn ingest_resource(store: &dyn RecordStore, input: &ResourceInput) -> Result<IngestReport> {
    let resource = store.insert_resource(&NewResource::from(input)).await?;

    tracing::info!(
        resource_id = %resource.id,
        resource_name = %resource.resource_name,
        version = %resource.version,
        "Inserted resource"
    );

    let attributes_inserted = store
        .insert_attributes(&resource, &input.attributes)
        .await?;

    tracing::info!(
        resource_id = %resource.id,
        attributes = attributes_inserted,
        "Inserted attributes"
    );

    Ok(IngestReport {
        resource,
        attributes_inserted,
    })
}

/// Sample document for `azurerm_storage_account` at provider 4.52.0.
pub fn storage_account_example() -> ResourceInput {
    ResourceInput {
        provider: "azurerm".to_string(),
        resource_name: "azurerm_storage_account".to_string(),
        version: "4.52.0".to_string(),
        doc_url: "https://registry.terraform.io/providers/hashicorp/azurerm/4.52.0/docs/resources/storage_account".to_string(),
        attributes: vec![
            AttributeInput {
                attribute_name: "name".to_string(),
                description: "The name of the storage account.".to_string(),
                required: Some(true),
                attr_type: Some("string".to_string()),
                version_added: Some("4.0.0".to_string()),
                version_removed: None,
                doc_anchor: Some("#name".to_string()),
            },
            AttributeInput {
                attribute_name: "resource_group_name".to_string(),
                description: "The name of the resource group in which to create the storage account."
                    .to_string(),
                required: Some(true),
                attr_type: Some("string".to_string()),
                version_added: Some("4.0.0".to_string()),
                version_removed: None,
                doc_anchor: Some("#resource_group_name".to_string()),
            },
        ],
    }
}
