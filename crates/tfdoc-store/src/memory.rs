//! In-process record store.

use std::sync::RwLock;

use async_trait::async_trait;
use tfdoc_core::{Attribute, AttributeInput, Error, Resource, ResourceId, Result};

use crate::RecordStore;
use crate::rows::{NewAttribute, NewResource};

#[derive(Debug, Default)]
struct Tables {
    resources: Vec<Resource>,
    attributes: Vec<Attribute>,
    next_id: i64,
}

/// Record store held in memory. Ids are assigned sequentially from 1.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of resource rows held.
    pub fn resource_count(&self) -> usize {
        self.tables.read().map(|t| t.resources.len()).unwrap_or(0)
    }

    fn poisoned<E: std::fmt::Display>(e: E) -> Error {
        Error::upstream("store", format!("memory store lock poisoned: {e}"))
    }
}

impl From<NewAttribute> for Attribute {
    fn from(row: NewAttribute) -> Self {
        Self {
            resource_id: row.resource_id,
            attribute_name: row.attribute_name,
            description: Some(row.description),
            required: row.required,
            attr_type: row.attr_type,
            version_added: Some(row.version_added),
            version_removed: row.version_removed,
            doc_anchor: row.doc_anchor,
        }
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn get_resource(&self, resource_name: &str, version: &str) -> Result<Option<Resource>> {
        let tables = self.tables.read().map_err(Self::poisoned)?;
        Ok(tables
            .resources
            .iter()
            .find(|r| r.resource_name == resource_name && r.version == version)
            .cloned())
    }

    async fn get_attributes(&self, resource_id: ResourceId) -> Result<Vec<Attribute>> {
        let tables = self.tables.read().map_err(Self::poisoned)?;
        let mut attributes: Vec<Attribute> = tables
            .attributes
            .iter()
            .filter(|a| a.resource_id == resource_id)
            .cloned()
            .collect();
        attributes.sort_by(|a, b| a.attribute_name.cmp(&b.attribute_name));
        Ok(attributes)
    }

    async fn insert_resource(&self, resource: &NewResource) -> Result<Resource> {
        let mut tables = self.tables.write().map_err(Self::poisoned)?;
        tables.next_id += 1;
        let row = Resource {
            id: ResourceId::new(tables.next_id),
            provider: resource.provider.clone(),
            resource_name: resource.resource_name.clone(),
            version: resource.version.clone(),
            doc_url: resource.doc_url.clone(),
        };
        tables.resources.push(row.clone());
        Ok(row)
    }

    async fn insert_attributes(
        &self,
        resource: &Resource,
        attributes: &[AttributeInput],
    ) -> Result<usize> {
        let mut tables = self.tables.write().map_err(Self::poisoned)?;
        tables.attributes.extend(
            attributes
                .iter()
                .map(|input| Attribute::from(NewAttribute::from_input(resource, input))),
        );
        Ok(attributes.len())
    }
}
