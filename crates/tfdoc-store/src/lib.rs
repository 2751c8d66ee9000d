//! # tfdoc-store
//!
//! Record store access for tfdoc.
//!
//! This crate provides:
//! - The [`RecordStore`] read/write contract over `resource` and `attribute` rows
//! - [`PostgrestStore`], a Supabase/PostgREST implementation over HTTP
//! - [`MemoryStore`], an in-process implementation for tests
//! - The ingestion path ([`ingest`]) that writes a resource and its attributes

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod ingest;
pub mod memory;
pub mod postgrest;
pub mod rows;

use async_trait::async_trait;
use tfdoc_core::{Attribute, AttributeInput, DocumentedResource, Error, Resource, ResourceId, Result};

pub use ingest::{IngestReport, ingest_resource};
pub use memory::MemoryStore;
pub use postgrest::PostgrestStore;
pub use rows::{NewAttribute, NewResource};

/// Read/write contract of the record store.
///
/// Reads never mutate. Attributes are returned ordered by
/// `attribute_name` ascending.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Looks up a resource by exact name and version. First match wins.
    async fn get_resource(&self, resource_name: &str, version: &str) -> Result<Option<Resource>>;

    /// Returns all attributes of a resource, ordered by name; empty if none.
    async fn get_attributes(&self, resource_id: ResourceId) -> Result<Vec<Attribute>>;

    /// Inserts a resource row and returns it with its assigned id.
    async fn insert_resource(&self, resource: &NewResource) -> Result<Resource>;

    /// Inserts attribute rows for `resource` and returns how many were written.
    ///
    /// A missing `version_added` defaults to the resource's version.
    async fn insert_attributes(
        &self,
        resource: &Resource,
        attributes: &[AttributeInput],
    ) -> Result<usize>;
}

/// Resolves a resource and its attributes, failing with
/// [`Error::NotFound`] when no resource matches.
pub async fn fetch_documented(
    store: &dyn RecordStore,
    resource_name: &str,
    version: &str,
) -> Result<DocumentedResource> {
    let resource = store
        .get_resource(resource_name, version)
        .await?
        .ok_or_else(|| Error::not_found(resource_name, version))?;

    let attributes = store.get_attributes(resource.id).await?;

    tracing::debug!(
        resource_id = %resource.id,
        attributes = attributes.len(),
        "Resolved resource"
    );

    Ok(DocumentedResource::new(resource, attributes))
}
