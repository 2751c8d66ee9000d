//! Row shapes written to the store.

use serde::Serialize;
use tfdoc_core::{AttributeInput, Resource, ResourceId, ResourceInput};

/// A `resource` row before the store assigns its id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewResource {
    /// Provider namespace
    pub provider: String,
    /// Resource type name
    pub resource_name: String,
    /// Provider version
    pub version: String,
    /// Documentation page
    pub doc_url: String,
}

impl From<&ResourceInput> for NewResource {
    fn from(input: &ResourceInput) -> Self {
        Self {
            provider: input.provider.clone(),
            resource_name: input.resource_name.clone(),
            version: input.version.clone(),
            doc_url: input.doc_url.clone(),
        }
    }
}

/// An `attribute` row as written by the ingestion path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewAttribute {
    /// Owning resource
    pub resource_id: ResourceId,
    /// Field name
    pub attribute_name: String,
    /// Description
    pub description: String,
    /// Tri-state required flag
    pub required: Option<bool>,
    /// Declared type
    pub attr_type: Option<String>,
    /// Version first documented; never absent once written here
    pub version_added: String,
    /// Version removed in
    pub version_removed: Option<String>,
    /// Anchor within the documentation page
    pub doc_anchor: Option<String>,
}

impl NewAttribute {
    /// Builds the row for `input`, defaulting `version_added` to the
    /// resource's version when the input leaves it empty.
    pub fn from_input(resource: &Resource, input: &AttributeInput) -> Self {
        let version_added = input
            .version_added
            .as_deref()
            .filter(|v| !v.is_empty())
            .unwrap_or(&resource.version)
            .to_string();

        Self {
            resource_id: resource.id,
            attribute_name: input.attribute_name.clone(),
            description: input.description.clone(),
            required: input.required,
            attr_type: input.attr_type.clone(),
            version_added,
            version_removed: input.version_removed.clone(),
            doc_anchor: input.doc_anchor.clone(),
        }
    }
}
