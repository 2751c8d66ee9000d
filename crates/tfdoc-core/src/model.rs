//! Resource and attribute records.
//!
//! Store rows are decoded once into these structs at the store boundary.
//! Optional columns stay optional here; the documented defaults ("unknown",
//! "optional", "n/a") are applied only when rendering.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Store-assigned key of a resource row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(i64);

impl ResourceId {
    /// Creates a resource ID from its raw store value.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw store value.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ResourceId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// One documented entity of a provider at one version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    /// Store-assigned key
    pub id: ResourceId,

    /// Provider namespace, e.g. `azurerm`
    pub provider: String,

    /// Resource type name, e.g. `azurerm_storage_account`
    pub resource_name: String,

    /// Provider version; compared as an opaque string
    pub version: String,

    /// Documentation page for this resource at this version
    pub doc_url: String,
}

impl Resource {
    /// Returns `provider.resource_name`.
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.provider, self.resource_name)
    }
}

/// One documented field of a resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    /// Owning resource
    pub resource_id: ResourceId,

    /// Field name, unique within a resource
    pub attribute_name: String,

    /// Free-form description; may be empty or absent
    #[serde(default)]
    pub description: Option<String>,

    /// Tri-state: `Some(true)`, `Some(false)` or unknown
    #[serde(default)]
    pub required: Option<bool>,

    /// Declared type, if documented
    #[serde(default)]
    pub attr_type: Option<String>,

    /// Version the attribute first appeared in
    #[serde(default)]
    pub version_added: Option<String>,

    /// Version the attribute was removed in; empty or absent means "not removed"
    #[serde(default)]
    pub version_removed: Option<String>,

    /// Anchor within the resource's documentation page
    #[serde(default)]
    pub doc_anchor: Option<String>,
}

impl Attribute {
    /// Creates an attribute with only its owner and name set.
    pub fn new(resource_id: ResourceId, attribute_name: impl Into<String>) -> Self {
        Self {
            resource_id,
            attribute_name: attribute_name.into(),
            description: None,
            required: None,
            attr_type: None,
            version_added: None,
            version_removed: None,
            doc_anchor: None,
        }
    }

    /// `"required"` only for an explicit `true`; `"optional"` otherwise.
    pub fn required_label(&self) -> &'static str {
        if self.required == Some(true) {
            "required"
        } else {
            "optional"
        }
    }

    /// Declared type, or `"unknown"`.
    pub fn type_label(&self) -> &str {
        non_empty(self.attr_type.as_deref()).unwrap_or("unknown")
    }

    /// Version the attribute was introduced in, or `"n/a"`.
    pub fn since_label(&self) -> &str {
        non_empty(self.version_added.as_deref()).unwrap_or("n/a")
    }

    /// Version the attribute was removed in, if any.
    pub fn removed_in(&self) -> Option<&str> {
        non_empty(self.version_removed.as_deref())
    }

    /// Description text, empty when absent.
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// A resource together with its attributes, ordered by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentedResource {
    /// The resolved resource
    pub resource: Resource,

    /// Its attributes
    pub attributes: Vec<Attribute>,
}

impl DocumentedResource {
    /// Creates a documented resource, sorting attributes by name.
    pub fn new(resource: Resource, mut attributes: Vec<Attribute>) -> Self {
        attributes.sort_by(|a, b| a.attribute_name.cmp(&b.attribute_name));
        Self {
            resource,
            attributes,
        }
    }
}

/// Attribute as supplied to the ingestion path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeInput {
    /// Field name
    pub attribute_name: String,

    /// Free-form description
    #[serde(default)]
    pub description: String,

    /// Tri-state required flag
    #[serde(default)]
    pub required: Option<bool>,

    /// Declared type
    #[serde(default)]
    pub attr_type: Option<String>,

    /// Version first documented; defaults to the resource version on insert
    #[serde(default)]
    pub version_added: Option<String>,

    /// Version removed in
    #[serde(default)]
    pub version_removed: Option<String>,

    /// Anchor within the documentation page
    #[serde(default)]
    pub doc_anchor: Option<String>,
}

/// Resource plus attributes as supplied to the ingestion path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceInput {
    /// Provider namespace
    pub provider: String,

    /// Resource type name
    pub resource_name: String,

    /// Provider version
    pub version: String,

    /// Documentation page
    pub doc_url: String,

    /// Attributes to insert alongside the resource
    #[serde(default)]
    pub attributes: Vec<AttributeInput>,
}
