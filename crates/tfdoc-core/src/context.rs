//! Plain-text context document for a resource and its attributes.
//!
//! The document is the model's only factual input, so rendering is pure:
//! identical inputs always produce byte-identical output.

use crate::model::{Attribute, Resource};

/// Marker emitted in place of the attribute blocks when there are none.
pub const NO_ATTRIBUTES_MARKER: &str = "  (no attributes found)";

/// Renders `resource` and `attributes` (in the given order) as text.
///
/// # Examples
///
/// ```
/// use tfdoc_core::{build_context, Resource, ResourceId};
///
/// let resource = Resource {
///     id: ResourceId::new(1),
///     provider: "azurerm".to_string(),
///     resource_name: "azurerm_resource_group".to_string(),
///     version: "4.52.0".to_string(),
///     doc_url: "https://example.invalid/rg".to_string(),
/// };
/// let text = build_context(&resource, &[]);
/// assert!(text.starts_with("Resource: azurerm.azurerm_resource_group (version 4.52.0)"));
/// assert!(text.ends_with("(no attributes found)"));
/// ```
pub fn build_context(resource: &Resource, attributes: &[Attribute]) -> String {
    let mut lines: Vec<String> = vec![
        format!(
            "Resource: {} (version {})",
            resource.qualified_name(),
            resource.version
        ),
        format!("Documentation URL: {}", resource.doc_url),
        String::new(),
        "Attributes:".to_string(),
    ];

    if attributes.is_empty() {
        lines.push(NO_ATTRIBUTES_MARKER.to_string());
        return lines.join("\n");
    }

    for attr in attributes {
        push_attribute(&mut lines, attr);
    }

    lines.join("\n")
}

fn push_attribute(lines: &mut Vec<String>, attr: &Attribute) {
    lines.push(format!("- {}", attr.attribute_name));
    lines.push(format!("  Type: {}", attr.type_label()));
    lines.push(format!("  Required: {}", attr.required_label()));
    lines.push(format!("  Since: {}", attr.since_label()));
    if let Some(removed) = attr.removed_in() {
        lines.push(format!("  Removed in: {removed}"));
    }
    lines.push("  Description:".to_string());
    lines.push(format!("    {}", attr.description_text()));
    lines.push(String::new());
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::ResourceId;

    fn storage_account() -> Resource {
        Resource {
            id: ResourceId::new(1),
            provider: "azurerm".to_string(),
            resource_name: "azurerm_storage_account".to_string(),
            version: "4.52.0".to_string(),
            doc_url: "https://registry.terraform.io/providers/hashicorp/azurerm/4.52.0/docs/resources/storage_account".to_string(),
        }
    }

    fn required_string(name: &str, description: &str) -> Attribute {
        let mut a = Attribute::new(ResourceId::new(1), name);
        a.required = Some(true);
        a.attr_type = Some("string".to_string());
        a.version_added = Some("4.0.0".to_string());
        a.description = Some(description.to_string());
        a
    }

    #[test]
    fn test_storage_account_example() {
        let attrs = vec![
            required_string("name", "The name of the storage account."),
            required_string(
                "resource_group_name",
                "The name of the resource group in which to create the storage account.",
            ),
        ];
        let text = build_context(&storage_account(), &attrs);
        let expected = "\
Resource: azurerm.azurerm_storage_account (version 4.52.0)
Documentation URL: https://registry.terraform.io/providers/hashicorp/azurerm/4.52.0/docs/resources/storage_account

Attributes:
- name
  Type: string
  Required: required
  Since: 4.0.0
  Description:
    The name of the storage account.

- resource_group_name
  Type: string
  Required: required
  Since: 4.0.0
  Description:
    The name of the resource group in which to create the storage account.
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_empty_attributes_emit_only_marker() {
        let text = build_context(&storage_account(), &[]);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[3], "Attributes:");
        assert_eq!(lines[4], NO_ATTRIBUTES_MARKER);
        assert!(!text.contains("Required:"));
    }

    #[test]
    fn test_optional_and_unknown_defaults() {
        let a = Attribute::new(ResourceId::new(1), "tags");
        let text = build_context(&storage_account(), &[a]);
        assert!(text.contains("- tags\n  Type: unknown\n  Required: optional\n  Since: n/a\n"));
        assert!(text.contains("  Description:\n    \n"));
    }

    #[test]
    fn test_removed_in_line_only_when_non_empty() {
        let mut removed = Attribute::new(ResourceId::new(1), "enable_https_traffic_only");
        removed.version_removed = Some("4.0.0".to_string());
        let mut kept = Attribute::new(ResourceId::new(1), "https_traffic_only_enabled");
        kept.version_removed = Some(String::new());

        let text = build_context(&storage_account(), &[removed]);
        assert!(text.contains("  Removed in: 4.0.0\n"));

        let text = build_context(&storage_account(), &[kept]);
        assert!(!text.contains("Removed in"));
    }

    #[test]
    fn test_renders_in_input_order() {
        let attrs = vec![
            Attribute::new(ResourceId::new(1), "b"),
            Attribute::new(ResourceId::new(1), "a"),
        ];
        let text = build_context(&storage_account(), &attrs);
        assert!(text.find("- b").unwrap() < text.find("- a").unwrap());
    }
}
