//! Console rendering.

use tfdoc_core::DocumentedResource;

const RULE_WIDTH: usize = 80;

/// Wraps an explanation between banner lines.
pub fn render_explanation(explanation: &str) -> String {
    let title = " LLM Explanation ";
    let side = (RULE_WIDTH - title.len()) / 2;
    let banner = format!("{}{title}{}", "=".repeat(side), "=".repeat(side));
    format!("\n{banner}\n\n{explanation}\n\n{}\n", "=".repeat(banner.len()))
}

/// Renders the resource header and attribute table shown by `tfdoc inspect`.
pub fn render_inspection(doc: &DocumentedResource) -> String {
    let rule = "-".repeat(RULE_WIDTH);
    let resource = &doc.resource;
    let mut lines = vec![
        String::new(),
        format!(
            "Resource: {} (version {})",
            resource.qualified_name(),
            resource.version
        ),
        format!("Doc URL: {}", resource.doc_url),
        rule.clone(),
    ];

    if doc.attributes.is_empty() {
        lines.push("No attributes found.".to_string());
    }

    for attr in &doc.attributes {
        lines.push(format!("Attribute: {}", attr.attribute_name));
        lines.push(format!("  Type:        {}", attr.type_label()));
        lines.push(format!("  Required?:   {}", attr.required_label()));
        lines.push(format!("  Since:       {}", attr.since_label()));
        if let Some(removed) = attr.removed_in() {
            lines.push(format!("  Removed in:  {removed}"));
        }
        lines.push("  Description:".to_string());
        lines.push(format!("    {}", attr.description_text()));
        lines.push(rule.clone());
    }

    lines.join("\n")
}
