//! Helpers for the diagnostic dumps of graphs and SPARQL results.
//!
//! None of this is a serialization format.
use crate::NamespaceRegistry;

/// Escape the characters that are significant in HTML text and attribute values.
pub fn escape_html(txt: &str) -> String {
    let mut ret = String::with_capacity(txt.len());
    for c in txt.chars() {
        match c {
            '&' => ret.push_str("&amp;"),
            '<' => ret.push_str("&lt;"),
            '>' => ret.push_str("&gt;"),
            '"' => ret.push_str("&quot;"),
            '\'' => ret.push_str("&#039;"),
            c => ret.push(c),
        }
    }
    ret
}

/// Pretty-print an IRI or blank node identifier,
/// shortening it through `ns` when possible.
///
/// In HTML mode, IRIs become links and blank nodes are rendered as plain text.
pub fn dump_resource_value(id: &str, html: bool, ns: &NamespaceRegistry) -> String {
    let short = ns.shorten(id);
    let label = short.as_deref().unwrap_or(id);
    if !html {
        label.to_string()
    } else if id.starts_with("_:") {
        format!("<span style='color:blue'>{}</span>", escape_html(label))
    } else {
        format!(
            "<a href='{}' style='text-decoration:none;color:blue'>{}</a>",
            escape_html(id),
            escape_html(label)
        )
    }
}
