//! Escaped HTML tag building.

use crate::attrs::Attributes;

/// How a built tag is terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagEnd {
    /// `<tag ...>`, the caller writes content and the closing tag.
    Open,
    /// `<tag ... />`
    SelfClosing,
}

/// Escapes HTML special characters for text and attribute contexts.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Renders `tag` with `attrs` in insertion order.
///
/// Tag name, keys and values are all escaped. Attributes whose value does
/// not render (`false` booleans, option lists) are left out.
pub fn build_tag(tag: &str, attrs: &Attributes, end: TagEnd) -> String {
    let mut html = format!("<{}", html_escape(tag));
    for (key, value) in attrs.iter() {
        if let Some(rendered) = value.render(key) {
            html.push_str(&format!(
                r#" {}="{}""#,
                html_escape(key),
                html_escape(&rendered)
            ));
        }
    }
    match end {
        TagEnd::Open => html.push('>'),
        TagEnd::SelfClosing => html.push_str(" />"),
    }
    html
}
