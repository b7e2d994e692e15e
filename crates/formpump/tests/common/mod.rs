#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::LazyLock;

use formpump::{Attributes, FormData, FormPump};
use regex::Regex;

static TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<(/?)([A-Za-z][A-Za-z0-9-]*)((?:\s+[^\s=/>]+="[^"]*")*)\s*(/?)>"#).unwrap()
});
static ATTR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"([^\s=/>]+)="([^"]*)""#).unwrap());
static ID_ATTR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#" (id|for)="[^"]*""#).unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    Start,
    End,
    StartEnd,
}

/// One scanned tag with unescaped attribute values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub kind: TagKind,
    pub name: String,
    pub attrs: HashMap<String, String>,
}

impl Tag {
    pub fn attr(&self, key: &str) -> &str {
        self.attrs
            .get(key)
            .unwrap_or_else(|| panic!("<{}> has no {key} attribute: {self:?}", self.name))
    }
}

/// Scans the tags of `html` in document order.
pub fn tags(html: &str) -> Vec<Tag> {
    TAG.captures_iter(html)
        .map(|caps| {
            let kind = if &caps[1] == "/" {
                TagKind::End
            } else if &caps[4] == "/" {
                TagKind::StartEnd
            } else {
                TagKind::Start
            };
            let attrs = ATTR
                .captures_iter(&caps[3])
                .map(|a| (a[1].to_string(), unescape(&a[2])))
                .collect();
            Tag {
                kind,
                name: caps[2].to_string(),
                attrs,
            }
        })
        .collect()
}

/// Reverses attribute escaping.
pub fn unescape(s: &str) -> String {
    s.replace("&quot;", "\"")
        .replace("&#x27;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

/// Drops generated `id`/`for` attributes so markup can be compared exactly.
pub fn strip_ids(html: &str) -> String {
    ID_ATTR.replace_all(html, "").into_owned()
}

/// Asserts both fragments have the same tags and attributes, ignoring
/// attribute order.
pub fn assert_html_eq(actual: &str, expected: &str) {
    assert_eq!(tags(actual), tags(expected), "\nactual:   {actual}\nexpected: {expected}");
}

pub fn named(name: &str) -> Attributes {
    Attributes::new().with("name", name)
}

/// Renders a form named `name` whose body is produced by `body`.
pub fn render_form<F>(pump: &FormPump, name: Option<&str>, data: &FormData, body: F) -> String
where
    F: FnOnce(&mut formpump::FormSession<'_>) -> formpump::Result<String>,
{
    pump.form_block(name, Attributes::new(), data, body)
        .unwrap_or_else(|e| panic!("form failed to render: {e}"))
}
