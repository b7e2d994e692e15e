//! Ordered HTML attribute bags.
//!
//! Attributes keep insertion order so rendered tags are deterministic. Keys
//! are normalized when inserted: a trailing underscore is dropped and the
//! remaining underscores become hyphens, which lets callers spell reserved
//! words (`class_`) and data attributes (`data_id`) as plain identifiers.

use std::fmt;

/// A single attribute value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    /// Plain text.
    Text(String),
    /// HTML boolean attribute. `true` renders as `name="name"`, `false` is omitted.
    Bool(bool),
    /// Space separated tokens, such as a class list.
    List(Vec<String>),
    /// `(value, label)` pairs for select options. Never rendered as an attribute.
    Options(Vec<(String, String)>),
    /// Explicitly empty value.
    Null,
}

impl AttrValue {
    /// Returns the text content if this is a `Text` value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Renders the value as attribute text, or `None` when the attribute
    /// should not appear at all.
    pub(crate) fn render(&self, key: &str) -> Option<String> {
        match self {
            Self::Text(s) => Some(s.clone()),
            Self::Bool(true) => Some(key.to_string()),
            Self::Bool(false) | Self::Options(_) => None,
            Self::List(items) => Some(items.join(" ")),
            Self::Null => Some(String::new()),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for AttrValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Vec<String>> for AttrValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

impl From<Vec<(String, String)>> for AttrValue {
    fn from(value: Vec<(String, String)>) -> Self {
        Self::Options(value)
    }
}

impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Bool(b) => write!(f, "{b}"),
            Self::List(items) => f.write_str(&items.join(" ")),
            Self::Options(options) => write!(f, "<{} options>", options.len()),
            Self::Null => Ok(()),
        }
    }
}

/// Normalizes an attribute key: strips one trailing underscore, then turns
/// the remaining underscores into hyphens.
pub fn normalize_key(key: &str) -> String {
    let key = key.strip_suffix('_').unwrap_or(key);
    key.replace('_', "-")
}

/// An insertion-ordered attribute map for one tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, AttrValue)>,
}

impl Attributes {
    /// Creates an empty attribute bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set an attribute.
    #[must_use]
    pub fn with(mut self, key: impl AsRef<str>, value: impl Into<AttrValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Sets an attribute, replacing an existing value in place or appending.
    pub fn set(&mut self, key: impl AsRef<str>, value: impl Into<AttrValue>) {
        let key = normalize_key(key.as_ref());
        let value = value.into();
        match self.position(&key) {
            Some(index) => self.entries[index].1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Sets an attribute only if it is absent. Returns whether it was set.
    pub fn set_default(&mut self, key: impl AsRef<str>, value: impl Into<AttrValue>) -> bool {
        if self.contains(key.as_ref()) {
            return false;
        }
        self.set(key, value);
        true
    }

    /// Moves or inserts an attribute at the front.
    pub fn prepend(&mut self, key: impl AsRef<str>, value: impl Into<AttrValue>) {
        let key = normalize_key(key.as_ref());
        if let Some(index) = self.position(&key) {
            self.entries.remove(index);
        }
        self.entries.insert(0, (key, value.into()));
    }

    /// Gets an attribute.
    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        let key = normalize_key(key);
        self.position(&key).map(|index| &self.entries[index].1)
    }

    /// Gets an attribute's text, if it is a text value.
    pub fn get_text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(AttrValue::as_text)
    }

    /// Removes an attribute and returns its value.
    pub fn remove(&mut self, key: &str) -> Option<AttrValue> {
        let key = normalize_key(key);
        self.position(&key).map(|index| self.entries.remove(index).1)
    }

    /// Returns whether the attribute is present.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Iterates over attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the number of attributes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether there are no attributes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The `name` attribute, which identifies the field.
    pub fn name(&self) -> Option<&str> {
        self.get_text("name")
    }

    /// The explicit `id`, if any.
    pub fn id(&self) -> Option<&str> {
        self.get_text("id")
    }

    /// The `class` attribute rendered as text.
    pub fn class(&self) -> Option<String> {
        self.get("class").and_then(|v| v.render("class"))
    }

    /// The caller supplied `value`.
    pub fn value(&self) -> Option<&str> {
        self.get_text("value")
    }

    /// The requested error render strategy.
    pub fn render(&self) -> Option<&str> {
        self.get_text("render")
    }

    /// Removes and returns the select options.
    pub fn take_options(&mut self) -> Vec<(String, String)> {
        match self.remove("options") {
            Some(AttrValue::Options(options)) => options,
            Some(AttrValue::List(values)) => values.into_iter().map(|v| (v.clone(), v)).collect(),
            _ => Vec::new(),
        }
    }

    /// Removes and returns the select prompt label.
    pub fn take_prompt(&mut self) -> Option<String> {
        match self.remove("prompt") {
            Some(AttrValue::Text(prompt)) if !prompt.is_empty() => Some(prompt),
            _ => None,
        }
    }

    /// Prepends `class_name` to the class list.
    pub(crate) fn prepend_class(&mut self, class_name: &str) {
        let class = match self.class() {
            Some(existing) if !existing.is_empty() => format!("{class_name} {existing}"),
            _ => class_name.to_string(),
        };
        self.set("class", class);
    }

    fn position(&self, normalized: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == normalized)
    }
}

impl<K: AsRef<str>, V: Into<AttrValue>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Self::new();
        for (key, value) in iter {
            attrs.set(key, value);
        }
        attrs
    }
}

impl<K: AsRef<str>, V: Into<AttrValue>> Extend<(K, V)> for Attributes {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}
