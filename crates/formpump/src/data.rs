//! Submitted values and validation errors, keyed by form then field.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{FormPumpError, Result};

/// Strings treated as boolean true when filling boolean-style checkboxes.
pub const TRUTHY_TOKENS: [&str; 6] = ["1", "t", "true", "y", "yes", "on"];

/// Returns whether `s` is one of the [`TRUTHY_TOKENS`], ignoring case.
pub fn is_truthy(s: &str) -> bool {
    let lower = s.to_lowercase();
    TRUTHY_TOKENS.contains(&lower.as_str())
}

/// A stored field value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// A boolean, typically a checkbox default.
    Bool(bool),
    /// A number as submitted.
    Number(serde_json::Number),
    /// A single string.
    Text(String),
    /// Several strings, from multi-selects or repeated checkboxes.
    List(Vec<String>),
}

impl FieldValue {
    /// Returns the text placed in a value attribute or textarea body.
    pub fn display(&self) -> String {
        match self {
            Self::Bool(b) => b.to_string(),
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.clone(),
            Self::List(items) => items.join(","),
        }
    }

    /// Returns whether an option with value `candidate` is selected.
    ///
    /// Lists select by membership. Scalars select on string equality first;
    /// with `truthy_fallback`, they also select when both sides are truthy
    /// tokens.
    pub fn matches(&self, candidate: &str, truthy_fallback: bool) -> bool {
        match self {
            Self::List(items) => items.iter().any(|item| item == candidate),
            scalar => {
                let stored = scalar.display();
                stored == candidate
                    || (truthy_fallback && is_truthy(&stored) && is_truthy(candidate))
            }
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(value: Vec<&str>) -> Self {
        Self::List(value.into_iter().map(str::to_string).collect())
    }
}

/// A validation error for one field: one or more messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Messages in the order they were reported.
    pub messages: Vec<String>,
}

impl FieldError {
    /// Creates an error with one message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            messages: vec![message.into()],
        }
    }

    /// Returns whether any message is non-empty.
    pub fn is_present(&self) -> bool {
        self.messages.iter().any(|m| !m.is_empty())
    }

    /// Messages joined with a single space.
    pub fn joined(&self) -> String {
        self.messages.join(" ")
    }
}

impl<'de> Deserialize<'de> for FieldError {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Message(String),
            Messages(Vec<String>),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Message(message) => Self::new(message),
            Repr::Messages(messages) => Self { messages },
        })
    }
}

impl From<&str> for FieldError {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for FieldError {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<Vec<String>> for FieldError {
    fn from(messages: Vec<String>) -> Self {
        Self { messages }
    }
}

/// Submitted values: form (or context) name → field name → value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormVars {
    buckets: HashMap<String, HashMap<String, FieldValue>>,
}

impl FormVars {
    /// Creates an empty value store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to store a value.
    #[must_use]
    pub fn with(mut self, form: &str, field: &str, value: impl Into<FieldValue>) -> Self {
        self.insert(form, field, value);
        self
    }

    /// Stores a value.
    pub fn insert(&mut self, form: &str, field: &str, value: impl Into<FieldValue>) {
        self.buckets
            .entry(form.to_string())
            .or_default()
            .insert(field.to_string(), value.into());
    }

    /// Looks up a value.
    pub fn get(&self, form: &str, field: &str) -> Option<&FieldValue> {
        self.buckets.get(form).and_then(|fields| fields.get(field))
    }

    /// Returns the number of form buckets.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Returns whether no values are stored.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

/// Validation errors: form (or context) name → field name → error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct FormErrors {
    buckets: HashMap<String, HashMap<String, FieldError>>,
}

impl FormErrors {
    /// Creates an empty error store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to record an error.
    #[must_use]
    pub fn with(mut self, form: &str, field: &str, error: impl Into<FieldError>) -> Self {
        self.insert(form, field, error);
        self
    }

    /// Records an error.
    pub fn insert(&mut self, form: &str, field: &str, error: impl Into<FieldError>) {
        self.buckets
            .entry(form.to_string())
            .or_default()
            .insert(field.to_string(), error.into());
    }

    /// Looks up an error.
    pub fn get(&self, form: &str, field: &str) -> Option<&FieldError> {
        self.buckets.get(form).and_then(|fields| fields.get(field))
    }

    /// Returns the number of form buckets.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Returns whether no errors are recorded.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

/// The stores one render reads from.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FormData {
    /// Submitted values.
    #[serde(default, rename = "form_vars")]
    pub vars: FormVars,
    /// Validation errors.
    #[serde(default, rename = "form_errors")]
    pub errors: FormErrors,
}

impl FormData {
    /// Creates render data from both stores.
    pub fn new(vars: FormVars, errors: FormErrors) -> Self {
        Self { vars, errors }
    }

    /// Parses `{"form_vars": {...}, "form_errors": {...}}`. Both keys are optional.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(FormPumpError::InvalidData)
    }
}

impl From<FormVars> for FormData {
    fn from(vars: FormVars) -> Self {
        Self::new(vars, FormErrors::new())
    }
}
