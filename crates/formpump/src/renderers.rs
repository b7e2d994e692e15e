//! Error render strategies.
//!
//! An error tag picks a strategy by name through its `render` attribute
//! (`"default"` when absent). Two strategies come pre-registered:
//!
//! - `default`: `<span class="error">message</span>`
//! - `list`: `<ul class="errors"><li>message</li>...</ul>`
//!
//! Both honor a caller `class`, appended after their own.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use ironhtml::html;
use ironhtml::typed::Element;
use ironhtml_elements::Li;

use crate::attrs::Attributes;
use crate::data::FieldError;
use crate::error::{FormPumpError, Result};

/// Name of the strategy used when an error tag names none.
pub const DEFAULT_RENDERER: &str = "default";

/// Formats one field error into HTML.
pub type ErrorRenderer = Arc<dyn Fn(&FieldError, &Attributes) -> String + Send + Sync>;

/// Registry of error render strategies.
#[derive(Clone)]
pub struct ErrorRenderers {
    renderers: HashMap<String, ErrorRenderer>,
}

impl ErrorRenderers {
    /// Creates a registry holding only the built-in strategies.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.add(DEFAULT_RENDERER, render_span);
        registry.add("list", render_list);
        registry
    }

    /// Creates a registry with no strategies at all.
    pub fn empty() -> Self {
        Self {
            renderers: HashMap::new(),
        }
    }

    /// Registers a strategy, replacing any with the same name.
    pub fn add<F>(&mut self, name: impl Into<String>, renderer: F) -> Option<ErrorRenderer>
    where
        F: Fn(&FieldError, &Attributes) -> String + Send + Sync + 'static,
    {
        self.renderers.insert(name.into(), Arc::new(renderer))
    }

    /// Unregisters a strategy.
    pub fn remove(&mut self, name: &str) -> Option<ErrorRenderer> {
        self.renderers.remove(name)
    }

    /// Looks up a strategy.
    pub fn get(&self, name: &str) -> Result<&ErrorRenderer> {
        self.renderers
            .get(name)
            .ok_or_else(|| FormPumpError::UnknownErrorRenderer {
                name: name.to_string(),
            })
    }

    /// Returns whether a strategy is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.renderers.contains_key(name)
    }
}

impl Default for ErrorRenderers {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ErrorRenderers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.renderers.keys().collect();
        names.sort();
        f.debug_struct("ErrorRenderers")
            .field("names", &names)
            .finish()
    }
}

fn class_with(base: &str, attrs: &Attributes) -> String {
    match attrs.class() {
        Some(extra) if !extra.is_empty() => format!("{base} {extra}"),
        _ => base.to_string(),
    }
}

fn render_span(error: &FieldError, attrs: &Attributes) -> String {
    let class = class_with("error", attrs);
    let message = error.joined();
    html! { span.class(#class) { #message } }.render()
}

fn render_list(error: &FieldError, attrs: &Attributes) -> String {
    let class = class_with("errors", attrs);
    html! { ul.class(#class) }
        .children(error.messages.iter(), |message, li: Element<Li>| {
            li.text(message)
        })
        .render()
}
