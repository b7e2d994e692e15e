//! Form sessions: the state scoped to one rendered `<form>` block.

use std::borrow::Cow;

use tracing::debug;

use crate::association::AssociationEngine;
use crate::attrs::Attributes;
use crate::data::{FieldError, FieldValue, FormData};
use crate::pump::FormPump;
use crate::resolver::{resolve_error, resolve_value};
use crate::tag::{build_tag, TagEnd};

/// State for one form block: identity, lookup context, form attributes and
/// label/input pairing queues.
///
/// Sessions are plain values owned by the render that created them, so
/// concurrent renders never share pairing state.
#[derive(Debug)]
pub struct FormSession<'a> {
    pub(crate) pump: &'a FormPump,
    data: Cow<'a, FormData>,
    name: Option<String>,
    context: Option<String>,
    attrs: Attributes,
    pub(crate) labels: AssociationEngine,
}

impl<'a> FormSession<'a> {
    pub(crate) fn new(
        pump: &'a FormPump,
        name: Option<&str>,
        mut attrs: Attributes,
        data: &'a FormData,
    ) -> Self {
        attrs.set_default("method", "post");
        if !attrs.contains("action") {
            attrs.set("action", pump.default_form_action());
        }
        debug!(
            form = name.unwrap_or(""),
            value_buckets = data.vars.len(),
            error_buckets = data.errors.len(),
            "opening form"
        );
        Self {
            pump,
            data: Cow::Borrowed(data),
            name: name.map(str::to_string),
            context: name.map(str::to_string),
            attrs,
            labels: AssociationEngine::new((pump.id_factory)()),
        }
    }

    /// A session for tags rendered outside any form: no name, no data.
    pub(crate) fn stub(pump: &'a FormPump) -> Self {
        Self {
            pump,
            data: Cow::Owned(FormData::default()),
            name: None,
            context: None,
            attrs: Attributes::new(),
            labels: AssociationEngine::new((pump.id_factory)()),
        }
    }

    /// The form's own name.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The name field lookups currently resolve against.
    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    /// The form tag's attributes, defaults included.
    pub fn attrs(&self) -> &Attributes {
        &self.attrs
    }

    /// Renders the opening `<form>` tag, followed by the hidden form-name
    /// input when the form is named and a name key is configured.
    pub fn start_tag(&self) -> String {
        let mut html = build_tag("form", &self.attrs, TagEnd::Open);
        if let (Some(name), Some(key)) = (&self.name, &self.pump.config().form_name_key) {
            let hidden = Attributes::new()
                .with("type", "hidden")
                .with("name", key)
                .with("value", name);
            html.push_str(&build_tag("input", &hidden, TagEnd::SelfClosing));
        }
        html
    }

    /// Renders the closing `</form>` tag.
    ///
    /// Labels or inputs left unpaired are only logged.
    pub fn end_tag(&self) -> String {
        let dangling = self.labels.dangling();
        if !dangling.is_empty() {
            debug!(form = self.name().unwrap_or(""), fields = ?dangling, "unpaired labels or inputs");
        }
        "</form>".to_string()
    }

    /// Switches the lookup context to `ctx_name` for the rest of the form.
    ///
    /// Emits a hidden input carrying the context name when a context key is
    /// configured or the caller passes a `name`. Caller attributes come first
    /// and may override the defaults.
    pub fn context_tag(&mut self, ctx_name: &str, mut attrs: Attributes) -> String {
        debug!(
            form = self.name().unwrap_or(""),
            context = ctx_name,
            "switching form context"
        );
        self.context = Some(ctx_name.to_string());

        let key = self.pump.config().form_ctx_key.as_deref();
        if key.is_none() && !attrs.contains("name") {
            return String::new();
        }
        attrs.set_default("type", "hidden");
        if let Some(key) = key {
            attrs.set_default("name", key);
        }
        attrs.set_default("value", ctx_name);
        build_tag("input", &attrs, TagEnd::SelfClosing)
    }

    /// Resolves the stored value for `field`.
    pub fn resolve_value(&self, field: &str) -> Option<&FieldValue> {
        resolve_value(&self.data, self.context(), field)
    }

    /// Resolves the error for `field`.
    pub fn resolve_error(&self, field: &str) -> Option<&FieldError> {
        resolve_error(&self.data, self.context(), field)
    }

    /// Returns whether `field` has an error.
    pub fn if_error(&self, field: &str) -> bool {
        self.resolve_error(field).is_some()
    }

    /// Returns whether `field` has no error.
    pub fn if_not_error(&self, field: &str) -> bool {
        !self.if_error(field)
    }
}
