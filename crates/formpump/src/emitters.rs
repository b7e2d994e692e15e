//! Tag emitters, one per field kind.
//!
//! Each emitter fills the tag from the session's stores, injects the error
//! class, and pairs the tag with its label through the session's
//! association queues. Only the association queues are mutated.

use std::fmt;

use crate::attrs::{AttrValue, Attributes};
use crate::error::Result;
use crate::renderers::DEFAULT_RENDERER;
use crate::resolver::{apply_error_class, display_value, is_selected};
use crate::session::FormSession;
use crate::tag::{build_tag, html_escape, TagEnd};

/// The `type` of a plain `<input>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    /// Single-line text.
    Text,
    /// Email address.
    Email,
    /// Masked text.
    Password,
    /// Value carried without being shown.
    Hidden,
    /// File upload.
    File,
    /// Submit button.
    Submit,
}

impl InputType {
    /// The HTML `type` value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Password => "password",
            Self::Hidden => "hidden",
            Self::File => "file",
            Self::Submit => "submit",
        }
    }
}

impl fmt::Display for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn take_text(attrs: &mut Attributes, key: &str) -> Option<String> {
    match attrs.remove(key) {
        Some(AttrValue::Text(text)) => Some(text),
        _ => None,
    }
}

impl FormSession<'_> {
    /// Gives an input-like tag its `id`, unless it has none to pair by or
    /// the caller chose one.
    fn associate_input(&mut self, attrs: &mut Attributes) {
        if attrs.contains("id") {
            return;
        }
        if let Some(name) = attrs.name().map(str::to_string) {
            let id = self.labels.id_for_input(&name);
            attrs.set("id", String::from(id));
        }
    }

    /// Renders `<input type="...">`, filled with the stored value.
    ///
    /// The stored value wins over a caller `value`, which in turn wins over
    /// empty. Inputs without a `name` are rendered as given.
    pub fn input_tag(&mut self, kind: InputType, mut attrs: Attributes) -> String {
        attrs.prepend("type", kind.as_str());
        self.associate_input(&mut attrs);

        if let Some(name) = attrs.name().map(str::to_string) {
            let value = display_value(self.resolve_value(&name), attrs.value());
            attrs.set("value", value);
            apply_error_class(&mut attrs, self.resolve_error(&name));
        }
        build_tag("input", &attrs, TagEnd::SelfClosing)
    }

    /// Renders a submit button input.
    pub fn submit_tag(&mut self, attrs: Attributes) -> String {
        self.input_tag(InputType::Submit, attrs)
    }

    /// Renders a checkbox, checked when the stored value selects its
    /// `value` (default `"1"`). Truthy stored values check truthy options.
    pub fn checkbox_tag(&mut self, mut attrs: Attributes) -> String {
        attrs.prepend("type", "checkbox");
        attrs.set_default("value", "1");
        self.associate_input(&mut attrs);

        if let Some(name) = attrs.name().map(str::to_string) {
            let candidate = attrs
                .get("value")
                .map(ToString::to_string)
                .unwrap_or_default();
            if is_selected(self.resolve_value(&name), &candidate, true) {
                attrs.set("checked", "checked");
            } else {
                attrs.remove("checked");
            }
            apply_error_class(&mut attrs, self.resolve_error(&name));
        }
        build_tag("input", &attrs, TagEnd::SelfClosing)
    }

    /// Renders a radio button, checked when the stored value equals its
    /// `value` exactly.
    pub fn radio_tag(&mut self, mut attrs: Attributes) -> String {
        attrs.prepend("type", "radio");
        self.associate_input(&mut attrs);

        if let Some(name) = attrs.name().map(str::to_string) {
            let checked = attrs
                .get("value")
                .map(ToString::to_string)
                .is_some_and(|candidate| is_selected(self.resolve_value(&name), &candidate, false));
            if checked {
                attrs.set("checked", "checked");
            } else {
                attrs.remove("checked");
            }
            apply_error_class(&mut attrs, self.resolve_error(&name));
        }
        build_tag("input", &attrs, TagEnd::SelfClosing)
    }

    /// Renders an opening `<label>`.
    ///
    /// The `name` attribute names the field the label belongs to and is not
    /// rendered. Unless the caller set `for` or `id`, the label gets a `for`
    /// pointing at the matching input, before or after it in the form.
    pub fn label_tag(&mut self, mut attrs: Attributes) -> String {
        let target = take_text(&mut attrs, "name");
        if let Some(target) = target {
            if !attrs.contains("for") && !attrs.contains("id") {
                let id = self.labels.id_for_label(&target);
                attrs.set("for", String::from(id));
            }
        }
        build_tag("label", &attrs, TagEnd::Open)
    }

    /// Renders `</label>`.
    pub fn end_label_tag(&self) -> String {
        "</label>".to_string()
    }

    /// Renders a label around already rendered `inner_html`.
    pub fn label_block(&mut self, attrs: Attributes, inner_html: &str) -> String {
        let mut html = self.label_tag(attrs);
        html.push_str(inner_html);
        html.push_str(&self.end_label_tag());
        html
    }

    /// Renders a `<select>` from the `options` attribute, with an optional
    /// leading `prompt` option carrying an empty value.
    pub fn quick_select_tag(&mut self, mut attrs: Attributes) -> String {
        let options = attrs.take_options();
        let prompt = attrs.take_prompt();
        self.associate_input(&mut attrs);

        let name = attrs.name().map(str::to_string);
        if let Some(name) = &name {
            apply_error_class(&mut attrs, self.resolve_error(name));
        }
        let stored = name.as_deref().and_then(|n| self.resolve_value(n));

        let mut html = build_tag("select", &attrs, TagEnd::Open);
        if let Some(prompt) = prompt {
            html.push_str(&option_tag("", &prompt, false));
        }
        for (value, label) in &options {
            html.push_str(&option_tag(value, label, is_selected(stored, value, false)));
        }
        html.push_str("</select>");
        html
    }

    /// Renders a `<textarea>` whose body is the stored value, or the caller
    /// `value` when nothing is stored.
    pub fn textarea_tag(&mut self, mut attrs: Attributes) -> String {
        self.associate_input(&mut attrs);
        let fallback = attrs.remove("value").map(|v| v.to_string());

        let name = attrs.name().map(str::to_string);
        let content = match name {
            Some(name) => {
                apply_error_class(&mut attrs, self.resolve_error(&name));
                display_value(self.resolve_value(&name), fallback.as_deref())
            }
            None => fallback.unwrap_or_default(),
        };
        format!(
            "{}{}</textarea>",
            build_tag("textarea", &attrs, TagEnd::Open),
            html_escape(&content)
        )
    }

    /// Renders the error for `field` with the strategy named by the `render`
    /// attribute, or nothing when the field has no error.
    ///
    /// # Errors
    ///
    /// [`FormPumpError::UnknownErrorRenderer`](crate::FormPumpError::UnknownErrorRenderer)
    /// when the field has an error and the strategy is not registered.
    pub fn error_tag(&self, field: &str, mut attrs: Attributes) -> Result<String> {
        let Some(error) = self.resolve_error(field) else {
            return Ok(String::new());
        };
        let strategy = take_text(&mut attrs, "render").unwrap_or_else(|| DEFAULT_RENDERER.to_string());
        let renderer = self.pump.error_renderers().get(&strategy)?;
        Ok(renderer(error, &attrs))
    }

    /// Renders `body` only when `field` has an error.
    pub fn if_error_block<F>(&mut self, field: &str, body: F) -> Result<String>
    where
        F: FnOnce(&mut Self) -> Result<String>,
    {
        if self.if_error(field) {
            body(self)
        } else {
            Ok(String::new())
        }
    }

    /// Renders `body` only when `field` has no error.
    pub fn if_not_error_block<F>(&mut self, field: &str, body: F) -> Result<String>
    where
        F: FnOnce(&mut Self) -> Result<String>,
    {
        if self.if_not_error(field) {
            body(self)
        } else {
            Ok(String::new())
        }
    }
}

fn option_tag(value: &str, label: &str, selected: bool) -> String {
    let mut attrs = Attributes::new().with("value", value);
    if selected {
        attrs.set("selected", "selected");
    }
    format!(
        "{}{}</option>",
        build_tag("option", &attrs, TagEnd::Open),
        html_escape(label)
    )
}
