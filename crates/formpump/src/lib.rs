//! # formpump
//!
//! Fills HTML forms with submitted values and validation errors, and wires
//! labels to their inputs without hand-written ids.
//!
//! This crate provides:
//! - An escaping tag builder over ordered attribute bags
//! - Value and error lookup per form, with context switching
//! - Label/input pairing in document order, whichever comes first
//! - Tag emitters for inputs, checkboxes, radios, selects, textareas,
//!   labels and errors
//!
//! A template engine adapter calls the emitters with already evaluated
//! attributes and writes the returned markup out unescaped.
//!
//! ## Quick Start
//!
//! ```rust
//! use formpump::{Attributes, FormData, FormPump, FormVars, InputType};
//!
//! let pump = FormPump::new().form_name_key("_form");
//! let data = FormData::from(FormVars::new().with("signup", "email", "ada@example.com"));
//!
//! let html = pump
//!     .form_block(Some("signup"), Attributes::new(), &data, |form| {
//!         let mut body = form.label_block(Attributes::new().with("name", "email"), "Email");
//!         body += &form.input_tag(InputType::Email, Attributes::new().with("name", "email"));
//!         Ok(body)
//!     })
//!     .unwrap();
//!
//! assert!(html.starts_with(r#"<form method="post" action=""><input type="hidden" name="_form" value="signup" />"#));
//! assert!(html.contains(r#"value="ada@example.com""#));
//! ```
//!
//! ## Label Pairing
//!
//! A label's `name` attribute names its field. The first unmatched label
//! for a name pairs with the first unmatched input of that name, so
//! repeated fields pair up in the order they appear. Inputs with an
//! explicit `id`, and labels with an explicit `for` or `id`, opt out.
//!
//! ## Error Rendering
//!
//! ```rust
//! use formpump::{Attributes, FieldError, FormData, FormErrors, FormPump, FormVars};
//!
//! let pump = FormPump::new().error_renderer("inline", |error: &FieldError, _: &Attributes| {
//!     format!("<em>{}</em>", error.joined())
//! });
//! let data = FormData::new(FormVars::new(), FormErrors::new().with("login", "user", "Unknown user"));
//! let form = pump.open_form(Some("login"), Attributes::new(), &data);
//!
//! let html = form.error_tag("user", Attributes::new().with("render", "inline")).unwrap();
//! assert_eq!(html, "<em>Unknown user</em>");
//! assert!(form.error_tag("user", Attributes::new().with("render", "missing")).is_err());
//! ```

pub mod association;
mod attrs;
mod config;
mod data;
mod emitters;
mod error;
mod pump;
pub mod renderers;
mod resolver;
mod session;
mod tag;

pub use association::{HtmlId, IdGenerator, RandomIds, SequentialIds};
pub use attrs::{normalize_key, AttrValue, Attributes};
pub use config::{FormAction, FormPumpConfig};
pub use data::{is_truthy, FieldError, FieldValue, FormData, FormErrors, FormVars, TRUTHY_TOKENS};
pub use emitters::InputType;
pub use error::{FormPumpError, Result};
pub use pump::FormPump;
pub use renderers::{ErrorRenderer, ErrorRenderers};
pub use resolver::ERROR_CLASS;
pub use session::FormSession;
pub use tag::{build_tag, html_escape, TagEnd};
