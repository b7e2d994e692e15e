//! Field value and error resolution.
//!
//! Lookups go through the active context name, which is the form's name
//! unless a context switch replaced it. No context means every lookup
//! misses, exactly like a field with nothing submitted.

use crate::attrs::Attributes;
use crate::data::{FieldError, FieldValue, FormData};

/// CSS class prepended to fields that carry an error.
pub const ERROR_CLASS: &str = "error";

/// Looks up the stored value for `field`.
pub fn resolve_value<'d>(
    data: &'d FormData,
    context: Option<&str>,
    field: &str,
) -> Option<&'d FieldValue> {
    context.and_then(|ctx| data.vars.get(ctx, field))
}

/// Looks up the error for `field`, ignoring errors without any message.
pub fn resolve_error<'d>(
    data: &'d FormData,
    context: Option<&str>,
    field: &str,
) -> Option<&'d FieldError> {
    context
        .and_then(|ctx| data.errors.get(ctx, field))
        .filter(|error| error.is_present())
}

/// Returns the text for a value attribute: the stored value, else the
/// caller's default, else empty.
pub fn display_value(stored: Option<&FieldValue>, fallback: Option<&str>) -> String {
    stored
        .map(FieldValue::display)
        .or_else(|| fallback.map(str::to_string))
        .unwrap_or_default()
}

/// Returns whether the option `candidate` is selected by `stored`.
///
/// A missing value reads as empty, so it selects an option whose value is `""`.
pub fn is_selected(stored: Option<&FieldValue>, candidate: &str, truthy_fallback: bool) -> bool {
    match stored {
        Some(value) => value.matches(candidate, truthy_fallback),
        None => candidate.is_empty(),
    }
}

/// Prepends [`ERROR_CLASS`] to the class list when `error` is present.
pub fn apply_error_class(attrs: &mut Attributes, error: Option<&FieldError>) {
    if error.is_some_and(FieldError::is_present) {
        attrs.prepend_class(ERROR_CLASS);
    }
}
