//! Render configuration.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{FormPumpError, Result};

/// Static configuration, loadable from JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormPumpConfig {
    /// `action` used when a form does not set one.
    pub default_form_action: String,
    /// Hidden input name carrying a named form's name, if any.
    pub form_name_key: Option<String>,
    /// Hidden input name carrying a context switch's name, if any.
    pub form_ctx_key: Option<String>,
}

impl FormPumpConfig {
    /// Parses a configuration from JSON. Missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(FormPumpError::InvalidConfig)
    }
}

/// Where a form's default `action` comes from.
#[derive(Clone)]
pub enum FormAction {
    /// A fixed URL.
    Fixed(String),
    /// Called once per form that does not set `action`.
    Provider(Arc<dyn Fn() -> String + Send + Sync>),
}

impl FormAction {
    /// Resolves the action URL.
    pub fn resolve(&self) -> String {
        match self {
            Self::Fixed(action) => action.clone(),
            Self::Provider(provider) => provider(),
        }
    }
}

impl Default for FormAction {
    fn default() -> Self {
        Self::Fixed(String::new())
    }
}

impl fmt::Debug for FormAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(action) => f.debug_tuple("Fixed").field(action).finish(),
            Self::Provider(_) => f.write_str("Provider(..)"),
        }
    }
}
