//! Error types for form rendering.

use thiserror::Error;

/// Errors raised while rendering form markup.
///
/// Every variant is a programmer or configuration mistake. Missing values,
/// missing errors and missing field names are never errors; they resolve to
/// empty defaults.
#[derive(Debug, Error)]
pub enum FormPumpError {
    /// An error tag asked for a render strategy nobody registered.
    #[error("configuration error: unknown error renderer '{name}'")]
    UnknownErrorRenderer {
        /// The requested strategy name.
        name: String,
    },

    /// Configuration JSON could not be deserialized.
    #[error("invalid formpump configuration: {0}")]
    InvalidConfig(#[source] serde_json::Error),

    /// Value or error store JSON could not be deserialized.
    #[error("invalid form data: {0}")]
    InvalidData(#[source] serde_json::Error),
}

impl FormPumpError {
    /// Returns whether this error is a caller configuration bug.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::UnknownErrorRenderer { .. } | Self::InvalidConfig(_)
        )
    }
}

/// Result type alias for form rendering operations.
pub type Result<T> = std::result::Result<T, FormPumpError>;
