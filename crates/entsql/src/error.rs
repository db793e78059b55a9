//! Error types for entsql

use thiserror::Error;

/// Result type alias for entsql operations
pub type BuildResult<T> = Result<T, BuildError>;

/// Errors raised by the opt-in validation paths.
///
/// Rendering itself never fails: a missing collaborator renders as an empty
/// fragment and placeholder/value counts are not reconciled. These errors only
/// come out of [`EntityBuilder::validate`](crate::EntityBuilder::validate),
/// [`Statement::check`](crate::Statement::check) and config loading.
#[derive(Debug, Error)]
pub enum BuildError {
    /// No table source configured for a statement that needs one
    #[error("Missing table reference: {0}")]
    MissingTable(String),

    /// Number of `?` placeholders differs from the number of bound values
    #[error("Placeholder mismatch: {placeholders} placeholders, {values} values")]
    PlaceholderMismatch { placeholders: usize, values: usize },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

impl BuildError {
    /// Create a missing table error
    pub fn missing_table(message: impl Into<String>) -> Self {
        Self::MissingTable(message.into())
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Check if this is a placeholder mismatch error
    pub fn is_placeholder_mismatch(&self) -> bool {
        matches!(self, Self::PlaceholderMismatch { .. })
    }

    /// Check if this is a missing table error
    pub fn is_missing_table(&self) -> bool {
        matches!(self, Self::MissingTable(_))
    }
}

impl From<toml::de::Error> for BuildError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}
