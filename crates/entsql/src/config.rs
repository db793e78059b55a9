use crate::error::{BuildError, BuildResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Soft-delete (logical delete) settings.
///
/// When enabled, every table in the statement's table graph is filtered on
/// `<table>.<column> = <undeleted>` unless the query overrides the value.
/// Sentinels are inlined as-is, not bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoftDelete {
    pub enabled: bool,
    pub column: String,
    pub deleted: String,
    pub undeleted: String,
}

impl Default for SoftDelete {
    fn default() -> Self {
        Self {
            enabled: false,
            column: "deleted".to_string(),
            deleted: "1".to_string(),
            undeleted: "0".to_string(),
        }
    }
}

impl SoftDelete {
    /// Defaults with the filter switched on.
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            ..Self::default()
        }
    }

    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.column = column.into();
        self
    }

    pub fn with_sentinels(mut self, deleted: impl Into<String>, undeleted: impl Into<String>) -> Self {
        self.deleted = deleted.into();
        self.undeleted = undeleted.into();
        self
    }

    pub fn enable(mut self) -> Self {
        self.enabled = true;
        self
    }

    pub fn disable(mut self) -> Self {
        self.enabled = false;
        self
    }

    pub fn validate(&self) -> BuildResult<()> {
        if !self.enabled {
            return Ok(());
        }
        if self.column.trim().is_empty() {
            return Err(BuildError::config("soft delete enabled without a column"));
        }
        if self.deleted == self.undeleted {
            return Err(BuildError::config(format!(
                "soft delete sentinels must differ, both are '{}'",
                self.deleted
            )));
        }
        Ok(())
    }
}

/// Per-entity assembler configuration.
///
/// ```toml
/// [soft_delete]
/// enabled = true
/// column = "is_deleted"
/// deleted = "true"
/// undeleted = "false"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityConfig {
    pub soft_delete: SoftDelete,
}

impl EntityConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_soft_delete(mut self, soft_delete: SoftDelete) -> Self {
        self.soft_delete = soft_delete;
        self
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(raw: &str) -> BuildResult<Self> {
        let config: EntityConfig = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> BuildResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            BuildError::config(format!("failed to read config file {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&raw)
    }

    pub fn validate(&self) -> BuildResult<()> {
        self.soft_delete.validate()
    }
}
