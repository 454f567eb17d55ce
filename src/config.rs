//! # Mapping Configuration
//!
//! Resource overrides can live in a TOML file instead of in code. Entries
//! under `[resources]` are keyed by simple type name and take precedence over
//! annotations declared on the type.
//!
//! ```toml
//! rel_provider = "evo-inflector"   # or "default"
//!
//! [resources.Order]
//! path = "purchases"
//!
//! [resources.AuditEntry]
//! exported = true
//! rel = "audit"
//! ```
//!
//! Every field is optional. Unknown keys are reported with `warn!` and
//! otherwise ignored.

use crate::lookup::AnnotationRegistry;
use crate::model::ResourceAnnotation;
use crate::rel::{DefaultRelProvider, EvoInflectorRelProvider, RelProvider};
use indexmap::IndexMap;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Which [`RelProvider`] to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RelProviderKind {
    /// [`EvoInflectorRelProvider`]
    #[default]
    EvoInflector,
    /// [`DefaultRelProvider`]
    Default,
}

/// Top-level mapping configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MappingConfig {
    pub rel_provider: RelProviderKind,
    pub resources: IndexMap<String, ResourceAnnotation>,
}

impl MappingConfig {
    /// Parses configuration from a TOML string.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config: Self = serde_ignored::deserialize(deserializer, |path| {
            ignored.push(path.to_string());
        })?;

        for field in &ignored {
            warn!(field = %field, "Unknown config field ignored");
        }

        Ok(config)
    }

    /// Loads configuration from a TOML file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        let config = Self::parse(&content)?;
        debug!(path = %path.display(), resources = config.resources.len(), "Loaded mapping config");
        Ok(config)
    }

    /// Builds the configured [`RelProvider`].
    pub fn rel_provider(&self) -> Arc<dyn RelProvider> {
        match self.rel_provider {
            RelProviderKind::EvoInflector => Arc::new(EvoInflectorRelProvider),
            RelProviderKind::Default => Arc::new(DefaultRelProvider),
        }
    }

    /// Builds an [`AnnotationRegistry`] from the `[resources]` table.
    pub fn annotation_lookup(&self) -> AnnotationRegistry {
        AnnotationRegistry::from(self.resources.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TypeDescriptor;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = MappingConfig::parse("").unwrap();
        assert_eq!(config.rel_provider, RelProviderKind::EvoInflector);
        assert!(config.resources.is_empty());
    }

    #[test]
    fn test_parse_resources() {
        let config = MappingConfig::parse(
            r#"
            rel_provider = "default"

            [resources.Order]
            path = "purchases"

            [resources.AuditEntry]
            rel = "audit"
            "#,
        )
        .unwrap();

        assert_eq!(config.rel_provider, RelProviderKind::Default);
        assert_eq!(config.resources.len(), 2);

        let order = &config.resources["Order"];
        assert_eq!(order.path, "purchases");
        assert!(order.exported);

        let audit = &config.resources["AuditEntry"];
        assert_eq!(audit.rel, "audit");
        assert!(audit.exported);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let config = MappingConfig::parse(
            r#"
            colour = "blue"

            [resources.Order]
            path = "purchases"
            description = "All orders"
            "#,
        )
        .unwrap();
        assert_eq!(config.resources["Order"].path, "purchases");
    }

    #[test]
    fn test_invalid_provider_is_an_error() {
        let err = MappingConfig::parse(r#"rel_provider = "latin""#).unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = MappingConfig::from_path(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_, _)));
    }

    #[test]
    fn test_builds_collaborators() {
        let config = MappingConfig::parse(
            r#"
            rel_provider = "default"
            [resources.Order]
            path = "purchases"
            "#,
        )
        .unwrap();

        let ty = TypeDescriptor::public("Order").unwrap();
        assert_eq!(config.rel_provider().collection_resource_rel_for(&ty), "orderList");

        let lookup = config.annotation_lookup();
        assert_eq!(lookup.get("Order").unwrap().path, "purchases");
    }
}
