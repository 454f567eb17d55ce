//! # Startup & Bootstrap
//!
//! Resource mappings are built once, when the application starts:
//!
//! 1. **Configuration** - load a [`MappingConfig`] (or use the default)
//! 2. **Collaborators** - the config picks the [`RelProvider`](crate::rel::RelProvider)
//!    and supplies the annotation table
//! 3. **Registration** - every domain type is mapped exactly once
//! 4. **Serving** - the finished [`ResourceMappings`] is only read from then on
//!
//! ```rust
//! use resource_mapping::config::MappingConfig;
//! use resource_mapping::lifecycle::bootstrap;
//!
//! let config = MappingConfig::parse("[resources.Order]\npath = \"purchases\"").unwrap();
//! let mappings = bootstrap(&config, resource_mapping::domain::descriptors().unwrap()).unwrap();
//!
//! assert!(mappings.exports_top_level_resource_for("/purchases"));
//! ```

pub mod tracing;

pub use self::tracing::setup_tracing;

use crate::config::MappingConfig;
use crate::mapping::MappingError;
use crate::model::TypeDescriptor;
use crate::registry::ResourceMappings;
use std::sync::Arc;

/// Builds a registry from `config` and maps every type in `types`.
///
/// Stops at the first type that can't be mapped.
pub fn bootstrap(
    config: &MappingConfig,
    types: impl IntoIterator<Item = TypeDescriptor>,
) -> Result<ResourceMappings, MappingError> {
    let mut mappings = ResourceMappings::new(config.rel_provider(), Arc::new(config.annotation_lookup()));

    for ty in types {
        mappings.register(ty)?;
    }

    ::tracing::info!(
        registered = mappings.len(),
        exported = mappings.exported().count(),
        "Resource mappings ready"
    );

    Ok(mappings)
}
