//! # Resource Mapping Registry
//!
//! [`ResourceMappings`] owns one [`TypeMapping`] per domain type. It is
//! filled once at startup and then only read, so it can be shared freely
//! (e.g. behind an `Arc`) between request handlers.
//!
//! All mappings of a registry share the same [`RelProvider`] and
//! [`AnnotationLookup`].

use crate::lookup::{AnnotationLookup, DeclaredAnnotationLookup};
use crate::mapping::{CollectionResourceMapping, MappingError, TypeMapping};
use crate::model::{ResourceType, TypeDescriptor};
use crate::rel::{EvoInflectorRelProvider, RelProvider};
use indexmap::map::Entry;
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Registry of resource mappings keyed by simple type name.
pub struct ResourceMappings {
    rel_provider: Arc<dyn RelProvider>,
    lookup: Arc<dyn AnnotationLookup>,
    mappings: IndexMap<String, TypeMapping>,
}

impl Default for ResourceMappings {
    fn default() -> Self {
        Self::new(Arc::new(EvoInflectorRelProvider), Arc::new(DeclaredAnnotationLookup))
    }
}

impl fmt::Debug for ResourceMappings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceMappings")
            .field("mappings", &self.mappings)
            .finish_non_exhaustive()
    }
}

impl ResourceMappings {
    pub fn new(rel_provider: Arc<dyn RelProvider>, lookup: Arc<dyn AnnotationLookup>) -> Self {
        Self {
            rel_provider,
            lookup,
            mappings: IndexMap::new(),
        }
    }

    /// Derives and stores the mapping for `ty`.
    ///
    /// A type is mapped once. Registering the same simple name again returns
    /// the existing mapping.
    #[instrument(skip(self, ty), fields(type_name = ty.simple_name()))]
    pub fn register(&mut self, ty: TypeDescriptor) -> Result<&TypeMapping, MappingError> {
        match self.mappings.entry(ty.simple_name().to_string()) {
            Entry::Occupied(entry) => {
                debug!("Already registered");
                Ok(&*entry.into_mut())
            }
            Entry::Vacant(entry) => {
                let mapping = TypeMapping::derive(ty, self.rel_provider.as_ref(), self.lookup.as_ref())?;
                debug!(path = %mapping.path(), exported = mapping.is_exported(), "Registered");
                Ok(&*entry.insert(mapping))
            }
        }
    }

    /// Registers a Rust type through its [`ResourceType`] descriptor.
    pub fn register_type<T: ResourceType>(&mut self) -> Result<&TypeMapping, MappingError> {
        self.register(T::descriptor()?)
    }

    pub fn mapping_for(&self, type_name: &str) -> Option<&TypeMapping> {
        self.mappings.get(type_name)
    }

    /// Returns whether the type is registered and exported.
    pub fn exports_mapping_for(&self, type_name: &str) -> bool {
        self.mapping_for(type_name)
            .is_some_and(|mapping| mapping.is_exported())
    }

    /// Returns whether an exported resource is reachable under the given
    /// top-level path, e.g. `/orders`.
    pub fn exports_top_level_resource_for(&self, path: &str) -> bool {
        self.exported().any(|mapping| mapping.path().matches(path))
    }

    /// All mappings in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &TypeMapping> + '_ {
        self.mappings.values()
    }

    /// Exported mappings in registration order.
    pub fn exported(&self) -> impl Iterator<Item = &TypeMapping> + '_ {
        self.iter().filter(|mapping| mapping.is_exported())
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}
