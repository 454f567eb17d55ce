//! Annotation lookups.
//!
//! An [`AnnotationLookup`] resolves the single [`ResourceAnnotation`] that
//! applies to a type, or `None`.
//!
//! - [`DeclaredAnnotationLookup`] reads annotations declared on the type and
//!   its supertypes. The nearest declaring type wins.
//! - [`AnnotationRegistry`] is an explicit metadata table keyed by simple type
//!   name. It is what configuration files feed into.

use crate::model::{ResourceAnnotation, TypeDescriptor};
use indexmap::IndexMap;
use std::collections::HashSet;
use tracing::trace;

/// Resolves the resource annotation that applies to a type.
pub trait AnnotationLookup: Send + Sync {
    /// Returns at most one annotation for `ty`.
    fn find(&self, ty: &TypeDescriptor) -> Option<ResourceAnnotation>;
}

/// Looks at the type itself, then walks its supertypes depth-first in
/// declaration order. Each type name is visited once.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeclaredAnnotationLookup;

impl DeclaredAnnotationLookup {
    fn search<'a>(ty: &'a TypeDescriptor, visited: &mut HashSet<&'a str>) -> Option<&'a ResourceAnnotation> {
        if !visited.insert(ty.simple_name()) {
            return None;
        }

        if let Some(annotation) = ty.declared_annotation() {
            return Some(annotation);
        }

        ty.supertypes()
            .iter()
            .find_map(|supertype| Self::search(supertype, visited))
    }
}

impl AnnotationLookup for DeclaredAnnotationLookup {
    fn find(&self, ty: &TypeDescriptor) -> Option<ResourceAnnotation> {
        let mut visited = HashSet::new();
        Self::search(ty, &mut visited).cloned()
    }
}

/// Explicit table of annotations keyed by simple type name.
///
/// An entry for the exact type wins. Types without an entry fall back to
/// [`DeclaredAnnotationLookup`].
#[derive(Debug, Clone, Default)]
pub struct AnnotationRegistry {
    entries: IndexMap<String, ResourceAnnotation>,
}

impl AnnotationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an annotation for the type with the given simple name,
    /// replacing any previous entry.
    pub fn register(&mut self, type_name: impl Into<String>, annotation: ResourceAnnotation) -> &mut Self {
        self.entries.insert(type_name.into(), annotation);
        self
    }

    pub fn get(&self, type_name: &str) -> Option<&ResourceAnnotation> {
        self.entries.get(type_name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<IndexMap<String, ResourceAnnotation>> for AnnotationRegistry {
    fn from(entries: IndexMap<String, ResourceAnnotation>) -> Self {
        Self { entries }
    }
}

impl AnnotationLookup for AnnotationRegistry {
    fn find(&self, ty: &TypeDescriptor) -> Option<ResourceAnnotation> {
        match self.entries.get(ty.simple_name()) {
            Some(annotation) => {
                trace!(type_name = ty.simple_name(), "Annotation from registry");
                Some(annotation.clone())
            }
            None => DeclaredAnnotationLookup.find(ty),
        }
    }
}
