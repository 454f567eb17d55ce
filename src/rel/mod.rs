//! Relation name providers.
//!
//! A [`RelProvider`] derives the HATEOAS link relation names for a domain
//! type: the collection rel (`orders`) used for list endpoints and the single
//! resource rel (`order`) used for item endpoints.
//!
//! - [`EvoInflectorRelProvider`] - the default. Pluralizes English nouns.
//! - [`DefaultRelProvider`] - appends `List` for collections.

pub mod inflector;

use crate::model::TypeDescriptor;

/// Derives link relation names for a type.
///
/// Implementations are shared between mappings and threads, so they must be
/// `Send + Sync`.
pub trait RelProvider: Send + Sync {
    /// Relation name for the collection resource of the type.
    fn collection_resource_rel_for(&self, ty: &TypeDescriptor) -> String;

    /// Relation name for a single item of the type.
    fn single_resource_rel_for(&self, ty: &TypeDescriptor) -> String;
}

/// Uses the uncapitalized simple name and appends `List` for collections.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRelProvider;

impl RelProvider for DefaultRelProvider {
    fn collection_resource_rel_for(&self, ty: &TypeDescriptor) -> String {
        format!("{}List", self.single_resource_rel_for(ty))
    }

    fn single_resource_rel_for(&self, ty: &TypeDescriptor) -> String {
        uncapitalize(ty.simple_name())
    }
}

/// Uses the uncapitalized simple name and its English plural.
#[derive(Debug, Clone, Copy, Default)]
pub struct EvoInflectorRelProvider;

impl RelProvider for EvoInflectorRelProvider {
    fn collection_resource_rel_for(&self, ty: &TypeDescriptor) -> String {
        inflector::pluralize(&self.single_resource_rel_for(ty))
    }

    fn single_resource_rel_for(&self, ty: &TypeDescriptor) -> String {
        uncapitalize(ty.simple_name())
    }
}

/// Lower-cases the first character, leaving the rest untouched.
pub fn uncapitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
