//! # Type-based Resource Mapping
//!
//! [`TypeMapping`] derives the REST metadata of a domain type from its
//! [`TypeDescriptor`]:
//!
//! | Property | Annotation present | Convention |
//! |----------|--------------------|------------|
//! | `path` | trimmed `path`, if not blank | uncapitalized simple name |
//! | `exported` | `exported` | type is public |
//! | `rel` | `rel` verbatim, if not blank | provider's collection rel |
//! | `single_resource_rel` | (never) | provider's single rel |
//!
//! Everything is computed once, when the mapping is built. Reads never touch
//! the annotation lookup or the [`RelProvider`] again.

use super::MappingError;
use crate::lookup::{AnnotationLookup, DeclaredAnnotationLookup};
use crate::model::{Path, ResourceAnnotation, ResourceType, TypeDescriptor};
use crate::rel::{uncapitalize, EvoInflectorRelProvider, RelProvider};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// Read access to the derived metadata of a collection resource.
pub trait CollectionResourceMapping {
    /// Path segment the resource is exposed under.
    fn path(&self) -> &Path;

    /// Whether the resource is published at all.
    fn is_exported(&self) -> bool;

    /// Relation name of the collection resource.
    fn rel(&self) -> &str;

    /// Relation name of a single item.
    fn single_resource_rel(&self) -> &str;
}

/// The derived metadata of one resource type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceMapping {
    path: Path,
    exported: bool,
    rel: String,
    single_rel: String,
}

impl CollectionResourceMapping for ResourceMapping {
    fn path(&self) -> &Path {
        &self.path
    }

    fn is_exported(&self) -> bool {
        self.exported
    }

    fn rel(&self) -> &str {
        &self.rel
    }

    fn single_resource_rel(&self) -> &str {
        &self.single_rel
    }
}

/// [`CollectionResourceMapping`] derived from a type, customizable through a
/// [`ResourceAnnotation`].
#[derive(Debug, Clone, PartialEq)]
pub struct TypeMapping {
    resource_type: TypeDescriptor,
    annotation: Option<ResourceAnnotation>,
    mapping: ResourceMapping,
}

impl TypeMapping {
    /// Creates a mapping using the [`EvoInflectorRelProvider`].
    pub fn new(ty: &TypeDescriptor) -> Result<Self, MappingError> {
        Self::builder().resource_type(ty.clone()).build()
    }

    /// Creates a mapping using the given [`RelProvider`].
    pub fn with_rel_provider(ty: &TypeDescriptor, rel_provider: Arc<dyn RelProvider>) -> Result<Self, MappingError> {
        Self::builder()
            .resource_type(ty.clone())
            .rel_provider(Some(rel_provider))
            .build()
    }

    /// Creates a mapping for a Rust type using the defaults.
    pub fn for_type<T: ResourceType>() -> Result<Self, MappingError> {
        Self::new(&T::descriptor()?)
    }

    pub fn builder() -> TypeMappingBuilder {
        TypeMappingBuilder::default()
    }

    pub(crate) fn derive(
        resource_type: TypeDescriptor,
        rel_provider: &dyn RelProvider,
        lookup: &dyn AnnotationLookup,
    ) -> Result<Self, MappingError> {
        let annotation = lookup.find(&resource_type);

        let path = match annotation.as_ref().map(|a| a.path.trim()) {
            Some(path) if !path.is_empty() => Path::new(path)?,
            _ => Path::new(uncapitalize(resource_type.simple_name()))?,
        };

        let exported = match &annotation {
            Some(annotation) => annotation.exported,
            None => resource_type.is_public(),
        };

        // Checked for text but not trimmed, unlike the path.
        let rel = match &annotation {
            Some(annotation) if has_text(&annotation.rel) => annotation.rel.clone(),
            _ => rel_provider.collection_resource_rel_for(&resource_type),
        };

        let single_rel = rel_provider.single_resource_rel_for(&resource_type);

        debug!(
            type_name = resource_type.simple_name(),
            annotated = annotation.is_some(),
            path = %path,
            exported,
            rel = %rel,
            single_rel = %single_rel,
            "Derived resource mapping"
        );

        Ok(Self {
            resource_type,
            annotation,
            mapping: ResourceMapping {
                path,
                exported,
                rel,
                single_rel,
            },
        })
    }

    /// The type this mapping was derived from.
    pub fn resource_type(&self) -> &TypeDescriptor {
        &self.resource_type
    }

    /// The annotation found at construction, if any.
    pub fn annotation(&self) -> Option<&ResourceAnnotation> {
        self.annotation.as_ref()
    }

    pub fn mapping(&self) -> &ResourceMapping {
        &self.mapping
    }
}

impl CollectionResourceMapping for TypeMapping {
    fn path(&self) -> &Path {
        self.mapping.path()
    }

    fn is_exported(&self) -> bool {
        self.mapping.is_exported()
    }

    fn rel(&self) -> &str {
        self.mapping.rel()
    }

    fn single_resource_rel(&self) -> &str {
        self.mapping.single_resource_rel()
    }
}

/// Builder for [`TypeMapping`].
///
/// Leaving the provider unset selects the [`EvoInflectorRelProvider`];
/// passing `None` explicitly is an error.
#[derive(Default)]
pub struct TypeMappingBuilder {
    resource_type: Option<TypeDescriptor>,
    rel_provider: Option<Option<Arc<dyn RelProvider>>>,
    annotation_lookup: Option<Arc<dyn AnnotationLookup>>,
}

impl TypeMappingBuilder {
    pub fn resource_type(mut self, ty: TypeDescriptor) -> Self {
        self.resource_type = Some(ty);
        self
    }

    pub fn rel_provider(mut self, rel_provider: Option<Arc<dyn RelProvider>>) -> Self {
        self.rel_provider = Some(rel_provider);
        self
    }

    /// Overrides the [`DeclaredAnnotationLookup`] used by default.
    pub fn annotation_lookup(mut self, lookup: Arc<dyn AnnotationLookup>) -> Self {
        self.annotation_lookup = Some(lookup);
        self
    }

    /// # Errors
    /// - [`MappingError::InvalidArgument`] if no type was given or the
    ///   provider was explicitly set to `None`.
    /// - [`MappingError::InvalidPath`] if the path isn't a valid segment.
    pub fn build(self) -> Result<TypeMapping, MappingError> {
        let resource_type = self
            .resource_type
            .ok_or_else(|| MappingError::InvalidArgument("Type must not be null!".to_string()))?;

        let rel_provider: Arc<dyn RelProvider> = match self.rel_provider {
            None => Arc::new(EvoInflectorRelProvider),
            Some(Some(rel_provider)) => rel_provider,
            Some(None) => {
                return Err(MappingError::InvalidArgument(
                    "RelProvider must not be null!".to_string(),
                ))
            }
        };

        let lookup = self
            .annotation_lookup
            .unwrap_or_else(|| Arc::new(DeclaredAnnotationLookup));

        TypeMapping::derive(resource_type, rel_provider.as_ref(), lookup.as_ref())
    }
}

fn has_text(value: &str) -> bool {
    value.chars().any(|c| !c.is_whitespace())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::AnnotationRegistry;
    use crate::model::{PathError, Visibility};
    use crate::rel::DefaultRelProvider;

    #[test]
    fn test_has_text() {
        assert!(has_text("a"));
        assert!(has_text(" a "));
        assert!(!has_text(""));
        assert!(!has_text(" \t\n"));
    }

    #[test]
    fn test_defaults_from_type() {
        let ty = TypeDescriptor::public("BookOrder").unwrap();
        let mapping = TypeMapping::new(&ty).unwrap();

        assert_eq!(mapping.path().as_str(), "bookOrder");
        assert!(mapping.is_exported());
        assert_eq!(mapping.rel(), "bookOrders");
        assert_eq!(mapping.single_resource_rel(), "bookOrder");
        assert!(mapping.annotation().is_none());
    }

    #[test]
    fn test_builder_requires_type() {
        let err = TypeMapping::builder().build().unwrap_err();
        assert_eq!(err, MappingError::InvalidArgument("Type must not be null!".to_string()));
    }

    #[test]
    fn test_builder_rejects_explicit_none_provider() {
        let ty = TypeDescriptor::public("Order").unwrap();
        let err = TypeMapping::builder()
            .resource_type(ty)
            .rel_provider(None)
            .build()
            .unwrap_err();
        assert_eq!(err, MappingError::InvalidArgument("RelProvider must not be null!".to_string()));
    }

    #[test]
    fn test_custom_provider() {
        let ty = TypeDescriptor::public("Order").unwrap();
        let mapping = TypeMapping::with_rel_provider(&ty, Arc::new(DefaultRelProvider)).unwrap();
        assert_eq!(mapping.rel(), "orderList");
        assert_eq!(mapping.single_resource_rel(), "order");
    }

    #[test]
    fn test_custom_lookup() {
        let mut registry = AnnotationRegistry::new();
        registry.register("Order", ResourceAnnotation::new().with_path("purchases").with_exported(false));

        let mapping = TypeMapping::builder()
            .resource_type(TypeDescriptor::public("Order").unwrap())
            .annotation_lookup(Arc::new(registry))
            .build()
            .unwrap();

        assert_eq!(mapping.path().as_str(), "purchases");
        assert!(!mapping.is_exported());
    }

    #[test]
    fn test_invalid_annotation_path_propagates() {
        let ty = TypeDescriptor::new("Order", Visibility::Public)
            .unwrap()
            .with_annotation(ResourceAnnotation::new().with_path("orders/items"));

        let err = TypeMapping::new(&ty).unwrap_err();
        assert!(matches!(
            err,
            MappingError::InvalidPath(PathError::IllegalCharacter { ch: '/', .. })
        ));
    }

    #[test]
    fn test_slash_only_annotation_path_is_empty() {
        // Has text, so no fallback to the type name; nothing is left once slashes are stripped.
        let ty = TypeDescriptor::public("Order")
            .unwrap()
            .with_annotation(ResourceAnnotation::new().with_path(" / "));

        let err = TypeMapping::new(&ty).unwrap_err();
        assert_eq!(err, MappingError::InvalidPath(PathError::Empty));
    }

    #[test]
    fn test_mapping_serializes() {
        let ty = TypeDescriptor::public("Category").unwrap();
        let mapping = TypeMapping::new(&ty).unwrap();
        let json = serde_json::to_value(mapping.mapping()).unwrap();

        assert_eq!(json["path"], "/category");
        assert_eq!(json["exported"], true);
        assert_eq!(json["rel"], "categories");
        assert_eq!(json["single_rel"], "category");
    }
}
