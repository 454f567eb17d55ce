//! Type descriptors: the statically-built stand-in for reflective type metadata.
//!
//! A [`TypeDescriptor`] carries exactly what resource mapping needs to know
//! about a domain type: its simple name, its visibility, the
//! [`ResourceAnnotation`] declared on it (if any) and its supertypes, which
//! annotation lookups may walk.
//!
//! Rust types usually don't build descriptors by hand. They implement
//! [`ResourceType`] instead and get [`ResourceType::descriptor`] for free.

use super::ResourceAnnotation;
use crate::mapping::MappingError;
use serde::Serialize;

/// Declared access level of a domain type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Visibility {
    Public,
    Protected,
    PackagePrivate,
    Private,
}

/// Metadata about a single domain type.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDescriptor {
    simple_name: String,
    visibility: Visibility,
    annotation: Option<ResourceAnnotation>,
    supertypes: Vec<TypeDescriptor>,
}

impl TypeDescriptor {
    /// Creates a descriptor for a type with the given simple name.
    ///
    /// # Errors
    /// Returns [`MappingError::InvalidArgument`] if the name is blank.
    pub fn new(simple_name: impl Into<String>, visibility: Visibility) -> Result<Self, MappingError> {
        let simple_name = simple_name.into();
        if simple_name.trim().is_empty() {
            return Err(MappingError::InvalidArgument(
                "Type name must not be empty!".to_string(),
            ));
        }

        Ok(Self {
            simple_name,
            visibility,
            annotation: None,
            supertypes: Vec::new(),
        })
    }

    /// Shorthand for a public type.
    pub fn public(simple_name: impl Into<String>) -> Result<Self, MappingError> {
        Self::new(simple_name, Visibility::Public)
    }

    /// Declares a [`ResourceAnnotation`] directly on this type.
    pub fn with_annotation(mut self, annotation: ResourceAnnotation) -> Self {
        self.annotation = Some(annotation);
        self
    }

    /// Appends a supertype. Declaration order is lookup order.
    pub fn with_supertype(mut self, supertype: TypeDescriptor) -> Self {
        self.supertypes.push(supertype);
        self
    }

    pub fn simple_name(&self) -> &str {
        &self.simple_name
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }

    /// The annotation declared on this type itself, ignoring supertypes.
    pub fn declared_annotation(&self) -> Option<&ResourceAnnotation> {
        self.annotation.as_ref()
    }

    pub fn supertypes(&self) -> &[TypeDescriptor] {
        &self.supertypes
    }
}

/// Trait for Rust types that can be exposed as REST resources.
///
/// Every method has a default, so `impl ResourceType for Order {}` is enough
/// to get a public, unannotated resource named after the type. Override the
/// hooks to change visibility, attach a [`ResourceAnnotation`] or declare
/// supertypes.
pub trait ResourceType: 'static {
    /// Declared visibility of the type.
    const VISIBILITY: Visibility = Visibility::Public;

    /// Simple name of the type, without module path or generic arguments.
    fn simple_name() -> &'static str {
        simple_name_of::<Self>()
    }

    /// Resource configuration declared on the type.
    fn resource_annotation() -> Option<ResourceAnnotation> {
        None
    }

    /// Supertypes whose annotations the type may inherit.
    ///
    /// Usually built from other [`ResourceType::descriptor`]s, whose errors
    /// propagate.
    fn supertypes() -> Result<Vec<TypeDescriptor>, MappingError> {
        Ok(Vec::new())
    }

    /// Builds the [`TypeDescriptor`] for this type.
    fn descriptor() -> Result<TypeDescriptor, MappingError> {
        let mut descriptor = TypeDescriptor::new(Self::simple_name(), Self::VISIBILITY)?;
        descriptor.annotation = Self::resource_annotation();
        descriptor.supertypes = Self::supertypes()?;
        Ok(descriptor)
    }
}

/// Strips the module path and generic arguments from [`std::any::type_name`].
pub fn simple_name_of<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
