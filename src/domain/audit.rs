//! Internal bookkeeping types that must not show up in the REST surface.

use crate::mapping::MappingError;
use crate::model::{ResourceAnnotation, ResourceType, TypeDescriptor, Visibility};

/// Change record for a single entity. Not public, so not exported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuditEntry;

impl ResourceType for AuditEntry {
    const VISIBILITY: Visibility = Visibility::PackagePrivate;
}

/// Marker for internal types. Its annotation hides every type that extends
/// it and declares nothing closer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Internal;

impl ResourceType for Internal {
    fn resource_annotation() -> Option<ResourceAnnotation> {
        Some(ResourceAnnotation::new().with_exported(false))
    }
}

/// Double-entry ledger line. Public, but hidden through [`Internal`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LedgerEntry;

impl ResourceType for LedgerEntry {
    fn supertypes() -> Result<Vec<TypeDescriptor>, MappingError> {
        Ok(vec![Internal::descriptor()?])
    }
}
