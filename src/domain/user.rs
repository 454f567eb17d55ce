use crate::model::{ResourceAnnotation, ResourceType};

/// Represents a registered user in the system.
///
/// # Resource Mapping
/// Exposed purely by convention: path `/user`, rels `users` and `user`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct User;

impl ResourceType for User {}

/// A person known to the system but not necessarily a user.
///
/// Collection rel is the irregular plural `people`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Person;

impl ResourceType for Person {
    fn resource_annotation() -> Option<ResourceAnnotation> {
        Some(ResourceAnnotation::new().with_path("  people  "))
    }
}
