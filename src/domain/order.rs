use crate::model::{ResourceAnnotation, ResourceType};

/// Represents a customer order.
///
/// # Resource Mapping
/// Keeps the `/order` path but publishes its collection as `purchases`. The
/// single resource rel is still `order`: annotations never override it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Order;

impl ResourceType for Order {
    fn resource_annotation() -> Option<ResourceAnnotation> {
        Some(ResourceAnnotation::new().with_rel("purchases"))
    }
}
