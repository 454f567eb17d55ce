use crate::model::{ResourceAnnotation, ResourceType};

/// Represents a product in the inventory.
///
/// # Resource Mapping
/// Lives under `/catalog`; rels stay convention-derived.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Product;

impl ResourceType for Product {
    fn resource_annotation() -> Option<ResourceAnnotation> {
        Some(ResourceAnnotation::new().with_path("catalog"))
    }
}

/// Grouping of products. Collection rel is `categories`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Category;

impl ResourceType for Category {}
