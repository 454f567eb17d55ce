//! Sample domain types exposed through [`ResourceType`].

pub mod audit;
pub mod order;
pub mod product;
pub mod user;

pub use audit::*;
pub use order::*;
pub use product::*;
pub use user::*;

use crate::mapping::MappingError;
use crate::model::{ResourceType, TypeDescriptor};

/// Descriptors of every sample domain type, in registration order.
pub fn descriptors() -> Result<Vec<TypeDescriptor>, MappingError> {
    Ok(vec![
        User::descriptor()?,
        Person::descriptor()?,
        Product::descriptor()?,
        Category::descriptor()?,
        Order::descriptor()?,
        AuditEntry::descriptor()?,
        LedgerEntry::descriptor()?,
    ])
}
