//! Resource mappings derived from domain types.
//!
//! # Main Components
//!
//! - [`TypeMapping`] - Derives path, export flag and rels for one type
//! - [`CollectionResourceMapping`] - Read access to the derived values
//! - [`ResourceMapping`] - The immutable derived values themselves
//! - [`MappingError`] - Construction errors
//!
//! # Testing
//!
//! See [`mock`] for a stub [`RelProvider`](crate::rel::RelProvider).

pub mod core;
pub mod error;
pub mod mock;

pub use self::core::*;
pub use error::*;
