#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Resource Mapping
//!
//! > **Derive REST resource metadata from your domain types.**
//!
//! Every domain type exposed over REST needs three things: the URL path segment it
//! lives under, the HATEOAS link relation names for its collection and its items,
//! and a decision on whether it is published at all. This crate derives all of them
//! from the type, by convention, and lets an explicit [`ResourceAnnotation`](model::ResourceAnnotation)
//! override what the convention gets wrong.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Convention, then Configuration
//!
//! | Property | Convention | Override |
//! |----------|------------|----------|
//! | Path | `BookOrder` → `/bookOrder` | annotation `path` (trimmed) |
//! | Exported | type is public | annotation `exported` |
//! | Collection rel | `Person` → `people` | annotation `rel` |
//! | Single rel | `Person` → `person` | *none* |
//!
//! ### No Reflection
//!
//! Types describe themselves through the [`ResourceType`](model::ResourceType) trait,
//! or through a hand-built [`TypeDescriptor`](model::TypeDescriptor). Annotations are
//! plain values: declared on the type, inherited from a supertype, or supplied
//! by a configuration file.
//!
//! ### Immutable After Construction
//!
//! A [`TypeMapping`](mapping::TypeMapping) computes everything when it is built and
//! never changes afterwards. Mappings and the registry are `Send + Sync` and can be
//! shared between threads without locks.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Core ([`mapping`])
//! - **Role**: Turns one type plus its annotation into a [`ResourceMapping`](mapping::ResourceMapping).
//! - **Key items**: [`TypeMapping`](mapping::TypeMapping), [`CollectionResourceMapping`](mapping::CollectionResourceMapping).
//!
//! ### 2. The Collaborators ([`rel`], [`lookup`])
//! - **Role**: Relation naming and annotation resolution, both behind traits.
//! - **Key items**: [`RelProvider`](rel::RelProvider), [`AnnotationLookup`](lookup::AnnotationLookup).
//!
//! ### 3. The Registry ([`registry`])
//! - **Role**: Owns the mapping of every type and answers "is this exported?".
//! - **Key items**: [`ResourceMappings`](registry::ResourceMappings).
//!
//! ### 4. Startup ([`config`], [`lifecycle`])
//! - **Role**: Load overrides from TOML, bootstrap the registry, set up tracing.
//! - **Key items**: [`MappingConfig`](config::MappingConfig), [`bootstrap`](lifecycle::bootstrap).
//!
//! ### 5. The Sample Domain ([`domain`])
//! - **Role**: `User`, `Product`, `Order` and friends, mapped by convention and by annotation.
//!
//! ## 🚀 Quick Start
//!
//! ```rust
//! use resource_mapping::mapping::{CollectionResourceMapping, TypeMapping};
//! use resource_mapping::model::ResourceType;
//!
//! struct BookOrder;
//! impl ResourceType for BookOrder {}
//!
//! let mapping = TypeMapping::for_type::<BookOrder>().unwrap();
//! assert_eq!(mapping.path().as_str(), "bookOrder");
//! assert_eq!(mapping.rel(), "bookOrders");
//! assert_eq!(mapping.single_resource_rel(), "bookOrder");
//! assert!(mapping.is_exported());
//! ```
//!
//! ### Running the Demo
//!
//! ```bash
//! # Print the sample domain's mappings
//! RUST_LOG=info cargo run
//!
//! # With overrides
//! cargo run -- --config mappings.toml --exported-only
//! ```

pub mod config;
pub mod domain;
pub mod lifecycle;
pub mod lookup;
pub mod mapping;
pub mod model;
pub mod registry;
pub mod rel;
