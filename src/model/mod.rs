//! Plain data types describing domain types and their resource configuration.

pub mod annotation;
pub mod descriptor;
pub mod path;

pub use annotation::*;
pub use descriptor::*;
pub use path::*;
