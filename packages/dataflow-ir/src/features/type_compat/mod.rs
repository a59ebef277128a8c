//! Type compatibility: static type model plus the pruning oracle.
//!
//! Hexagonal layout:
//! - domain: the `Type` model
//! - infrastructure: the `compatible_types` oracle

pub mod domain;
pub mod infrastructure;

pub use domain::{NumericKind, Type, TypeKind};
pub use infrastructure::compatible_types;
