//! Type model (domain)

mod type_system;

pub use type_system::{NumericKind, Type, TypeKind};
