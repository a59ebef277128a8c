//! Feature modules - Each feature follows Hexagonal Architecture
//!
//! Each feature contains:
//! - domain/         - Pure data types (no derivation logic)
//! - infrastructure/ - Derivations over the program fact base

pub mod call_dispatch;
pub mod content_model;
pub mod node_model;
pub mod step_relations;
pub mod type_compat;
