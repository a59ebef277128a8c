//! Node abstraction: canonical identities for flow-relevant syntactic
//! positions.
//!
//! Hexagonal layout:
//! - domain: the closed `Node` variant set
//! - infrastructure: classification rules (argument positions, variadic
//!   packing, constructor instance arguments, returns, call outputs)

pub mod domain;
pub mod infrastructure;

pub use domain::{Argument, Node, NodeKind, ReturnKind, INSTANCE_ARGUMENT_INDEX};
pub use infrastructure::{
    argument_node, argument_nodes, classify, effective_arguments, output_node, return_node,
};
