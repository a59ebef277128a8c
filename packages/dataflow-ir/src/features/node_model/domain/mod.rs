//! Node model (domain)

mod node;

pub use node::{Argument, Node, NodeKind, ReturnKind, INSTANCE_ARGUMENT_INDEX};
