//! Node derivations

mod classifier;

pub use classifier::{
    argument_node, argument_nodes, classify, effective_arguments, output_node, return_node,
};
