//! Jump steps: flow that loses calling context.
//!
//! The relation is empty in the minimal contract — a deliberate extension
//! point, not an oversight. Hosts that model flow through globals or static
//! fields inject their own provider; this layer never hard-codes such flow
//! because a global has no single owning object for store/read steps to
//! anchor on.

use crate::features::node_model::Node;
use crate::shared::models::Program;

/// Injectable strategy supplying context-losing flow edges.
///
/// Implementations must be pure with respect to the program: for identical
/// inputs the same answer every time, so the host evaluator can cache and
/// parallelize freely.
pub trait JumpStepProvider: Send + Sync {
    /// Whether a value may jump from `source` to `target` without preserving
    /// calling context
    fn jump_step(&self, program: &Program, source: Node, target: Node) -> bool;

    /// Enumerate all jump edges; empty unless overridden
    fn jump_steps(&self, _program: &Program) -> Vec<(Node, Node)> {
        Vec::new()
    }
}

/// The minimal contract: no jump steps at all
#[derive(Debug, Clone, Copy, Default)]
pub struct NoJumpSteps;

impl JumpStepProvider for NoJumpSteps {
    fn jump_step(&self, _program: &Program, _source: Node, _target: Node) -> bool {
        false
    }
}
