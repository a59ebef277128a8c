/*
 * Local Flow Model Facade
 *
 * One object exposing the full derivation surface over a borrowed program:
 * node classification, argument mapping, store/read/value/jump steps, call
 * dispatch, and the type oracle. The jump-step strategy is injected; the
 * default supplies no edges.
 *
 * `FlowModelIndex` is the cached form: an immutable snapshot of every
 * derived relation with O(1) membership, built in parallel. Because all
 * derivations are pure functions of the program, the snapshot is value-
 * equal to the on-demand answers — caching is safe by construction.
 */

use rustc_hash::FxHashSet;
use tracing::debug;

use crate::features::call_dispatch;
use crate::features::content_model::Content;
use crate::features::node_model::{self, Argument, Node, ReturnKind};
use crate::features::step_relations::{
    self, JumpStepProvider, NoJumpSteps, ReadStep, StepConfig, StoreStep, ValueStep,
};
use crate::features::type_compat::{self, Type};
use crate::shared::models::{ExprId, FunctionId, Program};

/// Derivation surface over a program, consumed by an external solver
pub struct LocalFlowModel<'p> {
    program: &'p Program,
    config: StepConfig,
    jump: Box<dyn JumpStepProvider>,
}

impl<'p> LocalFlowModel<'p> {
    pub fn new(program: &'p Program) -> Self {
        Self {
            program,
            config: StepConfig::default(),
            jump: Box::new(NoJumpSteps),
        }
    }

    pub fn with_config(mut self, config: StepConfig) -> Self {
        self.config = config;
        self
    }

    /// Inject a jump-step strategy (e.g. global/static-variable flow)
    pub fn with_jump_steps(mut self, provider: Box<dyn JumpStepProvider>) -> Self {
        self.jump = provider;
        self
    }

    pub fn program(&self) -> &'p Program {
        self.program
    }

    // ─── node abstraction ───────────────────────────────────────────────

    /// Classify an expression into the node variant set
    pub fn classify(&self, expr: ExprId) -> Option<Node> {
        node_model::classify(self.program, expr)
    }

    /// The (call, position) pairing of an argument node; position is -1 for
    /// the instance argument
    pub fn argument_of(&self, node: Node) -> Option<(ExprId, i32)> {
        node.argument_of()
    }

    /// All argument nodes of the program
    pub fn argument_nodes(&self) -> Vec<Argument> {
        node_model::argument_nodes(self.program)
    }

    /// The node consuming a call's result of the given kind
    pub fn output_node(&self, call: ExprId, kind: ReturnKind) -> Option<Node> {
        node_model::output_node(self.program, call, kind)
    }

    /// Static type of the expression a node wraps, when known
    pub fn node_type(&self, node: Node) -> Option<&'p Type> {
        self.program.type_of(node.underlying_expr())
    }

    // ─── call dispatch ──────────────────────────────────────────────────

    pub fn argument(&self, call: ExprId, n: usize) -> Option<ExprId> {
        call_dispatch::argument(self.program, call, n)
    }

    pub fn argument_count(&self, call: ExprId) -> usize {
        call_dispatch::argument_count(self.program, call)
    }

    pub fn instance_argument(&self, call: ExprId) -> Option<Argument> {
        call_dispatch::instance_argument(self.program, call)
    }

    pub fn call_has_qualifier(&self, call: ExprId) -> bool {
        call_dispatch::call_has_qualifier(self.program, call)
    }

    pub fn enclosing_callable(&self, call: ExprId) -> Option<FunctionId> {
        call_dispatch::enclosing_callable(self.program, call)
    }

    // ─── step relations ─────────────────────────────────────────────────

    pub fn store_step(&self, source: Node, content: Content, target: Node) -> bool {
        step_relations::store_step(self.program, self.config, source, content, target)
    }

    pub fn read_step(&self, source: Node, content: Content, target: Node) -> bool {
        step_relations::read_step(self.program, self.config, source, content, target)
    }

    pub fn value_step(&self, source: Node, target: Node) -> bool {
        step_relations::value_step(self.program, source, target)
    }

    pub fn jump_step(&self, source: Node, target: Node) -> bool {
        self.jump.jump_step(self.program, source, target)
    }

    pub fn store_steps(&self) -> Vec<StoreStep> {
        step_relations::store_steps(self.program, self.config)
    }

    pub fn read_steps(&self) -> Vec<ReadStep> {
        step_relations::read_steps(self.program, self.config)
    }

    pub fn value_steps(&self) -> Vec<ValueStep> {
        step_relations::value_steps(self.program)
    }

    pub fn jump_steps(&self) -> Vec<(Node, Node)> {
        self.jump.jump_steps(self.program)
    }

    // ─── type oracle ────────────────────────────────────────────────────

    pub fn compatible_types(&self, t1: &Type, t2: &Type) -> bool {
        type_compat::compatible_types(t1, t2)
    }

    /// Build the cached index form of every derived relation
    pub fn index(&self) -> FlowModelIndex {
        FlowModelIndex::build(self)
    }
}

/// Immutable precomputed snapshot of the derived relations.
///
/// For hosts that query membership many times per edge candidate; answers
/// are value-equal to the on-demand derivations.
#[derive(Debug, Clone)]
pub struct FlowModelIndex {
    store: FxHashSet<StoreStep>,
    read: FxHashSet<ReadStep>,
    value: FxHashSet<ValueStep>,
    jump: FxHashSet<(Node, Node)>,
    arguments: Vec<Argument>,
}

impl FlowModelIndex {
    fn build(model: &LocalFlowModel<'_>) -> Self {
        // independent pure derivations; order is irrelevant
        let ((store, read), (value, arguments)) = rayon::join(
            || {
                rayon::join(
                    || model.store_steps().into_iter().collect::<FxHashSet<_>>(),
                    || model.read_steps().into_iter().collect::<FxHashSet<_>>(),
                )
            },
            || {
                rayon::join(
                    || model.value_steps().into_iter().collect::<FxHashSet<_>>(),
                    || model.argument_nodes(),
                )
            },
        );
        let jump = model.jump_steps().into_iter().collect::<FxHashSet<_>>();

        debug!(
            stores = store.len(),
            reads = read.len(),
            values = value.len(),
            jumps = jump.len(),
            arguments = arguments.len(),
            "built flow model index"
        );

        Self {
            store,
            read,
            value,
            jump,
            arguments,
        }
    }

    pub fn store_step(&self, source: Node, content: Content, target: Node) -> bool {
        self.store.contains(&StoreStep {
            source,
            content,
            target,
        })
    }

    pub fn read_step(&self, source: Node, content: Content, target: Node) -> bool {
        self.read.contains(&ReadStep {
            source,
            content,
            target,
        })
    }

    pub fn value_step(&self, source: Node, target: Node) -> bool {
        self.value.contains(&ValueStep { source, target })
    }

    pub fn jump_step(&self, source: Node, target: Node) -> bool {
        self.jump.contains(&(source, target))
    }

    pub fn argument_nodes(&self) -> &[Argument] {
        &self.arguments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::type_compat::domain::Type;
    use crate::shared::models::{ExprKind, FieldAccessExpr};

    fn field_roundtrip_program() -> Program {
        let mut b = Program::builder();
        let f = b.field("f", Type::named("C"), Type::int(), false);
        let x = b.expr(ExprKind::VarAccess { name: "x".into() });
        let access = b.expr(ExprKind::FieldAccess(FieldAccessExpr {
            qualifier: x,
            target: f,
        }));
        let y = b.expr(ExprKind::VarAccess { name: "y".into() });
        b.expr(ExprKind::Assign {
            lhs: access,
            rhs: y,
        });
        b.build().unwrap()
    }

    #[test]
    fn test_index_agrees_with_on_demand() {
        let program = field_roundtrip_program();
        let model = LocalFlowModel::new(&program);
        let index = model.index();

        for step in model.store_steps() {
            assert!(index.store_step(step.source, step.content, step.target));
            assert!(model.store_step(step.source, step.content, step.target));
        }
        for step in model.value_steps() {
            assert!(index.value_step(step.source, step.target));
        }
        assert!(!index.jump_step(Node::Expr(0), Node::Expr(1)));
    }

    #[test]
    fn test_injected_jump_steps_surface() {
        struct OneEdge;
        impl JumpStepProvider for OneEdge {
            fn jump_step(&self, _program: &Program, source: Node, target: Node) -> bool {
                (source, target) == (Node::Expr(0), Node::Expr(1))
            }
            fn jump_steps(&self, _program: &Program) -> Vec<(Node, Node)> {
                vec![(Node::Expr(0), Node::Expr(1))]
            }
        }

        let program = field_roundtrip_program();
        let model = LocalFlowModel::new(&program).with_jump_steps(Box::new(OneEdge));

        assert!(model.jump_step(Node::Expr(0), Node::Expr(1)));
        assert!(model.index().jump_step(Node::Expr(0), Node::Expr(1)));
    }

    #[test]
    fn test_node_type() {
        let mut b = Program::builder();
        let e = b.expr(ExprKind::VarAccess { name: "x".into() });
        b.set_type(e, Type::int());
        let program = b.build().unwrap();

        let model = LocalFlowModel::new(&program);
        assert_eq!(model.node_type(Node::Expr(e)), Some(&Type::int()));
        assert!(model.compatible_types(&Type::int(), &Type::double()));
    }
}
