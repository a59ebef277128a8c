/*
 * dataflow-ir - Local Data-Flow Modeling Layer
 *
 * Turns raw program syntax (calls, arguments, field accesses, assignments,
 * returns) into typed nodes and directed edges for an external
 * interprocedural solver:
 * - Node abstraction: canonical identities for flow-relevant positions
 * - Content model: fields plus merged collection/array element buckets
 * - Step relations: store/read/value edges, injectable jump steps
 * - Call dispatch: argument mapping, instance arguments, qualifiers
 * - Type oracle: conservative compatibility pruning
 *
 * Feature-First Hexagonal Architecture:
 * - shared/   : Program fact base (Span, Expr, Field, Function)
 * - features/ : Vertical slices (node_model, content_model, step_relations,
 *               call_dispatch, type_compat)
 * - api/      : LocalFlowModel facade + cached FlowModelIndex
 *
 * The whole layer is a pure derivation over an immutable fact base: no
 * mutable shared state, no I/O, value-equal results on re-derivation.
 */

pub mod api;
pub mod features;
pub mod shared;

pub use api::{FlowModelIndex, LocalFlowModel};
pub use features::call_dispatch::{
    argument, argument_count, call_has_qualifier, enclosing_callable, instance_argument,
};
pub use features::content_model::Content;
pub use features::node_model::{
    argument_node, argument_nodes, classify, effective_arguments, output_node, return_node,
    Argument, Node, NodeKind, ReturnKind, INSTANCE_ARGUMENT_INDEX,
};
pub use features::step_relations::{
    read_step, read_steps, store_step, store_steps, value_step, value_steps, JumpStepProvider,
    NoJumpSteps, ReadStep, StepConfig, StoreStep, ValueStep,
};
pub use features::type_compat::{compatible_types, NumericKind, Type, TypeKind};
pub use shared::models::{
    CallExpr, CollectionOp, Expr, ExprId, ExprKind, Field, FieldAccessExpr, FieldId, Function,
    FunctionId, FunctionKind, IndexExpr, ModelError, ModelResult, Program, ProgramBuilder,
    ReturnStmt, Span, VariadicPack,
};
