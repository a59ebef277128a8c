/*
 * Call Dispatch Helpers
 *
 * Resolves how values enter and leave calls:
 * - positional argument lookup (effective positions, variadic-aware)
 * - instance/receiver argument resolution
 * - qualifier detection (including implicit destructor calls)
 * - enclosing callable resolution
 *
 * A call whose target cannot be resolved simply produces no dispatch facts;
 * derivation never aborts.
 */

use crate::features::node_model::{effective_arguments, Argument};
use crate::shared::models::{ExprId, FunctionId, FunctionKind, Program};

/// The expression at effective position `n` of `call`.
///
/// Defined only for `0 <= n < argument_count(call)`; asking outside that
/// range is a contract violation by the caller and yields `None`, never an
/// error.
pub fn argument(program: &Program, call: ExprId, n: usize) -> Option<ExprId> {
    effective_arguments(program, call).get(n).map(|arg| arg.expr)
}

/// Number of effective argument positions of `call` (zero for non-calls)
pub fn argument_count(program: &Program, call: ExprId) -> usize {
    effective_arguments(program, call).len()
}

/// The instance argument of `call`, when one exists as a concrete node:
/// the explicit receiver expression, or the call expression itself for a
/// constructor call (constructors have no receiver syntax; the call stands
/// in for the object being constructed).
///
/// Implicit destructor calls have no receiver expression to wrap, so they
/// yield `None` here even though `call_has_qualifier` reports true for them.
/// That asymmetry is a documented completeness gap: no placeholder node is
/// synthesized.
pub fn instance_argument(program: &Program, call: ExprId) -> Option<Argument> {
    let call_expr = program.call(call)?;
    if let Some(qualifier) = call_expr.qualifier {
        return Some(Argument::instance(call, qualifier));
    }
    if call_expr.is_constructor {
        return Some(Argument::instance(call, call));
    }
    None
}

/// Whether `call` logically operates on an instance: it has an explicit
/// receiver expression, or its resolved target is a destructor (destructor
/// calls are frequently compiler-generated and carry no receiver expression
/// in the syntax tree, yet still operate on an object).
pub fn call_has_qualifier(program: &Program, call: ExprId) -> bool {
    let Some(call_expr) = program.call(call) else {
        return false;
    };
    if call_expr.qualifier.is_some() {
        return true;
    }
    matches!(
        program.call_target(call).map(|f| f.kind),
        Some(FunctionKind::Destructor)
    )
}

/// The function textually containing `call`. Consumed by the external
/// solver for call-graph context; nothing in this layer branches on it.
pub fn enclosing_callable(program: &Program, call: ExprId) -> Option<FunctionId> {
    program.expr(call)?.enclosing_function
}
