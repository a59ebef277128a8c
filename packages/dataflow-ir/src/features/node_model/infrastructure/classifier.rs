/*
 * Node Classification
 *
 * Derives the flow-relevant role of each expression:
 * - argument nodes (positional and instance, with the variadic-pack and
 *   constructor rules)
 * - return nodes
 * - call output nodes
 *
 * All derivations are pure functions over the program fact base. An
 * expression with no flow-relevant role simply yields no derived node;
 * that is "not modeled", never a fault.
 */

use crate::features::node_model::domain::{Argument, Node, ReturnKind};
use crate::shared::models::{ExprId, ExprKind, Program};

/// Effective positional arguments of a call.
///
/// For a call with a variadic pack, the packed source expressions occupy no
/// position of their own: positions `0..first_packed-1` hold the leading
/// source arguments and position `first_packed` holds the synthesized
/// aggregate, the single carrier node for all packed values. Empty for
/// non-call expressions.
pub fn effective_arguments(program: &Program, call: ExprId) -> Vec<Argument> {
    let Some(call_expr) = program.call(call) else {
        return Vec::new();
    };

    match call_expr.variadic_pack {
        None => call_expr
            .arguments
            .iter()
            .enumerate()
            .map(|(position, &expr)| Argument::positional(call, position, expr))
            .collect(),
        Some(pack) => {
            let mut args: Vec<Argument> = call_expr.arguments[..pack.first_packed]
                .iter()
                .enumerate()
                .map(|(position, &expr)| Argument::positional(call, position, expr))
                .collect();
            args.push(Argument::positional(call, pack.first_packed, pack.aggregate));
            args
        }
    }
}

/// The argument pairing of `expr`, if it has one.
///
/// An expression is an argument node when it occupies an effective position
/// of some call, or when it is itself a constructor call — constructors have
/// no explicit receiver syntax, so the call stands in for the object being
/// constructed and becomes its own instance argument. When both apply (a
/// constructor call passed as an argument), the positional pairing wins; the
/// instance pairing stays reachable through `instance_argument`.
pub fn argument_node(program: &Program, expr: ExprId) -> Option<Argument> {
    for candidate in program.exprs() {
        if !matches!(candidate.kind, ExprKind::Call(_)) {
            continue;
        }
        for arg in effective_arguments(program, candidate.id) {
            if arg.expr == expr {
                return Some(arg);
            }
        }
    }

    if program.call(expr).is_some_and(|c| c.is_constructor) {
        return Some(Argument::instance(expr, expr));
    }

    None
}

/// Every argument node of the program: positional arguments of all calls
/// plus instance arguments (explicit receivers, and constructor calls
/// standing in for themselves).
pub fn argument_nodes(program: &Program) -> Vec<Argument> {
    let mut nodes = Vec::new();
    for expr in program.exprs() {
        let ExprKind::Call(ref call) = expr.kind else {
            continue;
        };
        nodes.extend(effective_arguments(program, expr.id));
        if let Some(qualifier) = call.qualifier {
            nodes.push(Argument::instance(expr.id, qualifier));
        } else if call.is_constructor {
            nodes.push(Argument::instance(expr.id, expr.id));
        }
    }
    nodes
}

/// The return node wrapping `expr`, when `expr` is the operand of a return
/// statement. The kind is always [`ReturnKind::Normal`] today.
pub fn return_node(program: &Program, expr: ExprId) -> Option<Node> {
    program
        .returns()
        .find(|ret| ret.operand == expr)
        .map(|ret| Node::Return {
            operand: ret.operand,
            kind: ReturnKind::Normal,
        })
}

/// The node at which a call's result of the given kind is consumed: the call
/// expression itself, viewed as an output node.
///
/// The match over [`ReturnKind`] is exhaustive so that introducing a new
/// return kind forces a decision here.
pub fn output_node(program: &Program, call: ExprId, kind: ReturnKind) -> Option<Node> {
    program.call(call)?;
    match kind {
        ReturnKind::Normal => Some(Node::Out { call, kind }),
    }
}

/// Classify an expression into the node variant set, most specific role
/// first: argument, then return operand, then plain expression. `None` for
/// ids outside the program.
pub fn classify(program: &Program, expr: ExprId) -> Option<Node> {
    program.expr(expr)?;
    if let Some(arg) = argument_node(program, expr) {
        return Some(Node::Argument(arg));
    }
    if let Some(ret) = return_node(program, expr) {
        return Some(ret);
    }
    Some(Node::Expr(expr))
}
