/*
 * Flow Node Model
 *
 * A Node is a canonical, typed identity for a flow-relevant syntactic
 * position. The variant set is closed and consumers match exhaustively, so
 * adding a kind (a captured-variable node, an exceptional return kind) is a
 * compile-time-checked change across all consumers.
 *
 * Every node wraps exactly one underlying expression; node identity is
 * (variant, payload). The "after-write" view of an object is the qualifier
 * occurrence at the write site — a distinct expression, hence a distinct
 * node, from any read-site occurrence.
 */

use serde::{Deserialize, Serialize};

use crate::shared::models::ExprId;

/// Position of the instance/receiver argument
pub const INSTANCE_ARGUMENT_INDEX: i32 = -1;

/// Kind of value a call returns to its caller.
///
/// Closed enumeration with a single case today; consumers match
/// exhaustively so new kinds (e.g. an exceptional return) cannot be added
/// without revisiting them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReturnKind {
    /// Normal function return
    Normal,
}

/// An expression at an argument position of a call.
///
/// Positions `0..k-1` address the call's effective positional arguments;
/// [`INSTANCE_ARGUMENT_INDEX`] addresses the instance/receiver argument and
/// is never in the positional range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Argument {
    pub call: ExprId,
    pub position: i32,
    pub expr: ExprId,
}

impl Argument {
    pub fn positional(call: ExprId, position: usize, expr: ExprId) -> Self {
        Self {
            call,
            position: position as i32,
            expr,
        }
    }

    pub fn instance(call: ExprId, expr: ExprId) -> Self {
        Self {
            call,
            position: INSTANCE_ARGUMENT_INDEX,
            expr,
        }
    }

    pub fn is_instance(&self) -> bool {
        self.position == INSTANCE_ARGUMENT_INDEX
    }
}

/// A flow-relevant syntactic position (closed variant set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Node {
    /// Any expression
    Expr(ExprId),
    /// An expression at a call's argument position
    Argument(Argument),
    /// The operand of a return statement
    Return { operand: ExprId, kind: ReturnKind },
    /// A call expression, viewed as the place its result is consumed
    Out { call: ExprId, kind: ReturnKind },
}

/// Discriminant of [`Node`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    Expr,
    Argument,
    Return,
    Out,
}

impl Node {
    pub fn classify(&self) -> NodeKind {
        match self {
            Node::Expr(_) => NodeKind::Expr,
            Node::Argument(_) => NodeKind::Argument,
            Node::Return { .. } => NodeKind::Return,
            Node::Out { .. } => NodeKind::Out,
        }
    }

    /// The single underlying expression this node wraps
    pub fn underlying_expr(&self) -> ExprId {
        match *self {
            Node::Expr(expr) => expr,
            Node::Argument(Argument { expr, .. }) => expr,
            Node::Return { operand, .. } => operand,
            Node::Out { call, .. } => call,
        }
    }

    /// The (call, position) pairing, when this is an argument node
    pub fn argument_of(&self) -> Option<(ExprId, i32)> {
        match self {
            Node::Argument(arg) => Some((arg.call, arg.position)),
            _ => None,
        }
    }
}
