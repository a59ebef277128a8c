//! Error types for program construction.
//!
//! Derivations over a built [`Program`](super::Program) never fail: a missing
//! fact is an empty result, not an error. The only fallible operation in this
//! crate is `ProgramBuilder::build`, which validates that the adapter handed
//! us a self-consistent fact base.

use thiserror::Error;

use super::program::{ExprId, FieldId, FunctionId};

/// Validation errors raised by `ProgramBuilder::build`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("expression {expr} references unknown expression {referenced}")]
    DanglingExpr { expr: ExprId, referenced: ExprId },

    #[error("expression {expr} references unknown field {field}")]
    UnknownField { expr: ExprId, field: FieldId },

    #[error("expression {expr} references unknown function {function}")]
    UnknownFunction { expr: ExprId, function: FunctionId },

    #[error("expression {expr} is enclosed by unknown function {function}")]
    UnknownEnclosingFunction { expr: ExprId, function: FunctionId },

    #[error(
        "call {call}: variadic pack starts at {first_packed} but the call has {arity} source arguments"
    )]
    InvalidVariadicPack {
        call: ExprId,
        first_packed: usize,
        arity: usize,
    },

    #[error("call {call}: variadic aggregate {aggregate} is not an array aggregate expression")]
    InvalidVariadicAggregate { call: ExprId, aggregate: ExprId },

    #[error("return statement references unknown expression {operand}")]
    DanglingReturnOperand { operand: ExprId },

    #[error("return statement references unknown function {function}")]
    DanglingReturnFunction { function: FunctionId },
}

/// Result type for program construction
pub type ModelResult<T> = std::result::Result<T, ModelError>;
