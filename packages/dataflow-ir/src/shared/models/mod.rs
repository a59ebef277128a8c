//! Shared models

mod error;
mod program;
mod span;

pub use error::{ModelError, ModelResult};
pub use program::{
    CallExpr, CollectionOp, Expr, ExprId, ExprKind, Field, FieldAccessExpr, FieldId, Function,
    FunctionId, FunctionKind, IndexExpr, Program, ProgramBuilder, ReturnStmt, VariadicPack,
};
pub use span::Span;

// Re-export the type model next to the fact base it annotates
pub use crate::features::type_compat::domain::{NumericKind, Type, TypeKind};

// Re-export serde_json::Value for convenience (used by Function attrs)
pub use serde_json::Value;
