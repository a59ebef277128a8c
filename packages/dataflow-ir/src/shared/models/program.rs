/*
 * Program Fact Base
 *
 * Immutable structural facts consumed from the AST adapter:
 * - Expressions (calls, field accesses, index expressions, assignments,
 *   array aggregates, variable accesses)
 * - Field and function declarations
 * - Return statements
 *
 * Everything downstream (nodes, contents, steps) is a pure derivation over
 * this fact base. The base itself is plain data: id-indexed vectors, no
 * behavior beyond lookup. Construction goes through `ProgramBuilder`, which
 * validates id references once so derivations can index without checking.
 */

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::features::type_compat::domain::Type;

use super::error::{ModelError, ModelResult};
use super::span::Span;

/// Expression ID (unique within a program)
pub type ExprId = usize;

/// Field declaration ID
pub type FieldId = usize;

/// Function declaration ID
pub type FunctionId = usize;

/// Kind of a callable declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FunctionKind {
    /// Free function: no receiver
    Free,
    /// Member function: called through a receiver
    Method,
    /// Constructor: no explicit receiver syntax, the call stands in for the
    /// object being constructed
    Constructor,
    /// Destructor: frequently invoked implicitly, with no receiver expression
    /// in the syntax tree
    Destructor,
}

/// Marks a callable as a collection element accessor.
///
/// The adapter declares these for library functions like `add`/`push`
/// (Insert) and `get`/`pop` (Extract) so element flow through collections can
/// be modeled without per-library knowledge in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CollectionOp {
    /// Writes an element into the receiver collection
    Insert,
    /// Reads an element out of the receiver collection
    Extract,
}

/// Function declaration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Function {
    pub id: FunctionId,
    pub name: String,
    pub kind: FunctionKind,
    /// Collection accessor role, if the adapter declared one
    pub collection_op: Option<CollectionOp>,
    /// Language-specific attributes (adapter-defined)
    pub attrs: HashMap<String, Value>,
}

/// Field declaration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Field {
    pub id: FieldId,
    pub name: String,
    pub declaring_type: Type,
    pub declared_type: Type,
    pub is_static: bool,
}

/// Call expression facts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallExpr {
    /// Resolved callee; `None` when resolution failed (such a call produces
    /// no dispatch facts)
    pub target: Option<FunctionId>,
    /// Source-level argument expressions, in order
    pub arguments: Vec<ExprId>,
    /// Explicit receiver expression, when the call has one
    pub qualifier: Option<ExprId>,
    /// Constructor-call syntax (`new C(...)`)
    pub is_constructor: bool,
    /// Present when trailing arguments are packed into a synthesized array
    pub variadic_pack: Option<VariadicPack>,
}

/// Variadic packing at a call site.
///
/// Source arguments from `first_packed` onward are carried by the synthesized
/// `aggregate` array expression; they occupy no argument position of their
/// own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariadicPack {
    /// Index into `CallExpr::arguments` of the first packed expression
    pub first_packed: usize,
    /// The synthesized array aggregate carrying the packed values
    pub aggregate: ExprId,
}

/// Field access facts (`obj.f`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldAccessExpr {
    pub qualifier: ExprId,
    pub target: FieldId,
}

/// Index expression facts (`arr[i]`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexExpr {
    pub base: ExprId,
    pub index: ExprId,
}

/// Expression kind (closed; consumers match exhaustively)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ExprKind {
    Call(CallExpr),
    FieldAccess(FieldAccessExpr),
    Index(IndexExpr),
    /// Assignment used in expression position; evaluates to the stored value
    Assign { lhs: ExprId, rhs: ExprId },
    /// Array aggregate literal; `synthesized` marks compiler-generated
    /// aggregates such as variadic carriers
    ArrayAggregate {
        elements: Vec<ExprId>,
        synthesized: bool,
    },
    /// Variable read/write occurrence
    VarAccess { name: String },
    /// Any expression this layer has no special knowledge of
    Other,
}

/// Expression occurrence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expr {
    pub id: ExprId,
    pub kind: ExprKind,
    pub span: Span,
    /// Function textually containing this expression
    pub enclosing_function: Option<FunctionId>,
    /// Static type, when the adapter resolved one
    pub static_type: Option<Type>,
}

/// Return statement facts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnStmt {
    pub operand: ExprId,
    pub function: FunctionId,
}

/// Immutable program fact base.
///
/// All ids handed out by `ProgramBuilder` are dense indexes, validated once
/// at build time. Lookups with foreign ids return `None` rather than
/// panicking; derivations treat that as "no supporting evidence".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Program {
    exprs: Vec<Expr>,
    fields: Vec<Field>,
    functions: Vec<Function>,
    returns: Vec<ReturnStmt>,
}

impl Program {
    pub fn builder() -> ProgramBuilder {
        ProgramBuilder::default()
    }

    pub fn expr(&self, id: ExprId) -> Option<&Expr> {
        self.exprs.get(id)
    }

    pub fn field(&self, id: FieldId) -> Option<&Field> {
        self.fields.get(id)
    }

    pub fn function(&self, id: FunctionId) -> Option<&Function> {
        self.functions.get(id)
    }

    pub fn exprs(&self) -> impl Iterator<Item = &Expr> {
        self.exprs.iter()
    }

    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter()
    }

    pub fn functions(&self) -> impl Iterator<Item = &Function> {
        self.functions.iter()
    }

    pub fn returns(&self) -> impl Iterator<Item = &ReturnStmt> {
        self.returns.iter()
    }

    pub fn expr_count(&self) -> usize {
        self.exprs.len()
    }

    /// Call facts of `id`, when `id` is a call expression
    pub fn call(&self, id: ExprId) -> Option<&CallExpr> {
        match self.expr(id)?.kind {
            ExprKind::Call(ref call) => Some(call),
            _ => None,
        }
    }

    /// Field access facts of `id`, when `id` is a field access
    pub fn field_access(&self, id: ExprId) -> Option<&FieldAccessExpr> {
        match self.expr(id)?.kind {
            ExprKind::FieldAccess(ref access) => Some(access),
            _ => None,
        }
    }

    /// Static type of an expression, when known
    pub fn type_of(&self, id: ExprId) -> Option<&Type> {
        self.expr(id)?.static_type.as_ref()
    }

    /// Whether `id` occurs as the left-hand side of some assignment.
    ///
    /// Derived from assignment facts; used by the read-step exclusion so a
    /// write-target occurrence is never double-counted as a read.
    pub fn is_assignment_target(&self, id: ExprId) -> bool {
        self.exprs.iter().any(|e| match e.kind {
            ExprKind::Assign { lhs, .. } => lhs == id,
            _ => false,
        })
    }

    /// Resolved target declaration of a call, when resolution succeeded
    pub fn call_target(&self, id: ExprId) -> Option<&Function> {
        self.function(self.call(id)?.target?)
    }
}

/// Builder for [`Program`].
///
/// Ids are handed out densely as facts are added; `build` validates every
/// cross-reference once.
#[derive(Debug, Default)]
pub struct ProgramBuilder {
    exprs: Vec<Expr>,
    fields: Vec<Field>,
    functions: Vec<Function>,
    returns: Vec<ReturnStmt>,
}

impl ProgramBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn function(&mut self, name: impl Into<String>, kind: FunctionKind) -> FunctionId {
        let id = self.functions.len();
        self.functions.push(Function {
            id,
            name: name.into(),
            kind,
            collection_op: None,
            attrs: HashMap::new(),
        });
        id
    }

    /// Declare a collection accessor method (`add`, `get`, ...)
    pub fn collection_function(&mut self, name: impl Into<String>, op: CollectionOp) -> FunctionId {
        let id = self.function(name, FunctionKind::Method);
        self.functions[id].collection_op = Some(op);
        id
    }

    pub fn field(
        &mut self,
        name: impl Into<String>,
        declaring_type: Type,
        declared_type: Type,
        is_static: bool,
    ) -> FieldId {
        let id = self.fields.len();
        self.fields.push(Field {
            id,
            name: name.into(),
            declaring_type,
            declared_type,
            is_static,
        });
        id
    }

    pub fn expr(&mut self, kind: ExprKind) -> ExprId {
        let id = self.exprs.len();
        self.exprs.push(Expr {
            id,
            kind,
            span: Span::zero(),
            enclosing_function: None,
            static_type: None,
        });
        id
    }

    /// Add an expression enclosed by `function`
    pub fn expr_in(&mut self, kind: ExprKind, function: FunctionId) -> ExprId {
        let id = self.expr(kind);
        self.exprs[id].enclosing_function = Some(function);
        id
    }

    pub fn set_span(&mut self, expr: ExprId, span: Span) -> &mut Self {
        if let Some(e) = self.exprs.get_mut(expr) {
            e.span = span;
        }
        self
    }

    pub fn set_type(&mut self, expr: ExprId, ty: Type) -> &mut Self {
        if let Some(e) = self.exprs.get_mut(expr) {
            e.static_type = Some(ty);
        }
        self
    }

    pub fn return_stmt(&mut self, operand: ExprId, function: FunctionId) -> &mut Self {
        self.returns.push(ReturnStmt { operand, function });
        self
    }

    /// Validate all cross-references and freeze the fact base
    pub fn build(self) -> ModelResult<Program> {
        let expr_count = self.exprs.len();
        let field_count = self.fields.len();
        let function_count = self.functions.len();

        let check_expr = |owner: ExprId, referenced: ExprId| -> ModelResult<()> {
            if referenced < expr_count {
                Ok(())
            } else {
                Err(ModelError::DanglingExpr {
                    expr: owner,
                    referenced,
                })
            }
        };

        for expr in &self.exprs {
            if let Some(function) = expr.enclosing_function {
                if function >= function_count {
                    return Err(ModelError::UnknownEnclosingFunction {
                        expr: expr.id,
                        function,
                    });
                }
            }
            match &expr.kind {
                ExprKind::Call(call) => {
                    if let Some(function) = call.target {
                        if function >= function_count {
                            return Err(ModelError::UnknownFunction {
                                expr: expr.id,
                                function,
                            });
                        }
                    }
                    for &arg in &call.arguments {
                        check_expr(expr.id, arg)?;
                    }
                    if let Some(qualifier) = call.qualifier {
                        check_expr(expr.id, qualifier)?;
                    }
                    if let Some(pack) = call.variadic_pack {
                        if pack.first_packed > call.arguments.len() {
                            return Err(ModelError::InvalidVariadicPack {
                                call: expr.id,
                                first_packed: pack.first_packed,
                                arity: call.arguments.len(),
                            });
                        }
                        check_expr(expr.id, pack.aggregate)?;
                        let aggregate_ok = matches!(
                            self.exprs.get(pack.aggregate).map(|e| &e.kind),
                            Some(ExprKind::ArrayAggregate { .. })
                        );
                        if !aggregate_ok {
                            return Err(ModelError::InvalidVariadicAggregate {
                                call: expr.id,
                                aggregate: pack.aggregate,
                            });
                        }
                    }
                }
                ExprKind::FieldAccess(access) => {
                    check_expr(expr.id, access.qualifier)?;
                    if access.target >= field_count {
                        return Err(ModelError::UnknownField {
                            expr: expr.id,
                            field: access.target,
                        });
                    }
                }
                ExprKind::Index(index) => {
                    check_expr(expr.id, index.base)?;
                    check_expr(expr.id, index.index)?;
                }
                ExprKind::Assign { lhs, rhs } => {
                    check_expr(expr.id, *lhs)?;
                    check_expr(expr.id, *rhs)?;
                }
                ExprKind::ArrayAggregate { elements, .. } => {
                    for &element in elements {
                        check_expr(expr.id, element)?;
                    }
                }
                ExprKind::VarAccess { .. } | ExprKind::Other => {}
            }
        }

        for ret in &self.returns {
            if ret.operand >= expr_count {
                return Err(ModelError::DanglingReturnOperand {
                    operand: ret.operand,
                });
            }
            if ret.function >= function_count {
                return Err(ModelError::DanglingReturnFunction {
                    function: ret.function,
                });
            }
        }

        Ok(Program {
            exprs: self.exprs,
            fields: self.fields,
            functions: self.functions,
            returns: self.returns,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::type_compat::domain::Type;

    #[test]
    fn test_build_simple_program() {
        let mut b = Program::builder();
        let f = b.function("main", FunctionKind::Free);
        let x = b.expr_in(ExprKind::VarAccess { name: "x".into() }, f);
        b.return_stmt(x, f);

        let program = b.build().unwrap();
        assert_eq!(program.expr_count(), 1);
        assert_eq!(program.returns().count(), 1);
        assert_eq!(program.expr(x).unwrap().enclosing_function, Some(f));
    }

    #[test]
    fn test_dangling_expr_rejected() {
        let mut b = Program::builder();
        b.expr(ExprKind::Assign { lhs: 7, rhs: 8 });

        let err = b.build().unwrap_err();
        assert!(matches!(err, ModelError::DanglingExpr { expr: 0, .. }));
    }

    #[test]
    fn test_variadic_pack_validation() {
        let mut b = Program::builder();
        let a = b.expr(ExprKind::Other);
        b.expr(ExprKind::Call(CallExpr {
            target: None,
            arguments: vec![a],
            qualifier: None,
            is_constructor: false,
            variadic_pack: Some(VariadicPack {
                first_packed: 0,
                aggregate: a, // not an aggregate expression
            }),
        }));

        let err = b.build().unwrap_err();
        assert!(matches!(err, ModelError::InvalidVariadicAggregate { .. }));
    }

    #[test]
    fn test_assignment_target_detection() {
        let mut b = Program::builder();
        let f = b.field("f", Type::named("C"), Type::int(), false);
        let obj = b.expr(ExprKind::VarAccess { name: "obj".into() });
        let access = b.expr(ExprKind::FieldAccess(FieldAccessExpr {
            qualifier: obj,
            target: f,
        }));
        let y = b.expr(ExprKind::VarAccess { name: "y".into() });
        b.expr(ExprKind::Assign {
            lhs: access,
            rhs: y,
        });

        let program = b.build().unwrap();
        assert!(program.is_assignment_target(access));
        assert!(!program.is_assignment_target(y));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let mut b = Program::builder();
        let obj = b.expr(ExprKind::VarAccess { name: "obj".into() });
        b.expr(ExprKind::FieldAccess(FieldAccessExpr {
            qualifier: obj,
            target: 3,
        }));

        let err = b.build().unwrap_err();
        assert_eq!(err, ModelError::UnknownField { expr: 1, field: 3 });
    }
}
