/*
 * Store / Read / Value Step Derivation
 *
 * Derives the raw flow edges through object storage:
 * - store steps: assignment into a non-static field, assignment through an
 *   index expression, array aggregate construction (synthesized variadic
 *   carriers included), and calls to Insert collection accessors
 * - read steps: non-static field reads that are not write targets, index
 *   expressions that are not write targets, and calls to Extract collection
 *   accessors
 * - value steps: assignment flow and call-result flow
 *
 * Static field assignments derive nothing here: a static field has no
 * single owning object, so its flow belongs to the jump-step extension.
 *
 * Every function is a total, side-effect-free derivation over the fact
 * base; re-deriving for the same program yields a value-equal result.
 */

use rustc_hash::FxHashSet;
use tracing::debug;

use crate::features::content_model::Content;
use crate::features::node_model::{effective_arguments, Node, ReturnKind};
use crate::features::step_relations::domain::{ReadStep, StepConfig, StoreStep, ValueStep};
use crate::shared::models::{CollectionOp, ExprId, ExprKind, Program};

/// Expression ids that occur as assignment left-hand sides
fn assignment_targets(program: &Program) -> FxHashSet<ExprId> {
    program
        .exprs()
        .filter_map(|e| match e.kind {
            ExprKind::Assign { lhs, .. } => Some(lhs),
            _ => None,
        })
        .collect()
}

/// Collection accessor role of a call's resolved target
fn collection_op(program: &Program, call: ExprId) -> Option<CollectionOp> {
    program.call_target(call)?.collection_op
}

/// Enumerate all store steps of the program
pub fn store_steps(program: &Program, config: StepConfig) -> Vec<StoreStep> {
    let mut steps = Vec::new();

    for expr in program.exprs() {
        match expr.kind {
            ExprKind::Assign { lhs, rhs } => {
                if let Some(access) = program.field_access(lhs) {
                    let field = match program.field(access.target) {
                        Some(field) if !field.is_static => field,
                        // static fields have no owning object; jump-step territory
                        _ => continue,
                    };
                    let content = Content::field(field.id);
                    let target = Node::Expr(access.qualifier);
                    steps.push(StoreStep {
                        source: Node::Expr(rhs),
                        content,
                        target,
                    });
                    // the assignment expression evaluates to the stored value
                    steps.push(StoreStep {
                        source: Node::Expr(expr.id),
                        content,
                        target,
                    });
                } else if config.arrays {
                    if let Some(ExprKind::Index(index)) = program.expr(lhs).map(|e| &e.kind) {
                        let target = Node::Expr(index.base);
                        steps.push(StoreStep {
                            source: Node::Expr(rhs),
                            content: Content::ArrayElement,
                            target,
                        });
                        steps.push(StoreStep {
                            source: Node::Expr(expr.id),
                            content: Content::ArrayElement,
                            target,
                        });
                    }
                }
            }
            ExprKind::ArrayAggregate { ref elements, .. } if config.arrays => {
                // every element is stored into the aggregate; this is what
                // makes a synthesized variadic carrier actually carry
                for &element in elements {
                    steps.push(StoreStep {
                        source: Node::Expr(element),
                        content: Content::ArrayElement,
                        target: Node::Expr(expr.id),
                    });
                }
            }
            ExprKind::Call(ref call) if config.collections => {
                if collection_op(program, expr.id) == Some(CollectionOp::Insert) {
                    if let (Some(qualifier), Some(first)) =
                        (call.qualifier, effective_arguments(program, expr.id).first())
                    {
                        steps.push(StoreStep {
                            source: Node::Expr(first.expr),
                            content: Content::CollectionElement,
                            target: Node::Expr(qualifier),
                        });
                    }
                }
            }
            _ => {}
        }
    }

    debug!(count = steps.len(), "derived store steps");
    steps
}

/// Enumerate all read steps of the program
pub fn read_steps(program: &Program, config: StepConfig) -> Vec<ReadStep> {
    let targets = assignment_targets(program);
    let mut steps = Vec::new();

    for expr in program.exprs() {
        match expr.kind {
            ExprKind::FieldAccess(access) => {
                // an access that is itself the write target is not a read
                if targets.contains(&expr.id) {
                    continue;
                }
                match program.field(access.target) {
                    Some(field) if !field.is_static => {
                        steps.push(ReadStep {
                            source: Node::Expr(access.qualifier),
                            content: Content::field(field.id),
                            target: Node::Expr(expr.id),
                        });
                    }
                    _ => {}
                }
            }
            ExprKind::Index(index) if config.arrays => {
                if targets.contains(&expr.id) {
                    continue;
                }
                steps.push(ReadStep {
                    source: Node::Expr(index.base),
                    content: Content::ArrayElement,
                    target: Node::Expr(expr.id),
                });
            }
            ExprKind::Call(ref call) if config.collections => {
                if collection_op(program, expr.id) == Some(CollectionOp::Extract) {
                    if let Some(qualifier) = call.qualifier {
                        steps.push(ReadStep {
                            source: Node::Expr(qualifier),
                            content: Content::CollectionElement,
                            target: Node::Out {
                                call: expr.id,
                                kind: ReturnKind::Normal,
                            },
                        });
                    }
                }
            }
            _ => {}
        }
    }

    debug!(count = steps.len(), "derived read steps");
    steps
}

/// Enumerate all value-preserving local steps of the program
pub fn value_steps(program: &Program) -> Vec<ValueStep> {
    let mut steps = Vec::new();

    for expr in program.exprs() {
        match expr.kind {
            ExprKind::Assign { lhs, rhs } => {
                steps.push(ValueStep {
                    source: Node::Expr(rhs),
                    target: Node::Expr(expr.id),
                });
                // plain variable targets receive the value; storage targets
                // are covered by store steps instead
                if let Some(ExprKind::VarAccess { .. }) = program.expr(lhs).map(|e| &e.kind) {
                    steps.push(ValueStep {
                        source: Node::Expr(rhs),
                        target: Node::Expr(lhs),
                    });
                }
            }
            ExprKind::Call(_) => {
                steps.push(ValueStep {
                    source: Node::Out {
                        call: expr.id,
                        kind: ReturnKind::Normal,
                    },
                    target: Node::Expr(expr.id),
                });
            }
            _ => {}
        }
    }

    steps
}

/// Membership form of [`store_steps`]
pub fn store_step(
    program: &Program,
    config: StepConfig,
    source: Node,
    content: Content,
    target: Node,
) -> bool {
    store_steps(program, config).contains(&StoreStep {
        source,
        content,
        target,
    })
}

/// Membership form of [`read_steps`]
pub fn read_step(
    program: &Program,
    config: StepConfig,
    source: Node,
    content: Content,
    target: Node,
) -> bool {
    read_steps(program, config).contains(&ReadStep {
        source,
        content,
        target,
    })
}

/// Membership form of [`value_steps`]
pub fn value_step(program: &Program, source: Node, target: Node) -> bool {
    value_steps(program).contains(&ValueStep { source, target })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::type_compat::domain::Type;
    use crate::shared::models::{CallExpr, FieldAccessExpr, IndexExpr};

    /// `x.f = y` with a non-static field; returns (program, ids)
    fn field_write_program(
        is_static: bool,
    ) -> (Program, ExprId, ExprId, ExprId, crate::shared::models::FieldId) {
        let mut b = Program::builder();
        let f = b.field("f", Type::named("C"), Type::int(), is_static);
        let x = b.expr(ExprKind::VarAccess { name: "x".into() });
        let access = b.expr(ExprKind::FieldAccess(FieldAccessExpr {
            qualifier: x,
            target: f,
        }));
        let y = b.expr(ExprKind::VarAccess { name: "y".into() });
        let assign = b.expr(ExprKind::Assign {
            lhs: access,
            rhs: y,
        });
        (b.build().unwrap(), x, y, assign, f)
    }

    #[test]
    fn test_field_store() {
        let (program, x, y, assign, f) = field_write_program(false);
        let steps = store_steps(&program, StepConfig::default());

        assert!(steps.contains(&StoreStep {
            source: Node::Expr(y),
            content: Content::field(f),
            target: Node::Expr(x),
        }));
        // the assignment expression itself carries the stored value
        assert!(steps.contains(&StoreStep {
            source: Node::Expr(assign),
            content: Content::field(f),
            target: Node::Expr(x),
        }));
    }

    #[test]
    fn test_static_field_store_excluded() {
        let (program, _, _, _, _) = field_write_program(true);
        assert!(store_steps(&program, StepConfig::default()).is_empty());
    }

    #[test]
    fn test_write_target_is_not_a_read() {
        let (program, _, _, _, _) = field_write_program(false);
        assert!(read_steps(&program, StepConfig::default()).is_empty());
    }

    #[test]
    fn test_field_read() {
        let mut b = Program::builder();
        let f = b.field("f", Type::named("C"), Type::int(), false);
        let x = b.expr(ExprKind::VarAccess { name: "x".into() });
        let access = b.expr(ExprKind::FieldAccess(FieldAccessExpr {
            qualifier: x,
            target: f,
        }));
        let program = b.build().unwrap();

        let steps = read_steps(&program, StepConfig::default());
        assert_eq!(
            steps,
            vec![ReadStep {
                source: Node::Expr(x),
                content: Content::field(f),
                target: Node::Expr(access),
            }]
        );
    }

    #[test]
    fn test_array_element_steps() {
        let mut b = Program::builder();
        let arr = b.expr(ExprKind::VarAccess { name: "arr".into() });
        let i = b.expr(ExprKind::Other);
        let write_idx = b.expr(ExprKind::Index(IndexExpr { base: arr, index: i }));
        let v = b.expr(ExprKind::VarAccess { name: "v".into() });
        b.expr(ExprKind::Assign {
            lhs: write_idx,
            rhs: v,
        });
        let arr2 = b.expr(ExprKind::VarAccess { name: "arr".into() });
        let j = b.expr(ExprKind::Other);
        let read_idx = b.expr(ExprKind::Index(IndexExpr { base: arr2, index: j }));
        let program = b.build().unwrap();

        let stores = store_steps(&program, StepConfig::default());
        assert!(stores.contains(&StoreStep {
            source: Node::Expr(v),
            content: Content::ArrayElement,
            target: Node::Expr(arr),
        }));

        let reads = read_steps(&program, StepConfig::default());
        assert!(reads.contains(&ReadStep {
            source: Node::Expr(arr2),
            content: Content::ArrayElement,
            target: Node::Expr(read_idx),
        }));
        // the written occurrence derives no read
        assert!(!reads.iter().any(|s| s.target == Node::Expr(write_idx)));
    }

    #[test]
    fn test_aggregate_elements_store_into_carrier() {
        let mut b = Program::builder();
        let a = b.expr(ExprKind::Other);
        let c = b.expr(ExprKind::Other);
        let agg = b.expr(ExprKind::ArrayAggregate {
            elements: vec![a, c],
            synthesized: true,
        });
        let program = b.build().unwrap();

        let steps = store_steps(&program, StepConfig::default());
        assert_eq!(steps.len(), 2);
        assert!(steps.iter().all(|s| s.target == Node::Expr(agg)
            && s.content == Content::ArrayElement));
    }

    #[test]
    fn test_arrays_can_be_disabled() {
        let mut b = Program::builder();
        let a = b.expr(ExprKind::Other);
        b.expr(ExprKind::ArrayAggregate {
            elements: vec![a],
            synthesized: false,
        });
        let program = b.build().unwrap();

        assert!(store_steps(&program, StepConfig::fields_only()).is_empty());
    }

    #[test]
    fn test_collection_insert_and_extract() {
        let mut b = Program::builder();
        let add = b.collection_function("add", CollectionOp::Insert);
        let get = b.collection_function("get", CollectionOp::Extract);

        let list = b.expr(ExprKind::VarAccess { name: "list".into() });
        let v = b.expr(ExprKind::VarAccess { name: "v".into() });
        b.expr(ExprKind::Call(CallExpr {
            target: Some(add),
            arguments: vec![v],
            qualifier: Some(list),
            is_constructor: false,
            variadic_pack: None,
        }));

        let list2 = b.expr(ExprKind::VarAccess { name: "list".into() });
        let i = b.expr(ExprKind::Other);
        let get_call = b.expr(ExprKind::Call(CallExpr {
            target: Some(get),
            arguments: vec![i],
            qualifier: Some(list2),
            is_constructor: false,
            variadic_pack: None,
        }));
        let program = b.build().unwrap();

        let stores = store_steps(&program, StepConfig::default());
        assert!(stores.contains(&StoreStep {
            source: Node::Expr(v),
            content: Content::CollectionElement,
            target: Node::Expr(list),
        }));

        let reads = read_steps(&program, StepConfig::default());
        assert!(reads.contains(&ReadStep {
            source: Node::Expr(list2),
            content: Content::CollectionElement,
            target: Node::Out {
                call: get_call,
                kind: ReturnKind::Normal,
            },
        }));
    }

    #[test]
    fn test_value_steps() {
        let mut b = Program::builder();
        let y = b.expr(ExprKind::VarAccess { name: "y".into() });
        let z = b.expr(ExprKind::VarAccess { name: "z".into() });
        let assign = b.expr(ExprKind::Assign { lhs: z, rhs: y });
        let call = b.expr(ExprKind::Call(CallExpr {
            target: None,
            arguments: vec![],
            qualifier: None,
            is_constructor: false,
            variadic_pack: None,
        }));
        let program = b.build().unwrap();

        let steps = value_steps(&program);
        assert!(steps.contains(&ValueStep {
            source: Node::Expr(y),
            target: Node::Expr(z),
        }));
        assert!(steps.contains(&ValueStep {
            source: Node::Expr(y),
            target: Node::Expr(assign),
        }));
        assert!(steps.contains(&ValueStep {
            source: Node::Out {
                call,
                kind: ReturnKind::Normal,
            },
            target: Node::Expr(call),
        }));
    }

    #[test]
    fn test_idempotent_derivation() {
        let (program, _, _, _, _) = field_write_program(false);
        let first = store_steps(&program, StepConfig::default());
        let second = store_steps(&program, StepConfig::default());
        assert_eq!(first, second);
    }
}
