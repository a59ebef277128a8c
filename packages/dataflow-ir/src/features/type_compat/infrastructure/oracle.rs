/*
 * Type Compatibility Oracle
 *
 * Answers "could a value of static type t1 legally reach a sink declared
 * with static type t2?" as a pruning-only filter:
 * - A false positive costs the consuming solver precision (a spurious
 *   candidate it must discard by other means) and is always acceptable.
 * - A false negative loses a real flow and must never happen.
 *
 * Comparison happens after normalization:
 * - every numeric kind folds to a single representative (implicit numeric
 *   conversions make them interchangeable carriers)
 * - type parameters erase to their declared bound, or to the top type when
 *   unbounded
 * - unknown types are the permissive top
 *
 * Nominal types compare by name after that, which requires the adapter to
 * present them hierarchy-collapsed (or as Unknown) — the same move as the
 * numeric fold, applied to class hierarchies.
 *
 * Pure function of its two inputs: no side effects, no evaluation-order
 * dependence, safe for the host evaluator to memoize.
 */

use crate::features::type_compat::domain::{Type, TypeKind};

/// Normalized comparison form
#[derive(Debug, Clone, PartialEq, Eq)]
enum Erased<'t> {
    /// Compatible with everything
    Top,
    Void,
    /// All numeric kinds folded together
    Numeric,
    Nominal(&'t str),
}

fn erase(ty: &Type) -> Erased<'_> {
    match &ty.kind {
        TypeKind::Unknown => Erased::Top,
        TypeKind::Void => Erased::Void,
        TypeKind::Numeric(_) => Erased::Numeric,
        TypeKind::Named(name) => Erased::Nominal(name),
        TypeKind::TypeParam { bound, .. } => match bound {
            Some(bound) => erase(bound),
            None => Erased::Top,
        },
    }
}

/// Conservative compatibility check used to prune type-infeasible edges.
///
/// Reflexive: `compatible_types(t, t)` holds for every `t`.
pub fn compatible_types(t1: &Type, t2: &Type) -> bool {
    let e1 = erase(t1);
    let e2 = erase(t2);
    e1 == Erased::Top || e2 == Erased::Top || e1 == e2
}
