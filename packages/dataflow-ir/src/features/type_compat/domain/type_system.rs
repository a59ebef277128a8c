//! Static type model for compatibility pruning.
//!
//! Deliberately small: the oracle only needs to distinguish numeric types
//! (which all convert into each other), nominal types, type parameters (which
//! erase to their declared bound), and the unknown top type. Richer structure
//! (unions, callables, qualifiers) buys nothing for a pruning-only filter.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric category; every kind folds to one representative before
/// comparison to account for implicit numeric conversions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NumericKind {
    Bool,
    Char,
    Int,
    Long,
    Float,
    Double,
}

/// Type kind categorization
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeKind {
    /// Unresolved type; compatible with everything
    Unknown,
    Void,
    Numeric(NumericKind),
    /// Nominal type, identified by its (hierarchy-collapsed) name
    Named(String),
    /// Template/generic parameter; erases to its declared bound
    TypeParam {
        name: String,
        bound: Option<Box<Type>>,
    },
}

/// Type representation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Type {
    pub kind: TypeKind,
}

static BUILTIN_NUMERIC: Lazy<FxHashMap<&'static str, NumericKind>> = Lazy::new(|| {
    let mut m = FxHashMap::default();
    m.insert("bool", NumericKind::Bool);
    m.insert("char", NumericKind::Char);
    m.insert("short", NumericKind::Int);
    m.insert("int", NumericKind::Int);
    m.insert("long", NumericKind::Long);
    m.insert("float", NumericKind::Float);
    m.insert("double", NumericKind::Double);
    m
});

impl Type {
    pub fn unknown() -> Self {
        Self {
            kind: TypeKind::Unknown,
        }
    }

    pub fn void() -> Self {
        Self {
            kind: TypeKind::Void,
        }
    }

    pub fn numeric(kind: NumericKind) -> Self {
        Self {
            kind: TypeKind::Numeric(kind),
        }
    }

    pub fn int() -> Self {
        Self::numeric(NumericKind::Int)
    }

    pub fn double() -> Self {
        Self::numeric(NumericKind::Double)
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            kind: TypeKind::Named(name.into()),
        }
    }

    /// Create an unbounded type parameter
    pub fn type_param(name: impl Into<String>) -> Self {
        Self {
            kind: TypeKind::TypeParam {
                name: name.into(),
                bound: None,
            },
        }
    }

    /// Create a type parameter with a declared bound
    pub fn bounded_param(name: impl Into<String>, bound: Type) -> Self {
        Self {
            kind: TypeKind::TypeParam {
                name: name.into(),
                bound: Some(Box::new(bound)),
            },
        }
    }

    /// Map a builtin spelling to a type; unrecognized names become nominal
    /// types, `void` maps to `Void`
    pub fn from_name(name: &str) -> Self {
        if name == "void" {
            return Self::void();
        }
        match BUILTIN_NUMERIC.get(name) {
            Some(&kind) => Self::numeric(kind),
            None => Self::named(name),
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self.kind, TypeKind::Unknown)
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self.kind, TypeKind::Numeric(_))
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            TypeKind::Unknown => write!(f, "<unknown>"),
            TypeKind::Void => write!(f, "void"),
            TypeKind::Numeric(kind) => {
                let name = match kind {
                    NumericKind::Bool => "bool",
                    NumericKind::Char => "char",
                    NumericKind::Int => "int",
                    NumericKind::Long => "long",
                    NumericKind::Float => "float",
                    NumericKind::Double => "double",
                };
                write!(f, "{}", name)
            }
            TypeKind::Named(name) => write!(f, "{}", name),
            TypeKind::TypeParam { name, bound } => {
                write!(f, "{}", name)?;
                if let Some(bound) = bound {
                    write!(f, ": {}", bound)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_builtins() {
        assert_eq!(Type::from_name("int"), Type::int());
        assert_eq!(Type::from_name("double"), Type::double());
        assert_eq!(Type::from_name("void"), Type::void());
        assert_eq!(Type::from_name("short"), Type::numeric(NumericKind::Int));
    }

    #[test]
    fn test_from_name_nominal() {
        assert_eq!(Type::from_name("Widget"), Type::named("Widget"));
    }

    #[test]
    fn test_display() {
        assert_eq!(Type::int().to_string(), "int");
        assert_eq!(Type::named("List").to_string(), "List");
        assert_eq!(
            Type::bounded_param("T", Type::named("Base")).to_string(),
            "T: Base"
        );
    }
}
