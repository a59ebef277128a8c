/*
 * Content Model
 *
 * Abstraction of storage locations inside objects:
 * - Field(f): one identity per field declaration. Field-sensitive,
 *   object-insensitive: values stored into field f of any object are
 *   visible to reads of field f from any object.
 * - CollectionElement / ArrayElement: one system-wide bucket each. Every
 *   element write is visible to every element read of the same bucket, and
 *   no declared type is exposed (conservatively compatible with everything).
 *
 * The coarse element buckets are an intentional soundness-over-precision
 * approximation. Per-element discrimination would be a compatibility-
 * breaking precision upgrade, not a correctness fix.
 */

use serde::{Deserialize, Serialize};

use crate::features::type_compat::domain::Type;
use crate::shared::models::{FieldId, Program};

/// A storage location inside an object (closed variant set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Content {
    /// A declared field; identity is the declaration, not the access site
    Field(FieldId),
    /// Any element of any collection
    CollectionElement,
    /// Any element of any array
    ArrayElement,
}

impl Content {
    pub fn field(field: FieldId) -> Self {
        Content::Field(field)
    }

    /// Type declaring the field, for field content; element buckets expose
    /// no type
    pub fn declaring_type<'p>(&self, program: &'p Program) -> Option<&'p Type> {
        match self {
            Content::Field(field) => program.field(*field).map(|f| &f.declaring_type),
            Content::CollectionElement | Content::ArrayElement => None,
        }
    }

    /// Declared type of the stored value, for field content; element buckets
    /// expose no type
    pub fn declared_type<'p>(&self, program: &'p Program) -> Option<&'p Type> {
        match self {
            Content::Field(field) => program.field(*field).map(|f| &f.declared_type),
            Content::CollectionElement | Content::ArrayElement => None,
        }
    }
}
