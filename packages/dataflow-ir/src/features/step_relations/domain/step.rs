//! Step edge facts.
//!
//! Steps are logical facts, not objects with a lifecycle: they are
//! recomputed (or cached) on demand from the program fact base and never
//! mutated. Store and read are kept as two one-directional relations;
//! pairing a store at one point with the reads it can reach is the consuming
//! solver's job, not this layer's.

use serde::{Deserialize, Serialize};

use crate::features::content_model::Content;
use crate::features::node_model::Node;

/// A value may be written into a content location:
/// `source` flows into `content` of `target`, where `target` is the
/// after-write view of the written object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StoreStep {
    pub source: Node,
    pub content: Content,
    pub target: Node,
}

/// A value may be read out of a content location:
/// `content` of `source` flows to `target`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReadStep {
    pub source: Node,
    pub content: Content,
    pub target: Node,
}

/// A value-preserving local step (assignment flow, call result flow)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValueStep {
    pub source: Node,
    pub target: Node,
}
