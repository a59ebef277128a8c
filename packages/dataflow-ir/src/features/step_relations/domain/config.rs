//! Step derivation configuration.

use serde::{Deserialize, Serialize};

/// Gates the supplementary step families. Field store/read derivation and
/// value steps are always on; collection and array element modeling can be
/// disabled by hosts that bring their own container models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepConfig {
    /// Model element flow through adapter-declared collection accessors
    pub collections: bool,
    /// Model element flow through index expressions and array aggregates
    pub arrays: bool,
}

impl Default for StepConfig {
    fn default() -> Self {
        Self {
            collections: true,
            arrays: true,
        }
    }
}

impl StepConfig {
    /// Field content only; no element buckets
    pub fn fields_only() -> Self {
        Self {
            collections: false,
            arrays: false,
        }
    }
}
