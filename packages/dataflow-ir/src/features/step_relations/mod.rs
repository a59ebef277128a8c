//! Step relations: store, read, value, and jump edges.
//!
//! Hexagonal layout:
//! - domain: step fact types and derivation config
//! - infrastructure: derivations and the injectable jump-step port

pub mod domain;
pub mod infrastructure;

pub use domain::{ReadStep, StepConfig, StoreStep, ValueStep};
pub use infrastructure::{
    read_step, read_steps, store_step, store_steps, value_step, value_steps, JumpStepProvider,
    NoJumpSteps,
};
