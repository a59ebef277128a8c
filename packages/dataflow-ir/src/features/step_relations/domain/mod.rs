//! Step relations (domain)

mod config;
mod step;

pub use config::StepConfig;
pub use step::{ReadStep, StoreStep, ValueStep};
