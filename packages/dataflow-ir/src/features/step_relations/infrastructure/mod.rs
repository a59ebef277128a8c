//! Step derivations

mod jump;
mod store_read;

pub use jump::{JumpStepProvider, NoJumpSteps};
pub use store_read::{read_step, read_steps, store_step, store_steps, value_step, value_steps};
