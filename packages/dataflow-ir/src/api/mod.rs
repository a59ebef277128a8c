//! Public query surface for solver hosts.

mod flow_model;

pub use flow_model::{FlowModelIndex, LocalFlowModel};
