//! Dispatch derivations

mod dispatch;

pub use dispatch::{
    argument, argument_count, call_has_qualifier, enclosing_callable, instance_argument,
};
