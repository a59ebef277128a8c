//! Call dispatch: argument mapping, qualifiers, enclosing callables.

pub mod infrastructure;

pub use infrastructure::{
    argument, argument_count, call_has_qualifier, enclosing_callable, instance_argument,
};
