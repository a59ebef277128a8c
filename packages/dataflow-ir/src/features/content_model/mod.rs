//! Content abstraction: storage locations inside objects.

pub mod domain;

pub use domain::Content;
