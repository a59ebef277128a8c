//! Type compatibility derivations

mod oracle;

pub use oracle::compatible_types;
