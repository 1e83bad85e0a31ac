//! Common types, CLI protocol definitions, and errors shared across the action encryption crates.

pub mod error;
pub mod protocol;

pub use error::SecurityError;
