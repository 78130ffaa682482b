//! Core utilities and types for the graphtype generator.
//!
//! This crate provides the file output layer and the identifier case
//! helpers shared by the schema, codegen and CLI crates.

mod file;
mod utils;

// File operations
pub use file::{File, WriteResult};
// String utilities
pub use utils::{capitalize, to_pascal_case};
