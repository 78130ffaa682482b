//! Built-in pipeline phases.
//!
//! This module provides the standard phases that run in every pipeline:
//!
//! - [`ValidatePhase`] - lints the schema model and collects diagnostics
//! - [`ResolvePhase`] - indexes every type into the symbol table
//! - [`SynthesizePhase`] - creates argument container types

mod resolve;
mod synthesize;
mod validate;

pub use resolve::ResolvePhase;
pub use synthesize::SynthesizePhase;
pub use validate::{
    EmptyTypeLint, Lint, LintInfo, MissingDeprecationReasonLint, TypeNamingLint, ValidatePhase,
};
