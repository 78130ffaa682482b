//! Compilation pipeline for declaration generation.
//!
//! This module provides a [`Pipeline`] orchestrator that runs the phases
//! between a validated schema and an emitter:
//!
//! - Explicit phase boundaries (validate → resolve → synthesize)
//! - Plugin hooks for extensibility (before/after each phase)
//! - Unified diagnostics collection
//! - Shared results via [`CompilationContext`]
//!
//! # Example
//!
//! ```ignore
//! use graphtype_codegen::pipeline::Pipeline;
//!
//! let ctx = Pipeline::new().run(model)?;
//!
//! for diag in ctx.warnings() {
//!     eprintln!("warning: {}", diag.message);
//! }
//!
//! let generator = Generator::from_context(ctx, options, scalars)?;
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod plugin;
mod runner;

pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::Phase;
pub use plugin::Plugin;
pub use runner::Pipeline;
