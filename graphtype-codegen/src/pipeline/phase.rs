//! A single step of the pipeline.

use eyre::Result;

use super::CompilationContext;

/// One step over the shared [`CompilationContext`].
///
/// The built-in steps are `validate` (lints), `resolve` (symbol table)
/// and `synthesize` (argument containers). Products are stored on the
/// context for the steps and emitters that follow.
pub trait Phase: Send + Sync {
    /// Identifier passed to plugin hooks.
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Record recoverable findings as diagnostics; an `Err` stops the run.
    fn run(&self, ctx: &mut CompilationContext) -> Result<()>;
}
