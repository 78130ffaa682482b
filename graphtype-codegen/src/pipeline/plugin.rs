//! Pipeline plugin trait for extensibility.

use eyre::Result;

use super::CompilationContext;

/// Observer of pipeline progress.
///
/// Hooks run around every phase, built-in ones included, in registration
/// order. A plugin sees the context exactly as the phase left it, so it can
/// dump the symbol table after `resolve` or add diagnostics of its own.
pub trait Plugin: Send + Sync {
    fn name(&self) -> &'static str;

    /// Called before a phase runs. Return an error to abort the pipeline.
    #[allow(unused_variables)]
    fn on_before_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        Ok(())
    }

    /// Called after a phase completes. Return an error to abort the pipeline.
    #[allow(unused_variables)]
    fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        Ok(())
    }
}
