//! State threaded through the pipeline.

use std::sync::Arc;

use eyre::{Result, eyre};
use graphtype_schema::SchemaModel;

use super::diagnostic::{Diagnostic, Severity};
use crate::{arguments::SyntheticArgs, resolve::SymbolTable};

/// What the phases have produced so far for one schema.
#[derive(Debug)]
pub struct CompilationContext {
    pub model: Arc<SchemaModel>,
    /// Filled in by the resolve phase.
    pub symbols: Option<SymbolTable>,
    /// Filled in by the synthesize phase.
    pub arguments: Option<Vec<SyntheticArgs>>,
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    pub fn new(model: SchemaModel) -> Self {
        Self {
            model: Arc::new(model),
            symbols: None,
            arguments: None,
            diagnostics: Vec::new(),
        }
    }

    fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    pub fn has_warnings(&self) -> bool {
        self.count(Severity::Warning) > 0
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    /// Warning diagnostics in the order they were reported.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
    }

    pub fn symbols(&self) -> Result<&SymbolTable> {
        self.symbols
            .as_ref()
            .ok_or_else(|| eyre!("symbol table requested before the resolve phase ran"))
    }

    pub fn arguments(&self) -> Result<&[SyntheticArgs]> {
        self.arguments
            .as_deref()
            .ok_or_else(|| eyre!("argument containers requested before the synthesize phase ran"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_model() -> SchemaModel {
        "type Query { hero: String }".parse().unwrap()
    }

    #[test]
    fn test_fresh_context_has_no_products() {
        let ctx = CompilationContext::new(make_test_model());

        assert!(ctx.diagnostics.is_empty());
        assert!(ctx.symbols().is_err());
        assert!(ctx.arguments().is_err());
    }

    #[test]
    fn test_diagnostic_counts() {
        let mut ctx = CompilationContext::new(make_test_model());
        ctx.diagnostics.push(Diagnostic::error("test", "broken"));
        ctx.diagnostics.push(Diagnostic::warning("test", "odd"));
        ctx.diagnostics.push(Diagnostic::info("test", "fyi"));

        assert!(ctx.has_errors());
        assert!(ctx.has_warnings());
        assert_eq!(ctx.error_count(), 1);
        assert_eq!(ctx.warnings().map(|d| d.message.as_str()).collect::<Vec<_>>(), ["odd"]);
    }
}
