//! Lint trait for schema model checks.

use graphtype_schema::SchemaModel;
use serde::Serialize;

use crate::pipeline::Diagnostic;

/// Information about a lint.
#[derive(Debug, Clone, Serialize)]
pub struct LintInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// A lint that checks the schema model for non-fatal issues.
///
/// Structural problems are rejected while the model is built; lints only
/// see valid schemas and report style or hygiene issues.
pub trait Lint: Send + Sync {
    /// The name of this lint.
    fn name(&self) -> &'static str;

    /// A human-readable description of what this lint checks.
    fn description(&self) -> &'static str;

    /// Check the model and add any diagnostics.
    fn check(&self, model: &SchemaModel, diagnostics: &mut Vec<Diagnostic>);

    /// Get information about this lint.
    fn info(&self) -> LintInfo {
        LintInfo {
            name: self.name(),
            description: self.description(),
        }
    }
}
