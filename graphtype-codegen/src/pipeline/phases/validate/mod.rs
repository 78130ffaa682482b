//! Lint pass over the validated model.

mod lint;
pub mod lints;

use eyre::{Result, bail};
pub use lint::{Lint, LintInfo};
pub use lints::{EmptyTypeLint, MissingDeprecationReasonLint, TypeNamingLint};

use crate::pipeline::{CompilationContext, Phase};

/// Runs its lints in order and fails only if one of them reported an error.
pub struct ValidatePhase {
    lints: Vec<Box<dyn Lint>>,
}

impl ValidatePhase {
    /// The built-in lint set.
    pub fn new() -> Self {
        Self::without_lints()
            .lint(EmptyTypeLint)
            .lint(MissingDeprecationReasonLint)
            .lint(TypeNamingLint)
    }

    pub fn without_lints() -> Self {
        Self { lints: Vec::new() }
    }

    pub fn lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    pub fn lint_info(&self) -> Vec<LintInfo> {
        self.lints.iter().map(|l| l.info()).collect()
    }
}

impl Default for ValidatePhase {
    fn default() -> Self {
        Self::new()
    }
}

impl Phase for ValidatePhase {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn description(&self) -> &'static str {
        "Lint the schema model and collect diagnostics"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        for lint in &self.lints {
            let first_new = ctx.diagnostics.len();
            lint.check(&ctx.model, &mut ctx.diagnostics);
            for diagnostic in &mut ctx.diagnostics[first_new..] {
                diagnostic.lint.get_or_insert(lint.name());
            }
        }

        if ctx.has_errors() {
            bail!("schema lints reported {} error(s)", ctx.error_count());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use graphtype_schema::SchemaModel;

    use super::*;
    use crate::pipeline::Diagnostic;

    struct AlwaysErrorLint;

    impl Lint for AlwaysErrorLint {
        fn name(&self) -> &'static str {
            "always-error"
        }

        fn description(&self) -> &'static str {
            "Always produces an error"
        }

        fn check(&self, _model: &SchemaModel, diagnostics: &mut Vec<Diagnostic>) {
            diagnostics.push(Diagnostic::error("validate", "forced error"));
        }
    }

    fn context(src: &str) -> CompilationContext {
        CompilationContext::new(src.parse().expect("valid schema"))
    }

    #[test]
    fn test_builtin_lints() {
        let names: Vec<_> = ValidatePhase::new()
            .lint_info()
            .into_iter()
            .map(|info| info.name)
            .collect();
        assert_eq!(
            names,
            ["empty-type", "missing-deprecation-reason", "type-naming"]
        );
        assert!(ValidatePhase::without_lints().lint_info().is_empty());
    }

    #[test]
    fn test_error_fails_phase_and_is_tagged() {
        let mut ctx = context("type Query { hero: String }");

        let result = ValidatePhase::without_lints()
            .lint(AlwaysErrorLint)
            .run(&mut ctx);

        assert!(result.is_err());
        assert_eq!(ctx.diagnostics[0].lint, Some("always-error"));
    }

    #[test]
    fn test_warnings_do_not_fail_phase() {
        let mut ctx = context("type Query { hero: String @deprecated }");

        ValidatePhase::without_lints()
            .lint(MissingDeprecationReasonLint)
            .run(&mut ctx)
            .unwrap();

        assert!(ctx.has_warnings());
        assert!(!ctx.has_errors());
        assert_eq!(ctx.diagnostics[0].lint, Some("missing-deprecation-reason"));
    }
}
