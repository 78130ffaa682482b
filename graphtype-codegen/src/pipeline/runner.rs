//! Pipeline orchestrator.

use eyre::Result;
use graphtype_schema::SchemaModel;

use super::{
    CompilationContext, Phase, Plugin,
    phases::{LintInfo, ResolvePhase, SynthesizePhase, ValidatePhase},
};

/// The compilation pipeline orchestrator.
///
/// Runs the built-in phases (validate, resolve, synthesize) followed by any
/// user phases, calling plugin hooks before and after each phase.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new()
///     .plugin(MyPlugin::new())
///     .phase(MyCustomPhase);
///
/// let ctx = pipeline.run(model)?;
/// ```
pub struct Pipeline {
    validate: ValidatePhase,
    phases: Vec<Box<dyn Phase>>,
    plugins: Vec<Box<dyn Plugin>>,
}

impl Pipeline {
    /// Create a new pipeline with default built-in phases.
    pub fn new() -> Self {
        Self {
            validate: ValidatePhase::new(),
            phases: Vec::new(),
            plugins: Vec::new(),
        }
    }

    /// Replace the built-in validate phase (e.g. to change its lints).
    pub fn with_validate(mut self, validate: ValidatePhase) -> Self {
        self.validate = validate;
        self
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Add a plugin to receive phase lifecycle hooks.
    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Lints the validate phase will run.
    pub fn lint_info(&self) -> Vec<LintInfo> {
        self.validate.lint_info()
    }

    /// Run the pipeline on a validated model.
    ///
    /// Executes all phases in order:
    /// 1. ValidatePhase - lints the model, collects diagnostics
    /// 2. ResolvePhase - builds the symbol table over the whole model
    /// 3. SynthesizePhase - creates argument containers
    /// 4. User phases (if any)
    ///
    /// # Errors
    ///
    /// Returns an error if any phase fails fatally.
    pub fn run(&self, model: SchemaModel) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(model);

        let builtin: [&dyn Phase; 3] = [&self.validate, &ResolvePhase, &SynthesizePhase];
        let user = self.phases.iter().map(|p| p.as_ref());

        for phase in builtin.into_iter().chain(user) {
            self.run_phase(phase, &mut ctx)?;
        }

        Ok(ctx)
    }

    /// Run a single phase with plugin hooks.
    fn run_phase(&self, phase: &dyn Phase, ctx: &mut CompilationContext) -> Result<()> {
        let phase_name = phase.name();
        let _span = tracing::debug_span!("phase", name = phase_name).entered();

        for plugin in &self.plugins {
            tracing::trace!(plugin = plugin.name(), "before phase");
            plugin.on_before_phase(phase_name, ctx)?;
        }

        let before = ctx.diagnostics.len();
        phase.run(ctx)?;
        tracing::debug!(
            description = phase.description(),
            diagnostics = ctx.diagnostics.len() - before,
            "phase complete"
        );

        for plugin in &self.plugins {
            tracing::trace!(plugin = plugin.name(), "after phase");
            plugin.on_after_phase(phase_name, ctx)?;
        }

        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    };

    use super::*;

    struct CountingPlugin {
        before_count: Arc<AtomicUsize>,
        after_count: Arc<AtomicUsize>,
    }

    impl CountingPlugin {
        fn new() -> (Self, Arc<AtomicUsize>, Arc<AtomicUsize>) {
            let before = Arc::new(AtomicUsize::new(0));
            let after = Arc::new(AtomicUsize::new(0));
            (
                Self {
                    before_count: before.clone(),
                    after_count: after.clone(),
                },
                before,
                after,
            )
        }
    }

    impl Plugin for CountingPlugin {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn on_before_phase(&self, _phase: &str, _ctx: &mut CompilationContext) -> Result<()> {
            self.before_count.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn on_after_phase(&self, _phase: &str, _ctx: &mut CompilationContext) -> Result<()> {
            self.after_count.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct OrderPlugin(Arc<Mutex<Vec<String>>>);

    impl Plugin for OrderPlugin {
        fn name(&self) -> &'static str {
            "order"
        }

        fn on_before_phase(&self, phase: &str, _ctx: &mut CompilationContext) -> Result<()> {
            if let Ok(mut seen) = self.0.lock() {
                seen.push(phase.to_string());
            }
            Ok(())
        }
    }

    fn make_test_model() -> SchemaModel {
        r#"
        type Query { search(text: String): [String] }
        "#
        .parse()
        .unwrap()
    }

    #[test]
    fn test_pipeline_runs_phases() {
        let ctx = Pipeline::new()
            .run(make_test_model())
            .expect("pipeline should succeed");

        assert!(ctx.symbols.is_some());
        assert_eq!(ctx.arguments().unwrap().len(), 1);
    }

    #[test]
    fn test_pipeline_plugin_hooks() {
        let (plugin, before_count, after_count) = CountingPlugin::new();

        let pipeline = Pipeline::new().plugin(plugin);
        let _ = pipeline.run(make_test_model()).expect("pipeline should succeed");

        // 3 built-in phases = 3 before + 3 after hooks
        assert_eq!(before_count.load(Ordering::SeqCst), 3);
        assert_eq!(after_count.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_phase_order() {
        struct Noop;
        impl Phase for Noop {
            fn name(&self) -> &'static str {
                "noop"
            }
            fn description(&self) -> &'static str {
                "Does nothing"
            }
            fn run(&self, _ctx: &mut CompilationContext) -> Result<()> {
                Ok(())
            }
        }

        let seen = Arc::new(Mutex::new(Vec::new()));
        Pipeline::new()
            .plugin(OrderPlugin(seen.clone()))
            .phase(Noop)
            .run(make_test_model())
            .unwrap();

        assert_eq!(
            *seen.lock().unwrap(),
            ["validate", "resolve", "synthesize", "noop"]
        );
    }

    #[test]
    fn test_replaced_validate_phase() {
        let model: SchemaModel = "type Query { hero: String @deprecated }".parse().unwrap();

        let pipeline = Pipeline::new().with_validate(ValidatePhase::without_lints());
        assert!(pipeline.lint_info().is_empty());

        let ctx = pipeline.run(model).unwrap();
        assert!(ctx.diagnostics.is_empty());
    }

    #[test]
    fn test_synthesis_collision_aborts() {
        let model: SchemaModel = r#"
            input QuerySearchArgs { text: String }
            type Query { search(text: String): String }
        "#
        .parse()
        .unwrap();

        let err = Pipeline::new().run(model).unwrap_err();
        let schema_err = err
            .downcast_ref::<Box<graphtype_schema::SchemaError>>()
            .expect("schema error");
        assert_eq!(schema_err.kind(), "duplicate-type-name");
    }
}
