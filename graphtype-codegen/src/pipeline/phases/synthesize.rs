//! Synthesize phase - creates argument containers.

use eyre::Result;

use crate::{
    arguments::synthesize,
    pipeline::{CompilationContext, Phase},
};

/// Phase that synthesizes one container type per field with arguments.
pub struct SynthesizePhase;

impl Phase for SynthesizePhase {
    fn name(&self) -> &'static str {
        "synthesize"
    }

    fn description(&self) -> &'static str {
        "Create argument container types for fields with arguments"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let arguments = synthesize(&ctx.model)?;
        tracing::debug!(containers = arguments.len(), "arguments synthesized");
        ctx.arguments = Some(arguments);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthesize_populates_arguments() {
        let model = "type Query { search(text: String): String }".parse().unwrap();
        let mut ctx = CompilationContext::new(model);

        SynthesizePhase.run(&mut ctx).unwrap();

        let names: Vec<_> = ctx.arguments().unwrap().iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["QuerySearchArgs"]);
    }
}
