//! Generate operation - TypeScript declarations from a schema.

use std::path::Path;

use eyre::{Context, Result};
use graphtype_codegen::{language::LanguageCodegen, pipeline::Pipeline};
use graphtype_codegen_typescript::Generator;
use graphtype_schema::{Config, SchemaModel};

use crate::reports::{GenerateReport, GenerationResult, PreviewResult, WrittenResult};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Output file for the declarations.
    pub output: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// Runs the pipeline on the model and renders one declaration file.
pub fn generate(
    model: SchemaModel,
    config: &Config,
    opts: GenerateOptions,
) -> Result<GenerateReport> {
    let ctx = Pipeline::new().run(model).wrap_err("Pipeline failed")?;

    let warnings: Vec<String> = ctx
        .warnings()
        .map(|d| match &d.location {
            Some(loc) => format!("{} (at {})", d.message, loc),
            None => d.message.clone(),
        })
        .collect();
    let type_count = ctx.model.declared_types().count();
    let args_count = ctx.arguments()?.len();

    let generator = Generator::from_config(ctx, config)?.with_output(opts.output);
    let result = if opts.dry_run {
        GenerationResult::Preview(PreviewResult {
            files: generator.preview()?,
        })
    } else {
        let written = generator
            .generate(opts.output)
            .wrap_err("Failed to generate code")?;
        tracing::info!(
            written = written.written.len(),
            unchanged = written.unchanged.len(),
            "generation complete"
        );
        GenerationResult::Written(WrittenResult {
            path: opts.output.to_path_buf(),
            changed: !written.written.is_empty(),
        })
    };

    Ok(GenerateReport {
        warnings,
        type_count,
        args_count,
        result,
    })
}
