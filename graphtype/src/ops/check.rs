//! Check operation - schema validation.

use std::path::Path;

use eyre::{Context, Result};
use graphtype_codegen::pipeline::Pipeline;
use graphtype_schema::{OperationType, SchemaModel, TypeKind};

use crate::reports::{CheckReport, KindCount, RootInfo};

const KINDS: [TypeKind; 6] = [
    TypeKind::Object,
    TypeKind::Interface,
    TypeKind::Union,
    TypeKind::Enum,
    TypeKind::InputObject,
    TypeKind::Scalar,
];

/// Execute the check operation.
///
/// Runs the pipeline to validate the schema and returns diagnostics.
pub fn check(model: SchemaModel, schema_path: &Path) -> Result<CheckReport> {
    let pipeline = Pipeline::new();
    let lints = pipeline.lint_info();
    let ctx = pipeline.run(model).wrap_err("Validation failed")?;

    let types = KINDS
        .into_iter()
        .map(|kind| KindCount {
            kind,
            count: ctx.model.declared_types().filter(|t| t.kind() == kind).count(),
        })
        .filter(|k| k.count > 0)
        .collect();

    let roots = OperationType::ALL
        .into_iter()
        .filter_map(|op| {
            ctx.model.roots().get(op).map(|name| RootInfo {
                operation: op.as_str(),
                type_name: name.to_string(),
            })
        })
        .collect();

    let arguments = ctx
        .arguments()?
        .iter()
        .map(|args| args.name.clone())
        .collect();

    Ok(CheckReport {
        schema_path: schema_path.to_path_buf(),
        types,
        roots,
        arguments,
        lints,
        diagnostics: ctx.diagnostics,
    })
}
