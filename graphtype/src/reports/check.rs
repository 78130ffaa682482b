//! Check command report data structures.

use std::path::PathBuf;

use graphtype_codegen::pipeline::{Diagnostic, Severity, phases::LintInfo};
use graphtype_schema::TypeKind;
use serde::Serialize;

use super::output::{Output, Report};

/// Report data from schema validation.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    /// Path to the schema file.
    pub schema_path: PathBuf,
    /// Declared types per kind, zero counts omitted.
    pub types: Vec<KindCount>,
    /// Operation roots the schema defines.
    pub roots: Vec<RootInfo>,
    /// Names of the synthesized argument containers.
    pub arguments: Vec<String>,
    /// Lints that ran.
    pub lints: Vec<LintInfo>,
    /// Diagnostics from the pipeline.
    pub diagnostics: Vec<Diagnostic>,
}

#[derive(Debug, Serialize)]
pub struct KindCount {
    pub kind: TypeKind,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct RootInfo {
    pub operation: &'static str,
    pub type_name: String,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        !self.diagnostics.iter().any(|d| d.severity.is_error())
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for diag in &self.diagnostics {
            let line = format!("{}: {}", diag.severity, diag.message);
            let line = match &diag.location {
                Some(loc) => format!("{}\n  --> {}", line, loc),
                None => line,
            };
            match diag.severity {
                Severity::Error | Severity::Warning => out.diagnostic(&line),
                Severity::Info => out.preformatted(&line),
            }
        }

        if !self.diagnostics.is_empty() {
            out.newline();
        }

        if !self.is_valid() {
            return;
        }

        out.preformatted(&format!("✓ {} is valid", self.schema_path.display()));
        out.newline();

        out.section("Types");
        for k in &self.types {
            out.list_item(&format!("{} {}", k.count, k.kind));
        }

        if !self.roots.is_empty() {
            out.newline();
            out.section("Operations");
            for root in &self.roots {
                out.list_item(&format!("{} -> {}", root.operation, root.type_name));
            }
        }

        if !self.arguments.is_empty() {
            out.newline();
            out.section(&format!("Argument types ({})", self.arguments.len()));
            for name in &self.arguments {
                out.list_item(name);
            }
        }

        if !self.lints.is_empty() {
            out.newline();
            out.section(&format!("Lints ({})", self.lints.len()));
            for lint in &self.lints {
                out.list_item(&format!("{}: {}", lint.name, lint.description));
            }
        }
    }
}
