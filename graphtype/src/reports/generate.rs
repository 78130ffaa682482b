//! Generate command report data structures.

use std::path::PathBuf;

use graphtype_codegen::language::PreviewFile;

use super::output::{Output, Report};

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Warning messages from the pipeline.
    pub warnings: Vec<String>,
    /// Number of declared schema types.
    pub type_count: usize,
    /// Number of synthesized argument containers.
    pub args_count: usize,
    /// Generation result (file written or preview).
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// The file was written to disk (or already up to date).
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

#[derive(Debug)]
pub struct WrittenResult {
    pub path: PathBuf,
    /// False when the file already had the generated content.
    pub changed: bool,
}

#[derive(Debug)]
pub struct PreviewResult {
    pub files: Vec<PreviewFile>,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.diagnostic(&format!("warning: {}", warning));
        }

        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        let key = if written.changed {
            "Generated"
        } else {
            "Unchanged"
        };
        out.key_value(key, &written.path.display().to_string());
        out.preformatted(&format!(
            "  {} types, {} argument types",
            self.type_count, self.args_count
        ));
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!(
            "{} file would be generated ({} types, {} argument types)",
            preview.files.len(),
            self.type_count,
            self.args_count
        ));
    }
}
