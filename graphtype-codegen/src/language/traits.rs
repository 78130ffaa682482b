//! Language-agnostic code generation traits.

use std::path::{Path, PathBuf};

use eyre::Result;

/// Trait for language-specific declaration generators.
///
/// Implement this trait to add support for emitting schema declarations
/// in a new language.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "typescript")
    fn language(&self) -> &'static str;

    /// File extension for generated source files (e.g., "ts")
    fn file_extension(&self) -> &'static str;

    /// Render every output file without writing to disk.
    fn preview(&self) -> Result<Vec<PreviewFile>>;

    /// Render and write every output file.
    ///
    /// `output` is the target file path for single-file generators.
    fn generate(&self, output: &Path) -> Result<GenerateResult>;
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files whose content changed on disk
    pub written: Vec<PathBuf>,
    /// Files that already had the generated content
    pub unchanged: Vec<PathBuf>,
}

/// A generated file for preview
#[derive(Debug, Clone)]
pub struct PreviewFile {
    /// Output path
    pub path: String,
    /// File content
    pub content: String,
}
