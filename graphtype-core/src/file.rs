use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create '{}'", parent.display()))?;
    }
    std::fs::write(path, content).wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File already had the exact content, nothing was touched
    Unchanged,
}

/// A generated output file
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: String,
    header: Option<&'static str>,
}

impl File {
    /// Create a new file with the given path and content
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            header: None,
        }
    }

    /// Text placed above the content, followed by a blank line.
    pub fn with_header(mut self, header: &'static str) -> Self {
        self.header = Some(header);
        self
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content without the header
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Full text written to disk: the header (if any) followed by the content.
    pub fn render(&self) -> String {
        match self.header {
            Some(header) => format!("{}\n{}", header, self.content),
            None => self.content.clone(),
        }
    }

    /// Write the file unless it already holds the rendered text.
    pub fn write(&self) -> Result<WriteResult> {
        let rendered = self.render();
        if let Ok(existing) = std::fs::read_to_string(&self.path)
            && existing == rendered
        {
            tracing::debug!(path = %self.path.display(), "file unchanged");
            return Ok(WriteResult::Unchanged);
        }

        write_file(&self.path, &rendered)?;
        tracing::info!(path = %self.path.display(), bytes = rendered.len(), "wrote file");
        Ok(WriteResult::Written)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("src").join("generated").join("types.ts");

        write_file(&path, "export {};").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "export {};");
    }

    #[test]
    fn test_file_write_always_overwrites() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("types.ts");
        fs::write(&path, "stale").unwrap();

        let result = File::new(&path, "fresh").write().unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "fresh");
    }

    #[test]
    fn test_file_write_unchanged() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("types.ts");
        let file = File::new(&path, "export type A = string;\n");

        assert_eq!(file.write().unwrap(), WriteResult::Written);
        assert_eq!(file.write().unwrap(), WriteResult::Unchanged);
    }

    #[test]
    fn test_header_is_prepended() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("types.ts");

        let file =
            File::new(&path, "export type A = string;\n").with_header("/* eslint-disable */");
        file.write().unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "/* eslint-disable */\nexport type A = string;\n"
        );
        assert_eq!(file.content(), "export type A = string;\n");
    }
}
