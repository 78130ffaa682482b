//! JSDoc comment text.

/// Builder for the text of a JSDoc comment.
///
/// Lines are joined with newlines; [`CodeBuilder`](graphtype_codegen::CodeBuilder)
/// decides between the one-line and block forms.
#[derive(Debug, Clone, Default)]
pub struct JsDoc {
    lines: Vec<String>,
}

impl JsDoc {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add free text, one doc line per text line.
    pub fn text(mut self, text: Option<&str>) -> Self {
        if let Some(text) = text.map(str::trim).filter(|t| !t.is_empty()) {
            self.lines.extend(text.lines().map(|l| l.trim_end().to_string()));
        }
        self
    }

    /// Add a block tag such as `@deprecated` with an optional value.
    pub fn tag(mut self, name: &str, value: Option<&str>) -> Self {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            Some(value) => self.lines.push(format!("@{} {}", name, value)),
            None => self.lines.push(format!("@{}", name)),
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The comment text, or `None` when there is nothing to say.
    pub fn build(self) -> Option<String> {
        if self.lines.is_empty() {
            return None;
        }
        // `*/` inside the text would close the comment early
        Some(self.lines.join("\n").replace("*/", "*\\/"))
    }
}
