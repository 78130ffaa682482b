//! A declaration file as an ordered list of top-level items.

use graphtype_codegen::{CodeBuilder, CodeFragment, Renderable};

/// Top-level items of one `.ts` file, separated by a blank line when
/// rendered. Items that render to nothing take no space.
///
/// ```ignore
/// let text = CodeFile::new()
///     .add(TypeAlias::new("Maybe<T>", "T | null"))
///     .add(ObjectType::new("Droid").field(Field::new("id", "string")))
///     .render();
/// ```
#[derive(Debug, Default)]
pub struct CodeFile {
    items: Vec<Vec<CodeFragment>>,
}

impl CodeFile {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(clippy::should_implement_trait)]
    pub fn add(mut self, item: impl Renderable) -> Self {
        self.items.push(item.to_fragments());
        self
    }

    pub fn add_all<R: Renderable>(mut self, items: impl IntoIterator<Item = R>) -> Self {
        self.items
            .extend(items.into_iter().map(|item| item.to_fragments()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.items.iter().all(Vec::is_empty)
    }

    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        let mut items = self.items.iter().filter(|item| !item.is_empty());

        if let Some(first) = items.next() {
            first.iter().cloned().for_each(|f| builder.apply_fragment(f));
        }
        for item in items {
            builder.push_blank();
            item.iter().cloned().for_each(|f| builder.apply_fragment(f));
        }

        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Field, ObjectType, TypeAlias};

    #[test]
    fn test_empty_file() {
        let file = CodeFile::new();
        assert!(file.is_empty());
        assert_eq!(file.render(), "");
    }

    #[test]
    fn test_blank_lines_between_body() {
        let file = CodeFile::new()
            .add(TypeAlias::new("ID", "string"))
            .add(ObjectType::new("Droid").field(Field::new("id", "ID")));

        assert_eq!(
            file.render(),
            "export type ID = string;\n\nexport type Droid = {\n  id: ID;\n};\n"
        );
    }

    #[test]
    fn test_empty_elements_are_skipped() {
        let file = CodeFile::new()
            .add(TypeAlias::new("A", "1"))
            .add(Vec::<CodeFragment>::new())
            .add(TypeAlias::new("B", "2"));

        assert_eq!(file.render(), "export type A = 1;\n\nexport type B = 2;\n");
    }
}
