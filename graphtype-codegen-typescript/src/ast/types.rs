//! TypeScript type alias and union builders.

use graphtype_codegen::{CodeBuilder, CodeFragment, Renderable};

pub(crate) fn render(node: &impl Renderable) -> String {
    let mut builder = CodeBuilder::typescript();
    builder.emit(node);
    builder.build()
}

/// A property of a TypeScript object type or interface.
#[derive(Debug, Clone)]
pub struct Field {
    pub name: String,
    pub ty: String,
    pub doc: Option<String>,
    pub optional: bool,
    pub readonly: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            doc: None,
            optional: false,
            readonly: false,
        }
    }

    pub fn doc(mut self, doc: Option<String>) -> Self {
        self.doc = doc;
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Mark optional when `optional` is set.
    pub fn optional_if(self, optional: bool) -> Self {
        if optional { self.optional() } else { self }
    }

    pub fn readonly(mut self) -> Self {
        self.readonly = true;
        self
    }

    /// Mark readonly when `readonly` is set.
    pub fn readonly_if(self, readonly: bool) -> Self {
        if readonly { self.readonly() } else { self }
    }
}

impl Renderable for Field {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::JsDoc(doc.clone()));
        }
        let readonly = if self.readonly { "readonly " } else { "" };
        let optional = if self.optional { "?" } else { "" };
        fragments.push(CodeFragment::Line(format!(
            "{}{}{}: {};",
            readonly, self.name, optional, self.ty
        )));
        fragments
    }
}

/// Builder for TypeScript object types (`type Foo = { ... }`).
#[derive(Debug, Clone)]
pub struct ObjectType {
    name: String,
    doc: Option<String>,
    fields: Vec<Field>,
}

impl ObjectType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            fields: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: Option<String>) -> Self {
        self.doc = doc;
        self
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn fields(mut self, fields: impl IntoIterator<Item = Field>) -> Self {
        self.fields.extend(fields);
        self
    }

    /// Build the object type as a string.
    pub fn build(&self) -> String {
        render(self)
    }

    /// Fragments for `{keyword} {name}{assign} { ...fields }{terminator}`.
    pub(crate) fn declaration(&self, keyword: &str, assign: &str, terminator: &str) -> Vec<CodeFragment> {
        let head = format!("export {keyword} {}{assign}", self.name);
        let mut fragments: Vec<_> = self.doc.iter().cloned().map(CodeFragment::JsDoc).collect();
        if self.fields.is_empty() {
            fragments.push(CodeFragment::Line(format!("{head} {{}}{terminator}")));
        } else {
            fragments.push(CodeFragment::Block {
                header: format!("{head} {{"),
                body: self.fields.iter().flat_map(Field::to_fragments).collect(),
                close: Some(format!("}}{terminator}")),
            });
        }
        fragments
    }
}

impl Renderable for ObjectType {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.declaration("type", " =", ";")
    }
}

/// Builder for TypeScript type aliases.
#[derive(Debug, Clone)]
pub struct TypeAlias {
    name: String,
    doc: Option<String>,
    ty: String,
}

impl TypeAlias {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            ty: ty.into(),
        }
    }

    pub fn doc(mut self, doc: Option<String>) -> Self {
        self.doc = doc;
        self
    }

    /// Build the type alias as a string.
    pub fn build(&self) -> String {
        render(self)
    }
}

impl Renderable for TypeAlias {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();

        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::JsDoc(doc.clone()));
        }

        fragments.push(CodeFragment::Line(format!(
            "export type {} = {};",
            self.name, self.ty
        )));

        fragments
    }
}

/// Builder for TypeScript union types.
#[derive(Debug, Clone)]
pub struct Union {
    name: String,
    doc: Option<String>,
    variants: Vec<String>,
}

impl Union {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            variants: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: Option<String>) -> Self {
        self.doc = doc;
        self
    }

    pub fn variant(mut self, variant: impl Into<String>) -> Self {
        self.variants.push(variant.into());
        self
    }

    pub fn variants(mut self, variants: impl IntoIterator<Item = String>) -> Self {
        self.variants.extend(variants);
        self
    }

    /// Build the union type as a string.
    pub fn build(&self) -> String {
        render(self)
    }
}

impl Renderable for Union {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();

        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::JsDoc(doc.clone()));
        }

        let variants_str = if self.variants.is_empty() {
            "never".to_string()
        } else {
            self.variants.join(" | ")
        };
        fragments.push(CodeFragment::Line(format!(
            "export type {} = {};",
            self.name, variants_str
        )));

        fragments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_type_empty() {
        let t = ObjectType::new("Empty").build();
        assert_eq!(t, "export type Empty = {};\n");
    }

    #[test]
    fn test_object_type_with_fields() {
        let t = ObjectType::new("Droid")
            .field(Field::new("id", "string"))
            .field(Field::new("name", "Maybe<string>").optional())
            .build();
        assert_eq!(
            t,
            "export type Droid = {\n  id: string;\n  name?: Maybe<string>;\n};\n"
        );
    }

    #[test]
    fn test_object_type_with_readonly_field() {
        let t = ObjectType::new("Point")
            .field(Field::new("x", "number").readonly())
            .build();
        assert!(t.contains("readonly x: number;"));
    }

    #[test]
    fn test_field_doc() {
        let t = ObjectType::new("Droid")
            .doc(Some("A mechanical character.".to_string()))
            .field(Field::new("name", "string").doc(Some("@deprecated".to_string())))
            .build();
        assert_eq!(
            t,
            "/** A mechanical character. */\nexport type Droid = {\n  /** @deprecated */\n  name: string;\n};\n"
        );
    }

    #[test]
    fn test_type_alias() {
        let t = TypeAlias::new("DateTime", "string").build();
        assert_eq!(t, "export type DateTime = string;\n");
    }

    #[test]
    fn test_union() {
        let u = Union::new("SearchResult")
            .variant("Human")
            .variant("Droid")
            .variant("Starship")
            .build();
        assert_eq!(u, "export type SearchResult = Human | Droid | Starship;\n");
    }

    #[test]
    fn test_union_with_doc() {
        let u = Union::new("Episode")
            .doc(Some("Film".to_string()))
            .variants(["'JEDI'".to_string(), "'EMPIRE'".to_string()])
            .build();
        assert!(u.contains("/** Film */"));
        assert!(u.contains("export type Episode = 'JEDI' | 'EMPIRE';"));
    }
}
