//! `export interface` declarations.

use graphtype_codegen::{CodeFragment, Renderable};

use super::{Field, ObjectType, types::render};

/// An object shape spelled `export interface X { ... }`.
///
/// Members render exactly as in [`ObjectType`].
#[derive(Debug, Clone)]
pub struct Interface(ObjectType);

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self(ObjectType::new(name))
    }

    pub fn doc(self, doc: Option<String>) -> Self {
        Self(self.0.doc(doc))
    }

    pub fn field(self, field: Field) -> Self {
        Self(self.0.field(field))
    }

    pub fn fields(self, fields: impl IntoIterator<Item = Field>) -> Self {
        Self(self.0.fields(fields))
    }

    pub fn build(&self) -> String {
        render(self)
    }
}

impl Renderable for Interface {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.0.declaration("interface", "", "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_interface() {
        assert_eq!(Interface::new("Empty").build(), "export interface Empty {}\n");
    }

    #[test]
    fn test_interface_matches_object_members() {
        let fields = [
            Field::new("id", "string").readonly(),
            Field::new("name", "Maybe<string>").optional(),
        ];
        let interface = Interface::new("Character")
            .doc(Some("A character".to_string()))
            .fields(fields.clone())
            .build();
        let object = ObjectType::new("Character").fields(fields).build();

        assert_eq!(
            interface,
            "/** A character */\nexport interface Character {\n  readonly id: string;\n  name?: Maybe<string>;\n}\n"
        );
        assert_eq!(
            object,
            "export type Character = {\n  readonly id: string;\n  name?: Maybe<string>;\n};\n"
        );
    }
}
