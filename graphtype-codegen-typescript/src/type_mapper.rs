//! TypeScript type mapper implementation.

use graphtype_codegen::{PrimitiveType, TypeMapper, placeholder};
use graphtype_schema::ReferenceStyle;

use crate::naming::TS_NAMING;

/// Where a type expression appears.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// Object and interface fields.
    Output,
    /// Arguments and input object fields.
    Input,
}

/// TypeScript type mapper implementation.
#[derive(Debug, Clone, Copy)]
pub struct TypeScriptTypeMapper {
    position: Position,
    immutable: bool,
    references: ReferenceStyle,
}

impl TypeScriptTypeMapper {
    pub fn new(position: Position) -> Self {
        Self {
            position,
            immutable: false,
            references: ReferenceStyle::default(),
        }
    }

    /// Render lists as `ReadonlyArray`.
    pub fn immutable(mut self, immutable: bool) -> Self {
        self.immutable = immutable;
        self
    }

    pub fn references(mut self, references: ReferenceStyle) -> Self {
        self.references = references;
        self
    }

    /// The same mapper for another position.
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }
}

impl TypeMapper for TypeScriptTypeMapper {
    fn map_primitive(&self, ty: PrimitiveType) -> String {
        match ty {
            PrimitiveType::String => "string",
            PrimitiveType::Int | PrimitiveType::Float => "number",
            PrimitiveType::Bool => "boolean",
            PrimitiveType::Unknown => "unknown",
        }
        .to_string()
    }

    fn map_optional(&self, inner: &str) -> String {
        match self.position {
            Position::Output => format!("Maybe<{}>", inner),
            Position::Input => format!("InputMaybe<{}>", inner),
        }
    }

    fn map_array(&self, inner: &str) -> String {
        if self.immutable {
            format!("ReadonlyArray<{}>", inner)
        } else {
            format!("Array<{}>", inner)
        }
    }

    fn map_named(&self, name: &str) -> String {
        match self.references {
            ReferenceStyle::Placeholder => placeholder(name),
            ReferenceStyle::Direct => TS_NAMING.type_name(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use graphtype_codegen::TypeRef;

    use super::*;

    fn nullable_list_of_nullable(name: &str) -> TypeRef {
        TypeRef::optional(TypeRef::array(TypeRef::optional(TypeRef::named(name))))
    }

    #[test]
    fn test_typescript_primitives() {
        let mapper = TypeScriptTypeMapper::new(Position::Output);

        assert_eq!(mapper.render_type(&TypeRef::string()), "string");
        assert_eq!(mapper.render_type(&TypeRef::int()), "number");
        assert_eq!(mapper.render_type(&TypeRef::float()), "number");
        assert_eq!(mapper.render_type(&TypeRef::bool()), "boolean");
        assert_eq!(
            mapper.render_type(&TypeRef::Primitive(PrimitiveType::Unknown)),
            "unknown"
        );
    }

    #[test]
    fn test_output_position() {
        let mapper = TypeScriptTypeMapper::new(Position::Output);
        assert_eq!(
            mapper.render_type(&nullable_list_of_nullable("Character")),
            "Maybe<Array<Maybe<$Types['Character']>>>"
        );
    }

    #[test]
    fn test_input_position() {
        let mapper = TypeScriptTypeMapper::new(Position::Input);
        assert_eq!(
            mapper.render_type(&nullable_list_of_nullable("Episode")),
            "InputMaybe<Array<InputMaybe<$Types['Episode']>>>"
        );
    }

    #[test]
    fn test_immutable_direct() {
        let mapper = TypeScriptTypeMapper::new(Position::Output)
            .immutable(true)
            .references(ReferenceStyle::Direct);
        assert_eq!(
            mapper.render_type(&TypeRef::array(TypeRef::named("string"))),
            "ReadonlyArray<_string>"
        );
    }
}
