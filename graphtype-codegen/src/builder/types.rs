//! Mapped type expressions, independent of the target language.
//!
//! A [`TypeRef`] is a schema field type after mapping: nullability is an
//! explicit `Optional` wrapper and every list level is an `Array`. A
//! [`TypeMapper`] spells it in one target language.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    Primitive(PrimitiveType),
    /// May be absent.
    Optional(Box<TypeRef>),
    Array(Box<TypeRef>),
    /// A declared schema type, by its schema name.
    Named(String),
    /// Emitted verbatim.
    Raw(String),
}

impl TypeRef {
    pub fn optional(inner: TypeRef) -> Self {
        Self::Optional(Box::new(inner))
    }

    pub fn array(inner: TypeRef) -> Self {
        Self::Array(Box::new(inner))
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    pub fn raw(expr: impl Into<String>) -> Self {
        Self::Raw(expr.into())
    }

    pub fn string() -> Self {
        Self::Primitive(PrimitiveType::String)
    }

    pub fn int() -> Self {
        Self::Primitive(PrimitiveType::Int)
    }

    pub fn float() -> Self {
        Self::Primitive(PrimitiveType::Float)
    }

    pub fn bool() -> Self {
        Self::Primitive(PrimitiveType::Bool)
    }

    /// Whether the outermost level may be absent.
    pub fn is_optional(&self) -> bool {
        matches!(self, Self::Optional(_))
    }
}

/// Leaf types every target can spell without a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    String,
    Int,
    Float,
    Bool,
    /// A custom scalar with no configured target.
    Unknown,
}

impl PrimitiveType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Int => "int",
            Self::Float => "float",
            Self::Bool => "bool",
            Self::Unknown => "unknown",
        }
    }
}

/// Spells a [`TypeRef`] in one target language.
pub trait TypeMapper {
    fn map_primitive(&self, ty: PrimitiveType) -> String;

    fn map_optional(&self, inner: &str) -> String;

    fn map_array(&self, inner: &str) -> String;

    fn map_named(&self, name: &str) -> String {
        name.to_string()
    }

    /// Spell `ty`, wrapping from the leaf outwards.
    fn render_type(&self, ty: &TypeRef) -> String {
        match ty {
            TypeRef::Primitive(p) => self.map_primitive(*p),
            TypeRef::Optional(inner) => self.map_optional(&self.render_type(inner)),
            TypeRef::Array(inner) => self.map_array(&self.render_type(inner)),
            TypeRef::Named(name) => self.map_named(name),
            TypeRef::Raw(expr) => expr.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Spells types back in SDL-like notation.
    struct Sdl;

    impl TypeMapper for Sdl {
        fn map_primitive(&self, ty: PrimitiveType) -> String {
            ty.as_str().to_string()
        }

        fn map_optional(&self, inner: &str) -> String {
            format!("{inner}?")
        }

        fn map_array(&self, inner: &str) -> String {
            format!("[{inner}]")
        }
    }

    #[test]
    fn test_optional_is_outermost_only() {
        let list_of_optional = TypeRef::array(TypeRef::optional(TypeRef::string()));
        assert!(!list_of_optional.is_optional());
        assert!(TypeRef::optional(list_of_optional).is_optional());
    }

    #[test]
    fn test_render_nested() {
        let ty = TypeRef::optional(TypeRef::array(TypeRef::optional(TypeRef::named(
            "Character",
        ))));
        assert_eq!(Sdl.render_type(&ty), "[Character?]?");
        assert_eq!(Sdl.render_type(&TypeRef::raw("Date")), "Date");
        assert_eq!(
            Sdl.render_type(&TypeRef::Primitive(PrimitiveType::Unknown)),
            "unknown"
        );
    }
}
