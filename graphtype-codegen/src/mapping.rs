//! Schema field types to language-agnostic type expressions.

use graphtype_schema::{Result, TypeRef as SchemaTypeRef};
use indexmap::IndexMap;

use crate::{
    builder::{PrimitiveType, TypeRef},
    resolve::SymbolTable,
};

/// Target types for scalars.
///
/// Built-in scalars have a fixed table. Custom scalars are referenced by
/// name and declared once as an alias; the alias expands to the
/// configured expression, or to an unknown value when none is configured.
#[derive(Debug, Clone, Default)]
pub struct ScalarMap {
    custom: IndexMap<String, String>,
}

impl ScalarMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map a custom scalar to a target-language expression.
    pub fn with(mut self, scalar: impl Into<String>, expr: impl Into<String>) -> Self {
        self.custom.insert(scalar.into(), expr.into());
        self
    }

    /// Primitive for a built-in scalar.
    pub fn builtin(name: &str) -> Option<PrimitiveType> {
        match name {
            "ID" | "String" => Some(PrimitiveType::String),
            "Boolean" => Some(PrimitiveType::Bool),
            "Int" => Some(PrimitiveType::Int),
            "Float" => Some(PrimitiveType::Float),
            _ => None,
        }
    }

    /// What the alias for scalar `name` expands to.
    pub fn target(&self, name: &str) -> TypeRef {
        if let Some(primitive) = Self::builtin(name) {
            return TypeRef::Primitive(primitive);
        }
        match self.custom.get(name) {
            Some(expr) => TypeRef::raw(expr.clone()),
            None => TypeRef::Primitive(PrimitiveType::Unknown),
        }
    }

    /// Configured scalars that the schema never declares.
    pub fn unused<'a>(&'a self, symbols: &'a SymbolTable) -> impl Iterator<Item = &'a str> {
        self.custom
            .keys()
            .map(String::as_str)
            .filter(|name| symbols.model().get(name).is_none())
    }
}

impl From<IndexMap<String, String>> for ScalarMap {
    fn from(custom: IndexMap<String, String>) -> Self {
        Self { custom }
    }
}

/// Maps a schema field type to a [`TypeRef`].
///
/// Composition runs innermost to outermost: the named leaf is mapped first,
/// each list level wraps in `Array`, and each nullable level wraps in
/// `Optional`. Every level keeps its own nullability bit, so `[Episode]!`
/// and `[Episode!]` map to different expressions.
#[derive(Debug, Clone, Copy)]
pub struct FieldTypeMapper<'t> {
    symbols: &'t SymbolTable,
}

impl<'t> FieldTypeMapper<'t> {
    pub fn new(symbols: &'t SymbolTable) -> Self {
        Self { symbols }
    }

    /// Map a field, argument or input field type.
    pub fn map(&self, ty: &SchemaTypeRef) -> Result<TypeRef> {
        match ty {
            SchemaTypeRef::NonNull(inner) => self.map_required(inner),
            other => Ok(TypeRef::optional(self.map_required(other)?)),
        }
    }

    /// Map a level that is known to be present.
    fn map_required(&self, ty: &SchemaTypeRef) -> Result<TypeRef> {
        match ty {
            SchemaTypeRef::Named(name) => self.map_leaf(name),
            SchemaTypeRef::List(item) => Ok(TypeRef::array(self.map(item)?)),
            SchemaTypeRef::NonNull(inner) => self.map_required(inner),
        }
    }

    fn map_leaf(&self, name: &str) -> Result<TypeRef> {
        if let Some(primitive) = ScalarMap::builtin(name) {
            return Ok(TypeRef::Primitive(primitive));
        }
        let handle = self.symbols.resolve(name)?;
        Ok(TypeRef::named(handle.name()))
    }
}
