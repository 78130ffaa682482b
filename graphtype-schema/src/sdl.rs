//! Lowering from the `graphql-parser` AST into the raw schema model.
//!
//! The raw model has the same shape as the validated one but makes no
//! promises: names may clash, references may dangle and extensions are
//! not merged yet.

use graphql_parser::{
    Pos,
    schema::{
        self as ast, Definition, Directive, SchemaDefinition, Type, TypeDefinition, TypeExtension,
        Value, parse_schema,
    },
};
use miette::SourceSpan;

use crate::{
    Result,
    error::SourceContext,
    model::{
        Deprecation, EnumVariant, Field, InputValue, ObjectBody, OperationRoots, OperationType,
        SchemaType, TypeBody, TypeRef,
    },
};

/// A parsed but unvalidated schema document.
#[derive(Debug, Clone)]
pub struct RawSchema {
    /// Type definitions in document order.
    pub types: Vec<SchemaType>,
    /// `extend ...` definitions in document order.
    pub extensions: Vec<SchemaType>,
    /// Roots named by an explicit `schema { ... }` definition.
    pub schema_definition: Option<RawSchemaDefinition>,
    pub(crate) source: SourceContext,
}

/// The explicit `schema { query: ..., ... }` block.
#[derive(Debug, Clone)]
pub struct RawSchemaDefinition {
    pub roots: OperationRoots,
    pub span: Option<SourceSpan>,
}

impl RawSchema {
    /// Build a raw schema in memory.
    pub fn new(types: Vec<SchemaType>) -> Self {
        Self {
            types,
            extensions: Vec::new(),
            schema_definition: None,
            source: SourceContext::detached(),
        }
    }

    /// Name root operation types explicitly.
    pub fn with_roots(mut self, roots: OperationRoots) -> Self {
        self.schema_definition = Some(RawSchemaDefinition { roots, span: None });
        self
    }

    /// Add an `extend` definition.
    pub fn extension(mut self, extension: SchemaType) -> Self {
        self.extensions.push(extension);
        self
    }

    pub fn source(&self) -> &SourceContext {
        &self.source
    }
}

/// Parse SDL text into a [`RawSchema`].
pub fn parse_sdl(src: &str, filename: &str) -> Result<RawSchema> {
    let source = SourceContext::new(src, filename);
    let document =
        parse_schema::<String>(src).map_err(|err| source.parse_error(err.to_string()))?;

    let lower = Lowering { source: &source };
    let mut types = Vec::new();
    let mut extensions = Vec::new();
    let mut schema_definition = None;

    for definition in &document.definitions {
        match definition {
            Definition::SchemaDefinition(def) => {
                schema_definition = Some(lower.schema_definition(def));
            }
            Definition::TypeDefinition(def) => types.push(lower.type_definition(def)),
            Definition::TypeExtension(ext) => extensions.push(lower.type_extension(ext)),
            Definition::DirectiveDefinition(def) => {
                tracing::trace!(directive = %def.name, "ignoring directive definition");
            }
        }
    }

    tracing::debug!(
        types = types.len(),
        extensions = extensions.len(),
        "parsed schema document"
    );

    Ok(RawSchema {
        types,
        extensions,
        schema_definition,
        source,
    })
}

struct Lowering<'s> {
    source: &'s SourceContext,
}

impl Lowering<'_> {
    fn span(&self, pos: Pos, name: &str) -> Option<SourceSpan> {
        self.source.span_at(pos.line, pos.column, name)
    }

    fn schema_definition(&self, def: &SchemaDefinition<'_, String>) -> RawSchemaDefinition {
        let mut roots = OperationRoots::default();
        let named = [
            (OperationType::Query, &def.query),
            (OperationType::Mutation, &def.mutation),
            (OperationType::Subscription, &def.subscription),
        ];
        for (op, name) in named {
            if let Some(name) = name {
                roots.set(op, name.clone());
            }
        }
        RawSchemaDefinition {
            roots,
            span: self.span(def.position, "schema"),
        }
    }

    fn type_definition(&self, def: &TypeDefinition<'_, String>) -> SchemaType {
        match def {
            TypeDefinition::Scalar(t) => {
                let mut ty = SchemaType::scalar(t.name.clone());
                ty.description = t.description.clone();
                ty.span = self.span(t.position, &t.name);
                ty
            }
            TypeDefinition::Object(t) => self.declaration(
                &t.name,
                t.position,
                &t.description,
                TypeBody::Object(ObjectBody {
                    fields: self.fields(&t.fields),
                    implements: t.implements_interfaces.clone(),
                }),
            ),
            TypeDefinition::Interface(t) => self.declaration(
                &t.name,
                t.position,
                &t.description,
                TypeBody::Interface(ObjectBody {
                    fields: self.fields(&t.fields),
                    implements: t.implements_interfaces.clone(),
                }),
            ),
            TypeDefinition::Union(t) => self.declaration(
                &t.name,
                t.position,
                &t.description,
                TypeBody::Union(t.types.clone()),
            ),
            TypeDefinition::Enum(t) => self.declaration(
                &t.name,
                t.position,
                &t.description,
                TypeBody::Enum(self.enum_values(&t.values)),
            ),
            TypeDefinition::InputObject(t) => self.declaration(
                &t.name,
                t.position,
                &t.description,
                TypeBody::InputObject(self.input_values(&t.fields)),
            ),
        }
    }

    fn type_extension(&self, ext: &TypeExtension<'_, String>) -> SchemaType {
        let none = None;
        match ext {
            TypeExtension::Scalar(t) => {
                self.declaration(&t.name, t.position, &none, TypeBody::Scalar { builtin: false })
            }
            TypeExtension::Object(t) => self.declaration(
                &t.name,
                t.position,
                &none,
                TypeBody::Object(ObjectBody {
                    fields: self.fields(&t.fields),
                    implements: t.implements_interfaces.clone(),
                }),
            ),
            TypeExtension::Interface(t) => self.declaration(
                &t.name,
                t.position,
                &none,
                TypeBody::Interface(ObjectBody {
                    fields: self.fields(&t.fields),
                    implements: t.implements_interfaces.clone(),
                }),
            ),
            TypeExtension::Union(t) => {
                self.declaration(&t.name, t.position, &none, TypeBody::Union(t.types.clone()))
            }
            TypeExtension::Enum(t) => self.declaration(
                &t.name,
                t.position,
                &none,
                TypeBody::Enum(self.enum_values(&t.values)),
            ),
            TypeExtension::InputObject(t) => self.declaration(
                &t.name,
                t.position,
                &none,
                TypeBody::InputObject(self.input_values(&t.fields)),
            ),
        }
    }

    fn declaration(
        &self,
        name: &str,
        position: Pos,
        description: &Option<String>,
        body: TypeBody,
    ) -> SchemaType {
        SchemaType {
            name: name.to_string(),
            description: description.clone(),
            body,
            span: self.span(position, name),
        }
    }

    fn fields(&self, fields: &[ast::Field<'_, String>]) -> Vec<Field> {
        fields
            .iter()
            .map(|f| Field {
                name: f.name.clone(),
                description: f.description.clone(),
                ty: lower_type(&f.field_type),
                arguments: self.input_values(&f.arguments),
                deprecation: deprecation(&f.directives),
                span: self.span(f.position, &f.name),
            })
            .collect()
    }

    fn input_values(&self, values: &[ast::InputValue<'_, String>]) -> Vec<InputValue> {
        values
            .iter()
            .map(|v| InputValue {
                name: v.name.clone(),
                description: v.description.clone(),
                ty: lower_type(&v.value_type),
                default_value: v.default_value.as_ref().map(|d| d.to_string()),
                deprecation: deprecation(&v.directives),
                span: self.span(v.position, &v.name),
            })
            .collect()
    }

    fn enum_values(&self, values: &[ast::EnumValue<'_, String>]) -> Vec<EnumVariant> {
        values
            .iter()
            .map(|v| EnumVariant {
                name: v.name.clone(),
                description: v.description.clone(),
                deprecation: deprecation(&v.directives),
                span: self.span(v.position, &v.name),
            })
            .collect()
    }
}

fn lower_type(ty: &Type<'_, String>) -> TypeRef {
    match ty {
        Type::NamedType(name) => TypeRef::named(name.clone()),
        Type::ListType(inner) => TypeRef::list(lower_type(inner)),
        Type::NonNullType(inner) => TypeRef::non_null(lower_type(inner)),
    }
}

/// Read `@deprecated(reason: "...")`, the only directive the model keeps.
fn deprecation(directives: &[Directive<'_, String>]) -> Option<Deprecation> {
    let directive = directives.iter().find(|d| d.name == "deprecated")?;
    let reason = directive
        .arguments
        .iter()
        .find(|(name, _)| name == "reason")
        .and_then(|(_, value)| match value {
            Value::String(reason) => Some(reason.clone()),
            _ => None,
        });
    Some(Deprecation { reason })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TypeKind;

    const STAR_WARS: &str = r#"
        schema { query: Root }

        "A character from the Star Wars universe"
        interface Character {
          id: ID!
          name: String!
          friends: [Character]
        }

        type Droid implements Character {
          id: ID!
          name: String!
          friends: [Character]
          primaryFunction: String @deprecated(reason: "Use role")
        }

        type Root {
          search(text: String, limit: Int = 10): [SearchResult]
        }

        union SearchResult = Droid

        enum Episode { NEWHOPE EMPIRE JEDI }

        extend type Root { droid(id: ID!): Droid }
    "#;

    #[test]
    fn test_lowers_definitions_in_order() {
        let raw = parse_sdl(STAR_WARS, "schema.graphql").unwrap();
        let names: Vec<_> = raw.types.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(
            names,
            ["Character", "Droid", "Root", "SearchResult", "Episode"]
        );
        assert_eq!(raw.types[0].kind(), TypeKind::Interface);
        assert_eq!(
            raw.types[0].description.as_deref(),
            Some("A character from the Star Wars universe")
        );
    }

    #[test]
    fn test_lowers_type_wrappers() {
        let raw = parse_sdl(STAR_WARS, "schema.graphql").unwrap();
        let droid = &raw.types[1];
        assert_eq!(droid.interfaces(), ["Character".to_string()]);
        assert_eq!(droid.fields()[0].ty.to_string(), "ID!");
        assert_eq!(droid.fields()[2].ty.to_string(), "[Character]");
    }

    #[test]
    fn test_lowers_arguments_defaults_and_deprecation() {
        let raw = parse_sdl(STAR_WARS, "schema.graphql").unwrap();
        let search = &raw.types[2].fields()[0];
        assert_eq!(search.arguments.len(), 2);
        assert!(!search.arguments[0].has_default());
        assert_eq!(search.arguments[1].default_value.as_deref(), Some("10"));

        let primary = &raw.types[1].fields()[3];
        assert_eq!(
            primary.deprecation,
            Some(Deprecation {
                reason: Some("Use role".into())
            })
        );
    }

    #[test]
    fn test_lowers_schema_definition_and_extensions() {
        let raw = parse_sdl(STAR_WARS, "schema.graphql").unwrap();
        let def = raw.schema_definition.as_ref().unwrap();
        assert_eq!(def.roots.query.as_deref(), Some("Root"));
        assert_eq!(raw.extensions.len(), 1);
        assert_eq!(raw.extensions[0].fields()[0].name, "droid");
    }

    #[test]
    fn test_spans_point_at_names() {
        let raw = parse_sdl(STAR_WARS, "schema.graphql").unwrap();
        let span = raw.types[1].span.unwrap();
        assert_eq!(
            &STAR_WARS[span.offset()..span.offset() + span.len()],
            "Droid"
        );
    }

    #[test]
    fn test_lowers_interface_implements() {
        let raw = parse_sdl(
            "interface Node { id: ID! } interface Entity implements Node { id: ID! }
             extend interface Entity implements Named { name: String }
             interface Named { name: String }",
            "schema.graphql",
        )
        .unwrap();
        assert_eq!(raw.types[1].interfaces(), ["Node".to_string()]);
        assert_eq!(raw.extensions[0].interfaces(), ["Named".to_string()]);
    }

    #[test]
    fn test_parse_error_is_reported() {
        let err = parse_sdl("type Query {", "broken.graphql").unwrap_err();
        assert_eq!(err.kind(), "parse");
    }
}
