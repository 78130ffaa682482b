//! Schema validation: turns a [`RawSchema`] into a [`SchemaModel`].
//!
//! Checks run in a fixed order and the first failure aborts:
//!
//! 1. type names are unique and not reserved, extensions are merged
//! 2. field, argument and enum value names are unique within their owner
//! 3. every referenced type exists and sits in a legal input/output position
//! 4. unions list only object types
//! 5. every `implements` edge is satisfied field by field
//! 6. root operation types exist and are objects

use std::{collections::HashSet, sync::Arc};

use indexmap::IndexMap;
use miette::SourceSpan;

use crate::{
    Result,
    error::SourceContext,
    model::{
        BUILTIN_SCALARS, Field, InputValue, OperationRoots, OperationType, SchemaModel, SchemaType,
        TypeBody, TypeKind,
    },
    sdl::RawSchema,
};

/// Validation context that carries the source and the current path.
///
/// The path is used to build locations such as `field 'Droid.friends'` or
/// `argument 'Query.search(text)'` for error messages.
#[derive(Debug, Clone)]
pub struct ValidateContext<'a> {
    source: &'a SourceContext,
    path: Vec<&'a str>,
}

impl<'a> ValidateContext<'a> {
    pub fn new(source: &'a SourceContext) -> Self {
        Self {
            source,
            path: Vec::new(),
        }
    }

    pub fn source(&self) -> &SourceContext {
        self.source
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut path = self.path.clone();
        path.push(segment);
        Self {
            source: self.source,
            path,
        }
    }

    /// Dot-joined path, e.g. `Query.search`.
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Describe the current location, e.g. "field 'Query.search'".
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} '{}'", kind, self.path_string())
        }
    }

    /// Reject names starting with `__`.
    pub fn check_reserved(&self, name: &str, kind: &str, span: Option<SourceSpan>) -> Result<()> {
        if name.starts_with("__") {
            return Err(self
                .source
                .reserved_name(name, self.push(name).context_for(kind), span));
        }
        Ok(())
    }
}

/// Validate a raw schema and build the immutable model.
pub fn validate(raw: RawSchema) -> Result<SchemaModel> {
    let RawSchema {
        types,
        extensions,
        schema_definition,
        source,
    } = raw;
    let ctx = ValidateContext::new(&source);

    let mut table = collect_types(&ctx, types)?;
    merge_extensions(&ctx, &mut table, extensions)?;

    for ty in table.values() {
        check_member_names(&ctx.push(&ty.name), ty)?;
    }
    for ty in table.values() {
        check_references(&ctx.push(&ty.name), &table, ty)?;
    }
    for ty in table.values() {
        if let TypeBody::Union(members) = &ty.body {
            check_union(&ctx, &table, ty, members)?;
        }
    }
    for ty in table.values() {
        check_implements(&ctx, &table, ty)?;
    }

    let (roots, roots_span) = match schema_definition {
        Some(def) => (def.roots, def.span),
        None => (default_roots(&table), None),
    };
    check_roots(&ctx, &table, &roots, roots_span)?;

    tracing::debug!(
        types = table.len() - BUILTIN_SCALARS.len(),
        file = source.filename(),
        "schema validated"
    );

    Ok(SchemaModel {
        types: table,
        roots,
        source: Arc::new(source),
    })
}

fn collect_types(
    ctx: &ValidateContext<'_>,
    types: Vec<SchemaType>,
) -> Result<IndexMap<String, SchemaType>> {
    let mut table: IndexMap<String, SchemaType> = BUILTIN_SCALARS
        .iter()
        .map(|name| (name.to_string(), SchemaType::scalar(*name)))
        .collect();

    for ty in types {
        ctx.check_reserved(&ty.name, "type", ty.span)?;

        match table.get_mut(&ty.name) {
            // Redeclaring a built-in scalar is harmless; keep its description.
            Some(existing) if existing.is_builtin() && ty.kind() == TypeKind::Scalar => {
                if ty.description.is_some() {
                    existing.description = ty.description;
                }
                existing.span = ty.span.or(existing.span);
            }
            Some(existing) => {
                return Err(ctx.source().duplicate_type(&ty.name, existing.span, ty.span));
            }
            None => {
                table.insert(ty.name.clone(), ty);
            }
        }
    }

    Ok(table)
}

fn merge_extensions(
    ctx: &ValidateContext<'_>,
    table: &mut IndexMap<String, SchemaType>,
    extensions: Vec<SchemaType>,
) -> Result<()> {
    for ext in extensions {
        let Some(target) = table.get_mut(&ext.name) else {
            return Err(ctx
                .source()
                .unknown_type(&ext.name, "a type extension", ext.span));
        };
        if target.kind() != ext.kind() {
            return Err(ctx.source().invalid_extension(
                &ext.name,
                format!(
                    "'{}' is {}, not {}",
                    ext.name,
                    target.kind().describe(),
                    ext.kind().describe()
                ),
                ext.span,
            ));
        }

        match (&mut target.body, ext.body) {
            (TypeBody::Object(body), TypeBody::Object(more))
            | (TypeBody::Interface(body), TypeBody::Interface(more)) => {
                body.fields.extend(more.fields);
                body.implements.extend(more.implements);
            }
            (TypeBody::Union(members), TypeBody::Union(more)) => members.extend(more),
            (TypeBody::Enum(variants), TypeBody::Enum(more)) => variants.extend(more),
            (TypeBody::InputObject(fields), TypeBody::InputObject(more)) => fields.extend(more),
            _ => {}
        }
    }
    Ok(())
}

fn check_member_names(ctx: &ValidateContext<'_>, ty: &SchemaType) -> Result<()> {
    match &ty.body {
        TypeBody::Object(_) | TypeBody::Interface(_) => {
            let mut seen = HashSet::new();
            for field in ty.fields() {
                ctx.check_reserved(&field.name, "field", field.span)?;
                if !seen.insert(field.name.as_str()) {
                    return Err(ctx
                        .source()
                        .duplicate_field(&ty.name, &field.name, field.span));
                }
                check_argument_names(ctx, ty, field)?;
            }
        }
        TypeBody::InputObject(fields) => {
            let mut seen = HashSet::new();
            for field in fields {
                ctx.check_reserved(&field.name, "input field", field.span)?;
                if !seen.insert(field.name.as_str()) {
                    return Err(ctx
                        .source()
                        .duplicate_field(&ty.name, &field.name, field.span));
                }
            }
        }
        TypeBody::Enum(variants) => {
            if variants.is_empty() {
                return Err(ctx.source().empty_enum(&ty.name, ty.span));
            }
            let mut seen = HashSet::new();
            for variant in variants {
                ctx.check_reserved(&variant.name, "enum value", variant.span)?;
                if matches!(variant.name.as_str(), "true" | "false" | "null") {
                    return Err(ctx.source().reserved_name(
                        &variant.name,
                        ctx.push(&variant.name).context_for("enum value"),
                        variant.span,
                    ));
                }
                if !seen.insert(variant.name.as_str()) {
                    return Err(ctx.source().duplicate_enum_value(
                        &ty.name,
                        &variant.name,
                        variant.span,
                    ));
                }
            }
        }
        TypeBody::Union(members) => {
            if members.is_empty() {
                return Err(ctx.source().empty_union(&ty.name, ty.span));
            }
        }
        TypeBody::Scalar { .. } => {}
    }
    Ok(())
}

fn check_argument_names(ctx: &ValidateContext<'_>, ty: &SchemaType, field: &Field) -> Result<()> {
    let ctx = ctx.push(&field.name);
    let mut seen = HashSet::new();
    for arg in &field.arguments {
        ctx.check_reserved(&arg.name, "argument", arg.span)?;
        if !seen.insert(arg.name.as_str()) {
            return Err(ctx
                .source()
                .argument_collision(&ty.name, &field.name, &arg.name, arg.span));
        }
    }
    Ok(())
}

fn check_references(
    ctx: &ValidateContext<'_>,
    table: &IndexMap<String, SchemaType>,
    ty: &SchemaType,
) -> Result<()> {
    for field in ty.fields() {
        let field_ctx = ctx.push(&field.name);
        let location = field_ctx.context_for("field");
        let target = lookup(ctx, table, field.ty.named_type(), &location, field.span)?;
        if !target.kind().is_output() {
            return Err(ctx
                .source()
                .input_as_output(location, &target.name, field.span));
        }
        for arg in &field.arguments {
            check_input_reference(&field_ctx, table, arg, "argument")?;
        }
    }

    if let TypeBody::InputObject(fields) = &ty.body {
        for field in fields {
            check_input_reference(ctx, table, field, "input field")?;
        }
    }
    Ok(())
}

fn check_input_reference(
    ctx: &ValidateContext<'_>,
    table: &IndexMap<String, SchemaType>,
    value: &InputValue,
    kind: &str,
) -> Result<()> {
    let location = ctx.push(&value.name).context_for(kind);
    let target = lookup(ctx, table, value.ty.named_type(), &location, value.span)?;
    if !target.kind().is_input() {
        return Err(ctx.source().invalid_input_type(
            location,
            &target.name,
            target.kind().describe(),
            value.span,
        ));
    }
    Ok(())
}

fn lookup<'t>(
    ctx: &ValidateContext<'_>,
    table: &'t IndexMap<String, SchemaType>,
    name: &str,
    location: &str,
    span: Option<SourceSpan>,
) -> Result<&'t SchemaType> {
    table
        .get(name)
        .ok_or_else(|| ctx.source().unknown_type(name, location, span))
}

fn check_union(
    ctx: &ValidateContext<'_>,
    table: &IndexMap<String, SchemaType>,
    ty: &SchemaType,
    members: &[String],
) -> Result<()> {
    let location = format!("union '{}'", ty.name);
    let mut seen = HashSet::new();
    for member in members {
        let target = lookup(ctx, table, member, &location, ty.span)?;
        if target.kind() != TypeKind::Object {
            return Err(ctx.source().invalid_union_member(
                &ty.name,
                member,
                target.kind().describe(),
                ty.span,
            ));
        }
        if !seen.insert(member.as_str()) {
            return Err(ctx.source().invalid_union_member(
                &ty.name,
                member,
                "already a member",
                ty.span,
            ));
        }
    }
    Ok(())
}

fn check_implements(
    ctx: &ValidateContext<'_>,
    table: &IndexMap<String, SchemaType>,
    ty: &SchemaType,
) -> Result<()> {
    let location = format!("'{}' implements", ty.name);
    for interface_name in ty.interfaces() {
        let interface = lookup(ctx, table, interface_name, &location, ty.span)?;
        if interface.kind() != TypeKind::Interface {
            return Err(ctx.source().not_an_interface(
                &ty.name,
                interface_name,
                interface.kind().describe(),
                ty.span,
            ));
        }

        for expected in interface.fields() {
            let violation = |reason: String, span: Option<SourceSpan>| {
                ctx.source()
                    .interface_contract(&ty.name, interface_name, &expected.name, reason, span)
            };

            let Some(actual) = ty.field(&expected.name) else {
                return Err(violation("is missing".to_string(), ty.span));
            };
            // Strict equality: no covariant narrowing of nullability or member types.
            if actual.ty != expected.ty {
                return Err(violation(
                    format!("has type '{}', expected '{}'", actual.ty, expected.ty),
                    actual.span,
                ));
            }
            for arg in &expected.arguments {
                match actual.arguments.iter().find(|a| a.name == arg.name) {
                    None => {
                        return Err(violation(
                            format!("is missing argument '{}'", arg.name),
                            actual.span,
                        ));
                    }
                    Some(found) if found.ty != arg.ty => {
                        return Err(violation(
                            format!(
                                "has argument '{}' of type '{}', expected '{}'",
                                arg.name, found.ty, arg.ty
                            ),
                            found.span,
                        ));
                    }
                    Some(_) => {}
                }
            }
        }
    }
    Ok(())
}

fn default_roots(table: &IndexMap<String, SchemaType>) -> OperationRoots {
    let mut roots = OperationRoots::default();
    for op in OperationType::ALL {
        let name = op.default_type_name();
        if table.contains_key(name) {
            roots.set(op, name);
        }
    }
    roots
}

fn check_roots(
    ctx: &ValidateContext<'_>,
    table: &IndexMap<String, SchemaType>,
    roots: &OperationRoots,
    span: Option<SourceSpan>,
) -> Result<()> {
    for op in OperationType::ALL {
        let Some(name) = roots.get(op) else {
            continue;
        };
        let location = format!("the {} root", op.as_str());
        let target = lookup(ctx, table, name, &location, span)?;
        if target.kind() != TypeKind::Object {
            return Err(ctx.source().invalid_root(
                op.as_str(),
                name,
                target.kind().describe(),
                target.span.or(span),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::SchemaError,
        model::{Field, TypeRef},
    };

    fn id() -> TypeRef {
        TypeRef::non_null(TypeRef::named("ID"))
    }

    fn character() -> SchemaType {
        SchemaType::interface(
            "Character",
            vec![
                Field::new("id", id()),
                Field::new("name", TypeRef::non_null(TypeRef::named("String"))),
            ],
        )
    }

    fn droid(fields: Vec<Field>) -> SchemaType {
        SchemaType::object("Droid", fields).implements(&["Character"])
    }

    fn expect_err(raw: RawSchema) -> Box<SchemaError> {
        validate(raw).expect_err("schema should be rejected")
    }

    #[test]
    fn test_valid_schema_keeps_declaration_order() {
        let model = validate(RawSchema::new(vec![
            character(),
            droid(vec![
                Field::new("id", id()),
                Field::new("name", TypeRef::non_null(TypeRef::named("String"))),
            ]),
        ]))
        .unwrap();

        let declared: Vec<_> = model.declared_types().map(|t| t.name.as_str()).collect();
        assert_eq!(declared, ["Character", "Droid"]);
        assert!(model.contains("String"));
    }

    #[test]
    fn test_duplicate_type_name() {
        let err = expect_err(RawSchema::new(vec![
            SchemaType::scalar("Date"),
            SchemaType::enumeration("Date", &["A"]),
        ]));
        assert_eq!(err.kind(), "duplicate-type-name");
    }

    #[test]
    fn test_builtin_scalar_redeclaration_is_allowed() {
        let model = validate(RawSchema::new(vec![SchemaType::scalar("String")])).unwrap();
        assert_eq!(model.declared_types().count(), 0);
    }

    #[test]
    fn test_unknown_type_reference_names_location() {
        let err = expect_err(RawSchema::new(vec![SchemaType::object(
            "Human",
            vec![Field::new("homePlanet", TypeRef::named("Planet"))],
        )]));
        assert_eq!(err.kind(), "unknown-type-reference");
        assert!(err.to_string().contains("Planet"));
        assert!(err.to_string().contains("Human.homePlanet"));
    }

    #[test]
    fn test_unknown_argument_type() {
        let err = expect_err(RawSchema::new(vec![SchemaType::object(
            "Query",
            vec![
                Field::new("search", TypeRef::named("String"))
                    .argument(InputValue::new("filter", TypeRef::named("Filter"))),
            ],
        )]));
        assert!(err.to_string().contains("Query.search.filter"));
    }

    #[test]
    fn test_union_member_must_be_object() {
        let err = expect_err(RawSchema::new(vec![
            character(),
            SchemaType::union("SearchResult", &["Character"]),
        ]));
        assert_eq!(err.kind(), "invalid-union-member");
        assert!(err.to_string().contains("an interface"));
    }

    #[test]
    fn test_interface_missing_field() {
        let err = expect_err(RawSchema::new(vec![
            character(),
            droid(vec![Field::new("id", id())]),
        ]));
        assert_eq!(err.kind(), "interface-contract-violation");
        assert!(err.to_string().contains("'name' is missing"));
    }

    #[test]
    fn test_interface_requires_strictly_equal_types() {
        // `name: String` would be a legal covariant narrowing elsewhere, but not here.
        let err = expect_err(RawSchema::new(vec![
            character(),
            droid(vec![
                Field::new("id", id()),
                Field::new("name", TypeRef::named("String")),
            ]),
        ]));
        assert_eq!(err.kind(), "interface-contract-violation");
        assert!(err.to_string().contains("expected 'String!'"));
    }

    #[test]
    fn test_interface_implementing_interface_keeps_contract() {
        let node = SchemaType::interface("Node", vec![Field::new("id", id())]);
        let entity = SchemaType::interface(
            "Entity",
            vec![Field::new("name", TypeRef::named("String"))],
        )
        .implements(&["Node"]);

        let err = expect_err(RawSchema::new(vec![node, entity]));
        assert_eq!(err.kind(), "interface-contract-violation");
        assert!(err.to_string().contains("'Entity'"));
        assert!(err.to_string().contains("'id' is missing"));
    }

    #[test]
    fn test_implements_non_interface() {
        let err = expect_err(RawSchema::new(vec![
            SchemaType::object("Node", vec![Field::new("id", id())]),
            SchemaType::object("User", vec![Field::new("id", id())]).implements(&["Node"]),
        ]));
        assert_eq!(err.kind(), "not-an-interface");
    }

    #[test]
    fn test_argument_name_collision() {
        let err = expect_err(RawSchema::new(vec![SchemaType::object(
            "Query",
            vec![
                Field::new("hero", TypeRef::named("String"))
                    .argument(InputValue::new("id", id()))
                    .argument(InputValue::new("id", TypeRef::named("Int"))),
            ],
        )]));
        assert_eq!(err.kind(), "argument-name-collision");
        assert!(err.to_string().contains("Query.hero"));
    }

    #[test]
    fn test_duplicate_field_and_enum_value() {
        let err = expect_err(RawSchema::new(vec![SchemaType::object(
            "Query",
            vec![Field::new("a", id()), Field::new("a", id())],
        )]));
        assert_eq!(err.kind(), "duplicate-field-name");

        let err = expect_err(RawSchema::new(vec![SchemaType::enumeration(
            "Episode",
            &["JEDI", "JEDI"],
        )]));
        assert_eq!(err.kind(), "duplicate-enum-value");
    }

    #[test]
    fn test_reserved_names() {
        let err = expect_err(RawSchema::new(vec![SchemaType::object(
            "__Secret",
            vec![Field::new("a", id())],
        )]));
        assert_eq!(err.kind(), "reserved-name");

        let err = expect_err(RawSchema::new(vec![SchemaType::enumeration(
            "Flag",
            &["true"],
        )]));
        assert_eq!(err.kind(), "reserved-name");
    }

    #[test]
    fn test_input_output_positions() {
        let review_input = SchemaType::input(
            "ReviewInput",
            vec![InputValue::new("stars", TypeRef::named("Int"))],
        );

        let err = expect_err(RawSchema::new(vec![
            review_input.clone(),
            SchemaType::object("Query", vec![Field::new("review", TypeRef::named("ReviewInput"))]),
        ]));
        assert_eq!(err.kind(), "input-object-as-output");

        let err = expect_err(RawSchema::new(vec![
            character(),
            SchemaType::input(
                "Filter",
                vec![InputValue::new("who", TypeRef::named("Character"))],
            ),
        ]));
        assert_eq!(err.kind(), "invalid-input-type");
    }

    #[test]
    fn test_empty_union_and_enum() {
        let err = expect_err(RawSchema::new(vec![SchemaType::union("Nothing", &[])]));
        assert_eq!(err.kind(), "empty-union");

        let err = expect_err(RawSchema::new(vec![SchemaType::enumeration("Never", &[])]));
        assert_eq!(err.kind(), "empty-enum");
    }

    #[test]
    fn test_default_and_explicit_roots() {
        let query = SchemaType::object("Query", vec![Field::new("a", id())]);
        let model = validate(RawSchema::new(vec![query])).unwrap();
        assert_eq!(model.roots().query.as_deref(), Some("Query"));
        assert_eq!(model.roots().mutation, None);

        let mut roots = OperationRoots::default();
        roots.set(OperationType::Query, "Root");
        let root = SchemaType::object("Root", vec![Field::new("a", id())]);
        let model = validate(RawSchema::new(vec![root]).with_roots(roots)).unwrap();
        assert_eq!(
            model.root(OperationType::Query).map(|t| t.name.as_str()),
            Some("Root")
        );
    }

    #[test]
    fn test_root_must_be_object() {
        let mut roots = OperationRoots::default();
        roots.set(OperationType::Query, "Episode");
        let err = expect_err(
            RawSchema::new(vec![SchemaType::enumeration("Episode", &["JEDI"])]).with_roots(roots),
        );
        assert_eq!(err.kind(), "invalid-root-type");
    }

    #[test]
    fn test_extensions_merge_fields() {
        let raw = RawSchema::new(vec![SchemaType::object("Query", vec![Field::new("a", id())])])
            .extension(SchemaType::object("Query", vec![Field::new("b", id())]));
        let model = validate(raw).unwrap();
        let names: Vec<_> = model
            .get("Query")
            .unwrap()
            .fields()
            .iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(names, ["a", "b"]);
    }

    #[test]
    fn test_extension_kind_mismatch() {
        let raw = RawSchema::new(vec![SchemaType::enumeration("Episode", &["JEDI"])])
            .extension(SchemaType::object("Episode", vec![Field::new("b", id())]));
        assert_eq!(expect_err(raw).kind(), "invalid-extension");

        let raw = RawSchema::new(vec![])
            .extension(SchemaType::object("Missing", vec![Field::new("b", id())]));
        assert_eq!(expect_err(raw).kind(), "unknown-type-reference");
    }
}
