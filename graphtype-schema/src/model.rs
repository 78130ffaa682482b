//! In-memory schema graph.
//!
//! Every type here is built once by lowering and validation and is never
//! mutated afterwards. Cross-type references are plain names; resolving
//! them is the job of the codegen symbol table.

use std::{fmt, sync::Arc};

use indexmap::IndexMap;
use miette::SourceSpan;
use serde::Serialize;

use crate::error::SourceContext;

/// Scalars every schema has without declaring them.
pub const BUILTIN_SCALARS: &[&str] = &["ID", "String", "Boolean", "Int", "Float"];

/// Check if a name is one of the built-in scalars.
pub fn is_builtin_scalar(name: &str) -> bool {
    BUILTIN_SCALARS.contains(&name)
}

/// A field or argument type: list and non-null wrappers around one named leaf.
///
/// The wrappers nest arbitrarily, so every list level carries its own
/// nullability bit. `[Character]` is `List(Named)`; `[Character!]!` is
/// `NonNull(List(NonNull(Named)))`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    Named(String),
    List(Box<TypeRef>),
    NonNull(Box<TypeRef>),
}

impl TypeRef {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    pub fn list(inner: TypeRef) -> Self {
        Self::List(Box::new(inner))
    }

    /// Wrap in a non-null marker. Wrapping twice is a no-op.
    pub fn non_null(inner: TypeRef) -> Self {
        match inner {
            TypeRef::NonNull(_) => inner,
            other => Self::NonNull(Box::new(other)),
        }
    }

    /// The named leaf type.
    pub fn named_type(&self) -> &str {
        match self {
            TypeRef::Named(name) => name,
            TypeRef::List(inner) | TypeRef::NonNull(inner) => inner.named_type(),
        }
    }

    /// Whether the outermost level may be absent.
    pub fn is_nullable(&self) -> bool {
        !matches!(self, TypeRef::NonNull(_))
    }

    /// The type with its outermost non-null marker removed.
    pub fn nullable(&self) -> &TypeRef {
        match self {
            TypeRef::NonNull(inner) => inner,
            other => other,
        }
    }

    /// Whether the outermost level (ignoring non-null) is a list.
    pub fn is_list(&self) -> bool {
        matches!(self.nullable(), TypeRef::List(_))
    }

    /// Number of list wrappers between the outside and the named leaf.
    pub fn list_depth(&self) -> usize {
        match self {
            TypeRef::Named(_) => 0,
            TypeRef::List(inner) => 1 + inner.list_depth(),
            TypeRef::NonNull(inner) => inner.list_depth(),
        }
    }

    /// Whether the outermost list may be absent. `false` for non-list types.
    pub fn is_list_nullable(&self) -> bool {
        self.is_list() && self.is_nullable()
    }

    /// Whether the named leaf itself may be absent.
    pub fn item_nullable(&self) -> bool {
        match self {
            TypeRef::Named(_) => true,
            TypeRef::List(inner) => inner.item_nullable(),
            TypeRef::NonNull(inner) => match inner.as_ref() {
                TypeRef::Named(_) => false,
                other => other.item_nullable(),
            },
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Named(name) => write!(f, "{}", name),
            TypeRef::List(inner) => write!(f, "[{}]", inner),
            TypeRef::NonNull(inner) => write!(f, "{}!", inner),
        }
    }
}

/// The six kinds of schema declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
    Scalar,
}

impl TypeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeKind::Object => "object",
            TypeKind::Interface => "interface",
            TypeKind::Union => "union",
            TypeKind::Enum => "enum",
            TypeKind::InputObject => "input object",
            TypeKind::Scalar => "scalar",
        }
    }

    /// Article + kind, for error messages ("an interface", "a scalar").
    pub fn describe(&self) -> String {
        match self {
            TypeKind::Interface | TypeKind::Enum | TypeKind::InputObject | TypeKind::Object => {
                format!("an {}", self.as_str())
            }
            TypeKind::Union | TypeKind::Scalar => format!("a {}", self.as_str()),
        }
    }

    /// Kinds allowed for arguments and input object fields.
    pub fn is_input(&self) -> bool {
        matches!(self, TypeKind::Scalar | TypeKind::Enum | TypeKind::InputObject)
    }

    /// Kinds allowed as field return types.
    pub fn is_output(&self) -> bool {
        !matches!(self, TypeKind::InputObject)
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `@deprecated` metadata.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Deprecation {
    pub reason: Option<String>,
}

/// An argument, or a field of an input object.
#[derive(Debug, Clone)]
pub struct InputValue {
    pub name: String,
    pub description: Option<String>,
    pub ty: TypeRef,
    /// Default value in GraphQL literal syntax.
    pub default_value: Option<String>,
    pub deprecation: Option<Deprecation>,
    pub span: Option<SourceSpan>,
}

/// Arguments and input fields share one shape.
pub type Argument = InputValue;

impl InputValue {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            description: None,
            ty,
            default_value: None,
            deprecation: None,
            span: None,
        }
    }

    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn has_default(&self) -> bool {
        self.default_value.is_some()
    }
}

/// A field on an object or interface.
#[derive(Debug, Clone)]
pub struct Field {
    pub name: String,
    pub description: Option<String>,
    pub ty: TypeRef,
    pub arguments: Vec<Argument>,
    pub deprecation: Option<Deprecation>,
    pub span: Option<SourceSpan>,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            description: None,
            ty,
            arguments: Vec::new(),
            deprecation: None,
            span: None,
        }
    }

    pub fn argument(mut self, argument: Argument) -> Self {
        self.arguments.push(argument);
        self
    }

    pub fn deprecated(mut self, reason: Option<&str>) -> Self {
        self.deprecation = Some(Deprecation {
            reason: reason.map(str::to_string),
        });
        self
    }
}

/// One label of an enum.
#[derive(Debug, Clone)]
pub struct EnumVariant {
    pub name: String,
    pub description: Option<String>,
    pub deprecation: Option<Deprecation>,
    pub span: Option<SourceSpan>,
}

impl EnumVariant {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            deprecation: None,
            span: None,
        }
    }
}

/// Fields and interface edges of an object or interface type.
#[derive(Debug, Clone, Default)]
pub struct ObjectBody {
    pub fields: Vec<Field>,
    pub implements: Vec<String>,
}

/// Kind-specific contents of a declaration.
#[derive(Debug, Clone)]
pub enum TypeBody {
    Object(ObjectBody),
    Interface(ObjectBody),
    Union(Vec<String>),
    Enum(Vec<EnumVariant>),
    InputObject(Vec<InputValue>),
    Scalar { builtin: bool },
}

/// A named declaration in the schema.
#[derive(Debug, Clone)]
pub struct SchemaType {
    pub name: String,
    pub description: Option<String>,
    pub body: TypeBody,
    pub span: Option<SourceSpan>,
}

impl SchemaType {
    pub fn new(name: impl Into<String>, body: TypeBody) -> Self {
        Self {
            name: name.into(),
            description: None,
            body,
            span: None,
        }
    }

    pub fn object(name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self::new(
            name,
            TypeBody::Object(ObjectBody {
                fields,
                implements: Vec::new(),
            }),
        )
    }

    pub fn interface(name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self::new(
            name,
            TypeBody::Interface(ObjectBody {
                fields,
                implements: Vec::new(),
            }),
        )
    }

    pub fn union(name: impl Into<String>, members: &[&str]) -> Self {
        Self::new(
            name,
            TypeBody::Union(members.iter().map(|m| m.to_string()).collect()),
        )
    }

    pub fn enumeration(name: impl Into<String>, variants: &[&str]) -> Self {
        Self::new(
            name,
            TypeBody::Enum(variants.iter().map(|v| EnumVariant::new(*v)).collect()),
        )
    }

    pub fn input(name: impl Into<String>, fields: Vec<InputValue>) -> Self {
        Self::new(name, TypeBody::InputObject(fields))
    }

    pub fn scalar(name: impl Into<String>) -> Self {
        let name = name.into();
        let builtin = is_builtin_scalar(&name);
        Self::new(name, TypeBody::Scalar { builtin })
    }

    /// Declare interfaces on an object or interface. No-op for other kinds.
    pub fn implements(mut self, interfaces: &[&str]) -> Self {
        if let TypeBody::Object(body) | TypeBody::Interface(body) = &mut self.body {
            body.implements
                .extend(interfaces.iter().map(|i| i.to_string()));
        }
        self
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn kind(&self) -> TypeKind {
        match &self.body {
            TypeBody::Object(_) => TypeKind::Object,
            TypeBody::Interface(_) => TypeKind::Interface,
            TypeBody::Union(_) => TypeKind::Union,
            TypeBody::Enum(_) => TypeKind::Enum,
            TypeBody::InputObject(_) => TypeKind::InputObject,
            TypeBody::Scalar { .. } => TypeKind::Scalar,
        }
    }

    /// Output fields of an object or interface; empty for other kinds.
    pub fn fields(&self) -> &[Field] {
        match &self.body {
            TypeBody::Object(body) | TypeBody::Interface(body) => &body.fields,
            _ => &[],
        }
    }

    /// Interfaces declared via `implements`; empty for other kinds.
    pub fn interfaces(&self) -> &[String] {
        match &self.body {
            TypeBody::Object(body) | TypeBody::Interface(body) => &body.implements,
            _ => &[],
        }
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields().iter().find(|f| f.name == name)
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self.body, TypeBody::Scalar { builtin: true })
    }
}

/// The three root operation kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationType {
    Query,
    Mutation,
    Subscription,
}

impl OperationType {
    pub const ALL: [OperationType; 3] = [
        OperationType::Query,
        OperationType::Mutation,
        OperationType::Subscription,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OperationType::Query => "query",
            OperationType::Mutation => "mutation",
            OperationType::Subscription => "subscription",
        }
    }

    /// Type name used when no `schema { ... }` definition names the root.
    pub fn default_type_name(&self) -> &'static str {
        match self {
            OperationType::Query => "Query",
            OperationType::Mutation => "Mutation",
            OperationType::Subscription => "Subscription",
        }
    }
}

/// Root operation type names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperationRoots {
    pub query: Option<String>,
    pub mutation: Option<String>,
    pub subscription: Option<String>,
}

impl OperationRoots {
    pub fn get(&self, op: OperationType) -> Option<&str> {
        match op {
            OperationType::Query => self.query.as_deref(),
            OperationType::Mutation => self.mutation.as_deref(),
            OperationType::Subscription => self.subscription.as_deref(),
        }
    }

    pub fn set(&mut self, op: OperationType, name: impl Into<String>) {
        let slot = match op {
            OperationType::Query => &mut self.query,
            OperationType::Mutation => &mut self.mutation,
            OperationType::Subscription => &mut self.subscription,
        };
        *slot = Some(name.into());
    }

    /// Which operation a type name is the root of, if any.
    pub fn operation_of(&self, type_name: &str) -> Option<OperationType> {
        OperationType::ALL
            .into_iter()
            .find(|op| self.get(*op) == Some(type_name))
    }
}

/// A validated schema graph.
///
/// Types are kept in declaration order, preceded by the built-in scalars.
/// Construct one with [`SchemaModel::from_sdl`], [`SchemaModel::from_file`]
/// or [`SchemaModel::from_raw`]; all of them validate before returning.
#[derive(Debug, Clone)]
pub struct SchemaModel {
    pub(crate) types: IndexMap<String, SchemaType>,
    pub(crate) roots: OperationRoots,
    pub(crate) source: Arc<SourceContext>,
}

impl SchemaModel {
    /// Look up a type by name (built-in scalars included).
    pub fn get(&self, name: &str) -> Option<&SchemaType> {
        self.types.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// All types in declaration order, built-in scalars first.
    pub fn types(&self) -> impl Iterator<Item = &SchemaType> {
        self.types.values()
    }

    /// Declared types only, in declaration order.
    pub fn declared_types(&self) -> impl Iterator<Item = &SchemaType> {
        self.types.values().filter(|t| !t.is_builtin())
    }

    /// Number of types, built-in scalars included.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Position of a type in declaration order.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.types.get_index_of(name)
    }

    /// Type at a position in declaration order.
    pub fn get_index(&self, index: usize) -> Option<&SchemaType> {
        self.types.get_index(index).map(|(_, ty)| ty)
    }

    pub fn roots(&self) -> &OperationRoots {
        &self.roots
    }

    /// The root type for an operation, if the schema defines one.
    pub fn root(&self, op: OperationType) -> Option<&SchemaType> {
        self.roots.get(op).and_then(|name| self.get(name))
    }

    /// Source the model was built from (empty for in-memory schemas).
    pub fn source(&self) -> &SourceContext {
        &self.source
    }

    /// Objects that declare `implements interface`.
    pub fn implementors<'a>(&'a self, interface: &'a str) -> impl Iterator<Item = &'a SchemaType> {
        self.types.values().filter(move |t| {
            t.kind() == TypeKind::Object && t.interfaces().iter().any(|i| i == interface)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn character_list() -> TypeRef {
        // [Character]
        TypeRef::list(TypeRef::named("Character"))
    }

    #[test]
    fn test_type_ref_accessors_nullable_list_of_nullable() {
        let ty = character_list();
        assert_eq!(ty.named_type(), "Character");
        assert!(ty.is_nullable());
        assert!(ty.is_list());
        assert!(ty.is_list_nullable());
        assert!(ty.item_nullable());
        assert_eq!(ty.list_depth(), 1);
    }

    #[test]
    fn test_type_ref_list_and_item_bits_are_independent() {
        // [Episode]!
        let required_list = TypeRef::non_null(TypeRef::list(TypeRef::named("Episode")));
        // [Episode!]
        let required_items = TypeRef::list(TypeRef::non_null(TypeRef::named("Episode")));

        assert!(!required_list.is_list_nullable());
        assert!(required_list.item_nullable());
        assert!(required_items.is_list_nullable());
        assert!(!required_items.item_nullable());
        assert_ne!(required_list, required_items);
    }

    #[test]
    fn test_type_ref_nested_lists() {
        // [[Int!]]!
        let ty = TypeRef::non_null(TypeRef::list(TypeRef::list(TypeRef::non_null(
            TypeRef::named("Int"),
        ))));
        assert_eq!(ty.list_depth(), 2);
        assert!(!ty.is_nullable());
        assert!(!ty.item_nullable());
        assert_eq!(ty.to_string(), "[[Int!]]!");
    }

    #[test]
    fn test_non_null_is_idempotent() {
        let once = TypeRef::non_null(TypeRef::named("ID"));
        let twice = TypeRef::non_null(once.clone());
        assert_eq!(once, twice);
        assert_eq!(twice.to_string(), "ID!");
    }

    #[test]
    fn test_scalar_builtin_flag() {
        assert!(SchemaType::scalar("String").is_builtin());
        assert!(!SchemaType::scalar("DateTime").is_builtin());
    }

    #[test]
    fn test_kind_describe() {
        assert_eq!(TypeKind::Interface.describe(), "an interface");
        assert_eq!(TypeKind::Scalar.describe(), "a scalar");
        assert_eq!(TypeKind::InputObject.describe(), "an input object");
    }

    #[test]
    fn test_operation_roots() {
        let mut roots = OperationRoots::default();
        roots.set(OperationType::Query, "RootQuery");
        assert_eq!(roots.get(OperationType::Query), Some("RootQuery"));
        assert_eq!(roots.operation_of("RootQuery"), Some(OperationType::Query));
        assert_eq!(roots.operation_of("Mutation"), None);
    }
}
