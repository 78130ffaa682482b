use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for schema operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<SchemaError>>;

/// Source context for error reporting.
///
/// Holds the SDL (or TOML) text and its filename so that every error
/// factory can attach a [`NamedSource`] without threading both values
/// through the validator.
///
/// # Example
///
/// ```ignore
/// let ctx = SourceContext::new(sdl, "schema.graphql");
/// return Err(ctx.unknown_type("Planet", "field 'Human.homePlanet'", span));
/// ```
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
    /// Byte offset where each line starts.
    line_starts: Vec<usize>,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        let src = src.into();
        let line_starts = std::iter::once(0)
            .chain(src.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self {
            src,
            filename: filename.into(),
            line_starts,
        }
    }

    /// Source context for a schema that was built in memory.
    pub fn detached() -> Self {
        Self::new("", "<schema>")
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Translate a 1-based line/column position into a span covering `name`.
    ///
    /// Parser positions point at the start of a definition (its keyword or
    /// description), so the name is searched forward from there.
    pub fn span_at(&self, line: usize, column: usize, name: &str) -> Option<SourceSpan> {
        let start = self.offset_of(line, column)?;
        let name_offset = find_identifier(&self.src[start..], name)?;
        Some(SourceSpan::from((start + name_offset, name.len())))
    }

    /// Byte offset of a 1-based line/column position.
    fn offset_of(&self, line: usize, column: usize) -> Option<usize> {
        let line_start = *self.line_starts.get(line.saturating_sub(1))?;
        self.src[line_start..]
            .char_indices()
            .nth(column.saturating_sub(1))
            .map(|(offset, _)| line_start + offset)
    }

    pub fn parse_error(&self, message: impl Into<String>) -> Box<SchemaError> {
        let message = message.into();
        let span = position_in_message(&message)
            .and_then(|(line, column)| self.offset_of(line, column))
            .map(|offset| SourceSpan::from((offset, 1)));
        Box::new(SchemaError::Parse {
            src: self.named_source(),
            span,
            message,
        })
    }

    pub fn config_error(&self, source: toml::de::Error) -> Box<SchemaError> {
        let span = source.span().map(SourceSpan::from);
        Box::new(SchemaError::Config {
            src: self.named_source(),
            span,
            source,
        })
    }

    pub fn unknown_type(
        &self,
        type_name: impl Into<String>,
        referenced_by: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<SchemaError> {
        Box::new(SchemaError::UnknownTypeReference {
            src: self.named_source(),
            span,
            type_name: type_name.into(),
            referenced_by: referenced_by.into(),
        })
    }

    pub fn duplicate_type(
        &self,
        name: impl Into<String>,
        first: Option<SourceSpan>,
        second: Option<SourceSpan>,
    ) -> Box<SchemaError> {
        Box::new(SchemaError::DuplicateTypeName {
            src: self.named_source(),
            first,
            second,
            name: name.into(),
        })
    }

    pub fn interface_contract(
        &self,
        object: impl Into<String>,
        interface: impl Into<String>,
        field: impl Into<String>,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<SchemaError> {
        Box::new(SchemaError::InterfaceContractViolation {
            src: self.named_source(),
            span,
            object: object.into(),
            interface: interface.into(),
            field: field.into(),
            reason: reason.into(),
        })
    }

    pub fn not_an_interface(
        &self,
        type_name: impl Into<String>,
        name: impl Into<String>,
        kind: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<SchemaError> {
        Box::new(SchemaError::NotAnInterface {
            src: self.named_source(),
            span,
            type_name: type_name.into(),
            name: name.into(),
            kind: kind.into(),
        })
    }

    pub fn invalid_union_member(
        &self,
        union_name: impl Into<String>,
        member: impl Into<String>,
        kind: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<SchemaError> {
        Box::new(SchemaError::InvalidUnionMember {
            src: self.named_source(),
            span,
            union_name: union_name.into(),
            member: member.into(),
            kind: kind.into(),
        })
    }

    pub fn argument_collision(
        &self,
        type_name: impl Into<String>,
        field: impl Into<String>,
        argument: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<SchemaError> {
        Box::new(SchemaError::ArgumentNameCollision {
            src: self.named_source(),
            span,
            type_name: type_name.into(),
            field: field.into(),
            argument: argument.into(),
        })
    }

    pub fn duplicate_field(
        &self,
        type_name: impl Into<String>,
        field: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<SchemaError> {
        Box::new(SchemaError::DuplicateFieldName {
            src: self.named_source(),
            span,
            type_name: type_name.into(),
            field: field.into(),
        })
    }

    pub fn duplicate_enum_value(
        &self,
        enum_name: impl Into<String>,
        value: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<SchemaError> {
        Box::new(SchemaError::DuplicateEnumValue {
            src: self.named_source(),
            span,
            enum_name: enum_name.into(),
            value: value.into(),
        })
    }

    pub fn reserved_name(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<SchemaError> {
        Box::new(SchemaError::ReservedName {
            src: self.named_source(),
            span,
            name: name.into(),
            context: context.into(),
        })
    }

    pub fn invalid_input_type(
        &self,
        location: impl Into<String>,
        type_name: impl Into<String>,
        kind: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<SchemaError> {
        Box::new(SchemaError::InvalidInputType {
            src: self.named_source(),
            span,
            location: location.into(),
            type_name: type_name.into(),
            kind: kind.into(),
        })
    }

    pub fn input_as_output(
        &self,
        location: impl Into<String>,
        type_name: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<SchemaError> {
        Box::new(SchemaError::InputObjectAsOutput {
            src: self.named_source(),
            span,
            location: location.into(),
            type_name: type_name.into(),
        })
    }

    pub fn empty_union(&self, name: impl Into<String>, span: Option<SourceSpan>) -> Box<SchemaError> {
        Box::new(SchemaError::EmptyUnion {
            src: self.named_source(),
            span,
            name: name.into(),
        })
    }

    pub fn empty_enum(&self, name: impl Into<String>, span: Option<SourceSpan>) -> Box<SchemaError> {
        Box::new(SchemaError::EmptyEnum {
            src: self.named_source(),
            span,
            name: name.into(),
        })
    }

    pub fn invalid_root(
        &self,
        operation: impl Into<String>,
        type_name: impl Into<String>,
        kind: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<SchemaError> {
        Box::new(SchemaError::InvalidRootType {
            src: self.named_source(),
            span,
            operation: operation.into(),
            type_name: type_name.into(),
            kind: kind.into(),
        })
    }

    pub fn invalid_extension(
        &self,
        name: impl Into<String>,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<SchemaError> {
        Box::new(SchemaError::InvalidExtension {
            src: self.named_source(),
            span,
            name: name.into(),
            reason: reason.into(),
        })
    }
}

/// Find `name` as a whole identifier inside `haystack`.
fn find_identifier(haystack: &str, name: &str) -> Option<usize> {
    let is_ident = |c: char| c.is_ascii_alphanumeric() || c == '_';
    haystack.match_indices(name).map(|(i, _)| i).find(|&i| {
        let before = haystack[..i].chars().next_back();
        let after = haystack[i + name.len()..].chars().next();
        !before.is_some_and(is_ident) && !after.is_some_and(is_ident)
    })
}

/// Pull a `line:column` pair out of a parser message like "Parse error at 3:14".
fn position_in_message(message: &str) -> Option<(usize, usize)> {
    let tail = &message[message.find(" at ")? + 4..];
    let end = tail
        .find(|c: char| !c.is_ascii_digit() && c != ':')
        .unwrap_or(tail.len());
    let (line, column) = tail[..end].split_once(':')?;
    Some((line.parse().ok()?, column.parse().ok()?))
}

#[derive(Debug, Error, Diagnostic)]
pub enum SchemaError {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(graphtype::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse schema: {message}")]
    #[diagnostic(code(graphtype::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("failed to parse graphtype.toml")]
    #[diagnostic(code(graphtype::config_error))]
    Config {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid configuration here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("unknown type '{type_name}' referenced by {referenced_by}")]
    #[diagnostic(
        code(graphtype::unknown_type),
        help("declare '{type_name}' or use one of the built-in scalars: ID, String, Boolean, Int, Float")
    )]
    UnknownTypeReference {
        #[source_code]
        src: NamedSource<String>,
        #[label("'{type_name}' is not declared")]
        span: Option<SourceSpan>,
        type_name: String,
        referenced_by: String,
    },

    #[error("duplicate type name '{name}'")]
    #[diagnostic(
        code(graphtype::duplicate_type),
        help("type names share one namespace, including generated argument types")
    )]
    DuplicateTypeName {
        #[source_code]
        src: NamedSource<String>,
        #[label("first declared here")]
        first: Option<SourceSpan>,
        #[label("declared again here")]
        second: Option<SourceSpan>,
        name: String,
    },

    #[error("'{object}' does not satisfy interface '{interface}': field '{field}' {reason}")]
    #[diagnostic(
        code(graphtype::interface_contract),
        help("declare '{field}' on '{object}' with exactly the same type as on '{interface}'")
    )]
    InterfaceContractViolation {
        #[source_code]
        src: NamedSource<String>,
        #[label("implements '{interface}'")]
        span: Option<SourceSpan>,
        object: String,
        interface: String,
        field: String,
        reason: String,
    },

    #[error("'{type_name}' implements '{name}', which is {kind}")]
    #[diagnostic(
        code(graphtype::not_an_interface),
        help("only interface types can appear after 'implements'")
    )]
    NotAnInterface {
        #[source_code]
        src: NamedSource<String>,
        #[label("not an interface")]
        span: Option<SourceSpan>,
        type_name: String,
        name: String,
        kind: String,
    },

    #[error("union '{union_name}' lists '{member}', which is {kind}")]
    #[diagnostic(
        code(graphtype::invalid_union_member),
        help("union members must be object types")
    )]
    InvalidUnionMember {
        #[source_code]
        src: NamedSource<String>,
        #[label("not an object type")]
        span: Option<SourceSpan>,
        union_name: String,
        member: String,
        kind: String,
    },

    #[error("argument '{argument}' is declared twice on '{type_name}.{field}'")]
    #[diagnostic(code(graphtype::argument_collision))]
    ArgumentNameCollision {
        #[source_code]
        src: NamedSource<String>,
        #[label("duplicate argument")]
        span: Option<SourceSpan>,
        type_name: String,
        field: String,
        argument: String,
    },

    #[error("field '{field}' is declared twice on '{type_name}'")]
    #[diagnostic(code(graphtype::duplicate_field))]
    DuplicateFieldName {
        #[source_code]
        src: NamedSource<String>,
        #[label("duplicate field")]
        span: Option<SourceSpan>,
        type_name: String,
        field: String,
    },

    #[error("enum '{enum_name}' declares '{value}' twice")]
    #[diagnostic(code(graphtype::duplicate_enum_value))]
    DuplicateEnumValue {
        #[source_code]
        src: NamedSource<String>,
        #[label("duplicate value")]
        span: Option<SourceSpan>,
        enum_name: String,
        value: String,
    },

    #[error("'{name}' is a reserved name ({context})")]
    #[diagnostic(
        code(graphtype::reserved_name),
        help("names starting with '__' are reserved for introspection")
    )]
    ReservedName {
        #[source_code]
        src: NamedSource<String>,
        #[label("reserved name used here")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
    },

    #[error("{location} uses '{type_name}', which is {kind} and cannot be used as input")]
    #[diagnostic(
        code(graphtype::invalid_input_type),
        help("arguments and input fields accept scalars, enums and input objects")
    )]
    InvalidInputType {
        #[source_code]
        src: NamedSource<String>,
        #[label("output type in input position")]
        span: Option<SourceSpan>,
        location: String,
        type_name: String,
        kind: String,
    },

    #[error("{location} returns input object '{type_name}'")]
    #[diagnostic(
        code(graphtype::input_as_output),
        help("input objects may only appear as argument payloads")
    )]
    InputObjectAsOutput {
        #[source_code]
        src: NamedSource<String>,
        #[label("input object in output position")]
        span: Option<SourceSpan>,
        location: String,
        type_name: String,
    },

    #[error("union '{name}' has no members")]
    #[diagnostic(code(graphtype::empty_union))]
    EmptyUnion {
        #[source_code]
        src: NamedSource<String>,
        #[label("empty union")]
        span: Option<SourceSpan>,
        name: String,
    },

    #[error("enum '{name}' has no values")]
    #[diagnostic(code(graphtype::empty_enum))]
    EmptyEnum {
        #[source_code]
        src: NamedSource<String>,
        #[label("empty enum")]
        span: Option<SourceSpan>,
        name: String,
    },

    #[error("{operation} root type '{type_name}' is {kind}")]
    #[diagnostic(
        code(graphtype::invalid_root),
        help("root operation types must be object types")
    )]
    InvalidRootType {
        #[source_code]
        src: NamedSource<String>,
        #[label("not an object type")]
        span: Option<SourceSpan>,
        operation: String,
        type_name: String,
        kind: String,
    },

    #[error("invalid extension of '{name}': {reason}")]
    #[diagnostic(code(graphtype::invalid_extension))]
    InvalidExtension {
        #[source_code]
        src: NamedSource<String>,
        #[label("extended here")]
        span: Option<SourceSpan>,
        name: String,
        reason: String,
    },
}

impl SchemaError {
    /// Short machine-readable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            SchemaError::Io { .. } => "io",
            SchemaError::Parse { .. } => "parse",
            SchemaError::Config { .. } => "config",
            SchemaError::UnknownTypeReference { .. } => "unknown-type-reference",
            SchemaError::DuplicateTypeName { .. } => "duplicate-type-name",
            SchemaError::InterfaceContractViolation { .. } => "interface-contract-violation",
            SchemaError::NotAnInterface { .. } => "not-an-interface",
            SchemaError::InvalidUnionMember { .. } => "invalid-union-member",
            SchemaError::ArgumentNameCollision { .. } => "argument-name-collision",
            SchemaError::DuplicateFieldName { .. } => "duplicate-field-name",
            SchemaError::DuplicateEnumValue { .. } => "duplicate-enum-value",
            SchemaError::ReservedName { .. } => "reserved-name",
            SchemaError::InvalidInputType { .. } => "invalid-input-type",
            SchemaError::InputObjectAsOutput { .. } => "input-object-as-output",
            SchemaError::EmptyUnion { .. } => "empty-union",
            SchemaError::EmptyEnum { .. } => "empty-enum",
            SchemaError::InvalidRootType { .. } => "invalid-root-type",
            SchemaError::InvalidExtension { .. } => "invalid-extension",
        }
    }
}
