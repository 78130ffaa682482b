//! TypeScript-specific naming conventions.

use graphtype_codegen::language::NamingConvention;
use graphtype_core::to_pascal_case;

fn keep_name(name: &str) -> String {
    name.to_string()
}

fn escape_ts_reserved(name: &str) -> String {
    format!("_{}", name)
}

/// TypeScript naming conventions.
///
/// GraphQL names are kept as declaration names. Names that TypeScript
/// rejects as a type name, or that the generated file already binds, get
/// an underscore prefix.
pub const TS_NAMING: NamingConvention = NamingConvention {
    type_to_name: keep_name,
    // `enum_keys = "pascal"`
    enum_to_key: to_pascal_case,
    reserved_words: &[
        // JavaScript reserved words
        "break",
        "case",
        "catch",
        "class",
        "const",
        "continue",
        "debugger",
        "default",
        "delete",
        "do",
        "else",
        "enum",
        "export",
        "extends",
        "false",
        "finally",
        "for",
        "function",
        "if",
        "import",
        "in",
        "instanceof",
        "new",
        "null",
        "return",
        "super",
        "switch",
        "this",
        "throw",
        "true",
        "try",
        "typeof",
        "var",
        "void",
        "while",
        "with",
        // Predefined TypeScript types
        "any",
        "bigint",
        "boolean",
        "never",
        "number",
        "object",
        "string",
        "symbol",
        "undefined",
        "unknown",
        // Names bound by the generated file
        "Maybe",
        "InputMaybe",
        "Array",
        "ReadonlyArray",
    ],
    escape_reserved: escape_ts_reserved,
};
