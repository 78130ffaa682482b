//! Lint for type naming conventions.

use graphtype_schema::SchemaModel;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that warns about type names that aren't PascalCase.
///
/// Type names become TypeScript declaration names, where PascalCase is
/// the convention. Examples: `Droid`, `SearchResult`, `ReviewInput`
pub struct TypeNamingLint;

impl Lint for TypeNamingLint {
    fn name(&self) -> &'static str {
        "type-naming"
    }

    fn description(&self) -> &'static str {
        "Check type names follow PascalCase conventions"
    }

    fn check(&self, model: &SchemaModel, diagnostics: &mut Vec<Diagnostic>) {
        for ty in model.declared_types() {
            if !is_pascal_case(&ty.name) {
                diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!(
                            "type '{}' should use PascalCase (e.g., 'ReviewInput' not 'review_input')",
                            ty.name
                        ),
                    )
                    .at(ty.name.clone()),
                );
            }
        }
    }
}

fn is_pascal_case(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_uppercase() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric())
}
