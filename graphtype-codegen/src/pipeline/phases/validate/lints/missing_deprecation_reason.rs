//! Lint for `@deprecated` without a reason.

use graphtype_schema::{Deprecation, SchemaModel, TypeBody};

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that warns when `@deprecated` is used without `reason:`.
///
/// The generated `@deprecated` doc tag is then bare, leaving readers of
/// the declarations without a migration hint.
pub struct MissingDeprecationReasonLint;

impl Lint for MissingDeprecationReasonLint {
    fn name(&self) -> &'static str {
        "missing-deprecation-reason"
    }

    fn description(&self) -> &'static str {
        "Check deprecated members explain what to use instead"
    }

    fn check(&self, model: &SchemaModel, diagnostics: &mut Vec<Diagnostic>) {
        for ty in model.declared_types() {
            match &ty.body {
                TypeBody::Object(body) | TypeBody::Interface(body) => {
                    for field in &body.fields {
                        check(&ty.name, &field.name, field.deprecation.as_ref(), diagnostics);
                        for arg in &field.arguments {
                            let path = format!("{}({})", field.name, arg.name);
                            check(&ty.name, &path, arg.deprecation.as_ref(), diagnostics);
                        }
                    }
                }
                TypeBody::InputObject(fields) => {
                    for field in fields {
                        check(&ty.name, &field.name, field.deprecation.as_ref(), diagnostics);
                    }
                }
                TypeBody::Enum(variants) => {
                    for variant in variants {
                        check(&ty.name, &variant.name, variant.deprecation.as_ref(), diagnostics);
                    }
                }
                TypeBody::Union(_) | TypeBody::Scalar { .. } => {}
            }
        }
    }
}

fn check(
    type_name: &str,
    member: &str,
    deprecation: Option<&Deprecation>,
    diagnostics: &mut Vec<Diagnostic>,
) {
    let Some(deprecation) = deprecation else {
        return;
    };
    let missing = deprecation
        .reason
        .as_deref()
        .is_none_or(|reason| reason.trim().is_empty());

    if missing {
        let path = format!("{}.{}", type_name, member);
        diagnostics.push(
            Diagnostic::warning("validate", format!("'{}' is deprecated without a reason", path))
                .at(path),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_schema(src: &str) -> Vec<Diagnostic> {
        let model: SchemaModel = src.parse().unwrap();
        let mut diagnostics = Vec::new();
        MissingDeprecationReasonLint.check(&model, &mut diagnostics);
        diagnostics
    }

    #[test]
    fn test_missing_reason() {
        let diagnostics = check_schema(
            r#"
            type Query { hero: String @deprecated }
            enum Episode { NEWHOPE @deprecated(reason: "") EMPIRE }
            "#,
        );

        let locations: Vec<_> = diagnostics
            .iter()
            .filter_map(|d| d.location.as_deref())
            .collect();
        assert_eq!(locations, ["Query.hero", "Episode.NEWHOPE"]);
    }

    #[test]
    fn test_reason_present() {
        let diagnostics = check_schema(
            r#"
            type Query {
              hero: String @deprecated(reason: "Use `character`")
              character: String
            }
            "#,
        );
        assert!(diagnostics.is_empty());
    }
}
