//! Lint for record types without fields.

use graphtype_schema::{SchemaModel, TypeBody};

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that warns about objects, interfaces and input objects that
/// declare no fields. They render as empty records.
pub struct EmptyTypeLint;

impl Lint for EmptyTypeLint {
    fn name(&self) -> &'static str {
        "empty-type"
    }

    fn description(&self) -> &'static str {
        "Check record types declare at least one field"
    }

    fn check(&self, model: &SchemaModel, diagnostics: &mut Vec<Diagnostic>) {
        for ty in model.declared_types() {
            let empty = match &ty.body {
                TypeBody::Object(body) | TypeBody::Interface(body) => body.fields.is_empty(),
                TypeBody::InputObject(fields) => fields.is_empty(),
                _ => false,
            };
            if empty {
                diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!("{} '{}' has no fields", ty.kind(), ty.name),
                    )
                    .at(ty.name.clone()),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use graphtype_schema::{Field, RawSchema, SchemaType, TypeRef};

    use super::*;
    use crate::pipeline::Severity;

    #[test]
    fn test_empty_object() {
        let model = SchemaModel::from_raw(RawSchema::new(vec![
            SchemaType::object("Query", vec![Field::new("hero", TypeRef::named("Hero"))]),
            SchemaType::object("Hero", vec![]),
        ]))
        .unwrap();

        let mut diagnostics = Vec::new();
        EmptyTypeLint.check(&model, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("Hero"));
        assert_eq!(diagnostics[0].location.as_deref(), Some("Hero"));
        assert_eq!(diagnostics[0].severity, Severity::Warning);
    }

    #[test]
    fn test_fields_present() {
        let model: SchemaModel = "type Query { hero: String } input Filter { text: String }"
            .parse()
            .unwrap();

        let mut diagnostics = Vec::new();
        EmptyTypeLint.check(&model, &mut diagnostics);

        assert!(diagnostics.is_empty());
    }
}
