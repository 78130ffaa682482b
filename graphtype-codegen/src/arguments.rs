//! Synthesized argument container types.
//!
//! Every object or interface field that takes arguments gets one container
//! type named `{Parent}{Field}Args` whose fields are the arguments in
//! declared order. Containers live beside the schema, not in it, but share
//! its namespace: a container whose name is already taken is fatal.

use std::collections::HashMap;

use graphtype_core::to_pascal_case;
use graphtype_schema::{InputValue, Result, SchemaModel, TypeKind};

/// An argument container for one field.
#[derive(Debug, Clone)]
pub struct SyntheticArgs {
    /// Container name, e.g. `QuerySearchArgs`.
    pub name: String,
    /// Declaring type of the field.
    pub parent: String,
    /// Field the arguments belong to.
    pub field: String,
    /// Arguments in declared order, types unchanged.
    pub arguments: Vec<InputValue>,
}

/// Deterministic container name for `(parent, field)`.
pub fn args_type_name(parent: &str, field: &str) -> String {
    format!("{}{}Args", parent, to_pascal_case(field))
}

/// Synthesize containers for every field with arguments.
///
/// Output follows declaration order: parents in schema order, fields in
/// declared order.
pub fn synthesize(model: &SchemaModel) -> Result<Vec<SyntheticArgs>> {
    let mut synthesized = Vec::new();
    let mut taken: HashMap<String, (String, String)> = HashMap::new();

    let parents = model
        .declared_types()
        .filter(|ty| matches!(ty.kind(), TypeKind::Object | TypeKind::Interface));

    for parent in parents {
        for field in parent.fields().iter().filter(|f| !f.arguments.is_empty()) {
            let name = args_type_name(&parent.name, &field.name);

            if let Some(declared) = model.get(&name) {
                return Err(model
                    .source()
                    .duplicate_type(&name, declared.span, field.span));
            }
            if let Some((first_parent, first_field)) = taken.get(&name) {
                let first = model
                    .get(first_parent)
                    .and_then(|ty| ty.field(first_field))
                    .and_then(|f| f.span);
                return Err(model.source().duplicate_type(&name, first, field.span));
            }

            tracing::trace!(args = %name, parent = %parent.name, field = %field.name, "synthesized");
            taken.insert(name.clone(), (parent.name.clone(), field.name.clone()));
            synthesized.push(SyntheticArgs {
                name,
                parent: parent.name.clone(),
                field: field.name.clone(),
                arguments: field.arguments.clone(),
            });
        }
    }

    Ok(synthesized)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(src: &str) -> SchemaModel {
        src.parse().unwrap()
    }

    #[test]
    fn test_args_type_name() {
        assert_eq!(args_type_name("Query", "search"), "QuerySearchArgs");
        assert_eq!(
            args_type_name("Mutation", "createReview"),
            "MutationCreateReviewArgs"
        );
        assert_eq!(args_type_name("Query", "all_films"), "QueryAllFilmsArgs");
    }

    #[test]
    fn test_one_container_per_field_with_arguments() {
        let model = model(
            r#"
            interface Character { friendsConnection(first: Int, after: ID): String }
            type Query {
              hero(episode: Int): String
              search(text: String): String
              now: String
            }
            "#,
        );
        let args = synthesize(&model).unwrap();
        let names: Vec<_> = args.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "CharacterFriendsConnectionArgs",
                "QueryHeroArgs",
                "QuerySearchArgs"
            ]
        );
    }

    #[test]
    fn test_arguments_keep_order_and_types() {
        let model = model(
            r#"
            type Query { reviews(episode: Int!, first: Int, tags: [String!]): String }
            "#,
        );
        let args = synthesize(&model).unwrap();
        assert_eq!(args.len(), 1);

        let reviews = &args[0];
        assert_eq!(reviews.parent, "Query");
        assert_eq!(reviews.field, "reviews");
        let fields: Vec<_> = reviews
            .arguments
            .iter()
            .map(|a| (a.name.as_str(), a.ty.to_string()))
            .collect();
        assert_eq!(
            fields,
            [
                ("episode", "Int!".to_string()),
                ("first", "Int".to_string()),
                ("tags", "[String!]".to_string()),
            ]
        );
    }

    #[test]
    fn test_no_arguments_no_containers() {
        let model = model("type Query { hero: String }");
        assert!(synthesize(&model).unwrap().is_empty());
    }

    #[test]
    fn test_collision_with_declared_type() {
        let model = model(
            r#"
            input QuerySearchArgs { text: String }
            type Query { search(text: String): String }
            "#,
        );
        let err = synthesize(&model).unwrap_err();
        assert_eq!(err.kind(), "duplicate-type-name");
        assert!(err.to_string().contains("QuerySearchArgs"));
    }

    #[test]
    fn test_collision_between_containers() {
        let model = model(
            r#"
            type Query {
              search_all(text: String): String
              searchAll(text: String): String
            }
            "#,
        );
        let err = synthesize(&model).unwrap_err();
        assert_eq!(err.kind(), "duplicate-type-name");
    }
}
