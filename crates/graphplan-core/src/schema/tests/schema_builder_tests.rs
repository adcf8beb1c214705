use crate::schema::DirectiveBuilder;
use crate::schema::FieldBuilder;
use crate::schema::InputObjectTypeBuilder;
use crate::schema::InterfaceTypeBuilder;
use crate::schema::ObjectTypeBuilder;
use crate::schema::SchemaBuildError;
use crate::schema::SchemaBuilder;
use crate::test::test_schema_builder;
use crate::types::DirectiveLocation;

fn query_with(field: FieldBuilder) -> SchemaBuilder {
    SchemaBuilder::new().object(ObjectTypeBuilder::new("Query").field(field))
}

fn build_errors(builder: SchemaBuilder) -> Vec<SchemaBuildError> {
    match builder.build() {
        Ok(_) => panic!("expected the schema to fail to build"),
        Err(errors) => errors,
    }
}

#[test]
fn fixture_schema_builds() {
    let schema = test_schema_builder().build().unwrap();
    assert_eq!(schema.query_type().unwrap().name(), "Query");
    assert_eq!(schema.mutation_type().unwrap().name(), "Mutation");
    assert_eq!(schema.subscription_type().unwrap().name(), "Subscription");
    assert!(schema.directive("skip").unwrap().is_builtin());
    assert!(schema.directive("include").unwrap().is_builtin());
    assert!(!schema.directive("cached").unwrap().is_builtin());
}

#[test]
fn missing_query_type() {
    let errors = build_errors(
        SchemaBuilder::new().object(ObjectTypeBuilder::new("Thing").field(FieldBuilder::new("id", "ID"))),
    );
    assert!(matches!(
        errors.as_slice(),
        [SchemaBuildError::UndefinedRootType { type_name, .. }] if type_name == "Query",
    ));
}

#[test]
fn custom_root_type_names() {
    let schema = SchemaBuilder::new()
        .object(ObjectTypeBuilder::new("Root").field(FieldBuilder::new("ok", "Boolean")))
        .object(ObjectTypeBuilder::new("Writes").field(FieldBuilder::new("ok", "Boolean")))
        .query_type("Root")
        .mutation_type("Writes")
        .build()
        .unwrap();
    assert_eq!(schema.query_type().unwrap().name(), "Root");
    assert_eq!(schema.mutation_type().unwrap().name(), "Writes");
    assert!(schema.subscription_type().is_none());
}

#[test]
fn root_type_must_be_an_object() {
    let errors = build_errors(
        query_with(FieldBuilder::new("ok", "Boolean")).mutation_type("Int"),
    );
    assert!(matches!(
        errors.as_slice(),
        [SchemaBuildError::RootTypeNotObject { type_name, .. }] if type_name == "Int",
    ));
}

#[test]
fn duplicate_type_names() {
    let errors = build_errors(
        query_with(FieldBuilder::new("ok", "Boolean"))
            .enum_type("Color", ["RED"])
            .scalar("Color")
            .scalar("String"),
    );
    assert_eq!(errors.len(), 2);
    assert!(errors.contains(&SchemaBuildError::DuplicateTypeName { type_name: "Color".to_string() }));
    assert!(errors.contains(&SchemaBuildError::DuplicateTypeName { type_name: "String".to_string() }));
}

#[test]
fn reserved_names() {
    let errors = build_errors(
        query_with(FieldBuilder::new("__secret", "Boolean")).scalar("__Hidden"),
    );
    assert!(errors.contains(&SchemaBuildError::ReservedName { name: "__Hidden".to_string() }));
    assert!(errors.iter().any(|err| matches!(
        err,
        SchemaBuildError::ReservedName { name } if name.contains("__secret"),
    )));
}

#[test]
fn duplicate_members() {
    let errors = build_errors(
        SchemaBuilder::new()
            .object(
                ObjectTypeBuilder::new("Query")
                    .field(FieldBuilder::new("ok", "Boolean"))
                    .field(FieldBuilder::new("ok", "Int"))
                    .field(FieldBuilder::new("pick", "Int").arg("n", "Int").arg("n", "Int")),
            )
            .enum_type("Color", ["RED", "RED"]),
    );
    assert!(errors.contains(&SchemaBuildError::DuplicateFieldName {
        type_name: "Query".to_string(),
        field_name: "ok".to_string(),
    }));
    assert!(errors.contains(&SchemaBuildError::DuplicateEnumValue {
        type_name: "Color".to_string(),
        value: "RED".to_string(),
    }));
    assert!(errors.iter().any(|err| matches!(
        err,
        SchemaBuildError::DuplicateParameterName { parameter_name, .. } if parameter_name == "n",
    )));
}

#[test]
fn empty_object_type() {
    let errors = build_errors(
        query_with(FieldBuilder::new("ok", "Boolean")).object(ObjectTypeBuilder::new("Nothing")),
    );
    assert_eq!(errors, vec![SchemaBuildError::EmptyType { type_name: "Nothing".to_string() }]);
}

#[test]
fn type_reference_errors() {
    let errors = build_errors(
        SchemaBuilder::new()
            .input_object(InputObjectTypeBuilder::new("Filter").field("q", "String"))
            .object(
                ObjectTypeBuilder::new("Query")
                    .field(FieldBuilder::new("missing", "Ghost"))
                    .field(FieldBuilder::new("filter", "Filter"))
                    .field(FieldBuilder::new("me", "Query").arg("self", "Query"))
                    .field(FieldBuilder::new("bad", "[Int")),
            )
            .union("Mixed", ["Query", "Int"]),
    );
    assert!(errors.iter().any(|err| matches!(
        err,
        SchemaBuildError::UndefinedTypeReference { type_name, .. } if type_name == "Ghost",
    )));
    assert!(errors.iter().any(|err| matches!(
        err,
        SchemaBuildError::NonOutputFieldType { type_name, .. } if type_name == "Filter",
    )));
    assert!(errors.iter().any(|err| matches!(
        err,
        SchemaBuildError::NonInputParameterType { type_name, .. } if type_name == "Query",
    )));
    assert!(errors.iter().any(|err| matches!(err, SchemaBuildError::InvalidTypeAnnotation { .. })));
    assert!(errors.iter().any(|err| matches!(
        err,
        SchemaBuildError::UnionMemberNotObject { member_name, .. } if member_name == "Int",
    )));
}

#[test]
fn implementing_an_object() {
    let errors = build_errors(
        query_with(FieldBuilder::new("ok", "Boolean"))
            .object(ObjectTypeBuilder::new("Base").field(FieldBuilder::new("id", "ID")))
            .object(ObjectTypeBuilder::new("Derived").implements("Base").field(FieldBuilder::new("id", "ID"))),
    );
    assert!(matches!(
        errors.as_slice(),
        [SchemaBuildError::ImplementsNonInterface { interface_name, .. }] if interface_name == "Base",
    ));
}

#[test]
fn interface_field_must_be_declared() {
    let errors = build_errors(
        query_with(FieldBuilder::new("ok", "Boolean"))
            .interface(InterfaceTypeBuilder::new("Named").field(FieldBuilder::new("name", "String")))
            .object(ObjectTypeBuilder::new("Pet").implements("Named").field(FieldBuilder::new("id", "ID"))),
    );
    assert_eq!(errors, vec![SchemaBuildError::MissingInterfaceField {
        type_name: "Pet".to_string(),
        interface_name: "Named".to_string(),
        field_name: "name".to_string(),
    }]);
}

#[test]
fn interface_field_compatibility() {
    let errors = build_errors(
        query_with(FieldBuilder::new("ok", "Boolean"))
            .interface(
                InterfaceTypeBuilder::new("Named")
                    .field(FieldBuilder::new("name", "String!").arg("locale", "String")),
            )
            .object(
                ObjectTypeBuilder::new("Pet")
                    .implements("Named")
                    .field(FieldBuilder::new("name", "String").arg("locale", "String!")),
            )
            .object(
                ObjectTypeBuilder::new("Car")
                    .implements("Named")
                    .field(
                        FieldBuilder::new("name", "String!")
                            .arg("locale", "String")
                            .arg("uppercase", "Boolean!"),
                    ),
            ),
    );
    let reasons = errors
        .iter()
        .filter_map(|err| match err {
            SchemaBuildError::IncompatibleInterfaceField { type_name, reason, .. } => {
                Some(format!("{type_name}: {reason}"))
            },
            _ => None,
        })
        .collect::<Vec<_>>();
    assert_eq!(reasons.len(), 3, "{reasons:?}");
    assert!(reasons.iter().any(|r| r.starts_with("Pet:") && r.contains("not a subtype")));
    assert!(reasons.iter().any(|r| r.starts_with("Pet:") && r.contains("`locale`")));
    assert!(reasons.iter().any(|r| r.starts_with("Car:") && r.contains("`uppercase` must be optional")));
}

#[test]
fn covariant_interface_fields_are_accepted() {
    let schema = SchemaBuilder::new()
        .interface(InterfaceTypeBuilder::new("Node").field(FieldBuilder::new("id", "ID")))
        .interface(
            InterfaceTypeBuilder::new("Owned").field(FieldBuilder::new("owner", "Node")),
        )
        .object(
            ObjectTypeBuilder::new("Query")
                .implements("Node")
                .implements("Owned")
                .field(FieldBuilder::new("id", "ID!"))
                .field(FieldBuilder::new("owner", "Query!").arg("fresh", "Boolean")),
        )
        .build()
        .unwrap();
    assert_eq!(schema.possible_types("Owned").len(), 1);
}

#[test]
fn invalid_default_values() {
    let errors = build_errors(
        SchemaBuilder::new()
            .enum_type("Size", ["S", "M"])
            .input_object(InputObjectTypeBuilder::new("Opts").field_with_default("size", "Size", "XL"))
            .object(
                ObjectTypeBuilder::new("Query")
                    .field(FieldBuilder::new("items", "[Int]").arg_with_default("first", "Int", "\"ten\""))
                    .field(FieldBuilder::new("big", "Int").arg_with_default("n", "Int", "2147483648")),
            ),
    );
    let owners = errors
        .iter()
        .filter_map(|err| match err {
            SchemaBuildError::InvalidDefaultValue { owner, .. } => Some(owner.as_str()),
            _ => None,
        })
        .collect::<Vec<_>>();
    assert_eq!(owners.len(), 3, "{errors:?}");
    assert!(owners.contains(&"Opts.size"));
    assert!(owners.contains(&"Query.items(first:)"));
    assert!(owners.contains(&"Query.big(n:)"));
}

#[test]
fn unparseable_default_value() {
    let errors = build_errors(
        query_with(FieldBuilder::new("items", "[Int]").arg_with_default("first", "Int", "{")),
    );
    assert!(matches!(errors.as_slice(), [SchemaBuildError::InvalidDefaultValue { .. }]));
}

#[test]
fn directive_definitions() {
    let schema = query_with(FieldBuilder::new("ok", "Boolean"))
        .directive(
            DirectiveBuilder::new("tag")
                .arg("name", "String!")
                .location(DirectiveLocation::Field)
                .location(DirectiveLocation::Field)
                .repeatable(),
        )
        .build()
        .unwrap();
    let tag = schema.directive("tag").unwrap();
    assert_eq!(tag.locations(), &[DirectiveLocation::Field]);
    assert!(tag.is_repeatable());
    assert!(tag.is_allowed_at(DirectiveLocation::Field));
    assert!(!tag.is_allowed_at(DirectiveLocation::Query));

    let errors = build_errors(
        query_with(FieldBuilder::new("ok", "Boolean"))
            .directive(DirectiveBuilder::new("skip").location(DirectiveLocation::Field)),
    );
    assert_eq!(errors, vec![SchemaBuildError::DuplicateDirectiveName {
        directive_name: "skip".to_string(),
    }]);
}
