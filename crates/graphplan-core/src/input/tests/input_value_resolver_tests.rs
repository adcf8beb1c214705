use crate::input::ArgumentValue;
use crate::input::InputValueResolver;
use crate::input::InvalidArgumentError;
use crate::input::ResolvedValue;
use crate::input::VariableValue;
use crate::loc::SourceLocation;
use crate::operation::SuppliedValue;
use crate::operation::Variable;
use crate::test::test_schema;
use crate::test::variables;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;

fn annot(text: &str) -> TypeAnnotation {
    TypeAnnotation::parse(text, SourceLocation::Schema).unwrap()
}

fn value(text: &str) -> SuppliedValue {
    SuppliedValue::parse_const(text).unwrap()
}

fn var_ref(name: &str) -> SuppliedValue {
    SuppliedValue::Variable(crate::operation::NamedVariableRef::new(name, SourceLocation::Schema))
}

fn declared(specs: &[(&str, &str, Option<&str>)]) -> IndexMap<String, Variable> {
    specs
        .iter()
        .map(|(name, type_text, default)| {
            (name.to_string(), Variable {
                def_location: SourceLocation::Schema,
                default_value: default.map(value),
                name: name.to_string(),
                type_annotation: annot(type_text),
            })
        })
        .collect()
}

fn resolve_literal(text: &str, target: &str) -> Result<ResolvedValue, InvalidArgumentError> {
    let vars = IndexMap::new();
    let resolver = InputValueResolver::new(test_schema(), &vars);
    resolver.resolve(&value(text), &annot(target)).map(|arg| match arg {
        ArgumentValue::Resolved(resolved) => resolved,
        ArgumentValue::Deferred(_) => panic!("`{text}` should resolve immediately"),
    })
}

#[test]
fn int_bounds() {
    assert_eq!(resolve_literal("2147483647", "Int"), Ok(ResolvedValue::Int(i32::MAX)));
    assert_eq!(resolve_literal("-2147483648", "Int"), Ok(ResolvedValue::Int(i32::MIN)));
    assert_eq!(
        resolve_literal("2147483648", "Int"),
        Err(InvalidArgumentError::IntOutOfRange { literal: "2147483648".to_string() }),
    );
}

#[test]
fn scalar_literal_coercion() {
    assert_eq!(resolve_literal("4", "Float"), Ok(ResolvedValue::Float(4.0)));
    assert_eq!(resolve_literal("\"a\\nb\"", "String"), Ok(ResolvedValue::String("a\nb".to_string())));
    assert_eq!(resolve_literal("7", "ID"), Ok(ResolvedValue::Id("7".to_string())));
    assert_eq!(resolve_literal("true", "Boolean!"), Ok(ResolvedValue::Boolean(true)));
    assert_eq!(
        resolve_literal("\"2024-01-01\"", "DateTime"),
        Ok(ResolvedValue::Custom("2024-01-01".to_string())),
    );
    assert!(matches!(
        resolve_literal("1.5", "Int"),
        Err(InvalidArgumentError::InvalidLiteral { .. }),
    ));
    assert!(matches!(
        resolve_literal("\"true\"", "Boolean"),
        Err(InvalidArgumentError::InvalidLiteral { .. }),
    ));
}

#[test]
fn null_handling() {
    assert_eq!(resolve_literal("null", "Int"), Ok(ResolvedValue::Null));
    assert_eq!(
        resolve_literal("null", "Int!"),
        Err(InvalidArgumentError::NullForNonNull { type_annotation: "Int!".to_string() }),
    );
    assert_eq!(
        resolve_literal("[1, null]", "[Int]!"),
        Ok(ResolvedValue::List(vec![ResolvedValue::Int(1), ResolvedValue::Null])),
    );
    assert!(resolve_literal("[1, null]", "[Int!]").is_err());
}

#[test]
fn single_value_coerces_to_list() {
    assert_eq!(
        resolve_literal("3", "[[Int]]"),
        Ok(ResolvedValue::List(vec![ResolvedValue::List(vec![ResolvedValue::Int(3)])])),
    );
}

#[test]
fn nested_lists_require_list_items() {
    assert!(matches!(
        resolve_literal("[1, 2]", "[[Int]]"),
        Err(InvalidArgumentError::InvalidLiteral { type_name, .. }) if type_name == "[Int]",
    ));
    assert_eq!(
        resolve_literal("[[1], null, [2, 3]]", "[[Int]]"),
        Ok(ResolvedValue::List(vec![
            ResolvedValue::List(vec![ResolvedValue::Int(1)]),
            ResolvedValue::Null,
            ResolvedValue::List(vec![ResolvedValue::Int(2), ResolvedValue::Int(3)]),
        ])),
    );

    let vars = declared(&[("matrix", "[[Int]]", None)]);
    let resolver = InputValueResolver::new(test_schema(), &vars);
    let matrix = resolver.resolve(&var_ref("matrix"), &annot("[[Int]]")).unwrap();
    let flat = VariableValue::List(vec![VariableValue::Int(1), VariableValue::Int(2)]);
    assert!(matches!(
        matrix.resolve(&variables([("matrix", flat)])),
        Err(InvalidArgumentError::InvalidLiteral { .. }),
    ));
    assert_eq!(
        matrix.resolve(&variables([("matrix", VariableValue::Int(4))])),
        Ok(ResolvedValue::List(vec![ResolvedValue::List(vec![ResolvedValue::Int(4)])])),
    );
}

#[test]
fn enum_values() {
    assert_eq!(resolve_literal("ADMIN", "Role"), Ok(ResolvedValue::Enum("ADMIN".to_string())));
    assert_eq!(
        resolve_literal("OWNER", "Role"),
        Err(InvalidArgumentError::UnknownEnumValue {
            type_name: "Role".to_string(),
            value: "OWNER".to_string(),
        }),
    );
    assert!(matches!(
        resolve_literal("\"ADMIN\"", "Role"),
        Err(InvalidArgumentError::InvalidLiteral { .. }),
    ));
}

#[test]
fn input_objects_follow_declared_field_order() {
    let resolved = resolve_literal(
        r#"{ commentCount: { max: 3 }, titleContains: "rust" }"#,
        "PostFilter",
    ).unwrap();
    let ResolvedValue::Object(fields) = resolved else {
        panic!("expected an object");
    };
    assert_eq!(
        fields.keys().collect::<Vec<_>>(),
        vec!["titleContains", "published", "commentCount"],
    );
    // Defaulted field is filled in.
    assert_eq!(fields["published"], ResolvedValue::Boolean(true));
    assert_eq!(
        fields["commentCount"],
        ResolvedValue::Object([("max".to_string(), ResolvedValue::Int(3))].into_iter().collect()),
    );
}

#[test]
fn input_object_errors() {
    assert_eq!(
        resolve_literal("{ nope: 1 }", "PostFilter"),
        Err(InvalidArgumentError::UnknownInputField {
            type_name: "PostFilter".to_string(),
            field_name: "nope".to_string(),
        }),
    );
    assert_eq!(
        resolve_literal("{ tags: [\"a\"] }", "CreatePostInput"),
        Err(InvalidArgumentError::MissingInputField {
            type_name: "CreatePostInput".to_string(),
            field_name: "title".to_string(),
        }),
    );
    assert!(resolve_literal("5", "PostFilter").is_err());
    assert_eq!(
        resolve_literal("{}", "User"),
        Err(InvalidArgumentError::NotAnInputType { type_name: "User".to_string() }),
    );
}

#[test]
fn any_variable_defers_the_whole_value() {
    let vars = declared(&[("term", "String", None)]);
    let resolver = InputValueResolver::new(test_schema(), &vars);
    let nested = SuppliedValue::Object(
        [
            ("titleContains".to_string(), var_ref("term")),
            ("published".to_string(), value("false")),
        ].into_iter().collect(),
    );
    let arg = resolver.resolve(&nested, &annot("PostFilter")).unwrap();
    let deferred = arg.as_deferred().expect("deferred");
    assert_eq!(deferred.variable_names().collect::<Vec<_>>(), vec!["term"]);
    assert!(arg.as_resolved().is_none());

    let bound = deferred.resolve(&variables([("term", VariableValue::String("go".to_string()))])).unwrap();
    let ResolvedValue::Object(fields) = bound else {
        panic!("expected an object");
    };
    assert_eq!(fields["titleContains"], ResolvedValue::String("go".to_string()));
    assert_eq!(fields["published"], ResolvedValue::Boolean(false));
}

#[test]
fn undeclared_variable_is_an_error() {
    let vars = IndexMap::new();
    let resolver = InputValueResolver::new(test_schema(), &vars);
    assert_eq!(
        resolver.resolve(&var_ref("ghost"), &annot("Int")).unwrap_err(),
        InvalidArgumentError::UndeclaredVariable { variable_name: "ghost".to_string() },
    );
}

#[test]
fn deferred_resolution_at_bind_time() {
    let vars = declared(&[
        ("required", "Int!", None),
        ("optional", "Int", None),
        ("defaulted", "Int", Some("5")),
    ]);
    let resolver = InputValueResolver::new(test_schema(), &vars);
    let target = annot("Int");

    let required = resolver.resolve(&var_ref("required"), &target).unwrap();
    assert_eq!(
        required.resolve(&variables([])),
        Err(InvalidArgumentError::MissingRequiredVariable {
            variable_name: "required".to_string(),
            type_annotation: "Int!".to_string(),
        }),
    );
    assert_eq!(
        required.resolve(&variables([("required", VariableValue::Int(2147483648))])),
        Err(InvalidArgumentError::IntOutOfRange { literal: "2147483648".to_string() }),
    );
    assert_eq!(
        required.resolve(&variables([("required", VariableValue::Int(9))])),
        Ok(ResolvedValue::Int(9)),
    );

    let optional = resolver.resolve(&var_ref("optional"), &target).unwrap();
    assert_eq!(optional.resolve(&variables([])), Ok(ResolvedValue::Null));

    let defaulted = resolver.resolve(&var_ref("defaulted"), &target).unwrap();
    assert_eq!(defaulted.resolve(&variables([])), Ok(ResolvedValue::Int(5)));
    assert_eq!(
        defaulted.resolve(&variables([("defaulted", VariableValue::Null)])),
        Ok(ResolvedValue::Null),
    );
}

#[test]
fn absent_variable_falls_back_to_parameter_default() {
    let vars = declared(&[("n", "Int", None)]);
    let resolver = InputValueResolver::new(test_schema(), &vars);
    let arg = resolver
        .resolve_with_default(&var_ref("n"), &annot("Int"), Some(&value("20")))
        .unwrap();
    assert_eq!(arg.resolve(&variables([])), Ok(ResolvedValue::Int(20)));
    assert_eq!(arg.resolve(&variables([("n", VariableValue::Int(3))])), Ok(ResolvedValue::Int(3)));
}

#[test]
fn absent_variable_inside_input_object_omits_the_field() {
    let vars = declared(&[("author", "ID", None)]);
    let resolver = InputValueResolver::new(test_schema(), &vars);
    let filter = SuppliedValue::Object([("authorId".to_string(), var_ref("author"))].into_iter().collect());
    let arg = resolver.resolve(&filter, &annot("PostFilter")).unwrap();
    let ResolvedValue::Object(fields) = arg.resolve(&variables([])).unwrap() else {
        panic!("expected an object");
    };
    assert!(!fields.contains_key("authorId"));
    assert_eq!(fields["published"], ResolvedValue::Boolean(true));
}

#[test]
fn variable_values_for_enums_and_objects() {
    let vars = declared(&[("role", "Role!", None), ("input", "CreatePostInput!", None)]);
    let resolver = InputValueResolver::new(test_schema(), &vars);

    let role = resolver.resolve(&var_ref("role"), &annot("Role!")).unwrap();
    assert_eq!(
        role.resolve(&variables([("role", VariableValue::String("EDITOR".to_string()))])),
        Ok(ResolvedValue::Enum("EDITOR".to_string())),
    );
    assert!(role.resolve(&variables([("role", VariableValue::Int(1))])).is_err());

    let input = resolver.resolve(&var_ref("input"), &annot("CreatePostInput!")).unwrap();
    let provided = VariableValue::from_const_literal(r#"{ title: "Hi", tags: "one" }"#).unwrap();
    assert_eq!(
        input.resolve(&variables([("input", provided)])),
        Ok(ResolvedValue::Object(
            [
                ("title".to_string(), ResolvedValue::String("Hi".to_string())),
                ("tags".to_string(), ResolvedValue::List(vec![ResolvedValue::String("one".to_string())])),
            ].into_iter().collect(),
        )),
    );
}
