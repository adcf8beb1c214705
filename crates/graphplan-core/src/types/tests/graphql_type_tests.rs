use crate::test::test_schema;
use crate::types::GraphQLTypeKind;

#[test]
fn builtin_scalars_are_always_defined() {
    let schema = test_schema();
    for (name, kind) in [
        ("Boolean", GraphQLTypeKind::Bool),
        ("Float", GraphQLTypeKind::Float),
        ("ID", GraphQLTypeKind::ID),
        ("Int", GraphQLTypeKind::Int),
        ("String", GraphQLTypeKind::String),
    ] {
        let graphql_type = schema.type_named(name).unwrap();
        assert_eq!(graphql_type.kind(), kind);
        assert!(graphql_type.is_leaf());
        assert!(graphql_type.is_input_type());
    }
}

#[test]
fn classification_by_kind() {
    let schema = test_schema();
    let node = schema.type_named("Node").unwrap();
    assert!(node.is_abstract());
    assert!(node.is_composite());
    assert!(!node.is_input_type());
    assert!(node.as_interface().is_some());

    let search = schema.type_named("SearchResult").unwrap();
    assert!(search.is_abstract());
    assert!(search.as_union().is_some());

    let user = schema.type_named("User").unwrap();
    assert!(!user.is_abstract());
    assert!(user.is_output_type());

    let filter = schema.type_named("PostFilter").unwrap();
    assert!(filter.is_input_type());
    assert!(!filter.is_output_type());
    assert!(!filter.is_leaf());

    let role = schema.type_named("Role").unwrap();
    assert!(role.is_leaf());
    assert!(role.is_input_type() && role.is_output_type());
    assert_eq!(role.as_enum().unwrap().values().len(), 3);

    let date = schema.type_named("DateTime").unwrap();
    assert_eq!(date.kind(), GraphQLTypeKind::Scalar);
}

#[test]
fn object_reports_its_interfaces() {
    let schema = test_schema();
    let post = schema.object_type("Post").unwrap();
    assert_eq!(post.interface_names(), vec!["Node"]);
    let node = schema.type_named("Node").unwrap().as_interface().unwrap();
    assert!(post.implements_interface(node));
    assert!(!schema.object_type("Admin").unwrap().implements_interface(node));
}
