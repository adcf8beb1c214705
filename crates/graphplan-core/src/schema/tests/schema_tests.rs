use crate::test::test_schema;
use graphplan_parser::syntax::OperationKind;

#[test]
fn field_lookup_across_kinds() {
    let schema = test_schema();
    assert_eq!(schema.field("User", "name").unwrap().type_annotation().to_string(), "String!");
    assert_eq!(schema.field("Node", "id").unwrap().parent_type_name(), "Node");
    assert!(schema.field("User", "missing").is_none());
    assert!(schema.field("SearchResult", "id").is_none());
    assert!(schema.field("Int", "id").is_none());
}

#[test]
fn possible_types_of_abstract_types() {
    let schema = test_schema();
    let names = |type_name| {
        let mut names = schema
            .possible_types(type_name)
            .into_iter()
            .map(|obj| obj.name().to_string())
            .collect::<Vec<_>>();
        names.sort();
        names
    };
    assert_eq!(names("Node"), vec!["Comment", "Post", "User"]);
    assert_eq!(names("SearchResult"), vec!["Post", "User"]);
    assert_eq!(names("User"), vec!["User"]);
    assert!(names("Role").is_empty());

    assert!(schema.is_possible_type("Node", "Comment"));
    assert!(!schema.is_possible_type("SearchResult", "Comment"));
}

#[test]
fn root_type_by_operation_kind() {
    let schema = test_schema();
    assert_eq!(schema.root_type(OperationKind::Query).unwrap().name(), "Query");
    assert_eq!(schema.root_type(OperationKind::Mutation).unwrap().name(), "Mutation");
    assert_eq!(schema.root_type(OperationKind::Subscription).unwrap().name(), "Subscription");
}

#[test]
fn field_metadata() {
    let schema = test_schema();
    let admin = schema.field("Query", "admin").unwrap();
    assert!(admin.is_virtual());
    assert_eq!(schema.field("Query", "expensive").unwrap().cost(), Some(50.0));
    assert_eq!(schema.field("Query", "me").unwrap().cost(), None);

    let posts = schema.field("Query", "posts").unwrap();
    let first = posts.parameter("first").unwrap();
    assert!(!first.is_required());
    assert_eq!(first.default_value().unwrap().to_string(), "20");
    assert!(schema.field("Query", "user").unwrap().parameter("id").unwrap().is_required());
    assert_eq!(
        posts.return_type(schema).unwrap().name(),
        "Post",
    );
}

#[test]
fn scalar_resolvers_cover_every_scalar() {
    let schema = test_schema();
    for name in ["Int", "Float", "String", "Boolean", "ID", "DateTime"] {
        assert!(schema.scalar_resolver(name).is_some(), "{name}");
    }
    assert!(schema.scalar_resolver("Role").is_none());
}
