use super::codes;
use crate::loc::DocumentPosition;
use crate::message::MessageCode;
use crate::message::MessageSeverity;
use crate::operation::QueryDocument;
use crate::operation::QueryDocumentBuilder;
use crate::test::document;
use crate::test::test_schema;
use crate::test::valid_document;
use graphplan_parser::syntax::OperationKind;

#[test]
fn shorthand_query_is_anonymous() {
    let doc = valid_document("{ me { id } }");
    assert_eq!(doc.operations().len(), 1);
    let operation = doc.operation("").unwrap();
    assert_eq!(operation.kind(), OperationKind::Query);
    assert_eq!(operation.name(), None);
    assert_eq!(operation.root_type().name(), "Query");
    assert_eq!(operation.selection_set().len(), 1);
}

#[test]
fn named_operations_of_every_kind() {
    let doc = valid_document(
        r#"
        query Me { me { id } }
        mutation Create { createPost(input: { title: "Hi" }) { id } }
        subscription Added { postAdded { title } }
        "#,
    );
    assert_eq!(doc.operation("Me").unwrap().kind(), OperationKind::Query);
    assert_eq!(doc.operation("Create").unwrap().root_type().name(), "Mutation");
    assert_eq!(doc.operation("Added").unwrap().kind(), OperationKind::Subscription);
    assert_eq!(
        doc.operations().keys().collect::<Vec<_>>(),
        vec!["Me", "Create", "Added"],
    );
}

#[test]
fn builder_accepts_a_parsed_tree() {
    let tree = graphplan_parser::parse_executable_document("{ me { name } }").unwrap();
    let doc = QueryDocumentBuilder::from_syntax_tree(test_schema(), &tree).build();
    assert!(doc.is_executable());
    assert_eq!(doc.schema().query_type().unwrap().name(), "Query");
}

#[test]
fn syntax_errors_produce_a_single_message() {
    let doc = document("{ me { id }");
    assert_eq!(codes(&doc), vec![MessageCode::SyntaxError]);
    assert!(doc.operations().is_empty());
    assert!(!doc.is_executable());

    let doc = document("{ user(id: \"open) { id } }");
    assert_eq!(codes(&doc), vec![MessageCode::LexicalError]);
    assert_eq!(doc.messages().as_slice()[0].locations().len(), 1);
}

#[test]
fn anonymous_operation_must_stand_alone() {
    let doc = document("{ me { id } } query Other { me { id } }");
    assert_eq!(codes(&doc), vec![MessageCode::AnonymousOperationNotAlone]);
}

#[test]
fn duplicate_operation_names() {
    let doc = document("query Q { me { id } } query Q { me { name } }");
    assert_eq!(codes(&doc), vec![MessageCode::DuplicateOperationName]);
    // The first definition wins.
    let operation = doc.operation("Q").unwrap();
    assert_eq!(operation.selection_set().fields()[0].selection_set().fields()[0].name(), "id");

    let doc = document(
        "query Q { me { id } } query Q { me { ...Name } }
         fragment Name on User { name }",
    );
    assert_eq!(codes(&doc), vec![MessageCode::DuplicateOperationName]);
}

#[test]
fn unsupported_root_operation() {
    let schema = crate::schema::SchemaBuilder::new()
        .object(
            crate::schema::ObjectTypeBuilder::new("Query")
                .field(crate::schema::FieldBuilder::new("ok", "Boolean")),
        )
        .build()
        .unwrap();
    let doc = QueryDocument::parse(&schema, "mutation { ok }");
    assert_eq!(codes(&doc), vec![MessageCode::UnsupportedOperation]);
    assert!(doc.operations().is_empty());

    // Fragments spread only by the dropped operation are still in use.
    let doc = QueryDocument::parse(
        &schema,
        "mutation { ...Outer }
         fragment Outer on Query { ... on Query { ...Inner } }
         fragment Inner on Query { ok }",
    );
    assert_eq!(codes(&doc), vec![MessageCode::UnsupportedOperation]);
    assert_eq!(doc.fragments().len(), 2);
}

#[test]
fn subscription_with_one_root_field() {
    let doc = valid_document("subscription { postAdded { id } __typename }");
    assert!(doc.is_executable());

    let doc = document("subscription { postAdded { id } commentAdded { id } }");
    assert_eq!(codes(&doc), vec![MessageCode::SubscriptionMultipleRootFields]);

    let doc = valid_document("subscription { postAdded { id } postAdded { title } }");
    assert_eq!(doc.operation("").unwrap().selection_set().len(), 1);
}

#[test]
fn variable_definitions() {
    let doc = valid_document(
        "query Q($id: ID!, $first: Int = 3, $filter: PostFilter) {
            user(id: $id) { posts(first: $first) { id } }
            posts(filter: $filter) { id }
        }",
    );
    let operation = doc.operation("Q").unwrap();
    assert_eq!(operation.variables().len(), 3);
    let id = operation.variable("id").unwrap();
    assert!(id.is_required());
    assert_eq!(id.type_annotation().to_string(), "ID!");
    assert_eq!(id.def_location().document_position(), Some(DocumentPosition::new(0, 8)));
    let first = operation.variable("first").unwrap();
    assert!(!first.is_required());
    assert_eq!(first.default_value().unwrap().to_string(), "3");
}

#[test]
fn variable_definition_errors() {
    let doc = document(
        "query Q($a: Int, $a: Int, $u: User, $g: Ghost, $d: Int = \"x\") {
            usersByRole(role: ADMIN) { id }
        }",
    );
    let codes = codes(&doc);
    assert!(codes.contains(&MessageCode::DuplicateVariable));
    assert!(codes.contains(&MessageCode::NonInputVariableType));
    assert!(codes.contains(&MessageCode::UnknownType));
    assert!(codes.contains(&MessageCode::InvalidDefaultValue));
}

#[test]
fn unused_variables_are_warnings() {
    let doc = document("query Q($unused: Int) { me { id } }");
    assert_eq!(codes(&doc), vec![MessageCode::UnusedVariable]);
    assert_eq!(doc.messages().as_slice()[0].severity(), MessageSeverity::Warning);
    assert!(doc.is_executable());
}

#[test]
fn variable_usages() {
    let doc = document("{ user(id: $nope) { id } }");
    assert_eq!(codes(&doc), vec![MessageCode::UndeclaredVariable]);

    let doc = document("query ($id: ID) { user(id: $id) { id } }");
    assert_eq!(codes(&doc), vec![MessageCode::VariableTypeMismatch]);

    let doc = document("query ($id: String!) { user(id: $id) { id } }");
    assert_eq!(codes(&doc), vec![MessageCode::VariableTypeMismatch]);

    // A default on the variable allows a nullable type in a non-null slot.
    valid_document("query ($id: ID = \"1\") { user(id: $id) { id } }");
    // So does a default on the argument.
    valid_document("query ($n: Int) { posts(first: $n) { id } }");
}

#[test]
fn variables_nested_in_values() {
    valid_document(
        "query ($t: String, $min: Int) {
            posts(filter: { titleContains: $t, commentCount: { min: $min } }) { id }
        }",
    );
    let doc = document(
        "query ($min: String) { posts(filter: { commentCount: { min: $min } }) { id } }",
    );
    assert_eq!(codes(&doc), vec![MessageCode::VariableTypeMismatch]);
}

#[test]
fn list_item_variables() {
    let doc = valid_document(
        "mutation ($tag: String!) { createPost(input: { title: \"t\", tags: [$tag, \"x\"] }) { id } }",
    );
    assert!(doc.operation("").is_some());
    let doc = document(
        "mutation ($tag: String) { createPost(input: { title: \"t\", tags: [$tag] }) { id } }",
    );
    assert_eq!(codes(&doc), vec![MessageCode::VariableTypeMismatch]);
}

#[test]
fn max_metrics_across_operations() {
    let doc = valid_document(
        "query Shallow { me { id } }
         query Deep { me { posts { author { name } } } }",
    );
    assert_eq!(doc.max_depth(), 4);
    assert!(doc.max_complexity(&Default::default()) > 0.0);
}
