use super::codes;
use crate::message::MessageCode;
use crate::operation::SuppliedValue;
use crate::test::document;
use crate::test::valid_document;

#[test]
fn arguments_are_bound_by_name() {
    let doc = valid_document(r#"{ search(first: 5, term: "graphql") { __typename } }"#);
    let search = &doc.operation("").unwrap().selection_set().fields()[0];
    assert_eq!(search.arguments().keys().collect::<Vec<_>>(), vec!["first", "term"]);
    assert_eq!(search.argument("first").unwrap().to_string(), "5");
    assert!(search.argument_location("term").is_some());
    assert!(search.argument_location("missing").is_none());
}

#[test]
fn argument_errors() {
    let doc = document(r#"{ user(id: 1, id: 2, nickname: "x") { id } }"#);
    assert_eq!(codes(&doc), vec![MessageCode::DuplicateArgument, MessageCode::UnknownArgument]);

    let doc = document("{ user { id } }");
    assert_eq!(codes(&doc), vec![MessageCode::MissingRequiredArgument]);

    let doc = document("{ user(id: null) { id } }");
    assert_eq!(codes(&doc), vec![MessageCode::InvalidArgumentValue]);
}

#[test]
fn literal_values_are_checked_during_assembly() {
    let doc = document("{ posts(first: 2147483648) { id } }");
    assert_eq!(codes(&doc), vec![MessageCode::InvalidArgumentValue]);
    assert!(doc.messages().as_slice()[0].text().contains("`first`"));

    let doc = document("{ usersByRole(role: OWNER) { id } }");
    assert_eq!(codes(&doc), vec![MessageCode::InvalidArgumentValue]);

    let doc = document(r#"{ posts(filter: { titleContains: 1 }) { id } }"#);
    assert_eq!(codes(&doc), vec![MessageCode::InvalidArgumentValue]);

    valid_document("{ posts(first: 2147483647) { id } }");
}

#[test]
fn repeated_input_object_keys() {
    let doc = document(r#"{ posts(filter: { titleContains: "a", titleContains: "b" }) { id } }"#);
    assert_eq!(codes(&doc), vec![MessageCode::DuplicateInputField]);
    let posts = &doc.operation("").unwrap().selection_set().fields()[0];
    let Some(SuppliedValue::Object(fields)) = posts.argument("filter") else {
        panic!("expected an object literal");
    };
    assert_eq!(fields["titleContains"].to_string(), "\"a\"");
}

#[test]
fn directive_binding() {
    let doc = valid_document("query @cached(ttl: 30) { me @cached { id @skip(if: false) } }");
    let operation = doc.operation("").unwrap();
    assert_eq!(operation.directives()[0].name(), "cached");
    assert_eq!(operation.directives()[0].argument("ttl").unwrap().to_string(), "30");
    let me = &operation.selection_set().fields()[0];
    assert_eq!(me.directives()[0].directive().name(), "cached");
    assert!(me.directives()[0].arguments().is_empty());
}

#[test]
fn directive_errors() {
    let doc = document("{ me @unknown { id } }");
    assert_eq!(codes(&doc), vec![MessageCode::UnknownDirective]);

    let doc = document("mutation @cached { createPost(input: { title: \"t\" }) { id } }");
    assert_eq!(codes(&doc), vec![MessageCode::MisplacedDirective]);

    let doc = document("{ me { id @skip(if: true) @skip(if: false) } }");
    assert_eq!(codes(&doc), vec![MessageCode::DuplicateDirective]);

    let doc = document("{ me { id @include } }");
    assert_eq!(codes(&doc), vec![MessageCode::MissingRequiredArgument]);

    let doc = document("{ me { id @include(if: \"yes\") } }");
    assert_eq!(codes(&doc), vec![MessageCode::InvalidArgumentValue]);
}

#[test]
fn directive_on_variable_definition() {
    let doc = document("query ($n: Int @cached) { posts(first: $n) { id } }");
    assert_eq!(codes(&doc), vec![MessageCode::MisplacedDirective]);
}

#[test]
fn directive_variables_are_tracked() {
    let doc = valid_document("query ($hide: Boolean!) { me { id @skip(if: $hide) } }");
    assert!(doc.messages().is_empty());
}
