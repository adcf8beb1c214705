use crate::parse_executable_document;
use crate::syntax::SyntaxNodeKind;
use crate::GraphQLParser;

/// Every child a node references was committed before the node itself.
#[test]
fn children_precede_parents() {
    let tree = parse_executable_document(
        r#"
        query Q($id: ID! = "x", $tags: [String!] @meta(on: true)) @live {
          user(id: $id, filter: { tags: $tags, nested: [1, 2, { a: null }] }) {
            ...UserFields
            ... on Admin { level }
            ... @include(if: true) { name }
          }
        }
        fragment UserFields on User { id alias: name }
        "#,
    )
    .unwrap();

    for (index, node) in tree.arena().nodes().iter().enumerate() {
        for range in node.child_ranges() {
            for child in range {
                assert!(
                    child.as_usize() < index,
                    "{} at {index} references child {}",
                    node.kind_name(),
                    child.as_usize(),
                );
            }
        }
    }
    assert_eq!(tree.root_index().as_usize(), tree.arena().len() - 1);
}

#[test]
fn text_resolves_names_against_source() {
    let tree = parse_executable_document("{ hero: character(id: 7) }").unwrap();
    let (_, operation) = tree.definitions().next().unwrap();
    let SyntaxNodeKind::Operation { selection_set, .. } = &operation.kind else {
        panic!("expected an operation");
    };
    let (field_index, field) = tree.children(*selection_set).next().unwrap();
    let SyntaxNodeKind::Field { alias, name, arguments, .. } = &field.kind else {
        panic!("expected a field");
    };
    assert_eq!(tree.text(alias.unwrap()), "hero");
    assert_eq!(tree.text(*name), "character");
    assert_eq!(tree.node_text(field_index), "hero: character(id: 7)");

    let (_, argument) = tree.children(*arguments).next().unwrap();
    let SyntaxNodeKind::Argument { name, value } = &argument.kind else {
        panic!("expected an argument");
    };
    assert_eq!(tree.text(*name), "id");
    assert_eq!(tree.node_text(*value), "7");
}

/// An arena handed back by `into_arena()` parses a second document from
/// scratch.
#[test]
fn arena_is_reusable_across_documents() {
    let first = parse_executable_document("{ a b c }").unwrap();
    let first_len = first.arena().len();
    let arena = first.into_arena();
    assert!(arena.is_empty());

    let second = GraphQLParser::with_arena("{ d }", arena)
        .parse_executable_document()
        .unwrap();
    assert!(second.arena().len() < first_len);
    assert_eq!(second.definitions().count(), 1);
}
