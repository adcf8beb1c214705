//! Tests for parsing well-formed executable documents.

use crate::parse_executable_document;
use crate::syntax::NodeRange;
use crate::syntax::OperationKind;
use crate::syntax::SyntaxNodeKind;
use crate::syntax::SyntaxTree;

/// Names of the fields directly inside `selection_set`, with aliases
/// rendered as `alias:name`.
fn field_names(tree: &SyntaxTree<'_>, selection_set: NodeRange) -> Vec<String> {
    tree.children(selection_set)
        .filter_map(|(_, node)| match &node.kind {
            SyntaxNodeKind::Field { alias: Some(alias), name, .. } => {
                Some(format!("{}:{}", tree.text(*alias), tree.text(*name)))
            },
            SyntaxNodeKind::Field { name, .. } => Some(tree.text(*name).to_string()),
            _ => None,
        })
        .collect()
}

#[test]
fn shorthand_query() {
    let tree = parse_executable_document("{ me { id name } }").unwrap();
    let definitions: Vec<_> = tree.definitions().collect();
    assert_eq!(definitions.len(), 1);
    let SyntaxNodeKind::Operation { kind, name, variables, directives, selection_set } =
        &definitions[0].1.kind
    else {
        panic!("expected an operation");
    };
    assert_eq!(*kind, OperationKind::Query);
    assert!(name.is_none());
    assert!(variables.is_empty());
    assert!(directives.is_empty());
    assert_eq!(field_names(&tree, *selection_set), vec!["me"]);
}

#[test]
fn named_operations_of_each_kind() {
    let tree = parse_executable_document(
        "query A { a } mutation B { b } subscription C { c }",
    )
    .unwrap();
    let kinds: Vec<_> = tree
        .definitions()
        .map(|(_, node)| match &node.kind {
            SyntaxNodeKind::Operation { kind, name, .. } => {
                (*kind, tree.text(name.unwrap()).to_string())
            },
            other => panic!("unexpected {other:?}"),
        })
        .collect();
    assert_eq!(
        kinds,
        vec![
            (OperationKind::Query, "A".to_string()),
            (OperationKind::Mutation, "B".to_string()),
            (OperationKind::Subscription, "C".to_string()),
        ],
    );
}

#[test]
fn variable_definitions() {
    let tree = parse_executable_document(
        "query Q($id: ID!, $first: Int = 10 @deprecated, $tags: [String!]!) { a }",
    )
    .unwrap();
    let (_, operation) = tree.definitions().next().unwrap();
    let SyntaxNodeKind::Operation { variables, .. } = &operation.kind else {
        panic!("expected an operation");
    };
    let definitions: Vec<_> = tree.children(*variables).collect();
    assert_eq!(definitions.len(), 3);

    let SyntaxNodeKind::VariableDefinition { name, type_annotation, default_value, directives } =
        &definitions[1].1.kind
    else {
        panic!("expected a variable definition");
    };
    assert_eq!(tree.text(*name), "first");
    assert_eq!(tree.node_text(*type_annotation), "Int");
    assert_eq!(tree.node_text(default_value.unwrap()), "10");
    assert_eq!(directives.len(), 1);

    let SyntaxNodeKind::VariableDefinition { type_annotation, .. } = &definitions[2].1.kind else {
        panic!("expected a variable definition");
    };
    let SyntaxNodeKind::ListType { inner, nullable } = &tree.node(*type_annotation).kind else {
        panic!("expected a list type");
    };
    assert!(!nullable);
    assert_eq!(
        tree.node(*inner).kind,
        SyntaxNodeKind::NamedType {
            name: crate::ByteSpan::new(56, 62),
            nullable: false,
        },
    );
}

#[test]
fn fragments_and_spreads() {
    let tree = parse_executable_document(
        r#"
        query { node { ...NodeFields ... on User { email } ... @skip(if: false) { id } } }
        fragment NodeFields on Node @cached { id }
        "#,
    )
    .unwrap();
    let definitions: Vec<_> = tree.definitions().collect();
    assert_eq!(definitions.len(), 2);

    let SyntaxNodeKind::Fragment { name, type_condition, directives, selection_set } =
        &definitions[1].1.kind
    else {
        panic!("expected a fragment");
    };
    assert_eq!(tree.text(*name), "NodeFields");
    assert_eq!(tree.text(*type_condition), "Node");
    assert_eq!(directives.len(), 1);
    assert_eq!(field_names(&tree, *selection_set), vec!["id"]);

    let SyntaxNodeKind::Operation { selection_set, .. } = &definitions[0].1.kind else {
        panic!("expected an operation");
    };
    let (_, node_field) = tree.children(*selection_set).next().unwrap();
    let SyntaxNodeKind::Field { selection_set, .. } = &node_field.kind else {
        panic!("expected a field");
    };
    let selections: Vec<_> = tree.children(*selection_set).map(|(_, n)| n.kind_name()).collect();
    assert_eq!(selections, vec!["fragment spread", "inline fragment", "inline fragment"]);

    let inline: Vec<_> = tree
        .children(*selection_set)
        .filter_map(|(_, n)| match &n.kind {
            SyntaxNodeKind::InlineFragment { type_condition, directives, .. } => {
                Some((type_condition.map(|s| tree.text(s)), directives.len()))
            },
            _ => None,
        })
        .collect();
    assert_eq!(inline, vec![(Some("User"), 0), (None, 1)]);
}

#[test]
fn aliases_arguments_and_directives() {
    let tree = parse_executable_document(
        "{ small: avatar(size: 32) @include(if: $big) large: avatar(size: 512) }",
    )
    .unwrap();
    let (_, operation) = tree.definitions().next().unwrap();
    let SyntaxNodeKind::Operation { selection_set, .. } = &operation.kind else {
        panic!("expected an operation");
    };
    assert_eq!(
        field_names(&tree, *selection_set),
        vec!["small:avatar", "large:avatar"],
    );
    let (_, first) = tree.children(*selection_set).next().unwrap();
    let SyntaxNodeKind::Field { arguments, directives, .. } = &first.kind else {
        panic!("expected a field");
    };
    assert_eq!(arguments.len(), 1);
    let (_, directive) = tree.children(*directives).next().unwrap();
    let SyntaxNodeKind::Directive { name, arguments } = &directive.kind else {
        panic!("expected a directive");
    };
    assert_eq!(tree.text(*name), "include");
    let (_, argument) = tree.children(*arguments).next().unwrap();
    let SyntaxNodeKind::Argument { value, .. } = &argument.kind else {
        panic!("expected an argument");
    };
    assert!(matches!(tree.node(*value).kind, SyntaxNodeKind::VariableValue { .. }));
}

/// `true`, `false`, `null` and keywords are legal field and type names.
#[test]
fn keywords_as_names() {
    let tree = parse_executable_document(
        "query query { true: null fragment on mutation } fragment F on query { type }",
    )
    .unwrap();
    let (_, operation) = tree.definitions().next().unwrap();
    let SyntaxNodeKind::Operation { name, selection_set, .. } = &operation.kind else {
        panic!("expected an operation");
    };
    assert_eq!(tree.text(name.unwrap()), "query");
    assert_eq!(
        field_names(&tree, *selection_set),
        vec!["true:null", "fragment", "on", "mutation"],
    );
}

#[test]
fn commas_and_comments_are_ignored() {
    let tree = parse_executable_document(
        "{ a, b,, # trailing\n c(x: 1, y: 2,) }",
    )
    .unwrap();
    let (_, operation) = tree.definitions().next().unwrap();
    let SyntaxNodeKind::Operation { selection_set, .. } = &operation.kind else {
        panic!("expected an operation");
    };
    assert_eq!(field_names(&tree, *selection_set), vec!["a", "b", "c"]);
}

/// Nesting up to the limit parses.
#[test]
fn nesting_at_the_limit() {
    let depth = <crate::GraphQLParser<'static>>::MAX_RECURSION_DEPTH;
    let source = format!("{}x{}", "{ f ".repeat(depth), " }".repeat(depth));
    assert!(parse_executable_document(&source).is_ok());
}
