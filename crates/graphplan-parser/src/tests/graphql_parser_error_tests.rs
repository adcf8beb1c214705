//! Tests for syntax errors in executable documents.

use crate::parse_executable_document;
use crate::GraphQLErrorNoteKind;
use crate::GraphQLParseError;
use crate::GraphQLParseErrorKind;

fn parse_error(source: &str) -> GraphQLParseError {
    match parse_executable_document(source) {
        Ok(_) => panic!("expected {source:?} to fail to parse"),
        Err(error) => error,
    }
}

#[test]
fn empty_document() {
    let error = parse_error("   ");
    assert!(matches!(error.kind(), GraphQLParseErrorKind::UnexpectedEof { .. }));
}

#[test]
fn empty_selection_set() {
    let error = parse_error("query { a {} }");
    assert_eq!(error.kind(), &GraphQLParseErrorKind::InvalidSyntax);
    assert_eq!(error.message(), "selection set cannot be empty");
    assert_eq!(error.span().start_inclusive.col(), 10);
    assert_eq!(error.span().end_exclusive.col(), 12);
}

#[test]
fn empty_argument_list() {
    let error = parse_error("{ a() }");
    assert_eq!(error.message(), "argument list cannot be empty");
}

#[test]
fn empty_variable_definitions() {
    let error = parse_error("query Q() { a }");
    assert_eq!(error.message(), "variable definitions cannot be empty");
}

#[test]
fn fragment_named_on() {
    let error = parse_error("fragment on on User { id }");
    assert_eq!(
        error.kind(),
        &GraphQLParseErrorKind::ReservedName { name: "on".to_string() },
    );
}

#[test]
fn fragment_without_type_condition() {
    let error = parse_error("fragment F { id }");
    assert!(matches!(
        error.kind(),
        GraphQLParseErrorKind::UnexpectedToken { expected, .. } if expected == &vec!["on".to_string()],
    ));
}

#[test]
fn variable_in_default_value() {
    let error = parse_error("query ($a: Int = $b) { f }");
    assert_eq!(error.kind(), &GraphQLParseErrorKind::InvalidSyntax);
    assert!(error.message().contains("variable default values"));
}

#[test]
fn variable_in_variable_directive() {
    let error = parse_error("query ($a: Int @tag(name: $b)) { f }");
    assert!(error.message().contains("directive arguments on variable definitions"));
}

#[test]
fn type_system_definition_gets_help() {
    let error = parse_error("type User { id: ID }");
    assert!(matches!(error.kind(), GraphQLParseErrorKind::UnexpectedToken { .. }));
    assert!(error
        .notes()
        .iter()
        .any(|note| note.kind == GraphQLErrorNoteKind::Help
            && note.message.contains("operations and fragments")));
}

#[test]
fn missing_selection_set_on_named_operation() {
    let error = parse_error("query Q");
    assert!(matches!(error.kind(), GraphQLParseErrorKind::UnexpectedEof { .. }));
}

#[test]
fn unclosed_selection_set() {
    let error = parse_error("{ a { b }");
    assert!(matches!(
        error.kind(),
        GraphQLParseErrorKind::UnexpectedEof { .. },
    ));
}

#[test]
fn missing_argument_colon() {
    let error = parse_error("{ user(id 5) }");
    assert_eq!(
        error.kind(),
        &GraphQLParseErrorKind::UnexpectedToken {
            expected: vec![":".to_string()],
            found: "5".to_string(),
        },
    );
    assert_eq!(error.format_oneline(), "1:11: error: expected `:`, found `5`");
}

/// Lexer failures surface as `LexerError` with the lexer's message.
#[test]
fn lexer_error_aborts_parse() {
    let error = parse_error("{ a(s: \"open) }");
    assert_eq!(error.kind(), &GraphQLParseErrorKind::LexerError);
    assert!(error.is_lexical());
    assert!(error.message().contains("Unterminated string"));
}

#[test]
fn nesting_past_the_limit() {
    let depth = <crate::GraphQLParser<'static>>::MAX_RECURSION_DEPTH + 1;
    let source = format!("{}x{}", "{ f ".repeat(depth), " }".repeat(depth));
    let error = parse_error(&source);
    assert_eq!(error.kind(), &GraphQLParseErrorKind::InvalidSyntax);
    assert!(error.message().contains("maximum nesting depth"));
}
