//! Tests for `StrGraphQLTokenSource` on well-formed input.

use crate::token::GraphQLTokenKind;
use crate::token::GraphQLTriviaToken;
use crate::token_source::StrGraphQLTokenSource;

fn token_kinds(source: &str) -> Vec<GraphQLTokenKind<'_>> {
    StrGraphQLTokenSource::new(source).map(|t| t.kind).collect()
}

// =============================================================================
// Punctuators and names
// =============================================================================

#[test]
fn punctuators() {
    let kinds = token_kinds("{ } ( ) [ ] : = @ ! $ & | ...");
    assert_eq!(
        kinds,
        vec![
            GraphQLTokenKind::CurlyBraceOpen,
            GraphQLTokenKind::CurlyBraceClose,
            GraphQLTokenKind::ParenOpen,
            GraphQLTokenKind::ParenClose,
            GraphQLTokenKind::SquareBracketOpen,
            GraphQLTokenKind::SquareBracketClose,
            GraphQLTokenKind::Colon,
            GraphQLTokenKind::Equals,
            GraphQLTokenKind::At,
            GraphQLTokenKind::Bang,
            GraphQLTokenKind::Dollar,
            GraphQLTokenKind::Ampersand,
            GraphQLTokenKind::Pipe,
            GraphQLTokenKind::Ellipsis,
            GraphQLTokenKind::Eof,
        ]
    );
}

/// Punctuators are self-delimiting; `...Name` is an ellipsis then a name.
#[test]
fn adjacent_punctuators_and_spread() {
    let kinds = token_kinds("{...Frag}");
    assert_eq!(
        kinds,
        vec![
            GraphQLTokenKind::CurlyBraceOpen,
            GraphQLTokenKind::Ellipsis,
            GraphQLTokenKind::Name("Frag"),
            GraphQLTokenKind::CurlyBraceClose,
            GraphQLTokenKind::Eof,
        ]
    );
}

#[test]
fn names_and_keywords() {
    let kinds = token_kinds("_private camelCase v2 true false null query");
    assert_eq!(
        kinds,
        vec![
            GraphQLTokenKind::Name("_private"),
            GraphQLTokenKind::Name("camelCase"),
            GraphQLTokenKind::Name("v2"),
            GraphQLTokenKind::True,
            GraphQLTokenKind::False,
            GraphQLTokenKind::Null,
            GraphQLTokenKind::Name("query"),
            GraphQLTokenKind::Eof,
        ]
    );
}

/// Names are case-sensitive: `True` is a name, not the boolean keyword.
#[test]
fn keyword_lookalikes_are_names() {
    let kinds = token_kinds("True NULL");
    assert_eq!(
        kinds,
        vec![
            GraphQLTokenKind::Name("True"),
            GraphQLTokenKind::Name("NULL"),
            GraphQLTokenKind::Eof,
        ]
    );
}

// =============================================================================
// Numbers
// =============================================================================

#[test]
fn integers_keep_raw_text() {
    let kinds = token_kinds("0 -0 42 -2147483648 2147483648");
    assert_eq!(
        kinds,
        vec![
            GraphQLTokenKind::IntValue("0"),
            GraphQLTokenKind::IntValue("-0"),
            GraphQLTokenKind::IntValue("42"),
            GraphQLTokenKind::IntValue("-2147483648"),
            GraphQLTokenKind::IntValue("2147483648"),
            GraphQLTokenKind::Eof,
        ]
    );
}

#[test]
fn floats_keep_raw_text() {
    let kinds = token_kinds("1.5 -0.25 1e10 6.02E+23 1.0e-4");
    assert_eq!(
        kinds,
        vec![
            GraphQLTokenKind::FloatValue("1.5"),
            GraphQLTokenKind::FloatValue("-0.25"),
            GraphQLTokenKind::FloatValue("1e10"),
            GraphQLTokenKind::FloatValue("6.02E+23"),
            GraphQLTokenKind::FloatValue("1.0e-4"),
            GraphQLTokenKind::Eof,
        ]
    );
}

/// A number can be followed directly by a punctuator.
#[test]
fn number_followed_by_punctuator() {
    let kinds = token_kinds("[1,2]");
    assert_eq!(
        kinds,
        vec![
            GraphQLTokenKind::SquareBracketOpen,
            GraphQLTokenKind::IntValue("1"),
            GraphQLTokenKind::IntValue("2"),
            GraphQLTokenKind::SquareBracketClose,
            GraphQLTokenKind::Eof,
        ]
    );
}

// =============================================================================
// Strings
// =============================================================================

/// Escapes are validated but kept verbatim in the token.
#[test]
fn string_escapes_are_not_decoded() {
    let kinds = token_kinds(r#""a\nbé\u{1F600}\"""#);
    assert_eq!(
        kinds,
        vec![
            GraphQLTokenKind::StringValue(r#""a\nbé\u{1F600}\"""#),
            GraphQLTokenKind::Eof,
        ]
    );
}

#[test]
fn block_string_spans_lines() {
    let source = "\"\"\"\n  Hello\n    world \\\"\"\" done\n\"\"\" after";
    let tokens: Vec<_> = StrGraphQLTokenSource::new(source).collect();
    assert_eq!(tokens.len(), 3);
    assert!(matches!(tokens[0].kind, GraphQLTokenKind::StringValue(raw) if raw.ends_with("\"\"\"")));
    assert_eq!(tokens[1].kind, GraphQLTokenKind::Name("after"));
    assert_eq!(tokens[1].span.start_inclusive.line(), 3);
}

#[test]
fn empty_strings() {
    let kinds = token_kinds(r#""" """""""#);
    assert_eq!(
        kinds,
        vec![
            GraphQLTokenKind::StringValue("\"\""),
            GraphQLTokenKind::StringValue("\"\"\"\"\"\""),
            GraphQLTokenKind::Eof,
        ]
    );
}

// =============================================================================
// Trivia and positions
// =============================================================================

/// Commas and comments never appear as tokens; they ride along as trivia
/// on the following token.
#[test]
fn commas_and_comments_become_trivia() {
    let tokens: Vec<_> = StrGraphQLTokenSource::new("a, # note\n,b").collect();
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[1].kind, GraphQLTokenKind::Name("b"));
    assert_eq!(tokens[1].preceding_comma_count(), 2);
    assert!(tokens[1].preceding_trivia.iter().any(|trivia| matches!(
        trivia,
        GraphQLTriviaToken::Comment { value: " note", .. }
    )));
}

#[test]
fn trailing_comment_attaches_to_eof() {
    let tokens: Vec<_> = StrGraphQLTokenSource::new("a # end").collect();
    let eof = tokens.last().unwrap();
    assert_eq!(eof.kind, GraphQLTokenKind::Eof);
    assert_eq!(eof.preceding_trivia.len(), 1);
}

#[test]
fn bom_and_whitespace_are_skipped() {
    let kinds = token_kinds("\u{FEFF}\t a \r\n b");
    assert_eq!(
        kinds,
        vec![
            GraphQLTokenKind::Name("a"),
            GraphQLTokenKind::Name("b"),
            GraphQLTokenKind::Eof,
        ]
    );
}

/// `\r\n` counts as a single line break; columns count characters.
#[test]
fn positions_track_lines_and_columns() {
    let tokens: Vec<_> = StrGraphQLTokenSource::new("\"é\" a\r\n  b\rc").collect();
    let a = &tokens[1];
    assert_eq!(a.span.start_inclusive.line(), 0);
    assert_eq!(a.span.start_inclusive.col(), 4);
    assert_eq!(a.span.start_inclusive.byte_offset(), 5);

    let b = &tokens[2];
    assert_eq!(b.span.start_inclusive.line(), 1);
    assert_eq!(b.span.start_inclusive.col(), 2);

    let c = &tokens[3];
    assert_eq!(c.span.start_inclusive.line(), 2);
    assert_eq!(c.span.start_inclusive.col(), 0);
}

#[test]
fn comment_columns_count_characters() {
    let tokens: Vec<_> = StrGraphQLTokenSource::new("#ééé\nx #ü\ny").collect();
    assert_eq!(tokens[0].kind, GraphQLTokenKind::Name("x"));
    assert_eq!(tokens[0].span.start_inclusive.line(), 1);
    let y = &tokens[1];
    assert_eq!(y.span.start_inclusive.line(), 2);
    match &y.preceding_trivia[0] {
        GraphQLTriviaToken::Comment { span, .. } => {
            assert_eq!(span.start_inclusive.col(), 2);
            assert_eq!(span.end_exclusive.col(), 4);
        },
        other => panic!("expected comment, got {other:?}"),
    }
}

#[test]
fn token_text_is_borrowed_from_source() {
    let source = String::from("{ hero }");
    let tokens: Vec<_> = StrGraphQLTokenSource::new(&source).collect();
    let GraphQLTokenKind::Name(name) = tokens[1].kind else {
        panic!("expected a name");
    };
    assert_eq!(name.as_ptr(), source[2..].as_ptr());
}

#[test]
fn iterator_stops_after_eof() {
    let mut lexer = StrGraphQLTokenSource::new("");
    assert_eq!(lexer.next().map(|t| t.kind), Some(GraphQLTokenKind::Eof));
    assert!(lexer.next().is_none());
}
