use crate::token::GraphQLTokenKind;

#[test]
fn punctuator_strings() {
    assert_eq!(GraphQLTokenKind::Ellipsis.as_punctuator_str(), Some("..."));
    assert_eq!(GraphQLTokenKind::Bang.as_punctuator_str(), Some("!"));
    assert!(GraphQLTokenKind::Name("a").as_punctuator_str().is_none());
    assert!(!GraphQLTokenKind::Eof.is_punctuator());
}

/// `true`/`false`/`null` are usable as names but never match a keyword.
#[test]
fn literal_keywords_as_names() {
    assert_eq!(GraphQLTokenKind::True.as_name(), Some("true"));
    assert_eq!(GraphQLTokenKind::Null.as_name(), Some("null"));
    assert!(!GraphQLTokenKind::True.is_keyword("true"));
    assert!(GraphQLTokenKind::Name("on").is_keyword("on"));
    assert!(GraphQLTokenKind::IntValue("1").as_name().is_none());
}

#[test]
fn same_variant_ignores_payload() {
    assert!(GraphQLTokenKind::Name("a").same_variant(&GraphQLTokenKind::Name("b")));
    assert!(!GraphQLTokenKind::Name("a").same_variant(&GraphQLTokenKind::IntValue("1")));
    assert!(GraphQLTokenKind::Colon.same_variant(&GraphQLTokenKind::Colon));
    assert!(!GraphQLTokenKind::Colon.same_variant(&GraphQLTokenKind::Bang));
}

#[test]
fn display_for_messages() {
    assert_eq!(GraphQLTokenKind::StringValue("\"x\"").display(), "string");
    assert_eq!(GraphQLTokenKind::Eof.display(), "end of input");
    assert_eq!(GraphQLTokenKind::FloatValue("1.5").display(), "1.5");
    assert_eq!(GraphQLTokenKind::CurlyBraceOpen.display(), "{");
}

#[test]
fn parse_string_value_only_for_strings() {
    assert_eq!(
        GraphQLTokenKind::StringValue(r#""a\tb""#).parse_string_value(),
        Some(Ok("a\tb".to_string())),
    );
    assert!(GraphQLTokenKind::Name("a").parse_string_value().is_none());
}
