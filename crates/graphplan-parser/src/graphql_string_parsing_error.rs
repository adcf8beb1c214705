/// Error returned when decoding a GraphQL string value fails.
///
/// The lexer already rejects invalid escapes, so this only surfaces when
/// [`parse_string_value()`](crate::token::parse_string_value) is handed text
/// that did not come from a successfully lexed `StringValue` token.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum GraphQLStringParsingError {
    /// An invalid escape sequence was encountered (e.g. `\q`).
    #[error("Invalid escape sequence: `{0}`")]
    InvalidEscapeSequence(String),

    /// The string was not properly terminated.
    #[error("Unterminated string: missing closing quote")]
    UnterminatedString,

    /// An invalid Unicode escape sequence was encountered (e.g. `\u{ZZZZ}`).
    #[error("Invalid unicode escape: `{0}`")]
    InvalidUnicodeEscape(String),
}
