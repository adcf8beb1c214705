use crate::GraphQLErrorNotes;
use crate::GraphQLStringParsingError;

/// The kind of a GraphQL token.
///
/// Literal values (`IntValue`, `FloatValue`, `StringValue`) carry only their
/// raw source text, borrowed from the source. Numbers are validated by the
/// lexer but never converted; strings are validated but never decoded.
///
/// # Negative Numeric Literals
///
/// Negative numbers like `-123` are lexed as single tokens (e.g.
/// `IntValue("-123")`), matching the GraphQL grammar for
/// `IntValue`/`FloatValue`.
#[derive(Clone, Debug, PartialEq)]
pub enum GraphQLTokenKind<'src> {
    // =========================================================================
    // Punctuators
    // =========================================================================
    /// `&`
    Ampersand,
    /// `@`
    At,
    /// `!`
    Bang,
    /// `:`
    Colon,
    /// `}`
    CurlyBraceClose,
    /// `{`
    CurlyBraceOpen,
    /// `$`
    Dollar,
    /// `...`
    Ellipsis,
    /// `=`
    Equals,
    /// `)`
    ParenClose,
    /// `(`
    ParenOpen,
    /// `|`
    Pipe,
    /// `]`
    SquareBracketClose,
    /// `[`
    SquareBracketOpen,

    // =========================================================================
    // Literals (raw source text only)
    // =========================================================================
    /// A GraphQL name/identifier.
    Name(&'src str),

    /// Raw source text of an integer literal, including optional negative
    /// sign (e.g. `"-123"`, `"0"`).
    IntValue(&'src str),

    /// Raw source text of a float literal (e.g. `"-1.23e-4"`).
    FloatValue(&'src str),

    /// Raw source text of a string literal, including quotes and escapes
    /// (e.g. `"\"hello\\nworld\""`, `"\"\"\"block\"\"\""`).
    ///
    /// Use [`parse_string_value()`](Self::parse_string_value) to decode.
    StringValue(&'src str),

    // =========================================================================
    // Boolean and null (distinct from Name for type safety)
    // =========================================================================
    True,
    False,
    Null,

    /// End of input. The associated `GraphQLToken` may carry trailing trivia.
    Eof,

    /// A lexer error. The parser converts the first one it sees into a
    /// fatal [`GraphQLParseError`](crate::GraphQLParseError).
    Error {
        message: String,
        error_notes: GraphQLErrorNotes,
    },
}

impl<'src> GraphQLTokenKind<'src> {
    #[inline]
    pub fn error(message: impl Into<String>, error_notes: GraphQLErrorNotes) -> Self {
        GraphQLTokenKind::Error {
            message: message.into(),
            error_notes,
        }
    }

    /// Returns `true` if this token is a punctuator.
    pub fn is_punctuator(&self) -> bool {
        self.as_punctuator_str().is_some()
    }

    /// Returns the string representation of this token if it is a punctuator.
    pub fn as_punctuator_str(&self) -> Option<&'static str> {
        match self {
            GraphQLTokenKind::Ampersand => Some("&"),
            GraphQLTokenKind::At => Some("@"),
            GraphQLTokenKind::Bang => Some("!"),
            GraphQLTokenKind::Colon => Some(":"),
            GraphQLTokenKind::CurlyBraceClose => Some("}"),
            GraphQLTokenKind::CurlyBraceOpen => Some("{"),
            GraphQLTokenKind::Dollar => Some("$"),
            GraphQLTokenKind::Ellipsis => Some("..."),
            GraphQLTokenKind::Equals => Some("="),
            GraphQLTokenKind::ParenClose => Some(")"),
            GraphQLTokenKind::ParenOpen => Some("("),
            GraphQLTokenKind::Pipe => Some("|"),
            GraphQLTokenKind::SquareBracketClose => Some("]"),
            GraphQLTokenKind::SquareBracketOpen => Some("["),

            GraphQLTokenKind::Name(_)
            | GraphQLTokenKind::IntValue(_)
            | GraphQLTokenKind::FloatValue(_)
            | GraphQLTokenKind::StringValue(_)
            | GraphQLTokenKind::True
            | GraphQLTokenKind::False
            | GraphQLTokenKind::Null
            | GraphQLTokenKind::Eof
            | GraphQLTokenKind::Error { .. } => None,
        }
    }

    /// Returns `true` if this token is a value literal (`IntValue`,
    /// `FloatValue`, `StringValue`, `True`, `False`, or `Null`).
    pub fn is_value(&self) -> bool {
        matches!(
            self,
            GraphQLTokenKind::IntValue(_)
                | GraphQLTokenKind::FloatValue(_)
                | GraphQLTokenKind::StringValue(_)
                | GraphQLTokenKind::True
                | GraphQLTokenKind::False
                | GraphQLTokenKind::Null
        )
    }

    /// Returns `true` if this token represents a lexer error.
    pub fn is_error(&self) -> bool {
        matches!(self, GraphQLTokenKind::Error { .. })
    }

    /// Returns the name text if this token can be used as a GraphQL name.
    ///
    /// Per the GraphQL spec, `true`, `false`, and `null` match the Name
    /// production even though the lexer gives them distinct kinds.
    pub fn as_name(&self) -> Option<&'src str> {
        match self {
            GraphQLTokenKind::Name(name) => Some(name),
            GraphQLTokenKind::True => Some("true"),
            GraphQLTokenKind::False => Some("false"),
            GraphQLTokenKind::Null => Some("null"),
            _ => None,
        }
    }

    /// Returns `true` if this is a `Name` token with exactly `keyword` as its
    /// text. `True`/`False`/`Null` tokens never match.
    pub fn is_keyword(&self, keyword: &str) -> bool {
        matches!(self, GraphQLTokenKind::Name(name) if *name == keyword)
    }

    /// Decodes a `StringValue`'s raw text.
    ///
    /// Returns `None` if this is not a `StringValue`.
    pub fn parse_string_value(&self) -> Option<Result<String, GraphQLStringParsingError>> {
        match self {
            GraphQLTokenKind::StringValue(raw) => Some(crate::token::parse_string_value(raw)),
            _ => None,
        }
    }

    /// Human-readable description used in "expected X, found Y" messages.
    pub fn display(&self) -> String {
        if let Some(punct) = self.as_punctuator_str() {
            return punct.to_string();
        }
        match self {
            GraphQLTokenKind::Name(s)
            | GraphQLTokenKind::IntValue(s)
            | GraphQLTokenKind::FloatValue(s) => s.to_string(),
            GraphQLTokenKind::StringValue(_) => "string".to_string(),
            GraphQLTokenKind::True => "true".to_string(),
            GraphQLTokenKind::False => "false".to_string(),
            GraphQLTokenKind::Null => "null".to_string(),
            GraphQLTokenKind::Eof => "end of input".to_string(),
            GraphQLTokenKind::Error { message, .. } => {
                format!("tokenization error: {message}")
            },
            _ => unreachable!("punctuators handled above"),
        }
    }

    /// Compares token kinds by variant, ignoring payloads.
    ///
    /// Exhaustive on `self` so that adding a variant forces this to be
    /// revisited.
    pub fn same_variant(&self, other: &GraphQLTokenKind) -> bool {
        match self {
            GraphQLTokenKind::Name(_) => matches!(other, GraphQLTokenKind::Name(_)),
            GraphQLTokenKind::IntValue(_) => matches!(other, GraphQLTokenKind::IntValue(_)),
            GraphQLTokenKind::FloatValue(_) => matches!(other, GraphQLTokenKind::FloatValue(_)),
            GraphQLTokenKind::StringValue(_) => matches!(other, GraphQLTokenKind::StringValue(_)),
            GraphQLTokenKind::Error { .. } => matches!(other, GraphQLTokenKind::Error { .. }),
            GraphQLTokenKind::Ampersand
            | GraphQLTokenKind::At
            | GraphQLTokenKind::Bang
            | GraphQLTokenKind::Colon
            | GraphQLTokenKind::CurlyBraceClose
            | GraphQLTokenKind::CurlyBraceOpen
            | GraphQLTokenKind::Dollar
            | GraphQLTokenKind::Ellipsis
            | GraphQLTokenKind::Equals
            | GraphQLTokenKind::ParenClose
            | GraphQLTokenKind::ParenOpen
            | GraphQLTokenKind::Pipe
            | GraphQLTokenKind::SquareBracketClose
            | GraphQLTokenKind::SquareBracketOpen
            | GraphQLTokenKind::True
            | GraphQLTokenKind::False
            | GraphQLTokenKind::Null
            | GraphQLTokenKind::Eof => self == other,
        }
    }
}
