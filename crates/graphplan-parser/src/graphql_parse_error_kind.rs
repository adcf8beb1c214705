/// Categorizes parse errors for programmatic handling.
///
/// Each variant contains minimal data needed for programmatic decisions.
/// Human-readable context belongs in the `notes` of `GraphQLParseError`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphQLParseErrorKind {
    /// Expected specific token(s) but found something else.
    ///
    /// # Example
    /// ```text
    /// query { user(id 5) }
    ///                 ^ expected `:`, found `5`
    /// ```
    #[error("unexpected token: `{found}`")]
    UnexpectedToken {
        expected: Vec<String>,
        found: String,
    },

    /// The document ended before a complete construct was parsed.
    #[error("unexpected end of input")]
    UnexpectedEof {
        expected: Vec<String>,
    },

    /// The lexer produced an error token. The lexer's message and notes
    /// are preserved in the parent `GraphQLParseError`.
    #[error("lexer error")]
    LexerError,

    /// Structurally invalid input that is not a simple token mismatch
    /// (empty selection set, variable in a const context, nesting limit).
    #[error("invalid syntax")]
    InvalidSyntax,

    /// Reserved name used where it is not allowed (e.g. `fragment on on T`).
    #[error("reserved name: `{name}`")]
    ReservedName {
        name: String,
    },
}
