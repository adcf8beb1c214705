use crate::GraphQLErrorNotes;
use crate::GraphQLSourceSpan;

/// A malformed lexical construct: unterminated string, invalid escape,
/// invalid number, or an illegal character.
///
/// Produced by [`tokenize()`](crate::tokenize). Lexical errors are fatal:
/// tokenization stops at the first one.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{}: lexical error: {message}", span.start_inclusive)]
pub struct LexicalError {
    pub message: String,
    pub span: GraphQLSourceSpan,
    pub notes: GraphQLErrorNotes,
}

impl LexicalError {
    pub fn new(
        message: impl Into<String>,
        span: GraphQLSourceSpan,
        notes: GraphQLErrorNotes,
    ) -> Self {
        Self {
            message: message.into(),
            span,
            notes,
        }
    }
}
