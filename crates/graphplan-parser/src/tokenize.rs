use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token_source::StrGraphQLTokenSource;
use crate::LexicalError;

/// Lexes all of `text` into tokens, ending with an `Eof` token.
///
/// Fails with the first malformed lexical construct.
pub fn tokenize(text: &str) -> Result<Vec<GraphQLToken<'_>>, LexicalError> {
    let mut tokens = Vec::new();
    for token in StrGraphQLTokenSource::new(text) {
        if let GraphQLTokenKind::Error { message, error_notes } = token.kind {
            return Err(LexicalError::new(message, token.span, error_notes));
        }
        tokens.push(token);
    }
    log::trace!("lexed {} tokens", tokens.len());
    Ok(tokens)
}
