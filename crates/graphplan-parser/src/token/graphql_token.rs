use crate::token::GraphQLTokenKind;
use crate::token::GraphQLTriviaToken;
use crate::ByteSpan;
use crate::GraphQLSourceSpan;
use smallvec::SmallVec;

/// Type alias for trivia storage. Uses SmallVec to avoid heap allocation
/// for the common case of 0-2 trivia items per token.
pub type GraphQLTriviaTokenVec<'src> = SmallVec<[GraphQLTriviaToken<'src>; 2]>;

/// A GraphQL token with location (span) information and an ordered list of any
/// preceding trivia (comments, commas).
///
/// Trivia is attached to the *following* token, so the parser can simply
/// call `peek()` and `consume()` without ever seeing a comma or comment.
/// Tokens are immutable once produced.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphQLToken<'src> {
    /// The kind of token (including `Error` for lexer errors).
    pub kind: GraphQLTokenKind<'src>,

    /// Trivia (comments, commas) that precede this token.
    pub preceding_trivia: GraphQLTriviaTokenVec<'src>,

    /// The source location span of this token.
    pub span: GraphQLSourceSpan,
}

impl<'src> GraphQLToken<'src> {
    /// Convenience constructor for a token with no preceding trivia.
    pub fn new(kind: GraphQLTokenKind<'src>, span: GraphQLSourceSpan) -> Self {
        Self {
            kind,
            preceding_trivia: SmallVec::new(),
            span,
        }
    }

    /// Byte-offset view of this token into the source text.
    pub fn byte_span(&self) -> ByteSpan {
        self.span.byte_span()
    }

    /// Number of commas that preceded this token.
    pub fn preceding_comma_count(&self) -> usize {
        self.preceding_trivia
            .iter()
            .filter(|trivia| matches!(trivia, GraphQLTriviaToken::Comma { .. }))
            .count()
    }
}
