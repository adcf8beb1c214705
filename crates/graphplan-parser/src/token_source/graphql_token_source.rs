use crate::token::GraphQLToken;

/// Marker trait for [`GraphQLToken`] lexers (iterators that generate
/// [`GraphQLToken`]).
///
/// Implementors produce tokens one at a time; all lookahead and buffering is
/// handled by [`GraphQLTokenStream`](crate::GraphQLTokenStream).
///
/// Lexers are responsible for:
/// - Skipping whitespace and attaching comments/commas to the next token
/// - Emitting [`GraphQLTokenKind::Error`](crate::token::GraphQLTokenKind::Error)
///   for malformed input
/// - Emitting a final [`GraphQLTokenKind::Eof`](crate::token::GraphQLTokenKind::Eof)
///   token carrying any trailing trivia
pub trait GraphQLTokenSource<'src>: Iterator<Item = GraphQLToken<'src>> {}

impl<'src, T> GraphQLTokenSource<'src> for T where T: Iterator<Item = GraphQLToken<'src>> {}
