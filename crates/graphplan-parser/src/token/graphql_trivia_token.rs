use crate::GraphQLSourceSpan;

/// A "trivia token" is a token that doesn't affect parsing but is still
/// preserved for tooling use.
///
/// Trivia includes comments and commas, which are attached to the following
/// token as "preceding trivia".
#[derive(Clone, Debug, PartialEq)]
pub enum GraphQLTriviaToken<'src> {
    /// A `#` comment extending to the end of the line.
    Comment {
        /// The comment text (excluding the leading `#`).
        value: &'src str,
        span: GraphQLSourceSpan,
    },

    /// A comma separator. Commas are insignificant in GraphQL; the parser
    /// never requires one.
    Comma {
        span: GraphQLSourceSpan,
    },
}
