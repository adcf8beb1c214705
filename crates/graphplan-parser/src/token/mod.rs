//! This module provides the core token types produced by the lexer and
//! consumed by the parser.

mod graphql_token;
mod graphql_token_kind;
mod graphql_trivia_token;
mod string_value;

pub use graphql_token::GraphQLToken;
pub use graphql_token::GraphQLTriviaTokenVec;
pub use graphql_token_kind::GraphQLTokenKind;
pub use graphql_trivia_token::GraphQLTriviaToken;
pub use string_value::parse_string_value;

#[cfg(test)]
mod tests;
