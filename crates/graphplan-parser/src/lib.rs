//! Lexer, token stream, arena-backed syntax tree and recursive-descent
//! parser for GraphQL executable documents.
//!
//! Lexing and parsing fail fast: the first lexical or syntactic error aborts
//! processing of the whole document.

mod byte_span;
mod graphql_error_note;
mod graphql_parse_error;
mod graphql_parse_error_kind;
mod graphql_source_span;
mod graphql_string_parsing_error;
mod graphql_token_stream;
mod lexical_error;
pub mod parser;
mod source_position;
pub mod syntax;
pub mod token;
pub mod token_source;
mod tokenize;

pub use byte_span::ByteSpan;
pub use graphql_error_note::GraphQLErrorNote;
pub use graphql_error_note::GraphQLErrorNoteKind;
pub use graphql_error_note::GraphQLErrorNotes;
pub use graphql_parse_error::GraphQLParseError;
pub use graphql_parse_error_kind::GraphQLParseErrorKind;
pub use graphql_source_span::GraphQLSourceSpan;
pub use graphql_string_parsing_error::GraphQLStringParsingError;
pub use graphql_token_stream::GraphQLTokenStream;
pub use lexical_error::LexicalError;
pub use parser::parse_const_value;
pub use parser::parse_executable_document;
pub use parser::parse_type_annotation;
pub use parser::GraphQLParser;
pub use parser::ParseResult;
pub use smallvec::smallvec;
pub use smallvec::SmallVec;
pub use source_position::SourcePosition;
pub use tokenize::tokenize;

#[cfg(test)]
mod tests;
