use crate::token::GraphQLTokenKind;
use crate::token_source::StrGraphQLTokenSource;
use crate::GraphQLTokenStream;

#[test]
fn peek_does_not_consume() {
    let mut stream = GraphQLTokenStream::new(StrGraphQLTokenSource::new("a b"));
    assert_eq!(stream.peek().unwrap().kind, GraphQLTokenKind::Name("a"));
    assert_eq!(stream.peek().unwrap().kind, GraphQLTokenKind::Name("a"));
    assert_eq!(stream.consumed_count(), 0);
}

#[test]
fn peek_nth_looks_ahead() {
    let mut stream = GraphQLTokenStream::new(StrGraphQLTokenSource::new("... on T"));
    assert_eq!(stream.peek_nth(1).unwrap().kind, GraphQLTokenKind::Name("on"));
    assert_eq!(stream.peek_nth(2).unwrap().kind, GraphQLTokenKind::Name("T"));
    assert_eq!(stream.peek_nth(3).unwrap().kind, GraphQLTokenKind::Eof);
    assert!(stream.peek_nth(4).is_none());
    assert_eq!(stream.consume().unwrap().kind, GraphQLTokenKind::Ellipsis);
    assert!(stream.peek_is_keyword("on"));
}

#[test]
fn consume_until_exhausted() {
    let mut stream = GraphQLTokenStream::new(StrGraphQLTokenSource::new("x"));
    assert!(!stream.is_at_end());
    stream.consume();
    assert!(stream.is_at_end());
    assert_eq!(stream.consume().unwrap().kind, GraphQLTokenKind::Eof);
    assert!(stream.consume().is_none());
    assert_eq!(stream.consumed_count(), 2);
}
