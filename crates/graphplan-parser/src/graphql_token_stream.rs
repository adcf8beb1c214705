//! Bounded-lookahead buffer over a
//! [`GraphQLTokenSource`](crate::token_source::GraphQLTokenSource).

use std::collections::VecDeque;

use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token_source::GraphQLTokenSource;

/// Token stream with lookahead over any [`GraphQLTokenSource`].
///
/// Trivia is already attached to tokens by the lexer, so the parser only
/// ever calls `peek()` and `consume()`. Unconsumed tokens live in a
/// [`VecDeque`]; `consume()` pops from the front.
pub struct GraphQLTokenStream<'src, TTokenSource: GraphQLTokenSource<'src>> {
    token_source: TTokenSource,
    buffer: VecDeque<GraphQLToken<'src>>,
    consumed_count: usize,
}

impl<'src, TTokenSource: GraphQLTokenSource<'src>> GraphQLTokenStream<'src, TTokenSource> {
    pub fn new(token_source: TTokenSource) -> Self {
        Self {
            token_source,
            buffer: VecDeque::new(),
            consumed_count: 0,
        }
    }

    /// Advance to the next token and return it as an owned value.
    ///
    /// Returns `None` once the stream is exhausted (after `Eof`).
    pub fn consume(&mut self) -> Option<GraphQLToken<'src>> {
        self.ensure_buffer_has(1);
        let token = self.buffer.pop_front();
        if token.is_some() {
            self.consumed_count += 1;
        }
        token
    }

    /// Number of tokens consumed so far.
    pub fn consumed_count(&self) -> usize {
        self.consumed_count
    }

    fn ensure_buffer_has(&mut self, count: usize) {
        while self.buffer.len() < count {
            match self.token_source.next() {
                Some(token) => self.buffer.push_back(token),
                None => break,
            }
        }
    }

    /// `true` if no tokens remain or the next token is `Eof`.
    pub fn is_at_end(&mut self) -> bool {
        self.peek()
            .is_none_or(|token| matches!(token.kind, GraphQLTokenKind::Eof))
    }

    #[inline]
    pub fn peek(&mut self) -> Option<&GraphQLToken<'src>> {
        self.peek_nth(0)
    }

    /// Peek at the nth token ahead (0-indexed from the next unconsumed
    /// token).
    pub fn peek_nth(&mut self, n: usize) -> Option<&GraphQLToken<'src>> {
        self.ensure_buffer_has(n + 1);
        self.buffer.get(n)
    }

    /// `true` if the next token is the name `keyword`.
    pub fn peek_is_keyword(&mut self, keyword: &str) -> bool {
        self.peek().is_some_and(|token| token.kind.is_keyword(keyword))
    }
}
