//! Recursive-descent parser for executable documents.
//!
//! Each grammar production has a "maker": a method that expects the token
//! stream to be positioned at the production's first token, consumes exactly
//! that production's tokens and returns the node it built. Productions with
//! alternatives are chosen by small dispatch enums keyed on the leading
//! token ([`DefinitionMaker`], [`SelectionMaker`], [`InputValueMaker`]).
//!
//! Parsing is all-or-nothing: the first error aborts the parse.

mod arguments_maker;
mod definition_maker;
mod input_value_maker;
mod selection_set_maker;
mod type_annotation_maker;

pub use definition_maker::DefinitionMaker;
pub use input_value_maker::InputValueMaker;
pub use selection_set_maker::SelectionMaker;

use crate::syntax::NodeIndex;
use crate::syntax::SyntaxArena;
use crate::syntax::SyntaxNode;
use crate::syntax::SyntaxNodeKind;
use crate::syntax::SyntaxTree;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token_source::GraphQLTokenSource;
use crate::token_source::StrGraphQLTokenSource;
use crate::ByteSpan;
use crate::GraphQLParseError;
use crate::GraphQLParseErrorKind;
use crate::GraphQLSourceSpan;
use crate::GraphQLTokenStream;
use crate::SourcePosition;

pub type ParseResult<T> = Result<T, GraphQLParseError>;

/// Where a value is being parsed, which decides whether `$variable`
/// references are legal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ConstContext {
    AllowVariables,
    VariableDefaultValue,
    DirectiveOnVariableDefinition,
    StandaloneValue,
}

impl ConstContext {
    fn description(&self) -> &'static str {
        match self {
            ConstContext::AllowVariables => "argument values",
            ConstContext::VariableDefaultValue => "variable default values",
            ConstContext::DirectiveOnVariableDefinition => {
                "directive arguments on variable definitions"
            },
            ConstContext::StandaloneValue => "constant values",
        }
    }
}

/// Parser for GraphQL executable documents, producing an arena-backed
/// [`SyntaxTree`].
///
/// ```
/// use graphplan_parser::GraphQLParser;
///
/// let tree = GraphQLParser::new("query { me { name } }")
///     .parse_executable_document()
///     .unwrap();
/// assert_eq!(tree.definitions().count(), 1);
/// ```
pub struct GraphQLParser<
    'src,
    TTokenSource: GraphQLTokenSource<'src> = StrGraphQLTokenSource<'src>,
> {
    source: &'src str,
    token_stream: GraphQLTokenStream<'src, TTokenSource>,
    arena: SyntaxArena,

    /// Shared depth counter for selection sets, values and type
    /// annotations.
    recursion_depth: usize,

    /// End of the most recently consumed token; anchors EOF errors and the
    /// end of node spans.
    last_end_position: Option<SourcePosition>,
}

impl<'src> GraphQLParser<'src, StrGraphQLTokenSource<'src>> {
    pub fn new(source: &'src str) -> Self {
        Self::with_arena(source, SyntaxArena::new())
    }

    /// Parses into `arena` (which is reset first), reusing its allocations.
    pub fn with_arena(source: &'src str, arena: SyntaxArena) -> Self {
        Self::from_token_source(source, StrGraphQLTokenSource::new(source), arena)
    }
}

impl<'src, TTokenSource: GraphQLTokenSource<'src>> GraphQLParser<'src, TTokenSource> {
    /// Maximum nesting depth for selection sets, values and type
    /// annotations combined.
    pub const MAX_RECURSION_DEPTH: usize = 64;

    /// `source` must be the text `token_source` lexes; node spans are
    /// resolved against it.
    pub fn from_token_source(
        source: &'src str,
        token_source: TTokenSource,
        mut arena: SyntaxArena,
    ) -> Self {
        arena.reset();
        Self {
            source,
            token_stream: GraphQLTokenStream::new(token_source),
            arena,
            recursion_depth: 0,
            last_end_position: None,
        }
    }

    // =========================================================================
    // Entry points
    // =========================================================================

    /// Parses a full executable document (operations and fragments).
    pub fn parse_executable_document(mut self) -> ParseResult<SyntaxTree<'src>> {
        let (start_kind, start_span) = self.peek_token()?;
        if matches!(start_kind, GraphQLTokenKind::Eof) {
            return Err(self.unexpected(
                &["query", "mutation", "subscription", "fragment", "{"],
                &start_kind,
                start_span,
            ));
        }

        let definitions = self.arena.begin_scratch();
        loop {
            let (kind, span) = self.peek_token()?;
            if matches!(kind, GraphQLTokenKind::Eof) {
                break;
            }
            let Some(maker) = DefinitionMaker::select(&kind) else {
                let mut error = self.unexpected(
                    &["query", "mutation", "subscription", "fragment", "{"],
                    &kind,
                    span,
                );
                if kind.as_name().is_some() {
                    error.add_help(
                        "executable documents may only contain operations and fragments",
                    );
                }
                return Err(error);
            };
            let node = maker.make(&mut self)?;
            self.arena.append(&definitions, node);
        }
        let definition_count = self.arena.scratch_len(&definitions);
        let definitions = self.arena.commit(definitions);
        let span = self.span_from(start_span);
        let root = self
            .arena
            .commit_single(SyntaxNode::new(SyntaxNodeKind::Document { definitions }, span));

        log::debug!(
            "parsed executable document: {definition_count} definitions, {} nodes",
            self.arena.len(),
        );
        Ok(SyntaxTree::new(self.source, self.arena, root))
    }

    /// Parses a standalone type annotation such as `[User!]!`.
    pub fn parse_type_annotation(mut self) -> ParseResult<SyntaxTree<'src>> {
        let node = self.make_type_annotation()?;
        self.expect_eof()?;
        let root = self.arena.commit_single(node);
        Ok(SyntaxTree::new(self.source, self.arena, root))
    }

    /// Parses a standalone constant value such as `{ id: 4, tags: ["a"] }`.
    pub fn parse_const_value(mut self) -> ParseResult<SyntaxTree<'src>> {
        let node = self.make_value(ConstContext::StandaloneValue)?;
        self.expect_eof()?;
        let root = self.arena.commit_single(node);
        Ok(SyntaxTree::new(self.source, self.arena, root))
    }

    // =========================================================================
    // Token helpers
    // =========================================================================

    /// Clones the next token's kind and span. A lexer error token becomes
    /// the parse error.
    fn peek_token(&mut self) -> ParseResult<(GraphQLTokenKind<'src>, GraphQLSourceSpan)> {
        let eof_span = self.eof_span();
        match self.token_stream.peek() {
            None => Ok((GraphQLTokenKind::Eof, eof_span)),
            Some(GraphQLToken {
                kind: GraphQLTokenKind::Error { message, error_notes },
                span,
                ..
            }) => Err(GraphQLParseError::from_lexer_error(
                message.clone(),
                *span,
                error_notes.clone(),
            )),
            Some(token) => Ok((token.kind.clone(), token.span)),
        }
    }

    /// The token after the next one, without consuming anything.
    fn peek_second_kind(&mut self) -> Option<GraphQLTokenKind<'src>> {
        self.token_stream.peek_nth(1).map(|token| token.kind.clone())
    }

    fn peek_is(&mut self, expected: &GraphQLTokenKind) -> ParseResult<bool> {
        let (kind, _) = self.peek_token()?;
        Ok(kind.same_variant(expected))
    }

    fn peek_is_keyword(&mut self, keyword: &str) -> bool {
        self.token_stream.peek_is_keyword(keyword)
    }

    fn consume_token(&mut self) -> ParseResult<GraphQLToken<'src>> {
        self.peek_token()?;
        match self.token_stream.consume() {
            Some(token) => {
                self.last_end_position = Some(token.span.end_exclusive);
                Ok(token)
            },
            None => Err(GraphQLParseError::new(
                "unexpected end of input",
                self.eof_span(),
                GraphQLParseErrorKind::UnexpectedEof { expected: vec![] },
            )),
        }
    }

    /// Consumes the next token if it has the same variant as `expected`.
    fn expect(&mut self, expected: &GraphQLTokenKind) -> ParseResult<GraphQLToken<'src>> {
        let (kind, span) = self.peek_token()?;
        if !kind.same_variant(expected) {
            return Err(self.unexpected(&[&expected.display()], &kind, span));
        }
        self.consume_token()
    }

    /// Consumes a name. `true`, `false` and `null` are accepted, as the
    /// Name production allows them.
    fn expect_name(&mut self) -> ParseResult<(ByteSpan, GraphQLSourceSpan)> {
        let (kind, span) = self.peek_token()?;
        if kind.as_name().is_none() {
            return Err(self.unexpected(&["name"], &kind, span));
        }
        let token = self.consume_token()?;
        Ok((token.byte_span(), token.span))
    }

    /// Consumes the name `keyword`.
    fn expect_keyword(&mut self, keyword: &str) -> ParseResult<GraphQLSourceSpan> {
        let (kind, span) = self.peek_token()?;
        if !kind.is_keyword(keyword) {
            return Err(self.unexpected(&[keyword], &kind, span));
        }
        Ok(self.consume_token()?.span)
    }

    fn expect_eof(&mut self) -> ParseResult<()> {
        let (kind, span) = self.peek_token()?;
        if !matches!(kind, GraphQLTokenKind::Eof) {
            return Err(self.unexpected(&["end of input"], &kind, span));
        }
        Ok(())
    }

    /// Builds an "expected X, found Y" error (or an EOF error when the
    /// stream is exhausted).
    fn unexpected(
        &self,
        expected: &[&str],
        found: &GraphQLTokenKind,
        span: GraphQLSourceSpan,
    ) -> GraphQLParseError {
        let expected_list = expected
            .iter()
            .map(|e| format!("`{e}`"))
            .collect::<Vec<_>>()
            .join(", ");
        let expected: Vec<String> = expected.iter().map(|e| e.to_string()).collect();
        if matches!(found, GraphQLTokenKind::Eof) {
            return GraphQLParseError::new(
                format!("expected {expected_list}, found end of input"),
                span,
                GraphQLParseErrorKind::UnexpectedEof { expected },
            );
        }
        let found = found.display();
        GraphQLParseError::new(
            format!("expected {expected_list}, found `{found}`"),
            span,
            GraphQLParseErrorKind::UnexpectedToken { expected, found },
        )
    }

    fn invalid_syntax(&self, message: impl Into<String>, span: GraphQLSourceSpan) -> GraphQLParseError {
        GraphQLParseError::new(message, span, GraphQLParseErrorKind::InvalidSyntax)
    }

    fn eof_span(&self) -> GraphQLSourceSpan {
        GraphQLSourceSpan::point(self.last_end_position.unwrap_or_default())
    }

    /// Span from `start` to the end of the last consumed token.
    fn span_from(&self, start: GraphQLSourceSpan) -> GraphQLSourceSpan {
        let end = self.last_end_position.unwrap_or(start.end_exclusive);
        GraphQLSourceSpan::new(start.start_inclusive, end)
    }

    // =========================================================================
    // Recursion guard
    // =========================================================================

    fn enter_recursion(&mut self, span: GraphQLSourceSpan) -> ParseResult<()> {
        if self.recursion_depth >= Self::MAX_RECURSION_DEPTH {
            let mut error = self.invalid_syntax("maximum nesting depth exceeded", span);
            error.add_note(format!(
                "documents may nest selection sets, values and types at most {} levels deep",
                Self::MAX_RECURSION_DEPTH,
            ));
            return Err(error);
        }
        self.recursion_depth += 1;
        Ok(())
    }

    fn exit_recursion(&mut self) {
        self.recursion_depth = self.recursion_depth.saturating_sub(1);
    }

    fn commit_single(&mut self, node: SyntaxNode) -> NodeIndex {
        self.arena.commit_single(node)
    }
}

/// Parses an executable document from `text`.
pub fn parse_executable_document(text: &str) -> ParseResult<SyntaxTree<'_>> {
    GraphQLParser::new(text).parse_executable_document()
}

/// Parses a standalone type annotation such as `[ID!]`.
pub fn parse_type_annotation(text: &str) -> ParseResult<SyntaxTree<'_>> {
    GraphQLParser::new(text).parse_type_annotation()
}

/// Parses a standalone constant value (no variable references).
pub fn parse_const_value(text: &str) -> ParseResult<SyntaxTree<'_>> {
    GraphQLParser::new(text).parse_const_value()
}
