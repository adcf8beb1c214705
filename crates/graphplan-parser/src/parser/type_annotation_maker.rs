use crate::parser::GraphQLParser;
use crate::parser::ParseResult;
use crate::syntax::SyntaxNode;
use crate::syntax::SyntaxNodeKind;
use crate::token::GraphQLTokenKind;
use crate::token_source::GraphQLTokenSource;

impl<'src, TTokenSource: GraphQLTokenSource<'src>> GraphQLParser<'src, TTokenSource> {
    /// `Name !?` or `[ Type ] !?`
    pub(crate) fn make_type_annotation(&mut self) -> ParseResult<SyntaxNode> {
        let (kind, span) = self.peek_token()?;
        self.enter_recursion(span)?;
        let result = match kind {
            GraphQLTokenKind::SquareBracketOpen => self.make_list_type(),
            kind if kind.as_name().is_some() => self.make_named_type(),
            other => Err(self.unexpected(&["type name", "["], &other, span)),
        };
        self.exit_recursion();
        result
    }

    fn make_named_type(&mut self) -> ParseResult<SyntaxNode> {
        let (name, start_span) = self.expect_name()?;
        let nullable = !self.consume_bang()?;
        Ok(SyntaxNode::new(
            SyntaxNodeKind::NamedType { name, nullable },
            self.span_from(start_span),
        ))
    }

    fn make_list_type(&mut self) -> ParseResult<SyntaxNode> {
        let open = self.expect(&GraphQLTokenKind::SquareBracketOpen)?;
        let inner_node = self.make_type_annotation()?;
        let inner = self.commit_single(inner_node);
        self.expect(&GraphQLTokenKind::SquareBracketClose)?;
        let nullable = !self.consume_bang()?;
        Ok(SyntaxNode::new(
            SyntaxNodeKind::ListType { inner, nullable },
            self.span_from(open.span),
        ))
    }

    /// Consumes a trailing `!` if present.
    fn consume_bang(&mut self) -> ParseResult<bool> {
        if self.peek_is(&GraphQLTokenKind::Bang)? {
            self.consume_token()?;
            return Ok(true);
        }
        Ok(false)
    }
}
