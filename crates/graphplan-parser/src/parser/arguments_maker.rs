use crate::parser::ConstContext;
use crate::parser::GraphQLParser;
use crate::parser::ParseResult;
use crate::syntax::NodeRange;
use crate::syntax::SyntaxNode;
use crate::syntax::SyntaxNodeKind;
use crate::token::GraphQLTokenKind;
use crate::token_source::GraphQLTokenSource;

impl<'src, TTokenSource: GraphQLTokenSource<'src>> GraphQLParser<'src, TTokenSource> {
    /// `( Argument+ )`
    pub(crate) fn make_arguments(&mut self, context: ConstContext) -> ParseResult<NodeRange> {
        let open = self.expect(&GraphQLTokenKind::ParenOpen)?;
        if self.peek_is(&GraphQLTokenKind::ParenClose)? {
            let close = self.consume_token()?;
            let mut error =
                self.invalid_syntax("argument list cannot be empty", open.span.join(&close.span));
            error.add_help("remove the empty parentheses");
            return Err(error);
        }

        let scratch = self.arena.begin_scratch();
        while !self.peek_is(&GraphQLTokenKind::ParenClose)? {
            let argument = self.make_name_value_pair(context)?;
            self.arena.append(&scratch, argument);
        }
        self.expect(&GraphQLTokenKind::ParenClose)?;
        Ok(self.arena.commit(scratch))
    }

    /// `Name : Value`, shared by arguments and object-value fields.
    pub(crate) fn make_name_value_pair(&mut self, context: ConstContext) -> ParseResult<SyntaxNode> {
        let (name, start_span) = self.expect_name()?;
        self.expect(&GraphQLTokenKind::Colon)?;
        let value_node = self.make_value(context)?;
        let value = self.commit_single(value_node);
        Ok(SyntaxNode::new(
            SyntaxNodeKind::Argument { name, value },
            self.span_from(start_span),
        ))
    }

    /// `Directive*`, returning an empty range when no `@` follows.
    pub(crate) fn make_directives(&mut self, context: ConstContext) -> ParseResult<NodeRange> {
        if !self.peek_is(&GraphQLTokenKind::At)? {
            return Ok(NodeRange::EMPTY);
        }
        let scratch = self.arena.begin_scratch();
        while self.peek_is(&GraphQLTokenKind::At)? {
            let directive = self.make_directive(context)?;
            self.arena.append(&scratch, directive);
        }
        Ok(self.arena.commit(scratch))
    }

    /// `@ Name Arguments?`
    fn make_directive(&mut self, context: ConstContext) -> ParseResult<SyntaxNode> {
        let at = self.expect(&GraphQLTokenKind::At)?;
        let (name, _) = self.expect_name()?;
        let arguments = if self.peek_is(&GraphQLTokenKind::ParenOpen)? {
            self.make_arguments(context)?
        } else {
            NodeRange::EMPTY
        };
        Ok(SyntaxNode::new(
            SyntaxNodeKind::Directive { name, arguments },
            self.span_from(at.span),
        ))
    }
}
