use crate::parser::ConstContext;
use crate::parser::GraphQLParser;
use crate::parser::ParseResult;
use crate::syntax::NodeRange;
use crate::syntax::SyntaxNode;
use crate::syntax::SyntaxNodeKind;
use crate::token::GraphQLTokenKind;
use crate::token_source::GraphQLTokenSource;

/// Chooses the maker for one selection from its leading tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionMaker {
    /// `alias: name(args) @dirs { ... }`
    Field,
    /// `...Name @dirs`
    FragmentSpread,
    /// `... on Type @dirs { ... }` or `... @dirs { ... }`
    InlineFragment,
}

impl SelectionMaker {
    /// `second` is the token after `first`; it separates spreads from inline
    /// fragments, which both start with `...`.
    pub fn select(first: &GraphQLTokenKind, second: Option<&GraphQLTokenKind>) -> Option<Self> {
        match first {
            GraphQLTokenKind::Ellipsis => match second {
                Some(kind) if kind.is_keyword("on") => Some(SelectionMaker::InlineFragment),
                Some(kind) if kind.as_name().is_some() => Some(SelectionMaker::FragmentSpread),
                _ => Some(SelectionMaker::InlineFragment),
            },
            kind if kind.as_name().is_some() => Some(SelectionMaker::Field),
            _ => None,
        }
    }

    pub fn make<'src, TTokenSource: GraphQLTokenSource<'src>>(
        self,
        parser: &mut GraphQLParser<'src, TTokenSource>,
    ) -> ParseResult<SyntaxNode> {
        match self {
            SelectionMaker::Field => parser.make_field(),
            SelectionMaker::FragmentSpread => parser.make_fragment_spread(),
            SelectionMaker::InlineFragment => parser.make_inline_fragment(),
        }
    }
}

impl<'src, TTokenSource: GraphQLTokenSource<'src>> GraphQLParser<'src, TTokenSource> {
    /// `{ Selection+ }`
    pub(crate) fn make_selection_set(&mut self) -> ParseResult<NodeRange> {
        let open = self.expect(&GraphQLTokenKind::CurlyBraceOpen)?;
        if self.peek_is(&GraphQLTokenKind::CurlyBraceClose)? {
            let close = self.consume_token()?;
            let mut error =
                self.invalid_syntax("selection set cannot be empty", open.span.join(&close.span));
            error.add_help("select at least one field, or remove the braces");
            return Err(error);
        }

        self.enter_recursion(open.span)?;
        let result = self.make_selections();
        self.exit_recursion();
        result
    }

    fn make_selections(&mut self) -> ParseResult<NodeRange> {
        let scratch = self.arena.begin_scratch();
        loop {
            let (kind, span) = self.peek_token()?;
            if matches!(kind, GraphQLTokenKind::CurlyBraceClose) {
                self.consume_token()?;
                break;
            }
            let second = self.peek_second_kind();
            let Some(maker) = SelectionMaker::select(&kind, second.as_ref()) else {
                return Err(self.unexpected(&["name", "...", "}"], &kind, span));
            };
            let selection = maker.make(self)?;
            self.arena.append(&scratch, selection);
        }
        Ok(self.arena.commit(scratch))
    }

    /// `Alias? Name Arguments? Directives? SelectionSet?`
    fn make_field(&mut self) -> ParseResult<SyntaxNode> {
        let (first_name, start_span) = self.expect_name()?;
        let (alias, name) = if self.peek_is(&GraphQLTokenKind::Colon)? {
            self.consume_token()?;
            let (name, _) = self.expect_name()?;
            (Some(first_name), name)
        } else {
            (None, first_name)
        };

        let arguments = if self.peek_is(&GraphQLTokenKind::ParenOpen)? {
            self.make_arguments(ConstContext::AllowVariables)?
        } else {
            NodeRange::EMPTY
        };
        let directives = self.make_directives(ConstContext::AllowVariables)?;
        let selection_set = if self.peek_is(&GraphQLTokenKind::CurlyBraceOpen)? {
            self.make_selection_set()?
        } else {
            NodeRange::EMPTY
        };

        Ok(SyntaxNode::new(
            SyntaxNodeKind::Field {
                alias,
                name,
                arguments,
                directives,
                selection_set,
            },
            self.span_from(start_span),
        ))
    }

    /// `... FragmentName Directives?`
    fn make_fragment_spread(&mut self) -> ParseResult<SyntaxNode> {
        let ellipsis = self.expect(&GraphQLTokenKind::Ellipsis)?;
        let (name, _) = self.expect_name()?;
        let directives = self.make_directives(ConstContext::AllowVariables)?;
        Ok(SyntaxNode::new(
            SyntaxNodeKind::FragmentSpread { name, directives },
            self.span_from(ellipsis.span),
        ))
    }

    /// `... TypeCondition? Directives? SelectionSet`
    fn make_inline_fragment(&mut self) -> ParseResult<SyntaxNode> {
        let ellipsis = self.expect(&GraphQLTokenKind::Ellipsis)?;
        let type_condition = if self.peek_is_keyword("on") {
            self.consume_token()?;
            Some(self.expect_name()?.0)
        } else {
            None
        };
        let directives = self.make_directives(ConstContext::AllowVariables)?;
        let selection_set = self.make_selection_set()?;
        Ok(SyntaxNode::new(
            SyntaxNodeKind::InlineFragment {
                type_condition,
                directives,
                selection_set,
            },
            self.span_from(ellipsis.span),
        ))
    }
}
