use crate::parser::ConstContext;
use crate::parser::GraphQLParser;
use crate::parser::ParseResult;
use crate::syntax::NodeRange;
use crate::syntax::OperationKind;
use crate::syntax::SyntaxNode;
use crate::syntax::SyntaxNodeKind;
use crate::token::GraphQLTokenKind;
use crate::token_source::GraphQLTokenSource;
use crate::GraphQLParseError;
use crate::GraphQLParseErrorKind;

/// Chooses the maker for a top-level definition from its leading token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DefinitionMaker {
    /// `query`, `mutation`, `subscription`, or the `{` shorthand.
    Operation,
    /// `fragment`.
    Fragment,
}

impl DefinitionMaker {
    pub fn select(kind: &GraphQLTokenKind) -> Option<Self> {
        match kind {
            GraphQLTokenKind::CurlyBraceOpen => Some(DefinitionMaker::Operation),
            GraphQLTokenKind::Name("query" | "mutation" | "subscription") => {
                Some(DefinitionMaker::Operation)
            },
            GraphQLTokenKind::Name("fragment") => Some(DefinitionMaker::Fragment),
            _ => None,
        }
    }

    pub fn make<'src, TTokenSource: GraphQLTokenSource<'src>>(
        self,
        parser: &mut GraphQLParser<'src, TTokenSource>,
    ) -> ParseResult<SyntaxNode> {
        match self {
            DefinitionMaker::Operation => parser.make_operation(),
            DefinitionMaker::Fragment => parser.make_fragment(),
        }
    }
}

impl<'src, TTokenSource: GraphQLTokenSource<'src>> GraphQLParser<'src, TTokenSource> {
    /// `OperationType Name? VariableDefinitions? Directives? SelectionSet`
    /// or the shorthand `SelectionSet`.
    pub(crate) fn make_operation(&mut self) -> ParseResult<SyntaxNode> {
        let (kind, start_span) = self.peek_token()?;

        if matches!(kind, GraphQLTokenKind::CurlyBraceOpen) {
            let selection_set = self.make_selection_set()?;
            return Ok(SyntaxNode::new(
                SyntaxNodeKind::Operation {
                    kind: OperationKind::Query,
                    name: None,
                    variables: NodeRange::EMPTY,
                    directives: NodeRange::EMPTY,
                    selection_set,
                },
                self.span_from(start_span),
            ));
        }

        let operation_kind = match kind {
            GraphQLTokenKind::Name("query") => OperationKind::Query,
            GraphQLTokenKind::Name("mutation") => OperationKind::Mutation,
            GraphQLTokenKind::Name("subscription") => OperationKind::Subscription,
            other => {
                return Err(self.unexpected(
                    &["query", "mutation", "subscription", "{"],
                    &other,
                    start_span,
                ));
            },
        };
        self.consume_token()?;

        let (next_kind, _) = self.peek_token()?;
        let name = if next_kind.as_name().is_some() {
            Some(self.expect_name()?.0)
        } else {
            None
        };

        let variables = if self.peek_is(&GraphQLTokenKind::ParenOpen)? {
            self.make_variable_definitions()?
        } else {
            NodeRange::EMPTY
        };
        let directives = self.make_directives(ConstContext::AllowVariables)?;

        let (kind, span) = self.peek_token()?;
        if !matches!(kind, GraphQLTokenKind::CurlyBraceOpen) {
            let mut error = self.unexpected(&["{"], &kind, span);
            error.add_help(format!("a {operation_kind} operation requires a selection set"));
            return Err(error);
        }
        let selection_set = self.make_selection_set()?;

        Ok(SyntaxNode::new(
            SyntaxNodeKind::Operation {
                kind: operation_kind,
                name,
                variables,
                directives,
                selection_set,
            },
            self.span_from(start_span),
        ))
    }

    /// `( VariableDefinition+ )`
    fn make_variable_definitions(&mut self) -> ParseResult<NodeRange> {
        let open = self.expect(&GraphQLTokenKind::ParenOpen)?;
        if self.peek_is(&GraphQLTokenKind::ParenClose)? {
            let close = self.consume_token()?;
            return Err(self.invalid_syntax(
                "variable definitions cannot be empty",
                open.span.join(&close.span),
            ));
        }

        let scratch = self.arena.begin_scratch();
        while !self.peek_is(&GraphQLTokenKind::ParenClose)? {
            let definition = self.make_variable_definition()?;
            self.arena.append(&scratch, definition);
        }
        self.expect(&GraphQLTokenKind::ParenClose)?;
        Ok(self.arena.commit(scratch))
    }

    /// `$name : Type DefaultValue? Directives?`
    fn make_variable_definition(&mut self) -> ParseResult<SyntaxNode> {
        let dollar = self.expect(&GraphQLTokenKind::Dollar)?;
        let (name, _) = self.expect_name()?;
        self.expect(&GraphQLTokenKind::Colon)?;

        let type_node = self.make_type_annotation()?;
        let type_annotation = self.commit_single(type_node);

        let default_value = if self.peek_is(&GraphQLTokenKind::Equals)? {
            self.consume_token()?;
            let value = self.make_value(ConstContext::VariableDefaultValue)?;
            Some(self.commit_single(value))
        } else {
            None
        };
        let directives = self.make_directives(ConstContext::DirectiveOnVariableDefinition)?;

        Ok(SyntaxNode::new(
            SyntaxNodeKind::VariableDefinition {
                name,
                type_annotation,
                default_value,
                directives,
            },
            self.span_from(dollar.span),
        ))
    }

    /// `fragment Name on TypeCondition Directives? SelectionSet`
    pub(crate) fn make_fragment(&mut self) -> ParseResult<SyntaxNode> {
        let start_span = self.expect_keyword("fragment")?;

        let (kind, span) = self.peek_token()?;
        if kind.is_keyword("on") {
            let mut error = GraphQLParseError::new(
                "fragment name cannot be `on`",
                span,
                GraphQLParseErrorKind::ReservedName {
                    name: "on".to_string(),
                },
            );
            error.add_help("`on` introduces the type condition; add a fragment name before it");
            return Err(error);
        }
        let (name, _) = self.expect_name()?;

        let (kind, span) = self.peek_token()?;
        if !kind.is_keyword("on") {
            let mut error = self.unexpected(&["on"], &kind, span);
            error.add_note("fragment definitions require a type condition (`on TypeName`)");
            return Err(error);
        }
        self.consume_token()?;
        let (type_condition, _) = self.expect_name()?;

        let directives = self.make_directives(ConstContext::AllowVariables)?;
        let selection_set = self.make_selection_set()?;

        Ok(SyntaxNode::new(
            SyntaxNodeKind::Fragment {
                name,
                type_condition,
                directives,
                selection_set,
            },
            self.span_from(start_span),
        ))
    }
}

