use crate::parser::ConstContext;
use crate::parser::GraphQLParser;
use crate::parser::ParseResult;
use crate::syntax::ScalarValueKind;
use crate::syntax::SyntaxNode;
use crate::syntax::SyntaxNodeKind;
use crate::token::GraphQLTokenKind;
use crate::token_source::GraphQLTokenSource;

/// Chooses the maker for an input value from its leading token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputValueMaker {
    /// Int, float, string, boolean, null or enum literal.
    Scalar(ScalarValueKind),
    /// `[ Value* ]`
    List,
    /// `{ (Name : Value)* }`
    Complex,
    /// `$name`
    Variable,
}

impl InputValueMaker {
    pub fn select(kind: &GraphQLTokenKind) -> Option<Self> {
        Some(match kind {
            GraphQLTokenKind::Dollar => InputValueMaker::Variable,
            GraphQLTokenKind::SquareBracketOpen => InputValueMaker::List,
            GraphQLTokenKind::CurlyBraceOpen => InputValueMaker::Complex,
            GraphQLTokenKind::IntValue(_) => InputValueMaker::Scalar(ScalarValueKind::Int),
            GraphQLTokenKind::FloatValue(_) => InputValueMaker::Scalar(ScalarValueKind::Float),
            GraphQLTokenKind::StringValue(_) => InputValueMaker::Scalar(ScalarValueKind::String),
            GraphQLTokenKind::True | GraphQLTokenKind::False => {
                InputValueMaker::Scalar(ScalarValueKind::Boolean)
            },
            GraphQLTokenKind::Null => InputValueMaker::Scalar(ScalarValueKind::Null),
            GraphQLTokenKind::Name(_) => InputValueMaker::Scalar(ScalarValueKind::Enum),
            _ => return None,
        })
    }

    pub(crate) fn make<'src, TTokenSource: GraphQLTokenSource<'src>>(
        self,
        parser: &mut GraphQLParser<'src, TTokenSource>,
        context: ConstContext,
    ) -> ParseResult<SyntaxNode> {
        match self {
            InputValueMaker::Scalar(kind) => parser.make_scalar_value(kind),
            InputValueMaker::List => parser.make_list_value(context),
            InputValueMaker::Complex => parser.make_complex_value(context),
            InputValueMaker::Variable => parser.make_variable_value(context),
        }
    }
}

impl<'src, TTokenSource: GraphQLTokenSource<'src>> GraphQLParser<'src, TTokenSource> {
    pub(crate) fn make_value(&mut self, context: ConstContext) -> ParseResult<SyntaxNode> {
        let (kind, span) = self.peek_token()?;
        let Some(maker) = InputValueMaker::select(&kind) else {
            return Err(self.unexpected(&["value"], &kind, span));
        };
        self.enter_recursion(span)?;
        let result = maker.make(self, context);
        self.exit_recursion();
        result
    }

    fn make_scalar_value(&mut self, kind: ScalarValueKind) -> ParseResult<SyntaxNode> {
        let token = self.consume_token()?;
        Ok(SyntaxNode::new(SyntaxNodeKind::ScalarValue { kind }, token.span))
    }

    fn make_variable_value(&mut self, context: ConstContext) -> ParseResult<SyntaxNode> {
        let dollar = self.expect(&GraphQLTokenKind::Dollar)?;
        if context != ConstContext::AllowVariables {
            let mut error = self.invalid_syntax(
                format!("variables are not allowed in {}", context.description()),
                dollar.span,
            );
            error.add_help("replace the variable with a literal value");
            return Err(error);
        }
        let (name, _) = self.expect_name()?;
        Ok(SyntaxNode::new(
            SyntaxNodeKind::VariableValue { name },
            self.span_from(dollar.span),
        ))
    }

    fn make_list_value(&mut self, context: ConstContext) -> ParseResult<SyntaxNode> {
        let open = self.expect(&GraphQLTokenKind::SquareBracketOpen)?;
        let scratch = self.arena.begin_scratch();
        while !self.peek_is(&GraphQLTokenKind::SquareBracketClose)? {
            let item = self.make_value(context)?;
            self.arena.append(&scratch, item);
        }
        self.expect(&GraphQLTokenKind::SquareBracketClose)?;
        let items = self.arena.commit(scratch);
        Ok(SyntaxNode::new(
            SyntaxNodeKind::ListValue { items },
            self.span_from(open.span),
        ))
    }

    fn make_complex_value(&mut self, context: ConstContext) -> ParseResult<SyntaxNode> {
        let open = self.expect(&GraphQLTokenKind::CurlyBraceOpen)?;
        let scratch = self.arena.begin_scratch();
        while !self.peek_is(&GraphQLTokenKind::CurlyBraceClose)? {
            let field = self.make_name_value_pair(context)?;
            self.arena.append(&scratch, field);
        }
        self.expect(&GraphQLTokenKind::CurlyBraceClose)?;
        let fields = self.arena.commit(scratch);
        Ok(SyntaxNode::new(
            SyntaxNodeKind::ComplexValue { fields },
            self.span_from(open.span),
        ))
    }
}
