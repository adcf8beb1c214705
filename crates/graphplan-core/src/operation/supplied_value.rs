use crate::input::ScalarLiteral;
use crate::loc;
use crate::loc::DocumentPosition;
use crate::operation::NamedVariableRef;
use graphplan_parser::syntax::NodeIndex;
use graphplan_parser::syntax::ScalarValueKind;
use graphplan_parser::syntax::SyntaxNodeKind;
use graphplan_parser::syntax::SyntaxTree;
use graphplan_parser::GraphQLParseError;
use indexmap::IndexMap;

/// An input value as written in a document: the unresolved form of an
/// argument, a default value or an input-object field.
#[derive(Clone, Debug, PartialEq)]
pub enum SuppliedValue {
    Scalar(ScalarLiteral),
    List(Vec<SuppliedValue>),
    /// Keys are unique; a repeated key keeps its first value.
    Object(IndexMap<String, SuppliedValue>),
    Variable(NamedVariableRef),
}
impl SuppliedValue {
    pub fn null() -> Self {
        Self::Scalar(ScalarLiteral::new(ScalarValueKind::Null, "null"))
    }

    pub fn as_scalar(&self) -> Option<&ScalarLiteral> {
        if let Self::Scalar(literal) = self {
            Some(literal)
        } else {
            None
        }
    }

    /// Whether a variable reference appears anywhere inside this value.
    pub fn contains_variable(&self) -> bool {
        match self {
            Self::Scalar(_) => false,
            Self::Variable(_) => true,
            Self::List(items) => items.iter().any(Self::contains_variable),
            Self::Object(fields) => fields.values().any(Self::contains_variable),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Scalar(literal) if literal.kind() == ScalarValueKind::Null)
    }

    /// Structural equality that ignores where variables were referenced and
    /// the order object fields were written in.
    pub fn is_equivalent_to(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Scalar(a), Self::Scalar(b)) => a == b,
            (Self::Variable(a), Self::Variable(b)) => a.name() == b.name(),
            (Self::List(a), Self::List(b)) =>
                a.len() == b.len()
                    && a.iter().zip(b).all(|(a, b)| a.is_equivalent_to(b)),
            (Self::Object(a), Self::Object(b)) =>
                a.len() == b.len()
                    && a.iter().all(|(key, a_value)| {
                        b.get(key).is_some_and(|b_value| a_value.is_equivalent_to(b_value))
                    }),
            _ => false,
        }
    }

    /// Every variable reference in this value, depth-first.
    pub fn variable_refs(&self) -> Vec<&NamedVariableRef> {
        let mut refs = vec![];
        self.collect_variable_refs(&mut refs);
        refs
    }

    fn collect_variable_refs<'a>(&'a self, refs: &mut Vec<&'a NamedVariableRef>) {
        match self {
            Self::Scalar(_) => (),
            Self::Variable(var_ref) => refs.push(var_ref),
            Self::List(items) => {
                for item in items {
                    item.collect_variable_refs(refs);
                }
            },
            Self::Object(fields) => {
                for value in fields.values() {
                    value.collect_variable_refs(refs);
                }
            },
        }
    }

    /// Parses constant-value text such as `{ limit: 10 }`. A repeated object
    /// key keeps its first value.
    pub fn parse_const(text: &str) -> Result<Self, GraphQLParseError> {
        let tree = graphplan_parser::parse_const_value(text)?;
        Ok(Self::from_syntax(&tree, tree.root_index(), &mut vec![]))
    }

    /// Converts a value node. Repeated object keys are appended to
    /// `duplicate_keys` with the position of the repetition.
    pub(crate) fn from_syntax(
        tree: &SyntaxTree<'_>,
        index: NodeIndex,
        duplicate_keys: &mut Vec<(String, DocumentPosition)>,
    ) -> Self {
        let node = tree.node(index);
        match &node.kind {
            SyntaxNodeKind::VariableValue { name } => Self::Variable(NamedVariableRef::new(
                tree.text(*name),
                loc::SourceLocation::ExecutableDocument(DocumentPosition::from_span(&node.span)),
            )),

            SyntaxNodeKind::ListValue { items } => Self::List(
                items.iter()
                    .map(|item| Self::from_syntax(tree, item, duplicate_keys))
                    .collect(),
            ),

            SyntaxNodeKind::ComplexValue { fields } => {
                let mut object = IndexMap::with_capacity(fields.len());
                for (_, field) in tree.children(*fields) {
                    let SyntaxNodeKind::Argument { name, value } = &field.kind else {
                        continue;
                    };
                    let key = tree.text(*name);
                    if object.contains_key(key) {
                        duplicate_keys.push((
                            key.to_string(),
                            DocumentPosition::from_span(&field.span),
                        ));
                        continue;
                    }
                    object.insert(
                        key.to_string(),
                        Self::from_syntax(tree, *value, duplicate_keys),
                    );
                }
                Self::Object(object)
            },

            SyntaxNodeKind::ScalarValue { kind } =>
                Self::Scalar(ScalarLiteral::new(*kind, tree.node_text(index))),

            // Value positions only ever hold value nodes.
            _ => Self::null(),
        }
    }
}
impl std::fmt::Display for SuppliedValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scalar(literal) => f.write_str(literal.text()),
            Self::Variable(var_ref) => write!(f, "${}", var_ref.name()),
            Self::List(items) => {
                f.write_str("[")?;
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            },
            Self::Object(fields) => {
                f.write_str("{")?;
                for (idx, (key, value)) in fields.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, " {key}: {value}")?;
                }
                f.write_str(if fields.is_empty() { "}" } else { " }" })
            },
        }
    }
}
