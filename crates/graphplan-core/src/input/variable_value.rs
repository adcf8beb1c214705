use graphplan_parser::syntax::NodeIndex;
use graphplan_parser::syntax::ScalarValueKind;
use graphplan_parser::syntax::SyntaxNodeKind;
use graphplan_parser::syntax::SyntaxTree;
use graphplan_parser::token::parse_string_value;
use graphplan_parser::GraphQLParseError;
use graphplan_parser::GraphQLStringParsingError;
use indexmap::IndexMap;
use thiserror::Error;

/// Runtime variable values supplied by the caller at execution time, keyed by
/// variable name (without the `$`).
pub type VariableValues = IndexMap<String, VariableValue>;

/// A runtime variable value. Deserializes from any self-describing serde
/// format (JSON request bodies, TOML files, ...).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(untagged)]
pub enum VariableValue {
    Null,
    Boolean(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<VariableValue>),
    Object(IndexMap<String, VariableValue>),
}
impl VariableValue {
    /// Parses GraphQL constant-value syntax, e.g. `{ id: 4, tags: ["a"] }`.
    /// Enum values become strings.
    pub fn from_const_literal(text: &str) -> Result<Self, VariableValueParseError> {
        let tree = graphplan_parser::parse_const_value(text)?;
        Self::from_syntax(&tree, tree.root_index())
    }

    fn from_syntax(
        tree: &SyntaxTree<'_>,
        index: NodeIndex,
    ) -> Result<Self, VariableValueParseError> {
        Ok(match &tree.node(index).kind {
            SyntaxNodeKind::ScalarValue { kind } => {
                let text = tree.node_text(index);
                match kind {
                    ScalarValueKind::Null => Self::Null,
                    ScalarValueKind::Boolean => Self::Boolean(text == "true"),
                    ScalarValueKind::Int => match text.parse::<i64>() {
                        Ok(value) => Self::Int(value),
                        // Beyond i64: keep the magnitude so range checks still fail.
                        Err(_) => Self::Float(text.parse::<f64>().unwrap_or(f64::INFINITY)),
                    },
                    ScalarValueKind::Float => Self::Float(text.parse::<f64>().unwrap_or(f64::NAN)),
                    ScalarValueKind::String => Self::String(parse_string_value(text)?),
                    ScalarValueKind::Enum => Self::String(text.to_string()),
                }
            },
            SyntaxNodeKind::ListValue { items } => Self::List(
                items.iter()
                    .map(|item| Self::from_syntax(tree, item))
                    .collect::<Result<_, _>>()?,
            ),
            SyntaxNodeKind::ComplexValue { fields } => {
                let mut object = IndexMap::with_capacity(fields.len());
                for (_, field) in tree.children(*fields) {
                    if let SyntaxNodeKind::Argument { name, value } = &field.kind {
                        object.insert(tree.text(*name).to_string(), Self::from_syntax(tree, *value)?);
                    }
                }
                Self::Object(object)
            },
            _ => Self::Null,
        })
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}
impl std::fmt::Display for VariableValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value:?}"),
            Self::String(value) => write!(f, "{value:?}"),
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

#[derive(Clone, Debug, Error, PartialEq)]
pub enum VariableValueParseError {
    #[error("{0}")]
    Parse(#[from] GraphQLParseError),

    #[error("{0}")]
    InvalidString(#[from] GraphQLStringParsingError),
}
