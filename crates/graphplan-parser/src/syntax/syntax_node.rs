use crate::syntax::NodeIndex;
use crate::syntax::NodeRange;
use crate::ByteSpan;
use crate::GraphQLSourceSpan;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum OperationKind {
    Query,
    Mutation,
    Subscription,
}

impl OperationKind {
    pub fn keyword(&self) -> &'static str {
        match self {
            OperationKind::Query => "query",
            OperationKind::Mutation => "mutation",
            OperationKind::Subscription => "subscription",
        }
    }
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}

/// The lexical category of a literal scalar value.
///
/// The literal's raw text is the span of its
/// [`SyntaxNodeKind::ScalarValue`] node.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ScalarValueKind {
    Int,
    Float,
    String,
    Boolean,
    Null,
    Enum,
}

/// A node in a [`SyntaxArena`](crate::syntax::SyntaxArena).
///
/// Names and literal text are [`ByteSpan`]s into the source the tree was
/// parsed from; children are [`NodeIndex`]/[`NodeRange`] references to
/// nodes committed earlier.
#[derive(Clone, Debug, PartialEq)]
pub struct SyntaxNode {
    pub kind: SyntaxNodeKind,
    pub span: GraphQLSourceSpan,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SyntaxNodeKind {
    Document {
        definitions: NodeRange,
    },
    Operation {
        kind: OperationKind,
        /// `None` for anonymous operations (including the `{ ... }`
        /// shorthand).
        name: Option<ByteSpan>,
        variables: NodeRange,
        directives: NodeRange,
        selection_set: NodeRange,
    },
    VariableDefinition {
        name: ByteSpan,
        type_annotation: NodeIndex,
        default_value: Option<NodeIndex>,
        directives: NodeRange,
    },
    NamedType {
        name: ByteSpan,
        nullable: bool,
    },
    ListType {
        inner: NodeIndex,
        nullable: bool,
    },
    Fragment {
        name: ByteSpan,
        type_condition: ByteSpan,
        directives: NodeRange,
        selection_set: NodeRange,
    },
    Field {
        alias: Option<ByteSpan>,
        name: ByteSpan,
        arguments: NodeRange,
        directives: NodeRange,
        selection_set: NodeRange,
    },
    FragmentSpread {
        name: ByteSpan,
        directives: NodeRange,
    },
    InlineFragment {
        type_condition: Option<ByteSpan>,
        directives: NodeRange,
        selection_set: NodeRange,
    },
    /// `name: value`, used both for arguments and for object-value fields.
    Argument {
        name: ByteSpan,
        value: NodeIndex,
    },
    Directive {
        name: ByteSpan,
        arguments: NodeRange,
    },
    ScalarValue {
        kind: ScalarValueKind,
    },
    ListValue {
        items: NodeRange,
    },
    /// An input-object literal `{ name: value, ... }` whose fields are
    /// `Argument` nodes.
    ComplexValue {
        fields: NodeRange,
    },
    VariableValue {
        name: ByteSpan,
    },
}

impl SyntaxNode {
    pub fn new(kind: SyntaxNodeKind, span: GraphQLSourceSpan) -> Self {
        Self { kind, span }
    }

    /// Short name of this node's kind, for diagnostics and logging.
    pub fn kind_name(&self) -> &'static str {
        match &self.kind {
            SyntaxNodeKind::Document { .. } => "document",
            SyntaxNodeKind::Operation { .. } => "operation",
            SyntaxNodeKind::VariableDefinition { .. } => "variable definition",
            SyntaxNodeKind::NamedType { .. } => "named type",
            SyntaxNodeKind::ListType { .. } => "list type",
            SyntaxNodeKind::Fragment { .. } => "fragment",
            SyntaxNodeKind::Field { .. } => "field",
            SyntaxNodeKind::FragmentSpread { .. } => "fragment spread",
            SyntaxNodeKind::InlineFragment { .. } => "inline fragment",
            SyntaxNodeKind::Argument { .. } => "argument",
            SyntaxNodeKind::Directive { .. } => "directive",
            SyntaxNodeKind::ScalarValue { .. } => "scalar value",
            SyntaxNodeKind::ListValue { .. } => "list value",
            SyntaxNodeKind::ComplexValue { .. } => "object value",
            SyntaxNodeKind::VariableValue { .. } => "variable",
        }
    }

    /// Ranges and indices of the children this node references, in source
    /// order.
    pub fn child_ranges(&self) -> Vec<NodeRange> {
        let single = |idx: NodeIndex| NodeRange { start: idx.0, len: 1 };
        match &self.kind {
            SyntaxNodeKind::Document { definitions } => vec![*definitions],
            SyntaxNodeKind::Operation { variables, directives, selection_set, .. } => {
                vec![*variables, *directives, *selection_set]
            },
            SyntaxNodeKind::VariableDefinition {
                type_annotation,
                default_value,
                directives,
                ..
            } => {
                let mut ranges = vec![single(*type_annotation)];
                ranges.extend(default_value.map(single));
                ranges.push(*directives);
                ranges
            },
            SyntaxNodeKind::ListType { inner, .. } => vec![single(*inner)],
            SyntaxNodeKind::Fragment { directives, selection_set, .. }
            | SyntaxNodeKind::InlineFragment { directives, selection_set, .. } => {
                vec![*directives, *selection_set]
            },
            SyntaxNodeKind::Field { arguments, directives, selection_set, .. } => {
                vec![*arguments, *directives, *selection_set]
            },
            SyntaxNodeKind::FragmentSpread { directives, .. } => vec![*directives],
            SyntaxNodeKind::Argument { value, .. } => vec![single(*value)],
            SyntaxNodeKind::Directive { arguments, .. } => vec![*arguments],
            SyntaxNodeKind::ListValue { items } => vec![*items],
            SyntaxNodeKind::ComplexValue { fields } => vec![*fields],
            SyntaxNodeKind::NamedType { .. }
            | SyntaxNodeKind::ScalarValue { .. }
            | SyntaxNodeKind::VariableValue { .. } => vec![],
        }
    }
}
