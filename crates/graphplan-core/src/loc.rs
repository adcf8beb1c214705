use graphplan_parser::GraphQLSourceSpan;
use graphplan_parser::SourcePosition;

/// A position within an executable document.
///
/// `line` and `col` are 0-based; [`Display`](std::fmt::Display) renders them
/// 1-based (`line:col`), the way editors and diagnostics show them.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Serialize)]
pub struct DocumentPosition {
    pub line: usize,
    pub col: usize,
}
impl DocumentPosition {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }

    pub(crate) fn from_span(span: &GraphQLSourceSpan) -> Self {
        Self::from(span.start_inclusive)
    }
}
impl std::convert::From<SourcePosition> for DocumentPosition {
    fn from(value: SourcePosition) -> Self {
        Self {
            line: value.line(),
            col: value.col(),
        }
    }
}
impl std::fmt::Display for DocumentPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.col + 1)
    }
}

/// Where a schema member or a reference to one was defined.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SourceLocation {
    /// Implicitly defined by GraphQL (`Int`, `@skip`, ...).
    GraphQLBuiltIn,

    /// Defined through a [`SchemaBuilder`](crate::schema::SchemaBuilder).
    Schema,

    /// Written in an executable document.
    ExecutableDocument(DocumentPosition),
}
impl SourceLocation {
    pub fn document_position(&self) -> Option<DocumentPosition> {
        match self {
            Self::ExecutableDocument(pos) => Some(*pos),
            Self::GraphQLBuiltIn | Self::Schema => None,
        }
    }
}
