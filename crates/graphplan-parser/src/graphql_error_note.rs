use crate::GraphQLSourceSpan;
use crate::SmallVec;

/// Error notes attached to a lexer or parse error.
///
/// Uses SmallVec since most errors have 0-2 notes.
pub type GraphQLErrorNotes = SmallVec<[GraphQLErrorNote; 2]>;

/// The kind of an error note (determines how the note is rendered).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphQLErrorNoteKind {
    /// General context or explanation about the error.
    ///
    /// Rendered as `= note: ...` in CLI output.
    General,

    /// Actionable suggestion for fixing the error.
    ///
    /// Rendered as `= help: ...` in CLI output.
    Help,

    /// Reference to the GraphQL specification.
    ///
    /// Rendered as `= spec: ...` in CLI output.
    Spec,
}

impl GraphQLErrorNoteKind {
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::General => "note",
            Self::Help => "help",
            Self::Spec => "spec",
        }
    }
}

/// An error note providing additional context about an error.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphQLErrorNote {
    pub kind: GraphQLErrorNoteKind,
    pub message: String,
    /// Optional span pointing to a related location (e.g. where a string
    /// literal was opened).
    pub span: Option<GraphQLSourceSpan>,
}

impl GraphQLErrorNote {
    pub fn general(message: impl Into<String>) -> Self {
        Self {
            kind: GraphQLErrorNoteKind::General,
            message: message.into(),
            span: None,
        }
    }

    pub fn general_with_span(message: impl Into<String>, span: GraphQLSourceSpan) -> Self {
        Self {
            kind: GraphQLErrorNoteKind::General,
            message: message.into(),
            span: Some(span),
        }
    }

    pub fn help(message: impl Into<String>) -> Self {
        Self {
            kind: GraphQLErrorNoteKind::Help,
            message: message.into(),
            span: None,
        }
    }

    pub fn spec(url: impl Into<String>) -> Self {
        Self {
            kind: GraphQLErrorNoteKind::Spec,
            message: url.into(),
            span: None,
        }
    }
}
