use crate::GraphQLErrorNote;
use crate::GraphQLErrorNotes;
use crate::GraphQLParseErrorKind;
use crate::GraphQLSourceSpan;
use crate::LexicalError;

/// A parse error with location information and contextual notes.
///
/// Parsing is all-or-nothing: the first error aborts the parse and is
/// returned as the only error for the document.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{}", self.format_oneline())]
pub struct GraphQLParseError {
    /// Human-readable primary error message.
    message: String,

    /// The primary span where the error was detected.
    ///
    /// - For "unexpected token" errors: the unexpected token's span
    /// - For "expected X" errors: where X should have appeared
    span: GraphQLSourceSpan,

    /// Categorized error kind for programmatic handling.
    kind: GraphQLParseErrorKind,

    /// Additional notes providing context, suggestions, and related
    /// locations.
    notes: GraphQLErrorNotes,
}

impl GraphQLParseError {
    pub fn new(
        message: impl Into<String>,
        span: GraphQLSourceSpan,
        kind: GraphQLParseErrorKind,
    ) -> Self {
        Self {
            message: message.into(),
            span,
            kind,
            notes: GraphQLErrorNotes::new(),
        }
    }

    /// Creates a parse error from a lexer error token, preserving the
    /// lexer's message and notes.
    pub fn from_lexer_error(
        message: impl Into<String>,
        span: GraphQLSourceSpan,
        lexer_notes: GraphQLErrorNotes,
    ) -> Self {
        Self {
            message: message.into(),
            span,
            kind: GraphQLParseErrorKind::LexerError,
            notes: lexer_notes,
        }
    }

    /// Returns the human-readable error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the primary span where the error was detected.
    pub fn span(&self) -> &GraphQLSourceSpan {
        &self.span
    }

    /// Returns the categorized error kind.
    pub fn kind(&self) -> &GraphQLParseErrorKind {
        &self.kind
    }

    /// Returns the additional notes for this error.
    pub fn notes(&self) -> &GraphQLErrorNotes {
        &self.notes
    }

    /// `true` if this error originated in the lexer rather than the grammar.
    pub fn is_lexical(&self) -> bool {
        matches!(self.kind, GraphQLParseErrorKind::LexerError)
    }

    pub fn add_help(&mut self, message: impl Into<String>) {
        self.notes.push(GraphQLErrorNote::help(message));
    }

    pub fn add_note(&mut self, message: impl Into<String>) {
        self.notes.push(GraphQLErrorNote::general(message));
    }

    /// Formats this error as a single-line summary.
    ///
    /// Produces output like:
    /// ```text
    /// 5:12: error: expected `:`, found `String`
    /// ```
    pub fn format_oneline(&self) -> String {
        format!("{}: error: {}", self.span.start_inclusive, self.message)
    }

    /// Formats this error as a multi-line diagnostic with a source snippet
    /// (when `source` is given) followed by any notes.
    ///
    /// ```text
    /// error: expected `:`, found `5`
    ///   --> 1:17
    ///    |
    ///  1 | query { user(id 5) }
    ///    |                 ^
    /// ```
    pub fn format_detailed(&self, source: Option<&str>) -> String {
        let mut output = String::new();
        output.push_str("error: ");
        output.push_str(&self.message);
        output.push('\n');
        output.push_str(&format!("  --> {}\n", self.span.start_inclusive));

        if let Some(src) = source
            && let Some(snippet) = self.format_source_snippet(src)
        {
            output.push_str(&snippet);
        }

        for note in &self.notes {
            output.push_str(&format!("   = {}: {}\n", note.kind.prefix(), note.message));
        }

        output
    }

    fn format_source_snippet(&self, source: &str) -> Option<String> {
        let line_num = self.span.start_inclusive.line();
        let line_content = source.lines().nth(line_num)?;
        let display_line_num = line_num + 1;
        let width = display_line_num.to_string().len().max(2);

        let col_start = self.span.start_inclusive.col();
        let underline_len =
            if self.span.end_exclusive.line() == line_num
                && self.span.end_exclusive.col() > col_start {
                self.span.end_exclusive.col() - col_start
            } else {
                1
            };

        let mut output = String::new();
        output.push_str(&format!("{:>width$} |\n", ""));
        output.push_str(&format!("{display_line_num:>width$} | {line_content}\n"));
        output.push_str(&format!(
            "{:>width$} | {:>col_start$}{}\n",
            "",
            "",
            "^".repeat(underline_len),
        ));
        Some(output)
    }
}

impl From<LexicalError> for GraphQLParseError {
    fn from(err: LexicalError) -> Self {
        GraphQLParseError::from_lexer_error(err.message, err.span, err.notes)
    }
}
