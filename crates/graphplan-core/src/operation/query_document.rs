use crate::analysis::ComplexityConfig;
use crate::analysis::OperationMetrics;
use crate::loc::DocumentPosition;
use crate::message::DocumentMessage;
use crate::message::DocumentMessages;
use crate::message::MessageCode;
use crate::operation::Fragment;
use crate::operation::Operation;
use crate::operation::QueryDocumentBuilder;
use crate::schema::Schema;
use indexmap::IndexMap;

/// An executable document bound to a [`Schema`].
///
/// Operations are keyed by name; the anonymous operation uses the empty
/// string. Semantic problems never abort assembly: they are collected in
/// [`messages()`](Self::messages), and the document may only be executed
/// when none of them is an error.
#[derive(Clone, Debug)]
pub struct QueryDocument<'schema> {
    pub(super) fragments: IndexMap<String, Fragment<'schema>>,
    pub(super) messages: DocumentMessages,
    pub(super) operations: IndexMap<String, Operation<'schema>>,
    pub(super) schema: &'schema Schema,
}
impl<'schema> QueryDocument<'schema> {
    /// Parses and assembles `text`. A lexical or syntax error yields a
    /// document holding that single message and nothing else.
    pub fn parse(schema: &'schema Schema, text: &str) -> Self {
        match graphplan_parser::parse_executable_document(text) {
            Ok(tree) => QueryDocumentBuilder::from_syntax_tree(schema, &tree).build(),
            Err(err) => {
                let code = if err.is_lexical() {
                    MessageCode::LexicalError
                } else {
                    MessageCode::SyntaxError
                };
                log::debug!("document failed to parse: {}", err.format_oneline());
                let message = DocumentMessage::error(code, err.message())
                    .at(DocumentPosition::from_span(err.span()));
                Self {
                    fragments: IndexMap::new(),
                    messages: DocumentMessages::from_iter([message]),
                    operations: IndexMap::new(),
                    schema,
                }
            },
        }
    }

    pub fn fragment(&self, name: &str) -> Option<&Fragment<'schema>> {
        self.fragments.get(name)
    }

    pub fn fragments(&self) -> &IndexMap<String, Fragment<'schema>> {
        &self.fragments
    }

    /// `true` when no error-severity message was recorded.
    pub fn is_executable(&self) -> bool {
        self.messages.is_executable()
    }

    /// The highest complexity of any operation, `0.0` without operations.
    pub fn max_complexity(&self, config: &ComplexityConfig) -> f64 {
        self.operations
            .values()
            .map(|op| OperationMetrics::measure(op, config).complexity())
            .fold(0.0, f64::max)
    }

    /// The deepest selection nesting of any operation.
    pub fn max_depth(&self) -> usize {
        self.operations
            .values()
            .map(|op| OperationMetrics::depth_of(op.selection_set()))
            .max()
            .unwrap_or(0)
    }

    pub fn messages(&self) -> &DocumentMessages {
        &self.messages
    }

    /// `""` names the anonymous operation.
    pub fn operation(&self, name: &str) -> Option<&Operation<'schema>> {
        self.operations.get(name)
    }

    pub fn operations(&self) -> &IndexMap<String, Operation<'schema>> {
        &self.operations
    }

    pub fn schema(&self) -> &'schema Schema {
        self.schema
    }
}
