use graphplan_parser::syntax::ScalarValueKind;

/// A scalar literal exactly as written: its lexical kind and raw text.
/// String literals keep their quotes and escapes.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct ScalarLiteral {
    kind: ScalarValueKind,
    text: String,
}
impl ScalarLiteral {
    pub fn new(kind: ScalarValueKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn kind(&self) -> ScalarValueKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        self.text.as_str()
    }
}
