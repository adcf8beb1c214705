use crate::loc::DocumentPosition;
use crate::message::MessageCode;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize)]
pub enum MessageSeverity {
    Warning,
    Error,
}
impl std::fmt::Display for MessageSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Warning => "warning",
            Self::Error => "error",
        })
    }
}

/// A single diagnostic: a stable [`MessageCode`], a severity, a
/// human-readable description and the document positions it refers to.
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Serialize)]
pub struct DocumentMessage {
    pub(crate) code: MessageCode,
    pub(crate) locations: Vec<DocumentPosition>,
    pub(crate) severity: MessageSeverity,
    pub(crate) text: String,
}
impl DocumentMessage {
    pub fn error(code: MessageCode, text: impl Into<String>) -> Self {
        Self {
            code,
            locations: vec![],
            severity: MessageSeverity::Error,
            text: text.into(),
        }
    }

    pub fn warning(code: MessageCode, text: impl Into<String>) -> Self {
        Self {
            code,
            locations: vec![],
            severity: MessageSeverity::Warning,
            text: text.into(),
        }
    }

    pub fn at(mut self, location: DocumentPosition) -> Self {
        self.locations.push(location);
        self
    }

    pub fn at_optional(self, location: Option<DocumentPosition>) -> Self {
        match location {
            Some(location) => self.at(location),
            None => self,
        }
    }

    pub fn code(&self) -> MessageCode {
        self.code
    }

    pub fn is_error(&self) -> bool {
        self.severity == MessageSeverity::Error
    }

    pub fn locations(&self) -> &[DocumentPosition] {
        &self.locations
    }

    pub fn severity(&self) -> MessageSeverity {
        self.severity
    }

    pub fn text(&self) -> &str {
        self.text.as_str()
    }
}
impl std::fmt::Display for DocumentMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(first) = self.locations.first() {
            write!(f, "{first}: ")?;
        }
        write!(f, "{} [{}]: {}", self.severity, self.code, self.text)
    }
}
