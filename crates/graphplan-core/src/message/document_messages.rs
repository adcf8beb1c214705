use crate::message::DocumentMessage;
use crate::message::MessageCode;
use std::collections::HashSet;

/// An ordered, de-duplicated list of [`DocumentMessage`]s.
///
/// Flattening a fragment into several concrete-type contexts can report the
/// same problem more than once; identical messages are recorded only once.
#[derive(Clone, Debug, Default)]
pub struct DocumentMessages {
    messages: Vec<DocumentMessage>,
    seen: HashSet<DocumentMessage>,
}
impl DocumentMessages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: DocumentMessage) {
        if self.seen.insert(message.clone()) {
            self.messages.push(message);
        }
    }

    pub fn extend(&mut self, messages: impl IntoIterator<Item = DocumentMessage>) {
        for message in messages {
            self.push(message);
        }
    }

    pub fn contains_code(&self, code: MessageCode) -> bool {
        self.messages.iter().any(|msg| msg.code == code)
    }

    pub fn errors(&self) -> impl Iterator<Item = &DocumentMessage> {
        self.messages.iter().filter(|msg| msg.is_error())
    }

    pub fn has_errors(&self) -> bool {
        self.messages.iter().any(DocumentMessage::is_error)
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// `false` once any error-severity message has been recorded; warnings
    /// never block execution.
    pub fn is_executable(&self) -> bool {
        !self.has_errors()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DocumentMessage> {
        self.messages.iter()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn as_slice(&self) -> &[DocumentMessage] {
        &self.messages
    }
}
impl<'a> IntoIterator for &'a DocumentMessages {
    type Item = &'a DocumentMessage;
    type IntoIter = std::slice::Iter<'a, DocumentMessage>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}
impl IntoIterator for DocumentMessages {
    type Item = DocumentMessage;
    type IntoIter = std::vec::IntoIter<DocumentMessage>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.into_iter()
    }
}
impl std::iter::FromIterator<DocumentMessage> for DocumentMessages {
    fn from_iter<T: IntoIterator<Item = DocumentMessage>>(iter: T) -> Self {
        let mut messages = Self::new();
        messages.extend(iter);
        messages
    }
}
