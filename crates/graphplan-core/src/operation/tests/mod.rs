mod argument_binding_tests;
mod query_document_builder_tests;

use crate::message::MessageCode;
use crate::operation::QueryDocument;

/// Codes of every message, in report order.
fn codes(doc: &QueryDocument<'_>) -> Vec<MessageCode> {
    doc.messages().iter().map(|msg| msg.code()).collect()
}
