//! Diagnostics accumulated while assembling, analyzing and planning a
//! document.

mod document_message;
mod document_messages;
mod message_code;

pub use document_message::DocumentMessage;
pub use document_message::MessageSeverity;
pub use document_messages::DocumentMessages;
pub use message_code::MessageCode;

#[cfg(test)]
mod tests;
