use crate::loc::DocumentPosition;
use crate::message::DocumentMessage;
use crate::message::DocumentMessages;
use crate::message::MessageCode;
use crate::message::MessageSeverity;

#[test]
fn identical_messages_are_recorded_once() {
    let mut messages = DocumentMessages::new();
    let msg = DocumentMessage::error(MessageCode::UnknownField, "no field `x`")
        .at(DocumentPosition::new(0, 4));
    messages.push(msg.clone());
    messages.push(msg);
    messages.push(
        DocumentMessage::error(MessageCode::UnknownField, "no field `x`")
            .at(DocumentPosition::new(1, 4)),
    );
    assert_eq!(messages.len(), 2);
}

#[test]
fn warnings_do_not_block_execution() {
    let mut messages = DocumentMessages::new();
    messages.push(DocumentMessage::warning(MessageCode::UnusedVariable, "unused"));
    assert!(messages.is_executable());
    assert!(!messages.has_errors());

    messages.push(DocumentMessage::error(MessageCode::UnknownType, "no type"));
    assert!(!messages.is_executable());
    assert_eq!(messages.errors().count(), 1);
}

#[test]
fn display_includes_position_and_code() {
    let msg = DocumentMessage::error(MessageCode::MaxDepthExceeded, "too deep")
        .at(DocumentPosition::new(2, 0));
    assert_eq!(msg.to_string(), "3:1: error [MAX_DEPTH_EXCEEDED]: too deep");
    assert_eq!(msg.severity(), MessageSeverity::Error);
}
