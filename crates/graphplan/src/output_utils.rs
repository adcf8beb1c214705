use graphplan_core::message::DocumentMessages;
use std::fmt::Write;
use std::path::Path;

pub(crate) const GREEN_CHECK: &str = "\u{2705}";
pub(crate) const RED_X: &str = "\u{274c}";

/// One line per message, prefixed with the file it came from.
pub(crate) fn format_messages(path: &Path, messages: &DocumentMessages) -> String {
    let mut out = String::new();
    for message in messages {
        // Writing to a `String` cannot fail.
        let _ = writeln!(out, "{}:{message}", path.display());
    }
    out
}
