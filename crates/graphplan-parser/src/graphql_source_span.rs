use crate::ByteSpan;
use crate::SourcePosition;

/// Represents a span of source text from start to end position.
///
/// The span is a half-open interval: `[start_inclusive, end_exclusive)`.
/// - `start_inclusive`: Position of the first character of the source text
/// - `end_exclusive`: Position immediately after the last character
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct GraphQLSourceSpan {
    pub start_inclusive: SourcePosition,
    pub end_exclusive: SourcePosition,
}

impl GraphQLSourceSpan {
    pub fn new(start: SourcePosition, end: SourcePosition) -> Self {
        Self {
            start_inclusive: start,
            end_exclusive: end,
        }
    }

    /// A zero-width span at `pos`.
    pub fn point(pos: SourcePosition) -> Self {
        Self::new(pos, pos)
    }

    /// Extracts a compact `ByteSpan` from this span's byte
    /// offsets, discarding line/column information.
    pub fn byte_span(&self) -> ByteSpan {
        ByteSpan {
            start: self.start_inclusive.byte_offset() as u32,
            end: self.end_exclusive.byte_offset() as u32,
        }
    }

    /// A span covering both `self` and `other`.
    pub fn join(&self, other: &GraphQLSourceSpan) -> GraphQLSourceSpan {
        let start = if other.start_inclusive.byte_offset() < self.start_inclusive.byte_offset() {
            other.start_inclusive
        } else {
            self.start_inclusive
        };
        let end = if other.end_exclusive.byte_offset() > self.end_exclusive.byte_offset() {
            other.end_exclusive
        } else {
            self.end_exclusive
        };
        GraphQLSourceSpan::new(start, end)
    }
}

impl std::fmt::Display for GraphQLSourceSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.start_inclusive)
    }
}
