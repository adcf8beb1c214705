/// Compact byte-offset view into source text. 8 bytes per node.
///
/// Represents a half-open interval `[start, end)` of byte offsets into the
/// source text a [`SyntaxTree`](crate::syntax::SyntaxTree) was parsed from.
/// Syntax nodes store these instead of `&str` so that a
/// [`SyntaxArena`](crate::syntax::SyntaxArena) never borrows the source and
/// can be reset and reused by a later parse.
///
/// `u32` offsets support documents up to 4 GiB; callers enforce much smaller
/// request size limits before parsing.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct ByteSpan {
    /// Byte offset of the first byte (0-based, inclusive).
    pub start: u32,
    /// Byte offset one past the last byte (0-based, exclusive).
    pub end: u32,
}

impl ByteSpan {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Returns the length of this span in bytes.
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Returns `true` if this span has zero length.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Resolves this span against the source text it was produced from.
    ///
    /// Returns an empty string if the span does not fall on character
    /// boundaries of `source` (i.e. it was produced from different text).
    pub fn slice<'src>(&self, source: &'src str) -> &'src str {
        source
            .get(self.start as usize..self.end as usize)
            .unwrap_or("")
    }
}
