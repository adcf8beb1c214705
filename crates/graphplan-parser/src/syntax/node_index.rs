/// Position of a committed node in a [`SyntaxArena`](crate::syntax::SyntaxArena).
///
/// Stable for the arena's lifetime (until the next `reset()`).
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct NodeIndex(pub(crate) u32);

impl NodeIndex {
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

/// A contiguous run of committed sibling nodes.
///
/// An empty range stands for "no children" (for example a field without a
/// selection set).
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct NodeRange {
    pub(crate) start: u32,
    pub(crate) len: u32,
}

impl NodeRange {
    pub const EMPTY: NodeRange = NodeRange { start: 0, len: 0 };

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn first(&self) -> Option<NodeIndex> {
        (!self.is_empty()).then_some(NodeIndex(self.start))
    }

    pub fn iter(&self) -> <NodeRange as IntoIterator>::IntoIter {
        (*self).into_iter()
    }
}

impl IntoIterator for NodeRange {
    type Item = NodeIndex;
    type IntoIter = std::iter::Map<std::ops::Range<u32>, fn(u32) -> NodeIndex>;

    fn into_iter(self) -> Self::IntoIter {
        (self.start..self.start + self.len).map(NodeIndex as fn(u32) -> NodeIndex)
    }
}

/// Handle to an open scratch buffer, consumed by `commit()` or `discard()`.
#[derive(Debug, Eq, PartialEq)]
pub struct ScratchId(pub(crate) u32);
