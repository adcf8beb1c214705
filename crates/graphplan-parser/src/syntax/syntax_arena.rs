use crate::syntax::NodeIndex;
use crate::syntax::NodeRange;
use crate::syntax::ScratchId;
use crate::syntax::SyntaxNode;

/// Indexed storage for syntax nodes, plus pooled scratch buffers for sibling
/// runs that are still being built.
///
/// A grammar production collects its children into a scratch buffer
/// (`begin_scratch()` / `append()`) and moves them into the permanent node
/// vector as one contiguous run once the production completes (`commit()`).
/// Nodes are only ever committed after the children they reference, so every
/// child index is smaller than its parent's.
///
/// The arena never borrows source text. Call [`reset()`](Self::reset) to
/// reuse its allocations for another document.
#[derive(Debug, Default)]
pub struct SyntaxArena {
    nodes: Vec<SyntaxNode>,

    /// Scratch buffers addressed by `ScratchId`. Released buffers keep their
    /// capacity and are handed out again by `begin_scratch()`.
    scratch_slots: Vec<Vec<SyntaxNode>>,
    free_slots: Vec<u32>,
}

impl SyntaxArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(node_capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(node_capacity),
            ..Self::default()
        }
    }

    /// Opens a new (empty) scratch buffer.
    pub fn begin_scratch(&mut self) -> ScratchId {
        if let Some(slot) = self.free_slots.pop() {
            return ScratchId(slot);
        }
        self.scratch_slots.push(Vec::new());
        ScratchId((self.scratch_slots.len() - 1) as u32)
    }

    pub fn append(&mut self, scratch: &ScratchId, node: SyntaxNode) {
        self.scratch_slots[scratch.0 as usize].push(node);
    }

    /// Number of nodes appended to `scratch` so far.
    pub fn scratch_len(&self, scratch: &ScratchId) -> usize {
        self.scratch_slots[scratch.0 as usize].len()
    }

    /// Moves the scratch run into the arena contiguously and releases the
    /// scratch buffer.
    pub fn commit(&mut self, scratch: ScratchId) -> NodeRange {
        let start = self.nodes.len() as u32;
        let buffer = &mut self.scratch_slots[scratch.0 as usize];
        let len = buffer.len() as u32;
        self.nodes.append(buffer);
        self.free_slots.push(scratch.0);
        if len == 0 {
            return NodeRange::EMPTY;
        }
        NodeRange { start, len }
    }

    pub fn commit_single(&mut self, node: SyntaxNode) -> NodeIndex {
        self.nodes.push(node);
        NodeIndex((self.nodes.len() - 1) as u32)
    }

    /// Releases a scratch buffer without committing its contents.
    pub fn discard(&mut self, scratch: ScratchId) {
        self.scratch_slots[scratch.0 as usize].clear();
        self.free_slots.push(scratch.0);
    }

    /// Drops every node and scratch run, keeping the allocations.
    ///
    /// Previously returned indices and ranges become meaningless.
    pub fn reset(&mut self) {
        self.nodes.clear();
        self.free_slots.clear();
        for (slot, buffer) in self.scratch_slots.iter_mut().enumerate() {
            buffer.clear();
            self.free_slots.push(slot as u32);
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of scratch buffers currently open.
    pub fn open_scratch_count(&self) -> usize {
        self.scratch_slots.len() - self.free_slots.len()
    }

    pub fn get(&self, index: NodeIndex) -> Option<&SyntaxNode> {
        self.nodes.get(index.as_usize())
    }

    /// The committed run `range` as a slice.
    pub fn range(&self, range: NodeRange) -> &[SyntaxNode] {
        let start = range.start as usize;
        self.nodes.get(start..start + range.len()).unwrap_or(&[])
    }

    pub fn nodes(&self) -> &[SyntaxNode] {
        &self.nodes
    }
}

impl std::ops::Index<NodeIndex> for SyntaxArena {
    type Output = SyntaxNode;

    fn index(&self, index: NodeIndex) -> &SyntaxNode {
        &self.nodes[index.as_usize()]
    }
}
