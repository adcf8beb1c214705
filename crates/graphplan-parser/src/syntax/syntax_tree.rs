use crate::syntax::NodeIndex;
use crate::syntax::NodeRange;
use crate::syntax::SyntaxArena;
use crate::syntax::SyntaxNode;
use crate::syntax::SyntaxNodeKind;
use crate::ByteSpan;

/// A parsed tree: the source text, the arena holding its nodes, and the
/// index of the root node.
///
/// The root is a `Document` node for
/// [`parse_executable_document()`](crate::parse_executable_document), a type
/// annotation for [`parse_type_annotation()`](crate::parse_type_annotation)
/// and a value node for [`parse_const_value()`](crate::parse_const_value).
#[derive(Debug)]
pub struct SyntaxTree<'src> {
    source: &'src str,
    arena: SyntaxArena,
    root: NodeIndex,
}

impl<'src> SyntaxTree<'src> {
    pub(crate) fn new(source: &'src str, arena: SyntaxArena, root: NodeIndex) -> Self {
        Self {
            source,
            arena,
            root,
        }
    }

    pub fn source(&self) -> &'src str {
        self.source
    }

    pub fn arena(&self) -> &SyntaxArena {
        &self.arena
    }

    pub fn root_index(&self) -> NodeIndex {
        self.root
    }

    pub fn root(&self) -> &SyntaxNode {
        &self.arena[self.root]
    }

    pub fn node(&self, index: NodeIndex) -> &SyntaxNode {
        &self.arena[index]
    }

    /// Iterates the nodes of a committed run along with their indices.
    pub fn children(&self, range: NodeRange) -> impl Iterator<Item = (NodeIndex, &SyntaxNode)> {
        range.iter().map(move |idx| (idx, &self.arena[idx]))
    }

    /// The top-level definitions (operations and fragments) in source order.
    ///
    /// Empty unless the root is a `Document` node.
    pub fn definitions(&self) -> impl Iterator<Item = (NodeIndex, &SyntaxNode)> {
        let definitions = match &self.root().kind {
            SyntaxNodeKind::Document { definitions } => *definitions,
            _ => NodeRange::EMPTY,
        };
        self.children(definitions)
    }

    /// Resolves a name or literal span against the source text.
    pub fn text(&self, span: ByteSpan) -> &'src str {
        span.slice(self.source)
    }

    /// The full source text of `index`'s node.
    pub fn node_text(&self, index: NodeIndex) -> &'src str {
        self.text(self.arena[index].span.byte_span())
    }

    /// Releases the tree, returning its arena (reset) for reuse.
    pub fn into_arena(mut self) -> SyntaxArena {
        self.arena.reset();
        self.arena
    }
}
