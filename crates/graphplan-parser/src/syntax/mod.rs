//! Arena-backed syntax tree for executable documents.

mod node_index;
mod syntax_arena;
mod syntax_node;
mod syntax_tree;

pub use node_index::NodeIndex;
pub use node_index::NodeRange;
pub use node_index::ScratchId;
pub use syntax_arena::SyntaxArena;
pub use syntax_node::OperationKind;
pub use syntax_node::ScalarValueKind;
pub use syntax_node::SyntaxNode;
pub use syntax_node::SyntaxNodeKind;
pub use syntax_tree::SyntaxTree;

#[cfg(test)]
mod tests;
