// Engine module - tree reconstruction (graph building, ordering, traversal)
// This layer sits between loaded items (types/providers) and CLI presentation

pub mod graph;
pub mod sort;
pub mod summary;
pub mod tree;
pub mod walk;

pub use graph::{build_children, ChildrenIndex};
pub use sort::sort_children;
pub use summary::TreeSummary;
pub use tree::DocumentTree;
pub use walk::{TreeEntry, TreeWalker, DEFAULT_MAX_DEPTH};

use rmtree_types::Library;

// Façade API - Stable public interface for CLI layer

/// Build the sorted document tree from a loaded library
pub fn build_tree(library: Library) -> DocumentTree {
    DocumentTree::new(library)
}
