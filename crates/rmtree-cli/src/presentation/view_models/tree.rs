use rmtree_engine::{TreeEntry, TreeSummary};
use rmtree_types::ItemKind;

/// One rendered line of the tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntryViewModel {
    pub id: String,
    pub name: String,
    pub kind: ItemKind,
    pub is_last: bool,
    /// `is_last` of every ancestor, outermost first
    pub ancestors_last: Vec<bool>,
}

impl From<TreeEntry<'_>> for TreeEntryViewModel {
    fn from(entry: TreeEntry<'_>) -> Self {
        Self {
            id: entry.item.id().to_string(),
            name: entry.item.name().to_string(),
            kind: entry.item.kind(),
            is_last: entry.is_last,
            ancestors_last: entry.ancestors_last,
        }
    }
}

/// Everything the tree view prints
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeViewModel {
    /// Root listing in pre-order
    pub entries: Vec<TreeEntryViewModel>,
    /// Draw the synthesized trash folder after the root listing
    pub has_trash: bool,
    /// Direct children of the trash folder
    pub trash: Vec<TreeEntryViewModel>,
    pub summary: TreeSummary,
    /// Subtrees cut off by the depth ceiling
    pub truncated: usize,
}
