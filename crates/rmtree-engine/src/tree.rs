use rmtree_types::{Item, Library, ParentKey};
use tracing::debug;

use crate::graph::{build_children, ChildrenIndex};
use crate::sort::sort_children;
use crate::summary::{summarize, TreeSummary};
use crate::walk::TreeWalker;

/// Sorted parent → children view over a loaded library
#[derive(Debug, Clone)]
pub struct DocumentTree {
    items: Vec<Item>,
    children: ChildrenIndex,
}

impl DocumentTree {
    /// Group items by parent, then sort every sibling list
    pub fn new(library: Library) -> Self {
        let items = library.into_items();
        let mut children = build_children(&items);
        sort_children(&mut children, &items);

        debug!(
            items = items.len(),
            parents = children.len(),
            "document tree built"
        );

        Self { items, children }
    }

    /// Sorted children of `key`
    pub fn children(&self, key: &ParentKey) -> impl Iterator<Item = &Item> + '_ {
        self.child_indices(key).iter().map(|&index| &self.items[index])
    }

    pub fn has_children(&self, key: &ParentKey) -> bool {
        !self.child_indices(key).is_empty()
    }

    /// All items in identifier order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn summary(&self) -> TreeSummary {
        summarize(&self.items, self.has_children(&ParentKey::Trash))
    }

    /// Depth-first walk over everything below `key`
    pub fn walk(&self, key: &ParentKey) -> TreeWalker<'_> {
        TreeWalker::new(self, key)
    }

    pub(crate) fn child_indices(&self, key: &ParentKey) -> &[usize] {
        self.children.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    pub(crate) fn item(&self, index: usize) -> &Item {
        &self.items[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmtree_types::{ItemId, ItemKind, Subtype};

    fn item(id: &str, name: &str, kind: ItemKind, parent: ParentKey) -> Item {
        Item::new(ItemId::parse(id).unwrap(), name, kind, parent)
    }

    fn sample() -> DocumentTree {
        let a = ItemId::parse("a").unwrap();
        let library = Library::from_items(vec![
            item("a", "A", ItemKind::Collection, ParentKey::Root),
            item("b", "B", ItemKind::Leaf(Subtype::Pdf), ParentKey::Item(a)),
            item("c", "C", ItemKind::Leaf(Subtype::Notebook), ParentKey::Root),
        ])
        .library;
        DocumentTree::new(library)
    }

    #[test]
    fn test_root_listing_is_sorted() {
        let tree = sample();
        let names: Vec<&str> = tree.children(&ParentKey::Root).map(Item::name).collect();
        assert_eq!(names, vec!["A", "C"]);
    }

    #[test]
    fn test_summary_counts_collections_and_leaves() {
        let tree = sample();
        assert_eq!(
            tree.summary(),
            TreeSummary {
                directories: 1,
                files: 2
            }
        );
    }

    #[test]
    fn test_non_empty_trash_counts_as_directory() {
        let library = Library::from_items(vec![item(
            "t",
            "Old",
            ItemKind::Leaf(Subtype::Epub),
            ParentKey::Trash,
        )])
        .library;
        let tree = DocumentTree::new(library);

        assert!(!tree.has_children(&ParentKey::Root));
        assert_eq!(
            tree.summary(),
            TreeSummary {
                directories: 1,
                files: 1
            }
        );
    }

    #[test]
    fn test_empty_tree() {
        let tree = DocumentTree::new(Library::default());
        assert!(tree.items().is_empty());
        assert_eq!(tree.summary(), TreeSummary::default());
        assert_eq!(tree.children(&ParentKey::Root).count(), 0);
    }
}
