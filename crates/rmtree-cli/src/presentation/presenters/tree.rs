use rmtree_engine::DocumentTree;
use rmtree_types::ParentKey;

use crate::presentation::view_models::{TreeEntryViewModel, TreeViewModel};

/// Convert the document tree into the lines to print
///
/// The trash branch is listed one level deep: its children appear under a
/// synthesized folder and are not descended into. It sits at a fixed depth,
/// so the depth ceiling never hides it.
pub fn present_tree(tree: &DocumentTree, max_depth: usize) -> TreeViewModel {
    let has_trash = tree.has_children(&ParentKey::Trash);

    let mut walker = tree
        .walk(&ParentKey::Root)
        .max_depth(max_depth)
        .continues_after(has_trash);
    let entries: Vec<TreeEntryViewModel> = walker.by_ref().map(Into::into).collect();
    let truncated = walker.truncated();

    let items: Vec<_> = tree.children(&ParentKey::Trash).collect();
    let count = items.len();
    let trash = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| TreeEntryViewModel {
            id: item.id().to_string(),
            name: item.name().to_string(),
            kind: item.kind(),
            is_last: index + 1 == count,
            ancestors_last: vec![true],
        })
        .collect();

    TreeViewModel {
        entries,
        has_trash,
        trash,
        summary: tree.summary(),
        truncated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmtree_types::{Item, ItemId, ItemKind, Library, Subtype};

    fn item(id: &str, kind: ItemKind, parent: ParentKey) -> Item {
        Item::new(ItemId::parse(id).unwrap(), id.to_uppercase(), kind, parent)
    }

    fn under(id: &str) -> ParentKey {
        ParentKey::Item(ItemId::parse(id).unwrap())
    }

    #[test]
    fn test_trash_keeps_last_root_entry_open() {
        let library = Library::from_items(vec![
            item("a", ItemKind::Collection, ParentKey::Root),
            item("t1", ItemKind::Leaf(Subtype::Pdf), ParentKey::Trash),
            item("t2", ItemKind::Collection, ParentKey::Trash),
            item("t2x", ItemKind::Leaf(Subtype::Pdf), under("t2")),
        ])
        .library;
        let tree = DocumentTree::new(library);

        let vm = present_tree(&tree, 50);

        assert_eq!(vm.entries.len(), 1);
        assert!(!vm.entries[0].is_last);
        let trash: Vec<(&str, bool)> = vm
            .trash
            .iter()
            .map(|e| (e.name.as_str(), e.is_last))
            .collect();
        assert_eq!(trash, vec![("T2", false), ("T1", true)]);
        assert_eq!(vm.summary.directories, 3);
        assert_eq!(vm.summary.files, 2);
    }

    #[test]
    fn test_without_trash_last_root_entry_closes() {
        let library = Library::from_items(vec![
            item("a", ItemKind::Collection, ParentKey::Root),
            item("b", ItemKind::Leaf(Subtype::Notebook), ParentKey::Root),
        ])
        .library;
        let vm = present_tree(&DocumentTree::new(library), 50);

        assert!(!vm.has_trash);
        assert!(vm.trash.is_empty());
        assert!(vm.entries.last().unwrap().is_last);
    }

    #[test]
    fn test_trash_survives_zero_depth() {
        let library = Library::from_items(vec![
            item("kept", ItemKind::Leaf(Subtype::Pdf), ParentKey::Root),
            item("old", ItemKind::Leaf(Subtype::Pdf), ParentKey::Trash),
        ])
        .library;
        let vm = present_tree(&DocumentTree::new(library), 0);

        assert!(vm.has_trash);
        assert!(!vm.entries[0].is_last);
        let trash: Vec<&str> = vm.trash.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(trash, vec!["OLD"]);
    }
}
