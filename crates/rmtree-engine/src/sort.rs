use rmtree_types::Item;

use crate::graph::ChildrenIndex;

/// Order every sibling list: collections first, then by name, then by id
pub fn sort_children(children: &mut ChildrenIndex, items: &[Item]) {
    for siblings in children.values_mut() {
        siblings.sort_by(|&a, &b| items[a].sibling_order(&items[b]));
    }
}
