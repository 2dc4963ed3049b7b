use rmtree_types::{Item, ItemId, ParentKey};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Children of every parent key, as indices into the item list
pub type ChildrenIndex = HashMap<ParentKey, Vec<usize>>;

/// Group items by parent
///
/// References to items that were never loaded (or were deleted) are re-homed
/// to the top-level root. Cycles are left as they are.
pub fn build_children(items: &[Item]) -> ChildrenIndex {
    let known: HashSet<&ItemId> = items.iter().map(Item::id).collect();
    let mut children = ChildrenIndex::new();

    for (index, item) in items.iter().enumerate() {
        let key = match item.parent() {
            ParentKey::Item(id) if !known.contains(id) => {
                debug!(id = %item.id(), parent = %item.parent(), "re-homing item with unknown parent");
                ParentKey::Root
            }
            other => other.clone(),
        };
        children.entry(key).or_default().push(index);
    }

    children
}
