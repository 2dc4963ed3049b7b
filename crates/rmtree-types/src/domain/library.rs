use std::collections::{BTreeMap, BTreeSet};

use super::item::{Item, ItemId};

/// Every loaded item, keyed by identifier
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Library {
    items: BTreeMap<ItemId, Item>,
}

/// Result of merging loaded items into a [`Library`]
#[derive(Debug, Clone, Default)]
pub struct MergeOutcome {
    pub library: Library,
    /// Identifiers claimed by more than one item; none of those items are kept
    pub duplicates: Vec<ItemId>,
}

impl Library {
    /// Merge items, rejecting every item whose identifier is not unique
    ///
    /// The outcome does not depend on input order.
    pub fn from_items(items: impl IntoIterator<Item = Item>) -> MergeOutcome {
        let mut kept: BTreeMap<ItemId, Item> = BTreeMap::new();
        let mut duplicates: BTreeSet<ItemId> = BTreeSet::new();

        for item in items {
            if duplicates.contains(item.id()) {
                continue;
            }
            if kept.remove(item.id()).is_some() {
                duplicates.insert(item.id().clone());
                continue;
            }
            kept.insert(item.id().clone(), item);
        }

        MergeOutcome {
            library: Library { items: kept },
            duplicates: duplicates.into_iter().collect(),
        }
    }

    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.items.get(id)
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.items.contains_key(id)
    }

    /// Items in identifier order
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items.into_values().collect()
    }
}
