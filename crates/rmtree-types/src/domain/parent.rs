use std::fmt;

use super::item::ItemId;

/// Parent reference value reserved for the trash virtual root
pub const TRASH_SENTINEL: &str = "trash";

/// Where an item hangs in the tree
///
/// The two virtual roots are distinct variants, so an item whose id happens
/// to be `root` or `trash` never collides with them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ParentKey {
    /// Top-level listing
    Root,
    /// Trash virtual root
    Trash,
    /// A real item
    Item(ItemId),
}

impl ParentKey {
    /// Resolve a raw parent reference from a metadata record
    ///
    /// Empty (or unusable) references resolve to the top-level root.
    pub fn from_reference(reference: &str) -> Self {
        match reference {
            "" => ParentKey::Root,
            TRASH_SENTINEL => ParentKey::Trash,
            other => ItemId::parse(other)
                .map(ParentKey::Item)
                .unwrap_or(ParentKey::Root),
        }
    }
}

impl fmt::Display for ParentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParentKey::Root => write!(f, "<root>"),
            ParentKey::Trash => write!(f, "<trash>"),
            ParentKey::Item(id) => write!(f, "{}", id),
        }
    }
}
