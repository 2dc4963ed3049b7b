use std::cmp::Ordering;
use std::fmt;

use super::parent::ParentKey;
use crate::{Error, Result};

/// Display name used when a record carries no visible name
pub const UNNAMED: &str = "Unnamed";

/// Item identifier taken from the record's storage name
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(String);

impl ItemId {
    /// Create an identifier, rejecting empty values and path separators
    pub fn parse(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.is_empty() || id.contains(['/', '\\']) {
            return Err(Error::InvalidId(id));
        }
        Ok(Self(id))
    }

    /// Get the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Broad item category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Container (folder-like)
    Collection,
    /// Terminal document
    Leaf,
}

impl Category {
    /// Sort rank: collections before leaves
    pub fn rank(self) -> u8 {
        match self {
            Category::Collection => 0,
            Category::Leaf => 1,
        }
    }
}

/// Leaf subtype derived from companion files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subtype {
    Pdf,
    Epub,
    /// Fallback for leaves without a recognized companion file
    Notebook,
}

impl Subtype {
    pub fn as_str(self) -> &'static str {
        match self {
            Subtype::Pdf => "pdf",
            Subtype::Epub => "epub",
            Subtype::Notebook => "notebook",
        }
    }
}

impl fmt::Display for Subtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Item kind: a collection, or a leaf with its subtype
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Collection,
    Leaf(Subtype),
}

impl ItemKind {
    pub fn category(self) -> Category {
        match self {
            ItemKind::Collection => Category::Collection,
            ItemKind::Leaf(_) => Category::Leaf,
        }
    }

    pub fn subtype(self) -> Option<Subtype> {
        match self {
            ItemKind::Collection => None,
            ItemKind::Leaf(subtype) => Some(subtype),
        }
    }

    pub fn is_collection(self) -> bool {
        matches!(self, ItemKind::Collection)
    }
}

/// Sibling ordering key: category rank, then name in code-point order
///
/// Equivalent to comparing the strings `"<rank>|<name>"` lexically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SortKey {
    rank: u8,
    name: String,
}

impl SortKey {
    pub fn new(category: Category, name: &str) -> Self {
        Self {
            rank: category.rank(),
            name: name.to_string(),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.rank, self.name)
    }
}

/// One entry of the document tree
///
/// Items are built once by the loader and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    id: ItemId,
    name: String,
    kind: ItemKind,
    parent: ParentKey,
    sort_key: SortKey,
}

impl Item {
    /// Create an item; an empty name falls back to [`UNNAMED`]
    pub fn new(id: ItemId, name: impl Into<String>, kind: ItemKind, parent: ParentKey) -> Self {
        let mut name = name.into();
        if name.is_empty() {
            name = UNNAMED.to_string();
        }
        let sort_key = SortKey::new(kind.category(), &name);
        Self {
            id,
            name,
            kind,
            parent,
            sort_key,
        }
    }

    pub fn id(&self) -> &ItemId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    pub fn category(&self) -> Category {
        self.kind.category()
    }

    pub fn subtype(&self) -> Option<Subtype> {
        self.kind.subtype()
    }

    pub fn parent(&self) -> &ParentKey {
        &self.parent
    }

    pub fn sort_key(&self) -> &SortKey {
        &self.sort_key
    }

    /// Total sibling order: sort key, then id so equal names stay stable across runs
    pub fn sibling_order(&self, other: &Item) -> Ordering {
        self.sort_key
            .cmp(&other.sort_key)
            .then_with(|| self.id.cmp(&other.id))
    }
}
