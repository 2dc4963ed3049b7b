use rmtree_types::{Item, ItemId, ItemKind, ParentKey};
use std::path::Path;

use crate::discovery::CompanionIndex;
use crate::schema::MetadataRecord;
use crate::Result;

/// What one metadata record turned into
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    Item(Item),
    /// Record is flagged deleted and must not appear anywhere
    Deleted,
}

/// Read and convert one metadata record
pub fn read_record(path: &Path, id: ItemId, companions: &CompanionIndex) -> Result<RecordOutcome> {
    let text = std::fs::read_to_string(path)?;
    let record: MetadataRecord = serde_json::from_str(&text)?;
    Ok(convert_record(record, id, companions))
}

/// Turn a parsed record into an item, classifying leaves by companion files
pub fn convert_record(
    record: MetadataRecord,
    id: ItemId,
    companions: &CompanionIndex,
) -> RecordOutcome {
    if record.is_deleted() {
        return RecordOutcome::Deleted;
    }

    let kind = if record.is_collection() {
        ItemKind::Collection
    } else {
        ItemKind::Leaf(companions.subtype_for(&id))
    };
    let parent = ParentKey::from_reference(record.parent_reference());

    RecordOutcome::Item(Item::new(id, record.visible_name(), kind, parent))
}
