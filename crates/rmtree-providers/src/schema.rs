use serde::Deserialize;

/// `type` value marking a collection (folder) record
pub const COLLECTION_TYPE: &str = "CollectionType";

/// The fields of a `.metadata` record that the tree needs
///
/// Every field is optional; `null` behaves like an absent field and unknown
/// fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataRecord {
    pub visible_name: Option<String>,
    #[serde(rename = "type")]
    pub record_type: Option<String>,
    pub parent: Option<String>,
    pub deleted: Option<bool>,
}

impl MetadataRecord {
    pub fn is_deleted(&self) -> bool {
        self.deleted.unwrap_or(false)
    }

    pub fn is_collection(&self) -> bool {
        self.record_type.as_deref() == Some(COLLECTION_TYPE)
    }

    pub fn parent_reference(&self) -> &str {
        self.parent.as_deref().unwrap_or_default()
    }

    pub fn visible_name(&self) -> &str {
        self.visible_name.as_deref().unwrap_or_default()
    }
}
