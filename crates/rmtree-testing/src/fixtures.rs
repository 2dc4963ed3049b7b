//! Fixtures for building metadata directories on disk.
//!
//! Each item is written as `<id>.metadata`; pdf/epub companions are empty
//! files next to it, since only their presence matters.

use anyhow::Result;
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A flat metadata directory living in its own temp dir.
///
/// # Example
/// ```no_run
/// use rmtree_testing::LibraryFixture;
///
/// let fixture = LibraryFixture::new();
/// fixture.folder("a", "A", "").unwrap();
/// fixture.pdf("b", "B", "a").unwrap();
/// ```
pub struct LibraryFixture {
    temp_dir: TempDir,
}

impl Default for LibraryFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl LibraryFixture {
    /// Create an empty metadata directory.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write an arbitrary JSON value as the record for `id`.
    pub fn record(&self, id: &str, value: Value) -> Result<PathBuf> {
        let path = self.path().join(format!("{id}.metadata"));
        fs::write(&path, serde_json::to_vec_pretty(&value)?)?;
        Ok(path)
    }

    /// Write raw bytes under an arbitrary file name.
    pub fn raw(&self, file_name: &str, contents: impl AsRef<[u8]>) -> Result<PathBuf> {
        let path = self.path().join(file_name);
        fs::write(&path, contents)?;
        Ok(path)
    }

    pub fn folder(&self, id: &str, name: &str, parent: &str) -> Result<()> {
        self.record(
            id,
            json!({"visibleName": name, "type": "CollectionType", "parent": parent}),
        )?;
        Ok(())
    }

    /// A document with no companion file, i.e. a notebook.
    pub fn notebook(&self, id: &str, name: &str, parent: &str) -> Result<()> {
        self.record(
            id,
            json!({"visibleName": name, "type": "DocumentType", "parent": parent}),
        )?;
        Ok(())
    }

    pub fn pdf(&self, id: &str, name: &str, parent: &str) -> Result<()> {
        self.notebook(id, name, parent)?;
        self.raw(&format!("{id}.pdf"), b"%PDF-1.4")?;
        Ok(())
    }

    pub fn epub(&self, id: &str, name: &str, parent: &str) -> Result<()> {
        self.notebook(id, name, parent)?;
        self.raw(&format!("{id}.epub"), b"PK")?;
        Ok(())
    }

    /// A document flagged as deleted.
    pub fn deleted(&self, id: &str, name: &str, parent: &str) -> Result<()> {
        self.record(
            id,
            json!({
                "visibleName": name,
                "type": "DocumentType",
                "parent": parent,
                "deleted": true
            }),
        )?;
        Ok(())
    }
}
