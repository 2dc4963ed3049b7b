use rmtree_types::{ItemId, Subtype};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use crate::{Error, Result};

pub const METADATA_EXTENSION: &str = "metadata";
pub const PDF_EXTENSION: &str = "pdf";
pub const EPUB_EXTENSION: &str = "epub";

/// What a file in the source directory contributes to the load
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileRole {
    /// Per-item metadata record
    Record(ItemId),
    /// Companion marking the item as a pdf document
    PdfCompanion(ItemId),
    /// Companion marking the item as an epub document
    EpubCompanion(ItemId),
    /// Anything else (content folders, thumbnails, caches)
    Ignored,
}

impl FileRole {
    /// Classify a file by extension; the file stem becomes the item id
    pub fn classify(path: &Path) -> Self {
        let Some(id) = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .and_then(|stem| ItemId::parse(stem).ok())
        else {
            return FileRole::Ignored;
        };

        match path.extension().and_then(|ext| ext.to_str()) {
            Some(METADATA_EXTENSION) => FileRole::Record(id),
            Some(PDF_EXTENSION) => FileRole::PdfCompanion(id),
            Some(EPUB_EXTENSION) => FileRole::EpubCompanion(id),
            _ => FileRole::Ignored,
        }
    }
}

/// Companion file presence, keyed by item id
#[derive(Debug, Clone, Default)]
pub struct CompanionIndex {
    pdf: HashSet<ItemId>,
    epub: HashSet<ItemId>,
}

impl CompanionIndex {
    pub fn insert_pdf(&mut self, id: ItemId) {
        self.pdf.insert(id);
    }

    pub fn insert_epub(&mut self, id: ItemId) {
        self.epub.insert(id);
    }

    /// Leaf subtype for an item: epub wins over pdf, notebook otherwise
    pub fn subtype_for(&self, id: &ItemId) -> Subtype {
        if self.epub.contains(id) {
            Subtype::Epub
        } else if self.pdf.contains(id) {
            Subtype::Pdf
        } else {
            Subtype::Notebook
        }
    }
}

/// Everything discovered in one pass over the source directory
#[derive(Debug, Clone, Default)]
pub struct SourceScan {
    /// Metadata records in file-name order
    pub records: Vec<(ItemId, PathBuf)>,
    pub companions: CompanionIndex,
}

/// Enumerate records and companion files directly inside `root`
///
/// Only a failure to list `root` itself is an error; unreadable entries are skipped.
pub fn scan_source(root: &Path) -> Result<SourceScan> {
    if !root.exists() {
        return Err(Error::SourceNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(Error::NotADirectory(root.to_path_buf()));
    }

    let mut scan = SourceScan::default();

    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => return Err(Error::Scan(err)),
            Err(err) => {
                debug!(error = %err, "skipping unreadable directory entry");
                continue;
            }
        };

        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        match FileRole::classify(path) {
            FileRole::Record(id) => scan.records.push((id, path.to_path_buf())),
            FileRole::PdfCompanion(id) => scan.companions.insert_pdf(id),
            FileRole::EpubCompanion(id) => scan.companions.insert_epub(id),
            FileRole::Ignored => {}
        }
    }

    Ok(scan)
}
