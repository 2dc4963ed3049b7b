use rmtree_providers::{load_library, load_library_blocking, Error, LoadOptions};
use rmtree_types::{ItemId, ItemKind, ParentKey, Subtype};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_record(dir: &Path, id: &str, json: &str) {
    fs::write(dir.join(format!("{id}.metadata")), json).unwrap();
}

fn id(s: &str) -> ItemId {
    ItemId::parse(s).unwrap()
}

#[tokio::test]
async fn test_loads_items_and_classifies_subtypes() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    write_record(
        dir.path(),
        "folder",
        r#"{"visibleName": "Folder", "type": "CollectionType", "parent": ""}"#,
    );
    write_record(
        dir.path(),
        "paper",
        r#"{"visibleName": "Paper", "type": "DocumentType", "parent": "folder"}"#,
    );
    write_record(dir.path(), "book", r#"{"visibleName": "Book", "parent": ""}"#);
    write_record(dir.path(), "notes", r#"{"visibleName": "Notes"}"#);
    fs::write(dir.path().join("paper.pdf"), b"%PDF")?;
    fs::write(dir.path().join("book.epub"), b"PK")?;
    fs::write(dir.path().join("book.pdf"), b"%PDF")?;

    let report = load_library(dir.path(), &LoadOptions::default()).await?;
    let library = report.library;

    assert_eq!(library.len(), 4);
    assert_eq!(library.get(&id("folder")).unwrap().kind(), ItemKind::Collection);
    assert_eq!(
        library.get(&id("paper")).unwrap().kind(),
        ItemKind::Leaf(Subtype::Pdf)
    );
    assert_eq!(
        library.get(&id("book")).unwrap().kind(),
        ItemKind::Leaf(Subtype::Epub)
    );
    assert_eq!(
        library.get(&id("notes")).unwrap().kind(),
        ItemKind::Leaf(Subtype::Notebook)
    );
    assert_eq!(
        library.get(&id("paper")).unwrap().parent(),
        &ParentKey::Item(id("folder"))
    );
    Ok(())
}

#[tokio::test]
async fn test_invalid_and_deleted_records_are_skipped() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    write_record(dir.path(), "good", r#"{"visibleName": "Good"}"#);
    write_record(dir.path(), "broken", "{ this is not json");
    write_record(dir.path(), "array", "[1, 2, 3]");
    write_record(
        dir.path(),
        "gone",
        r#"{"visibleName": "Gone", "deleted": true}"#,
    );

    let report = load_library(dir.path(), &LoadOptions::default()).await?;

    assert_eq!(report.library.len(), 1);
    assert!(report.library.contains(&id("good")));
    assert_eq!(report.skipped, 2);
    assert_eq!(report.deleted, 1);
    Ok(())
}

#[tokio::test]
async fn test_unrelated_files_are_ignored() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    write_record(dir.path(), "doc", r#"{"visibleName": "Doc"}"#);
    fs::write(dir.path().join("doc.content"), "{}")?;
    fs::create_dir(dir.path().join("doc"))?;
    fs::create_dir(dir.path().join("nested"))?;
    write_record(&dir.path().join("nested"), "deep", r#"{"visibleName": "Deep"}"#);

    let report = load_library(dir.path(), &LoadOptions::default()).await?;

    assert_eq!(report.library.len(), 1);
    assert!(!report.library.contains(&id("deep")));
    Ok(())
}

#[tokio::test]
async fn test_single_worker_loads_everything() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    for i in 0..40 {
        write_record(
            dir.path(),
            &format!("item-{i:02}"),
            &format!(r#"{{"visibleName": "Item {i}"}}"#),
        );
    }

    let options = LoadOptions { concurrency: 1 };
    let report = load_library(dir.path(), &options).await?;

    assert_eq!(report.library.len(), 40);
    assert_eq!(report.skipped, 0);
    Ok(())
}

#[test]
fn test_blocking_loads_are_identical_across_runs() {
    let dir = TempDir::new().unwrap();
    for i in 0..100 {
        write_record(
            dir.path(),
            &format!("doc-{i:03}"),
            &format!(r#"{{"visibleName": "Doc {}", "parent": "doc-{:03}"}}"#, i, i / 3),
        );
    }

    let first = load_library_blocking(dir.path(), &LoadOptions::default()).unwrap();
    let second = load_library_blocking(dir.path(), &LoadOptions { concurrency: 3 }).unwrap();

    assert_eq!(first.library, second.library);
    assert_eq!(first.library.len(), 100);
}

#[test]
fn test_missing_source_is_fatal() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing");

    let err = load_library_blocking(&missing, &LoadOptions::default()).unwrap_err();
    assert!(matches!(err, Error::SourceNotFound(_)));
    assert!(err.to_string().contains("does not exist"));
}

#[test]
fn test_file_source_is_fatal() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("plain.txt");
    fs::write(&file, "hello").unwrap();

    let err = load_library_blocking(&file, &LoadOptions::default()).unwrap_err();
    assert!(matches!(err, Error::NotADirectory(_)));
}

#[test]
fn test_empty_directory_loads_nothing() {
    let dir = TempDir::new().unwrap();
    let report = load_library_blocking(dir.path(), &LoadOptions::default()).unwrap();
    assert!(report.library.is_empty());
}
