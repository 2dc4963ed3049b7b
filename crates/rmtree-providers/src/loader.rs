use futures::stream::{self, StreamExt};
use rmtree_types::{Item, ItemId, Library, MergeOutcome};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

use crate::discovery::{scan_source, CompanionIndex, SourceScan};
use crate::io::{read_record, RecordOutcome};
use crate::{Error, Result};

/// Tuning for the concurrent record parse
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Maximum number of records parsed at the same time
    pub concurrency: usize,
}

impl Default for LoadOptions {
    fn default() -> Self {
        let cores = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(2);
        Self {
            concurrency: cores * 4,
        }
    }
}

/// Loaded library plus what was left out of it
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub library: Library,
    /// Records that could not be read or parsed
    pub skipped: usize,
    /// Records flagged as deleted
    pub deleted: usize,
    /// Identifiers rejected because several records claimed them
    pub duplicates: Vec<ItemId>,
}

/// Load every metadata record under `root`
///
/// Each record is read and parsed on the blocking worker pool, at most
/// `options.concurrency` at a time. Every task returns its own outcome;
/// outcomes are merged only after all of them completed, so no state is
/// shared between tasks. A record that fails to load is skipped and never
/// fails the whole load.
pub async fn load_library(root: &Path, options: &LoadOptions) -> Result<LoadReport> {
    let SourceScan {
        records,
        companions,
    } = scan_source(root)?;
    let total = records.len();
    let companions = Arc::new(companions);

    let outcomes: Vec<Option<RecordOutcome>> = stream::iter(records)
        .map(|(id, path)| {
            let companions = Arc::clone(&companions);
            tokio::task::spawn_blocking(move || load_one(&path, id, &companions))
        })
        .buffer_unordered(options.concurrency.max(1))
        .map(|joined| {
            joined.unwrap_or_else(|err| {
                debug!(error = %err, "record task did not complete");
                None
            })
        })
        .collect()
        .await;

    let mut items: Vec<Item> = Vec::with_capacity(outcomes.len());
    let mut skipped = 0;
    let mut deleted = 0;
    for outcome in outcomes {
        match outcome {
            Some(RecordOutcome::Item(item)) => items.push(item),
            Some(RecordOutcome::Deleted) => deleted += 1,
            None => skipped += 1,
        }
    }

    let MergeOutcome {
        library,
        duplicates,
    } = Library::from_items(items);
    for id in &duplicates {
        debug!(id = %id, "rejecting records sharing a duplicated id");
    }

    info!(
        root = %root.display(),
        records = total,
        loaded = library.len(),
        deleted,
        skipped,
        duplicates = duplicates.len(),
        "metadata loaded"
    );

    Ok(LoadReport {
        library,
        skipped,
        deleted,
        duplicates,
    })
}

/// Synchronous entry point: runs [`load_library`] on a dedicated multi-thread runtime
pub fn load_library_blocking(root: &Path, options: &LoadOptions) -> Result<LoadReport> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .max_blocking_threads(options.concurrency.max(1))
        .enable_all()
        .build()
        .map_err(Error::Runtime)?;

    runtime.block_on(load_library(root, options))
}

fn load_one(path: &Path, id: ItemId, companions: &CompanionIndex) -> Option<RecordOutcome> {
    match read_record(path, id, companions) {
        Ok(outcome) => Some(outcome),
        Err(err) => {
            debug!(record = %path.display(), error = %err, "skipping unreadable record");
            None
        }
    }
}
