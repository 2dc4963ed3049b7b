use std::io::{self, Write};

use anyhow::Result;
use rmtree_engine::build_tree;
use rmtree_providers::load_library_blocking;
use tracing::debug;

use crate::config::Config;
use crate::presentation::{present_tree, TreeView};

pub fn handle(config: &Config) -> Result<()> {
    let report = load_library_blocking(&config.path, &config.load)?;

    if !report.duplicates.is_empty() {
        debug!(
            count = report.duplicates.len(),
            "items with duplicated ids were left out"
        );
    }
    debug!(
        skipped = report.skipped,
        deleted = report.deleted,
        "records excluded from the tree"
    );

    let tree = build_tree(report.library);
    let view_model = present_tree(&tree, config.max_depth);
    if view_model.truncated > 0 {
        debug!(
            branches = view_model.truncated,
            max_depth = config.max_depth,
            "branches cut at the depth limit"
        );
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write!(out, "{}", TreeView::new(&view_model, &config.format))?;
    out.flush()?;

    Ok(())
}
