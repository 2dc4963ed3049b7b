use rmtree_types::{Category, Item};

/// Directory and file totals for the summary line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeSummary {
    /// Collections, plus one for the trash folder when it has content
    pub directories: usize,
    /// Leaves
    pub files: usize,
}

/// Count every loaded item, whether or not it is reachable from the root
pub fn summarize<'a>(items: impl IntoIterator<Item = &'a Item>, has_trash: bool) -> TreeSummary {
    let mut summary = TreeSummary::default();
    for item in items {
        match item.category() {
            Category::Collection => summary.directories += 1,
            Category::Leaf => summary.files += 1,
        }
    }
    if has_trash {
        summary.directories += 1;
    }
    summary
}
