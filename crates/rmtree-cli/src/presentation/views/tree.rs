use std::fmt;

use rmtree_types::ItemKind;

use crate::presentation::formatters::text::pluralize;
use crate::presentation::formatters::{decorate, FormatOptions};
use crate::presentation::view_models::{TreeEntryViewModel, TreeViewModel};

// Tree drawing glyphs
const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const SPACE: &str = "    ";

const ROOT_MARKER: &str = ".";
const TRASH_NAME: &str = "Trash";

pub struct TreeView<'a> {
    data: &'a TreeViewModel,
    options: &'a FormatOptions,
}

impl<'a> TreeView<'a> {
    pub fn new(data: &'a TreeViewModel, options: &'a FormatOptions) -> Self {
        Self { data, options }
    }

    fn write_entry(&self, f: &mut fmt::Formatter, entry: &TreeEntryViewModel) -> fmt::Result {
        let prefix: String = entry
            .ancestors_last
            .iter()
            .map(|&last| if last { SPACE } else { PIPE })
            .collect();
        let connector = if entry.is_last { LAST_BRANCH } else { BRANCH };
        let decoration = decorate(entry.kind, &entry.id, self.options);

        writeln!(f, "{}{}{}", prefix, connector, decoration.render(&entry.name))
    }
}

impl fmt::Display for TreeView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", ROOT_MARKER)?;

        for entry in &self.data.entries {
            self.write_entry(f, entry)?;
        }

        if self.data.has_trash {
            let folder = decorate(ItemKind::Collection, "", self.options);
            writeln!(f, "{}{}", LAST_BRANCH, folder.render(TRASH_NAME))?;
            for entry in &self.data.trash {
                self.write_entry(f, entry)?;
            }
        }

        writeln!(f)?;
        writeln!(
            f,
            "{}, {}",
            pluralize(self.data.summary.directories, "directory", "directories"),
            pluralize(self.data.summary.files, "file", "files")
        )
    }
}
