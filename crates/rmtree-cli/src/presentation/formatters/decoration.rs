use owo_colors::{AnsiColors, OwoColorize};
use rmtree_types::{Category, ItemKind, Subtype};
use std::collections::HashMap;

use super::options::FormatOptions;

/// Static look of one (category, subtype) pair
#[derive(Debug, Clone, Copy)]
pub struct Decoration {
    pub icon: &'static str,
    pub color: Option<AnsiColors>,
    pub label: Option<&'static str>,
}

impl Decoration {
    const NONE: Decoration = Decoration {
        icon: "",
        color: None,
        label: None,
    };
}

/// Lookup from (category, subtype) to its decoration
#[derive(Debug, Clone)]
pub struct DecorationTable {
    entries: HashMap<(Category, Option<Subtype>), Decoration>,
}

impl DecorationTable {
    /// Folders cyan, pdf red, epub green, notebooks uncolored
    pub fn standard() -> Self {
        let entries = HashMap::from([
            (
                (Category::Collection, None),
                Decoration {
                    icon: "📁 ",
                    color: Some(AnsiColors::Cyan),
                    label: None,
                },
            ),
            (
                (Category::Leaf, Some(Subtype::Pdf)),
                Decoration {
                    icon: "📕 ",
                    color: Some(AnsiColors::Red),
                    label: Some("pdf"),
                },
            ),
            (
                (Category::Leaf, Some(Subtype::Epub)),
                Decoration {
                    icon: "📗 ",
                    color: Some(AnsiColors::Green),
                    label: Some("epub"),
                },
            ),
            (
                (Category::Leaf, Some(Subtype::Notebook)),
                Decoration {
                    icon: "📓 ",
                    color: None,
                    label: Some("notebook"),
                },
            ),
        ]);
        Self { entries }
    }

    pub fn lookup(&self, kind: ItemKind) -> Decoration {
        self.entries
            .get(&(kind.category(), kind.subtype()))
            .copied()
            .unwrap_or(Decoration::NONE)
    }
}

/// Per-item decorations after applying the display flags
#[derive(Debug, Clone, Default)]
pub struct ItemDecoration {
    pub icon: &'static str,
    pub color: Option<AnsiColors>,
    pub type_label: String,
    pub id_suffix: String,
}

/// Resolve decorations for an item
///
/// Collections never get a type label or an id suffix.
pub fn decorate(kind: ItemKind, id: &str, options: &FormatOptions) -> ItemDecoration {
    let decoration = options.decorations.lookup(kind);
    let is_leaf = !kind.is_collection();

    ItemDecoration {
        icon: if options.show_icons {
            decoration.icon
        } else {
            ""
        },
        color: decoration.color.filter(|_| options.enable_color),
        type_label: match decoration.label {
            Some(label) if options.show_labels && is_leaf => format!(" ({})", label),
            _ => String::new(),
        },
        id_suffix: if options.show_ids && is_leaf {
            format!(" [{}]", id)
        } else {
            String::new()
        },
    }
}

impl ItemDecoration {
    /// `<color><icon><name><reset><label><id>`
    pub fn render(&self, name: &str) -> String {
        let body = format!("{}{}", self.icon, name);
        let body = match self.color {
            Some(color) => body.color(color).to_string(),
            None => body,
        };
        format!("{}{}{}", body, self.type_label, self.id_suffix)
    }
}
