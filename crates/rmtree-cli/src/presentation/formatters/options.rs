use super::decoration::DecorationTable;

/// Display formatting options
#[derive(Debug, Clone)]
pub struct FormatOptions {
    pub enable_color: bool,
    pub show_icons: bool,
    pub show_labels: bool,
    /// Append leaf identifiers in brackets
    pub show_ids: bool,
    pub decorations: DecorationTable,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            enable_color: true,
            show_icons: false,
            show_labels: false,
            show_ids: false,
            decorations: DecorationTable::standard(),
        }
    }
}

impl FormatOptions {
    /// No color and no decorations: names and connectors only
    pub fn plain() -> Self {
        Self {
            enable_color: false,
            ..Self::default()
        }
    }
}
