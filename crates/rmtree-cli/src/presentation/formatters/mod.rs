pub mod decoration;
pub mod options;
pub mod text;

pub use decoration::{decorate, Decoration, DecorationTable, ItemDecoration};
pub use options::FormatOptions;
