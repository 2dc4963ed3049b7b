pub mod tree;

pub use tree::{TreeEntryViewModel, TreeViewModel};
