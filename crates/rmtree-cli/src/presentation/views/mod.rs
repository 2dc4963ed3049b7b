pub mod tree;

pub use tree::TreeView;
