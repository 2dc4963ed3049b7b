pub mod tree;

pub use tree::present_tree;
