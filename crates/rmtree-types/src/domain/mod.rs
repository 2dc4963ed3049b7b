pub mod item;
pub mod library;
pub mod parent;

pub use item::*;
pub use library::*;
pub use parent::*;
