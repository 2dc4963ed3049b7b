//! # Presentation Layer
//!
//! Turns the document tree into text. The data flow is strictly
//! unidirectional:
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ View ] --> stdout
//!  (load+build)     (walk tree)       (raw lines)     (glyphs, colors)
//! ```
//!
//! ## Directory Guide
//!
//! ### 1. `view_models/` (The Data Contract)
//! * Raw data only: names, ids, kinds, depth and connector state.
//!
//! ### 2. `presenters/` (The Transformation Logic)
//! * Walks the tree, applies the depth ceiling, lays out the trash branch.
//! * Does **not** use `formatters`.
//!
//! ### 3. `views/` (The Rendering Logic)
//! * Implements `fmt::Display`: connectors, guides, decorations, summary line.
//!
//! ### 4. `formatters/` (The Utilities)
//! * Decoration lookup (icons, colors, labels, id suffixes) and pluralization.

pub mod formatters;
pub mod presenters;
pub mod view_models;
pub mod views;

pub use formatters::FormatOptions;
pub use presenters::present_tree;
pub use view_models::TreeViewModel;
pub use views::TreeView;
