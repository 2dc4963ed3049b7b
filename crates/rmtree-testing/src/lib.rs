//! Testing infrastructure for rmtree integration tests.
//!
//! - `LibraryFixture`: writes metadata records and companion files into a temp directory
//! - `TestWorld`: runs the `rmtree` binary against a fixture

pub mod fixtures;
pub mod world;

pub use fixtures::LibraryFixture;
pub use world::{CliResult, TestWorld};
