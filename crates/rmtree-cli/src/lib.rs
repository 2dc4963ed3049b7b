// NOTE: rmtree Architecture Rationale
//
// Why parent pointers instead of walking folders?
// - The source directory is flat: one `<id>.metadata` record per item
// - Hierarchy only exists as `parent` references inside those records
// - The tree is rebuilt on every run; nothing is cached or written back
//
// Why load concurrently but render single-threaded?
// - Records are independent, so parsing them fans out across a worker pool
// - All parse results are merged after one join point
// - Ordering is imposed afterwards, so output never depends on completion order

mod args;
mod commands;
pub mod config;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::Cli;
pub use commands::run;
