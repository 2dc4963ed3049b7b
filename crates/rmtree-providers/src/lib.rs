// Error types
pub mod error;

// Source directory scan
pub mod discovery;

// Metadata record schema
pub mod schema;

// Single-record read and conversion
pub mod io;

// Concurrent loading
pub mod loader;

pub use discovery::{scan_source, CompanionIndex, FileRole, SourceScan};
pub use error::{Error, Result};
pub use io::{read_record, RecordOutcome};
pub use loader::{load_library, load_library_blocking, LoadOptions, LoadReport};
pub use schema::{MetadataRecord, COLLECTION_TYPE};
