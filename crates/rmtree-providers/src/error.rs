use std::fmt;
use std::path::PathBuf;

/// Result type for rmtree-providers operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the providers layer
///
/// `SourceNotFound`, `NotADirectory`, `Scan` and `Runtime` abort a load.
/// `Io` and `Json` only ever concern a single record, which is skipped.
#[derive(Debug)]
pub enum Error {
    /// Configured source path does not exist
    SourceNotFound(PathBuf),

    /// Configured source path is not a directory
    NotADirectory(PathBuf),

    /// Source directory could not be enumerated
    Scan(walkdir::Error),

    /// Worker runtime could not be started
    Runtime(std::io::Error),

    /// IO operation failed
    Io(std::io::Error),

    /// JSON parsing failed
    Json(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::SourceNotFound(path) => write!(f, "Path '{}' does not exist", path.display()),
            Error::NotADirectory(path) => {
                write!(f, "Path '{}' is not a directory", path.display())
            }
            Error::Scan(err) => write!(f, "Directory scan failed: {}", err),
            Error::Runtime(err) => write!(f, "Failed to start loader runtime: {}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Json(err) => write!(f, "JSON error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Scan(err) => Some(err),
            Error::Runtime(err) | Error::Io(err) => Some(err),
            Error::Json(err) => Some(err),
            Error::SourceNotFound(_) | Error::NotADirectory(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        Error::Scan(err)
    }
}
