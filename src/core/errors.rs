use std::path::PathBuf;

/// All domain errors for passexport.
///
/// Each variant provides enough context to diagnose the issue
/// without needing a debugger.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error(
        "Could not list entries from {store}: {reason}\n\n  \
         Nothing was exported.\n  \
         Check that the store is initialized: gopass ls"
    )]
    ListFailed { store: String, reason: String },

    #[error(
        "Could not read entry '{name}': {reason}\n\n  \
         Solutions:\n    \
         → Check the entry manually: gopass show {name}\n    \
         → Skip unreadable entries: passexport --skip-errors"
    )]
    RetrievalFailed { name: String, reason: String },

    #[error(
        "Secret store not available: {reason}\n\n  \
         Solutions:\n    \
         → Install gopass: https://github.com/gopasspw/gopass\n    \
         → Point to the binary: passexport --gopass /path/to/gopass\n    \
         → Export from a snapshot instead: passexport --store-file entries.json"
    )]
    StoreUnavailable { reason: String },

    #[error(
        "Invalid store file {path}: {detail}\n\n  \
         Expected a JSON array of objects with \"name\", \"password\",\n  \
         \"body\" and \"fields\" members."
    )]
    StoreFileInvalid { path: PathBuf, detail: String },

    #[error("Invalid configuration: {detail}")]
    InvalidConfig { detail: String },

    #[error("Failed to write output: {reason}")]
    OutputFailed { reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<csv::Error> for ExportError {
    fn from(e: csv::Error) -> Self {
        ExportError::OutputFailed {
            reason: e.to_string(),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ExportError>;
