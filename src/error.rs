//! Module defining the errors which are exposed to the users of the crate

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No persisted seed record at the configured path
    #[error("config file '{}' not found", path.display())]
    ConfigMissing { path: PathBuf },

    /// A persisted record exists but cannot be parsed into `{seed, check}`
    #[error("config file '{}' is corrupted: {message}", path.display())]
    ConfigCorrupt { path: PathBuf, message: String },

    /// The recomputed check disagrees with the persisted one, e.g., because the record was hand-edited
    #[error("seed check failed for config file '{}'", path.display())]
    SeedCheckMismatch { path: PathBuf },

    /// The output folder already holds files and the operator declined to clear it
    #[error("output folder '{}' is not empty", folder.display())]
    OutputNotEmpty { folder: PathBuf },

    /// `generate` was called on a collection without a single registered case
    #[error("no test cases were registered before generation")]
    NoRegisteredCases,

    /// A built case instance failed its own `validate`; the run is aborted as a whole
    #[error("validation failed for test case '{name}': {message}")]
    CaseValidation { name: String, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub(crate) fn config_corrupt(path: impl Into<PathBuf>, message: impl Into<String>) -> Error {
    Error::ConfigCorrupt {
        path: path.into(),
        message: message.into(),
    }
}

pub(crate) fn case_validation(name: impl Into<String>, message: impl Into<String>) -> Error {
    Error::CaseValidation {
        name: name.into(),
        message: message.into(),
    }
}
