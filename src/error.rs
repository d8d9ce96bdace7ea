use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to read or write the preferences file.
#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("failed to access preferences at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("preferences at {path} are malformed: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A direction name outside `up`, `down`, `left`, `right`.
#[derive(Debug, Clone, Error, Eq, PartialEq)]
#[error("unknown direction `{0}`")]
pub struct ParseDirectionError(pub String);

/// A game mode name outside `single`, `multi`.
#[derive(Debug, Clone, Error, Eq, PartialEq)]
#[error("unknown game mode `{0}` (expected `single` or `multi`)")]
pub struct ParseModeError(pub String);

/// A pacing name outside `fixed`, `accelerating`.
#[derive(Debug, Clone, Error, Eq, PartialEq)]
#[error("unknown pacing `{0}` (expected `fixed` or `accelerating`)")]
pub struct ParsePacingError(pub String);
