use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlibError {
    #[error(transparent)]
    Inspect(#[from] inspect::InspectError),
    #[error("section '{0}:' not found in symbol dump")]
    SectionNotFound(String),
    #[error("not a valid analysis document: {0}")]
    Format(String),
    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("percentage undefined for an archive with no object files")]
    DivisionUndefined,
}

impl SlibError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, SlibError>;
