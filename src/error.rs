use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum FoldError {
    #[error("root directory not found: {0}")]
    RootNotFound(PathBuf),
    #[error("invalid filter regex '{pattern}': {source}")]
    InvalidRegex {
        pattern: String,
        source: regex::Error,
    },
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}
impl FoldError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FoldError::Io {
            path: path.into(),
            source,
        }
    }
}
