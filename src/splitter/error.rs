use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SplitError {
    #[error("Input directory not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("IO error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid dataset split ratios. Test: {test}, Valid: {valid}")]
    InvalidSplitRatios { test: f64, valid: f64 },

    #[error("Destination already exists: {}", .0.display())]
    DestinationExists(PathBuf),
}

impl SplitError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SplitError::Io {
            path: path.into(),
            source,
        }
    }
}
