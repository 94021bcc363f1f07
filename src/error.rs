use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenVersionError {
    /// Opening, truncating or writing the generated file failed.
    #[error("Unable to generate '{}'. Error: {source}.", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid release tag: {0}")]
    InvalidReleaseTag(String),
}

pub type Result<T> = std::result::Result<T, GenVersionError>;
