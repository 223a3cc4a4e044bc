use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CutterError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("failed to open input file {}: {source}", path.display())]
    OpenInput { path: PathBuf, source: io::Error },

    #[error("failed to stat input file {}: {source}", path.display())]
    Metadata { path: PathBuf, source: io::Error },

    #[error("failed to create output directory {}: {source}", path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("error reading input file: {0}")]
    Read(#[source] io::Error),

    #[error("failed to create chunk file {}: {source}", path.display())]
    CreateChunk { path: PathBuf, source: io::Error },

    #[error("failed to write chunk {}: {source}", path.display())]
    WriteChunk { path: PathBuf, source: io::Error },
}

impl CutterError {
    /// True when the input file does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CutterError::OpenInput { source, .. } if source.kind() == io::ErrorKind::NotFound
        )
    }

    /// True for rejected sizes or counts
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, CutterError::InvalidArgument(_))
    }
}
