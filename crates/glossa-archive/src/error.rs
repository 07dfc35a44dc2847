use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("archive is corrupted or not a zip file")]
    Corrupted,

    #[error("entry path cannot be represented on this filesystem")]
    InvalidPath,

    #[error("entry escapes extraction root: '{}' resolves to '{}'", .entry.display(), .resolved.display())]
    EntryEscapesRoot { entry: PathBuf, resolved: PathBuf },

    #[error("failed to extract '{}': {source}", .path.display())]
    ExtractionFailed { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    pub(crate) fn extraction(path: &std::path::Path, source: io::Error) -> Self {
        Self::ExtractionFailed {
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
