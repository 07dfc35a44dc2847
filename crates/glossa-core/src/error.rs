use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error(transparent)]
    Archive(#[from] glossa_archive::Error),

    #[error("command not found: {cmd}")]
    CommandNotFound { cmd: String },

    #[error("failed to run {cmd}: {source}")]
    CommandFailed { cmd: String, source: io::Error },

    #[error("git {args} failed: {stderr}")]
    GitFailed { args: String, stderr: String },

    #[error("classifier exited with code {code}: {stderr}")]
    ClassifierFailed { code: i32, stderr: String },

    #[error("classifier output is not a valid breakdown: {0}")]
    MalformedReport(#[from] serde_json::Error),

    #[error("classifier returned an empty breakdown")]
    EmptyReport,

    #[error(transparent)]
    Io(#[from] io::Error),
}
