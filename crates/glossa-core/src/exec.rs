use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command as StdCommand, Output};

use crate::error::{Error, Result};

/// Thin builder over [`std::process::Command`] that captures output and
/// keeps the program name around for error reporting.
#[derive(Debug)]
pub struct Command {
    inner: StdCommand,
    program: String,
}

impl Command {
    pub fn new(program: impl Into<String>) -> Self {
        let program = program.into();
        Self {
            inner: StdCommand::new(&program),
            program,
        }
    }

    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.inner.arg(arg);
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.inner.args(args);
        self
    }

    pub fn current_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.inner.current_dir(dir);
        self
    }

    /// Run to completion, capturing stdout and stderr.
    pub fn capture(mut self) -> Result<Output> {
        self.inner.output().map_err(|source| Error::CommandFailed {
            cmd: self.program.clone(),
            source,
        })
    }
}

/// Locate `program` on the search path.
pub fn locate(program: &str) -> Result<std::path::PathBuf> {
    which::which(program).map_err(|_| Error::CommandNotFound {
        cmd: program.to_string(),
    })
}
