use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tempfile::TempDir;
use tracing::debug;

use crate::error::Result;
use crate::extract::{ExtractReport, extract_zip};

/// Ephemeral extraction workspace for one analysis invocation.
///
/// Owns the temporary directory the archive is unpacked into. The whole tree
/// is removed when the workspace is dropped, on success or failure, so no
/// residue leaks between invocations.
#[derive(Debug)]
pub struct Workspace {
    dir: TempDir,
    report: ExtractReport,
}

impl Workspace {
    /// Unpack `archive` into a fresh process-private temporary directory.
    pub fn unpack(archive: &Path) -> Result<Workspace> {
        let file = File::open(archive)?;
        let dir = tempfile::Builder::new().prefix("glossa-").tempdir()?;
        let report = extract_zip(BufReader::new(file), dir.path())?;
        debug!(
            workspace = %dir.path().display(),
            entries = report.entry_count,
            "archive unpacked"
        );
        Ok(Workspace { dir, report })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn report(&self) -> &ExtractReport {
        &self.report
    }
}
