use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::exec::Command;

// Synthetic identity for the throwaway commit; no real user is involved.
const COMMIT_AUTHOR: &str = "user.name=linguist";
const COMMIT_EMAIL: &str = "user.email=linguist@example.com";
const COMMIT_MESSAGE: &str = "Initial commit";

/// Turn `root` into a committed git tree.
///
/// The classifier attributes files through history-aware heuristics and is
/// most reliable against a committed tree. The history itself carries no
/// meaning and dies with the workspace.
pub fn bootstrap_repository(root: &Path) -> Result<()> {
    run_git(root, &["init", "-q"])?;
    run_git(root, &["add", "-A"])?;
    run_git(
        root,
        &[
            "-c",
            COMMIT_AUTHOR,
            "-c",
            COMMIT_EMAIL,
            "commit",
            "-m",
            COMMIT_MESSAGE,
            "-q",
        ],
    )?;
    debug!(root = %root.display(), "transient repository committed");
    Ok(())
}

fn run_git(root: &Path, args: &[&str]) -> Result<()> {
    let output = Command::new("git")
        .current_dir(root)
        .args(args)
        .capture()?;
    if !output.status.success() {
        return Err(Error::GitFailed {
            args: args.join(" "),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }
    Ok(())
}
