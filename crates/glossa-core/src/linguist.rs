use std::path::Path;
use std::process::Output;

use tracing::debug;

use crate::error::{Error, Result};
use crate::exec::{Command, locate};

/// Arguments requesting a per-language breakdown in JSON form.
const BREAKDOWN_ARGS: [&str; 3] = ["--breakdown", "--json", "."];

/// Where the project root is mounted inside the container.
const CONTAINER_MOUNT: &str = "/repo";

/// How the classifier is executed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExecMode {
    /// Run a local executable with the project root as working directory.
    Local { command: String },
    /// Run inside an isolated container with the project root bind-mounted
    /// read-only.
    Container { image: String },
}

/// Invoke the classifier against `root` and return its raw stdout.
///
/// A non-zero exit fails with the captured exit code and stderr.
pub fn run_breakdown(mode: &ExecMode, root: &Path) -> Result<String> {
    let output = match mode {
        ExecMode::Local { command } => {
            let program = locate(command)?;
            debug!(command = %program.display(), "running classifier locally");
            Command::new(program.to_string_lossy().into_owned())
                .current_dir(root)
                .args(BREAKDOWN_ARGS)
                .capture()?
        }
        ExecMode::Container { image } => {
            locate("docker")?;
            debug!(%image, "running classifier in container");
            container_command(image, root).capture()?
        }
    };
    check_status(output)
}

fn container_command(image: &str, root: &Path) -> Command {
    let mount = format!("{}:{CONTAINER_MOUNT}:ro", root.display());
    let cmd = Command::new("docker").args(["run", "--rm"]);
    let cmd = apply_invoking_user(cmd, root);
    cmd.args(["-v", &mount, "-w", CONTAINER_MOUNT, image])
        .args(BREAKDOWN_ARGS)
}

/// Pass the invoking user's numeric identity through, so files the tool
/// creates are not owned by a privileged account.
#[cfg(unix)]
fn apply_invoking_user(cmd: Command, root: &Path) -> Command {
    use std::os::unix::fs::MetadataExt;

    match std::fs::metadata(root) {
        Ok(meta) => cmd.args(["--user", &format!("{}:{}", meta.uid(), meta.gid())]),
        Err(_) => cmd,
    }
}

#[cfg(not(unix))]
fn apply_invoking_user(cmd: Command, _root: &Path) -> Command {
    cmd
}

fn check_status(output: Output) -> Result<String> {
    if !output.status.success() {
        return Err(Error::ClassifierFailed {
            code: output.status.code().unwrap_or(-1),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
