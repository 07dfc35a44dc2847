use std::collections::BTreeMap;
use std::path::Path;

use tracing::info;

use glossa_archive::Workspace;

use crate::error::{Error, Result};
use crate::git;
use crate::linguist::{self, ExecMode};
use crate::report;
use crate::root;
use crate::stats::{self, LanguageStat};

/// Local classifier executable used when none is named.
pub const DEFAULT_COMMAND: &str = "github-linguist";
/// Container image used when neither the caller nor the environment names
/// one.
pub const DEFAULT_IMAGE: &str = "linguist";
/// Environment override for the container image.
pub const IMAGE_ENV: &str = "LINGUIST_DOCKER_IMAGE";

/// Archive language analyzer.
///
/// One [`analyze`](Analyzer::analyze) call is a pure function of the
/// archive bytes and the external classifier's behavior; no state persists
/// between invocations.
#[derive(Clone, Debug)]
pub struct Analyzer {
    mode: ExecMode,
}

impl Analyzer {
    pub fn new(mode: ExecMode) -> Self {
        Self { mode }
    }

    /// Local-executable analyzer with the default command name.
    pub fn local() -> Self {
        Self::new(ExecMode::Local {
            command: DEFAULT_COMMAND.to_string(),
        })
    }

    /// Containerized analyzer; the image comes from [`IMAGE_ENV`] when set.
    pub fn containerized() -> Self {
        let image = std::env::var(IMAGE_ENV).unwrap_or_else(|_| DEFAULT_IMAGE.to_string());
        Self::new(ExecMode::Container { image })
    }

    /// Analyze the language composition of the ZIP archive at `archive`.
    ///
    /// Pipeline: unpack into an ephemeral workspace, detect the project
    /// root, bootstrap a transient git repository, run the classifier,
    /// fold its breakdown into percentages and line counts. Every step
    /// fails fast; the workspace is removed on every exit path.
    pub fn analyze(&self, archive: &Path) -> Result<BTreeMap<String, LanguageStat>> {
        if !archive.is_file() {
            return Err(Error::NotFound {
                path: archive.to_path_buf(),
            });
        }

        let workspace = Workspace::unpack(archive)?;
        let project_root = root::detect_project_root(workspace.path());

        git::bootstrap_repository(&project_root)?;
        let raw = linguist::run_breakdown(&self.mode, &project_root)?;
        let breakdown = report::parse_breakdown(&raw)?;
        let result = stats::aggregate(&project_root, &breakdown);

        info!(
            archive = %archive.display(),
            languages = result.len(),
            "analysis complete"
        );
        Ok(result)
    }
}
