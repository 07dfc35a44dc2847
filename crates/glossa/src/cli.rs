use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use glossa_core::{Analyzer, DEFAULT_COMMAND, DEFAULT_IMAGE, ExecMode, IMAGE_ENV};

/// Analyze the programming-language composition of a project archive.
#[derive(Debug, Parser)]
#[command(name = "glossa", version = env!("CARGO_PKG_VERSION"), about, long_about = None)]
pub struct App {
    /// ZIP archive containing the project
    pub archive: PathBuf,

    /// Run the classifier in a container instead of a local executable
    #[arg(long)]
    pub docker: bool,

    /// Container image (falls back to $LINGUIST_DOCKER_IMAGE, then "linguist")
    #[arg(long)]
    pub image: Option<String>,

    /// Local classifier executable
    #[arg(long, default_value = DEFAULT_COMMAND)]
    pub linguist_cmd: String,

    /// Emit single-line JSON instead of pretty output
    #[arg(long)]
    pub compact: bool,
}

impl App {
    fn exec_mode(&self) -> ExecMode {
        if self.docker {
            let image = self
                .image
                .clone()
                .or_else(|| std::env::var(IMAGE_ENV).ok())
                .unwrap_or_else(|| DEFAULT_IMAGE.to_string());
            ExecMode::Container { image }
        } else {
            ExecMode::Local {
                command: self.linguist_cmd.clone(),
            }
        }
    }
}

pub fn run(app: App) -> Result<()> {
    let analyzer = Analyzer::new(app.exec_mode());
    let stats = analyzer.analyze(&app.archive)?;

    let rendered = if app.compact {
        serde_json::to_string(&stats)?
    } else {
        serde_json::to_string_pretty(&stats)?
    };
    println!("{rendered}");
    Ok(())
}
