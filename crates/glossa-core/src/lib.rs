//! Archive language analysis pipeline.
//!
//! Extracts a ZIP archive into an ephemeral workspace, detects the real
//! project root, bootstraps a transient git repository, runs the
//! `github-linguist` classifier (locally or containerized) in breakdown
//! mode, and folds its report into per-language percentages and line
//! counts. The classification heuristics themselves live entirely in the
//! external tool; this crate orchestrates around it.

pub use analyzer::{Analyzer, DEFAULT_COMMAND, DEFAULT_IMAGE, IMAGE_ENV};
pub use error::{Error, Result};
pub use linguist::ExecMode;
pub use report::{Breakdown, LanguageFiles, parse_breakdown};
pub use root::detect_project_root;
pub use stats::{LanguageStat, aggregate, count_newlines};

mod analyzer;
mod error;
mod exec;
mod git;
mod linguist;
mod report;
mod root;
mod stats;
