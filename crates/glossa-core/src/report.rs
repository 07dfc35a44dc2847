use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Per-language entry of the classifier's breakdown report.
///
/// Treated as untrusted external data: absent fields default, unknown
/// fields are ignored.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct LanguageFiles {
    /// Byte size the classifier attributes to the language.
    #[serde(default)]
    pub size: u64,
    /// Contributing file paths, relative to the project root.
    #[serde(default)]
    pub files: Vec<PathBuf>,
}

/// Raw breakdown: language name to size and contributing files.
pub type Breakdown = BTreeMap<String, LanguageFiles>;

/// Decode the classifier's stdout.
///
/// An empty mapping is treated as a tool malfunction, not as "zero
/// languages found".
pub fn parse_breakdown(raw: &str) -> Result<Breakdown> {
    let breakdown: Breakdown = serde_json::from_str(raw)?;
    if breakdown.is_empty() {
        return Err(Error::EmptyReport);
    }
    Ok(breakdown)
}
