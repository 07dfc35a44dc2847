use std::path::{Path, PathBuf};

use tracing::debug;

/// macOS archive metadata folder; never counts as project content.
const MACOS_METADATA_DIR: &str = "__MACOSX";

/// Choose the analysis target within an extracted archive.
///
/// GUI "compress" actions commonly wrap the real project in one enclosing
/// folder. When the extraction directory holds exactly one subdirectory and
/// no loose files at its top level, that subdirectory is the root; otherwise
/// the extraction directory itself is. Only one level is ever unwrapped;
/// deeper nesting stays as-is.
pub fn detect_project_root(extract_dir: &Path) -> PathBuf {
    let Ok(entries) = std::fs::read_dir(extract_dir) else {
        return extract_dir.to_path_buf();
    };

    let mut subdirs: Vec<PathBuf> = Vec::new();
    let mut has_files = false;
    for entry in entries.flatten() {
        if entry.file_name() == MACOS_METADATA_DIR {
            continue;
        }
        let path = entry.path();
        if path.is_dir() {
            subdirs.push(path);
        } else if path.is_file() {
            has_files = true;
        }
    }

    match (subdirs.as_slice(), has_files) {
        ([wrapper], false) => {
            debug!(root = %wrapper.display(), "descending into wrapper directory");
            wrapper.clone()
        }
        _ => extract_dir.to_path_buf(),
    }
}
