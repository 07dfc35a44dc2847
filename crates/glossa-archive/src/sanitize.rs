use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Result of validating an archive entry path.
#[derive(Clone, Debug)]
pub struct SanitizedPath {
    pub original: PathBuf,
    pub resolved: PathBuf,
}

/// Validate an entry path and resolve it against the extraction root.
///
/// Normalizes `.`/`..` components and rejects entries that are absolute or
/// that would resolve outside `base`.
pub fn sanitize_entry_path<P: AsRef<Path>, B: AsRef<Path>>(
    entry: P,
    base: B,
) -> Result<SanitizedPath> {
    let entry = entry.as_ref();
    let base = base.as_ref();

    let mut normalized = PathBuf::new();
    for component in entry.components() {
        match component {
            Component::Normal(part) => normalized.push(part),
            Component::CurDir => {}
            // Popping past the entry's own root means the resolved path
            // would land outside the extraction directory.
            Component::ParentDir => {
                if !normalized.pop() {
                    return Err(Error::EntryEscapesRoot {
                        entry: entry.to_path_buf(),
                        resolved: base.join(".."),
                    });
                }
            }
            Component::RootDir | Component::Prefix(_) => {
                return Err(Error::EntryEscapesRoot {
                    entry: entry.to_path_buf(),
                    resolved: entry.to_path_buf(),
                });
            }
        }
    }

    Ok(SanitizedPath {
        original: entry.to_path_buf(),
        resolved: base.join(normalized),
    })
}
