use std::fs::{self, File};
use std::io::{Read, Seek};
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::sanitize::sanitize_entry_path;

/// What a completed extraction unpacked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExtractReport {
    pub entry_count: usize,
    pub total_bytes: u64,
}

/// Extract every entry of a ZIP archive under `dest`.
///
/// Corrupt or non-ZIP input fails with [`Error::Corrupted`]; nothing partial
/// is reported. Unix mode bits recorded in the archive are applied to
/// extracted files.
pub fn extract_zip<R: Read + Seek>(reader: R, dest: &Path) -> Result<ExtractReport> {
    let mut archive = zip::ZipArchive::new(reader).map_err(|_| Error::Corrupted)?;
    let mut report = ExtractReport::default();

    for index in 0..archive.len() {
        let mut entry = archive.by_index(index).map_err(|_| Error::Corrupted)?;
        let raw_path = entry.enclosed_name().ok_or(Error::InvalidPath)?;
        let target = sanitize_entry_path(&raw_path, dest)?.resolved;

        if entry.is_dir() {
            fs::create_dir_all(&target).map_err(|e| Error::extraction(&target, e))?;
            report.entry_count += 1;
            continue;
        }

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::extraction(&target, e))?;
        }
        let mut out = File::create(&target).map_err(|e| Error::extraction(&target, e))?;
        let written =
            std::io::copy(&mut entry, &mut out).map_err(|e| Error::extraction(&target, e))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Some(mode) = entry.unix_mode() {
                let _ = fs::set_permissions(&target, fs::Permissions::from_mode(mode));
            }
        }

        report.entry_count += 1;
        report.total_bytes += written;
    }

    debug!(
        entries = report.entry_count,
        bytes = report.total_bytes,
        "archive extracted"
    );
    Ok(report)
}
