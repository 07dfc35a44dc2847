use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Serialize;

use crate::report::Breakdown;

/// Read granularity for newline counting.
const CHUNK_SIZE: usize = 1 << 20;

/// Final per-language statistic.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LanguageStat {
    /// Share of the codebase by byte size, rounded to two decimals.
    pub percentage: f64,
    /// Newline count across all files attributed to the language.
    pub lines: u64,
}

/// Fold the raw breakdown into percentages and line counts.
///
/// The output key set equals the breakdown key set exactly; no language is
/// dropped or added. Percentages are shares of the summed byte sizes (a
/// zero total is clamped to one).
pub fn aggregate(root: &Path, breakdown: &Breakdown) -> BTreeMap<String, LanguageStat> {
    let total: u64 = breakdown.values().map(|entry| entry.size).sum();
    let total = total.max(1);

    breakdown
        .iter()
        .map(|(language, entry)| {
            let lines = entry
                .files
                .iter()
                .map(|file| count_newlines(&root.join(file)))
                .sum();
            let percentage = round2(entry.size as f64 * 100.0 / total as f64);
            (language.clone(), LanguageStat { percentage, lines })
        })
        .collect()
}

/// Count newline bytes via chunked binary reads.
///
/// Chunked reading keeps memory flat for large files and sidesteps any
/// text decoding of binary content. Missing, directory, or unreadable
/// entries contribute zero: the classifier occasionally lists paths that do
/// not resolve to readable regular files, and one bad entry must not abort
/// a whole-archive analysis.
pub fn count_newlines(path: &Path) -> u64 {
    fn chunked(path: &Path) -> std::io::Result<u64> {
        let mut file = File::open(path)?;
        let mut buf = vec![0u8; CHUNK_SIZE];
        let mut lines = 0u64;
        loop {
            let read = file.read(&mut buf)?;
            if read == 0 {
                break;
            }
            lines += bytecount::count(&buf[..read], b'\n') as u64;
        }
        Ok(lines)
    }

    chunked(path).unwrap_or(0)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use super::*;
    use crate::report::LanguageFiles;

    fn breakdown(entries: &[(&str, u64, &[&str])]) -> Breakdown {
        entries
            .iter()
            .map(|(language, size, files)| {
                (
                    language.to_string(),
                    LanguageFiles {
                        size: *size,
                        files: files.iter().map(|file| PathBuf::from(*file)).collect(),
                    },
                )
            })
            .collect()
    }

    #[test]
    fn percentages_split_by_byte_size() {
        let root = tempfile::tempdir().unwrap();
        fs::write(root.path().join("main.py"), "a\nb\nc\n").unwrap();
        fs::write(root.path().join("lib.js"), "x\n").unwrap();

        let stats = aggregate(
            root.path(),
            &breakdown(&[
                ("Python", 250, &["main.py"]),
                ("JavaScript", 750, &["lib.js"]),
            ]),
        );

        assert_eq!(stats["Python"].percentage, 25.00);
        assert_eq!(stats["Python"].lines, 3);
        assert_eq!(stats["JavaScript"].percentage, 75.00);
        assert_eq!(stats["JavaScript"].lines, 1);
    }

    #[test]
    fn output_keys_match_breakdown_keys_exactly() {
        let root = tempfile::tempdir().unwrap();
        let input = breakdown(&[
            ("Python", 10, &[]),
            ("Rust", 20, &[]),
            ("Shell", 0, &["missing.sh"]),
        ]);

        let stats = aggregate(root.path(), &input);
        let in_keys: Vec<_> = input.keys().collect();
        let out_keys: Vec<_> = stats.keys().collect();
        assert_eq!(in_keys, out_keys);
    }

    #[test]
    fn percentages_sum_to_one_hundred_within_rounding() {
        let root = tempfile::tempdir().unwrap();
        let stats = aggregate(
            root.path(),
            &breakdown(&[("A", 1, &[]), ("B", 1, &[]), ("C", 1, &[])]),
        );

        let sum: f64 = stats.values().map(|s| s.percentage).sum();
        assert!((sum - 100.0).abs() < 0.05, "sum was {sum}");
        for stat in stats.values() {
            assert!(stat.percentage >= 0.0 && stat.percentage <= 100.0);
        }
    }

    #[test]
    fn zero_total_size_does_not_divide_by_zero() {
        let root = tempfile::tempdir().unwrap();
        let stats = aggregate(root.path(), &breakdown(&[("Text", 0, &[])]));
        assert_eq!(stats["Text"].percentage, 0.0);
    }

    #[test]
    fn missing_and_unreadable_files_count_zero_lines() {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir(root.path().join("subdir")).unwrap();

        let stats = aggregate(
            root.path(),
            &breakdown(&[("Python", 100, &["gone.py", "subdir"])]),
        );
        assert_eq!(stats["Python"].lines, 0);
    }

    #[test]
    fn newline_count_handles_binary_content() {
        let root = tempfile::tempdir().unwrap();
        let path = root.path().join("blob.bin");
        fs::write(&path, [0u8, 10, 255, 10, 0, 128]).unwrap();
        assert_eq!(count_newlines(&path), 2);
    }

    #[test]
    fn newline_count_is_invariant_to_chunk_boundaries() {
        let root = tempfile::tempdir().unwrap();

        // One newline every 1024 bytes, sized exactly at, one under, and
        // one over the read chunk.
        for (name, len) in [
            ("exact.bin", CHUNK_SIZE),
            ("under.bin", CHUNK_SIZE - 1),
            ("over.bin", CHUNK_SIZE + 1),
        ] {
            let mut content = vec![b'a'; len];
            let mut expected = 0u64;
            let mut index = 1023;
            while index < len {
                content[index] = b'\n';
                expected += 1;
                index += 1024;
            }
            let path = root.path().join(name);
            fs::write(&path, &content).unwrap();
            assert_eq!(count_newlines(&path), expected, "{name}");
        }
    }

    #[test]
    fn rounding_keeps_two_decimals() {
        assert_eq!(round2(33.333333), 33.33);
        assert_eq!(round2(66.666666), 66.67);
        assert_eq!(round2(100.0), 100.0);
    }
}
