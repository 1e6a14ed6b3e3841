//! Stage 1: Source scanning.
//!
//! Walks the source root for files with the configured extension and pulls
//! translation keys out of lines that contain the lookup macro marker.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use colored::Colorize;
use glob::Pattern;
use regex::Regex;
use walkdir::WalkDir;

/// A translation key referenced from a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedKey {
    pub key: String,
    pub file_path: String,
    /// Line number (1-indexed).
    pub line: usize,
}

/// Extracts keys from single source lines.
///
/// The marker is a plain substring test that runs before the regex; lines
/// without it are never matched against the pattern.
#[derive(Debug, Clone)]
pub struct KeyMatcher {
    marker: String,
    pattern: Regex,
}

impl KeyMatcher {
    pub fn new(marker: impl Into<String>, pattern: Regex) -> Self {
        Self {
            marker: marker.into(),
            pattern,
        }
    }

    /// Returns the key referenced on `line`, if any.
    ///
    /// Only the first match on the line is considered. The key is the first
    /// capture group, or the whole match when the pattern has no groups.
    pub fn extract(&self, line: &str) -> Option<String> {
        if !line.contains(&self.marker) {
            return None;
        }

        let captures = self.pattern.captures(line)?;
        let found = if self.pattern.captures_len() > 1 {
            captures.get(1)
        } else {
            captures.get(0)
        };
        found.map(|m| m.as_str().to_string())
    }
}

/// Result of scanning the source root.
#[derive(Debug, Default)]
pub struct SourceScan {
    /// Keys in file-then-line order, duplicates included.
    pub keys: Vec<ExtractedKey>,
    pub files_scanned: usize,
    /// Directory entries that could not be accessed during the walk.
    pub skipped_count: usize,
}

/// Collects the source files under `root` whose name ends with `extension`.
///
/// Entries are visited in file name order so repeated runs see the same
/// sequence. Paths matching any of `ignores` are left out.
pub fn find_source_files(
    root: &Path,
    extension: &str,
    ignores: &[Pattern],
    verbose: bool,
) -> (Vec<PathBuf>, usize) {
    let mut files = Vec::new();
    let mut skipped_count = 0;

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped_count += 1;
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let path_str = path.to_string_lossy();
        if ignores.iter().any(|p| p.matches(&path_str)) {
            if verbose {
                eprintln!("{} Ignoring {}", "note:".bold(), path_str);
            }
            continue;
        }

        if has_suffix(path, extension) {
            files.push(path.to_path_buf());
        }
    }

    (files, skipped_count)
}

fn has_suffix(path: &Path, extension: &str) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(extension))
}

/// Reads one source file and returns the keys it references.
pub fn extract_keys(path: &Path, matcher: &KeyMatcher) -> Result<Vec<ExtractedKey>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read source file: {}", path.display()))?;
    let file_path = path.display().to_string();

    Ok(extract_keys_from_str(&file_path, &content, matcher))
}

pub fn extract_keys_from_str(
    file_path: &str,
    content: &str,
    matcher: &KeyMatcher,
) -> Vec<ExtractedKey> {
    content
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| {
            matcher.extract(line).map(|key| ExtractedKey {
                key,
                file_path: file_path.to_string(),
                line: idx + 1,
            })
        })
        .collect()
}

/// Scans every matching file under `root` and extracts all referenced keys.
pub fn scan_source_keys(
    root: &Path,
    extension: &str,
    ignores: &[Pattern],
    matcher: &KeyMatcher,
    verbose: bool,
) -> Result<SourceScan> {
    let (files, skipped_count) = find_source_files(root, extension, ignores, verbose);

    let mut keys = Vec::new();
    for file in &files {
        keys.extend(extract_keys(file, matcher)?);
    }

    Ok(SourceScan {
        keys,
        files_scanned: files.len(),
        skipped_count,
    })
}
