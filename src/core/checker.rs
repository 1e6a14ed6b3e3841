//! Stage 4: Cross-checking resource files against the reference keys.
//!
//! Every subdirectory of the i18n root is one language. Each resource file in
//! it is parsed and compared with the reference key set; errors fail the
//! language but never stop the run, so every language is always reported.

use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context as _, Result};
use colored::Colorize;

use super::{
    context::{CheckContext, MissingKeyScope},
    fluent::FluentFile,
    keys::ReferenceKeys,
    scanner::scan_source_keys,
};
use crate::issues::{Issue, KeyLocation, MissingKeyIssue, UnusedKeyIssue, WrongExtensionIssue};

/// Problems with the environment that stop a run before any language is
/// checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvironmentError {
    I18nRootNotFound(PathBuf),
    SourceRootNotFound(PathBuf),
    NoReferenceKeys {
        source_root: PathBuf,
        extension: String,
    },
}

impl fmt::Display for EnvironmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnvironmentError::I18nRootNotFound(path) => {
                write!(f, "i18n directory not found: {}", path.display())
            }
            EnvironmentError::SourceRootNotFound(path) => {
                write!(f, "source directory not found: {}", path.display())
            }
            EnvironmentError::NoReferenceKeys {
                source_root,
                extension,
            } => write!(
                f,
                "no translation keys found in {} (extension: {})",
                source_root.display(),
                extension
            ),
        }
    }
}

impl std::error::Error for EnvironmentError {}

/// Issues found in one resource file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: String,
    pub issues: Vec<Issue>,
}

/// Validation result of one language directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageReport {
    pub name: String,
    pub path: String,
    pub files: Vec<FileReport>,
    /// Issues that belong to the language as a whole (merged missing keys).
    pub issues: Vec<Issue>,
}

impl LanguageReport {
    pub fn failed(&self) -> bool {
        self.all_issues().any(Issue::is_error)
    }

    pub fn all_issues(&self) -> impl Iterator<Item = &Issue> {
        self.files
            .iter()
            .flat_map(|f| f.issues.iter())
            .chain(self.issues.iter())
    }
}

/// Result of a full validation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub languages: Vec<LanguageReport>,
    pub reference_key_count: usize,
    pub source_files_checked: usize,
}

impl CheckOutcome {
    pub fn failed_languages(&self) -> Vec<&str> {
        self.languages
            .iter()
            .filter(|l| l.failed())
            .map(|l| l.name.as_str())
            .collect()
    }

    pub fn succeeded_languages(&self) -> Vec<&str> {
        self.languages
            .iter()
            .filter(|l| !l.failed())
            .map(|l| l.name.as_str())
            .collect()
    }

    pub fn is_success(&self) -> bool {
        self.languages.iter().all(|l| !l.failed())
    }
}

/// Runs the whole validation pipeline.
///
/// Returns an [`EnvironmentError`] (wrapped in `anyhow`) when the i18n root or
/// source root is missing, or when no reference key was found.
pub fn run_check(ctx: &CheckContext) -> Result<CheckOutcome> {
    if !ctx.i18n_root.is_dir() {
        return Err(EnvironmentError::I18nRootNotFound(ctx.i18n_root.clone()).into());
    }
    if !ctx.source_root.is_dir() {
        return Err(EnvironmentError::SourceRootNotFound(ctx.source_root.clone()).into());
    }

    let scan = scan_source_keys(
        &ctx.source_root,
        &ctx.source_extension,
        &ctx.ignores,
        &ctx.matcher,
        ctx.verbose,
    )?;
    if scan.skipped_count > 0 && !ctx.verbose {
        eprintln!(
            "{} {} path(s) under {} could not be accessed (use {} for details)",
            "warning:".bold().yellow(),
            scan.skipped_count,
            ctx.source_root.display(),
            "-v".cyan()
        );
    }

    let reference = ReferenceKeys::from_extracted(&scan.keys);
    if reference.is_empty() {
        return Err(EnvironmentError::NoReferenceKeys {
            source_root: ctx.source_root.clone(),
            extension: ctx.source_extension.clone(),
        }
        .into());
    }

    let mut languages = Vec::new();
    for (name, dir) in list_entries(&ctx.i18n_root, EntryKind::Dir, ctx.verbose)? {
        languages.push(check_language(ctx, &reference, name, &dir)?);
    }

    Ok(CheckOutcome {
        languages,
        reference_key_count: reference.len(),
        source_files_checked: scan.files_scanned,
    })
}

/// Checks every resource file of one language directory.
pub fn check_language(
    ctx: &CheckContext,
    reference: &ReferenceKeys,
    name: String,
    dir: &Path,
) -> Result<LanguageReport> {
    let mut files = Vec::new();
    let mut language_keys: Vec<String> = Vec::new();
    let mut checked_any = false;

    for (file_name, path) in list_entries(dir, EntryKind::File, ctx.verbose)? {
        let file_path = path.display().to_string();

        if !has_extension(&path, &ctx.resource_extension) {
            let stem = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or(file_name);
            files.push(FileReport {
                path: file_path.clone(),
                issues: vec![Issue::WrongExtension(WrongExtensionIssue {
                    file_path,
                    expected_name: format!("{}{}", stem, ctx.resource_extension),
                })],
            });
            continue;
        }

        let file = FluentFile::load(&path)?;
        checked_any = true;

        let mut issues: Vec<Issue> = file
            .duplicates()
            .into_iter()
            .map(Issue::DuplicateKey)
            .collect();
        issues.extend(unused_keys(&file, reference).into_iter().map(Issue::UnusedKey));

        match ctx.scope {
            MissingKeyScope::File => {
                issues.extend(
                    missing_keys(&file.path, file.keys(), reference)
                        .into_iter()
                        .map(Issue::MissingKey),
                );
            }
            MissingKeyScope::Language => {
                language_keys.extend(file.keys().map(str::to_string));
            }
        }

        files.push(FileReport {
            path: file_path,
            issues,
        });
    }

    let language_path = dir.display().to_string();
    let issues = if ctx.scope == MissingKeyScope::Language && checked_any {
        missing_keys(
            &language_path,
            language_keys.iter().map(String::as_str),
            reference,
        )
        .into_iter()
        .map(Issue::MissingKey)
        .collect()
    } else {
        Vec::new()
    };

    Ok(LanguageReport {
        name,
        path: language_path,
        files,
        issues,
    })
}

/// Keys defined in `file` that are not referenced from source, in file order.
pub fn unused_keys(file: &FluentFile, reference: &ReferenceKeys) -> Vec<UnusedKeyIssue> {
    file.entries
        .iter()
        .filter(|entry| !reference.contains(&entry.key))
        .map(|entry| UnusedKeyIssue {
            location: KeyLocation::new(&file.path, entry.line),
            key: entry.key.clone(),
        })
        .collect()
}

/// Reference keys not present in `keys`, in sorted order.
pub fn missing_keys<'a>(
    path: &str,
    keys: impl IntoIterator<Item = &'a str>,
    reference: &ReferenceKeys,
) -> Vec<MissingKeyIssue> {
    reference
        .missing_from(keys)
        .into_iter()
        .map(|key| MissingKeyIssue {
            path: path.to_string(),
            key: key.to_string(),
        })
        .collect()
}

fn has_extension(path: &Path, expected: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| expected.strip_prefix('.') == Some(e))
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    Dir,
    File,
}

/// Lists entries of `dir` of the given kind, sorted by name.
fn list_entries(dir: &Path, kind: EntryKind, verbose: bool) -> Result<Vec<(String, PathBuf)>> {
    let read_dir =
        fs::read_dir(dir).with_context(|| format!("Failed to read directory: {}", dir.display()))?;

    let mut entries = Vec::new();
    for entry in read_dir {
        let entry =
            entry.with_context(|| format!("Failed to read directory: {}", dir.display()))?;
        let path = entry.path();
        let matches_kind = match kind {
            EntryKind::Dir => path.is_dir(),
            EntryKind::File => path.is_file(),
        };

        if !matches_kind {
            if verbose {
                eprintln!(
                    "{} Skipping {}: not a {}",
                    "warning:".bold().yellow(),
                    path.display(),
                    match kind {
                        EntryKind::Dir => "language directory",
                        EntryKind::File => "file",
                    }
                );
            }
            continue;
        }

        entries.push((entry.file_name().to_string_lossy().into_owned(), path));
    }

    entries.sort();
    Ok(entries)
}
