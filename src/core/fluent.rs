//! Stage 3: Fluent resource file parsing.
//!
//! Only the key side of `key = value` lines matters here. Any line with an
//! `=` counts as an entry; everything else (comments, blank lines, section
//! markers, continuation lines) is skipped.

use std::{collections::HashMap, fs, path::Path};

use anyhow::{Context, Result};

use crate::issues::{DuplicateKeyIssue, KeyLocation};

/// A single `key = value` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FluentEntry {
    pub key: String,
    /// Line number (1-indexed).
    pub line: usize,
}

/// Keys of one resource file in file order, duplicates included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FluentFile {
    pub path: String,
    pub entries: Vec<FluentEntry>,
}

/// Returns the key of a `key = value` line: the text before the first `=`,
/// trimmed.
pub fn parse_key(line: &str) -> Option<&str> {
    line.split_once('=').map(|(key, _)| key.trim())
}

impl FluentFile {
    pub fn parse(path: impl Into<String>, content: &str) -> Self {
        let entries = content
            .lines()
            .enumerate()
            .filter_map(|(idx, line)| {
                parse_key(line).map(|key| FluentEntry {
                    key: key.to_string(),
                    line: idx + 1,
                })
            })
            .collect();

        Self {
            path: path.into(),
            entries,
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read fluent file: {}", path.display()))?;
        Ok(Self::parse(path.display().to_string(), &content))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.key.as_str())
    }

    /// Every repeated definition after the first one of its key.
    pub fn duplicates(&self) -> Vec<DuplicateKeyIssue> {
        let mut first_seen: HashMap<&str, usize> = HashMap::new();
        let mut duplicates = Vec::new();

        for entry in &self.entries {
            match first_seen.get(entry.key.as_str()) {
                Some(&first_line) => duplicates.push(DuplicateKeyIssue {
                    location: KeyLocation::new(&self.path, entry.line),
                    key: entry.key.clone(),
                    first_line,
                }),
                None => {
                    first_seen.insert(&entry.key, entry.line);
                }
            }
        }

        duplicates
    }
}
