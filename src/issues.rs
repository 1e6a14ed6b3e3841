//! Issue types for translation validation results.
//!
//! Each issue is self-contained with all information the reporter needs to
//! display it: a location, a primary message, a severity and a rule name.
//! Errors fail the language they belong to; warnings are informational only.

use enum_dispatch::enum_dispatch;

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    WrongExtension,
    MissingKey,
    DuplicateKey,
    UnusedKey,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::WrongExtension => write!(f, "wrong-extension"),
            Rule::MissingKey => write!(f, "missing-key"),
            Rule::DuplicateKey => write!(f, "duplicate-key"),
            Rule::UnusedKey => write!(f, "unused-key"),
        }
    }
}

/// Position of a key inside a resource file.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct KeyLocation {
    /// Path to the resource file (e.g., "i18n/en/app.ftl").
    pub file_path: String,
    /// Line number (1-indexed).
    pub line: usize,
}

impl KeyLocation {
    pub fn new(file_path: impl Into<String>, line: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// Resource file whose extension is not the expected one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrongExtensionIssue {
    pub file_path: String,
    /// The file name it should have (e.g., "app.ftl" for "app.txt").
    pub expected_name: String,
}

impl WrongExtensionIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::WrongExtension
    }
}

/// Key referenced in source but absent from a resource file.
///
/// `path` is the resource file, or the language directory when keys are
/// checked across all files of a language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingKeyIssue {
    pub path: String,
    pub key: String,
}

impl MissingKeyIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::MissingKey
    }
}

/// Key defined more than once in the same resource file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateKeyIssue {
    /// Location of the repeated definition.
    pub location: KeyLocation,
    pub key: String,
    /// Line of the first definition.
    pub first_line: usize,
}

impl DuplicateKeyIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::DuplicateKey
    }
}

/// Key defined in a resource file but never referenced in source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnusedKeyIssue {
    pub location: KeyLocation,
    pub key: String,
}

impl UnusedKeyIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::UnusedKey
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// A problem found while validating a language.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    WrongExtension(WrongExtensionIssue),
    MissingKey(MissingKeyIssue),
    DuplicateKey(DuplicateKeyIssue),
    UnusedKey(UnusedKeyIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        match self {
            Issue::WrongExtension(_) => WrongExtensionIssue::severity(),
            Issue::MissingKey(_) => MissingKeyIssue::severity(),
            Issue::DuplicateKey(_) => DuplicateKeyIssue::severity(),
            Issue::UnusedKey(_) => UnusedKeyIssue::severity(),
        }
    }

    pub fn rule(&self) -> Rule {
        match self {
            Issue::WrongExtension(_) => WrongExtensionIssue::rule(),
            Issue::MissingKey(_) => MissingKeyIssue::rule(),
            Issue::DuplicateKey(_) => DuplicateKeyIssue::rule(),
            Issue::UnusedKey(_) => UnusedKeyIssue::rule(),
        }
    }

    /// Whether this issue fails the language it was found in.
    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// A specific line in a resource file.
    Line(&'a KeyLocation),
    /// File or directory level only.
    Path { path: &'a str },
}

/// Trait for types that can be reported to CLI.
///
/// Implemented by all issue types and dispatched on the `Issue` enum through
/// `enum_dispatch`.
#[enum_dispatch]
pub trait Report {
    /// Get the location for this issue.
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display (key name or file name).
    fn message(&self) -> String;

    /// Severity level.
    fn report_severity(&self) -> Severity;

    /// Rule identifier.
    fn report_rule(&self) -> Rule;

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<String> {
        None
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for WrongExtensionIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Path {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.file_path.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some("wrong file extension, file was not checked".to_string())
    }

    fn hint(&self) -> Option<String> {
        Some(format!("it should be: {}", self.expected_name))
    }
}

impl Report for MissingKeyIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Path { path: &self.path }
    }

    fn message(&self) -> String {
        self.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("missing fluent key, not present in {}", self.path))
    }
}

impl Report for DuplicateKeyIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Line(&self.location)
    }

    fn message(&self) -> String {
        self.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "duplicate fluent key, first defined on line {}",
            self.first_line
        ))
    }

    fn hint(&self) -> Option<String> {
        Some("one of them can be removed".to_string())
    }
}

impl Report for UnusedKeyIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Line(&self.location)
    }

    fn message(&self) -> String {
        self.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some("unused fluent key, not referenced in any source file".to_string())
    }
}
