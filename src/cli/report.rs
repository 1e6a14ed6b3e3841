//! Report formatting and printing utilities.
//!
//! Displays validation progress and issues in cargo-style format. Kept apart
//! from the core pipeline so fluent-check can also be used as a library.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{CommandResult, InitSummary};
use crate::core::{CheckOutcome, EnvironmentError, LanguageReport};
use crate::issues::{Issue, Report, ReportLocation, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult) {
    let mut out = io::stdout().lock();
    match result {
        CommandResult::Check(outcome) => print_check_to(outcome, &mut out),
        CommandResult::Aborted(err) => print_aborted_to(err, &mut out),
        CommandResult::Init(summary) => print_init(summary),
    }
}

/// Print the progress and issues of every language, followed by the summary.
pub fn print_check_to<W: Write>(outcome: &CheckOutcome, writer: &mut W) {
    let _ = writeln!(
        writer,
        "Found {} translation {} in {} source {}",
        outcome.reference_key_count,
        if outcome.reference_key_count == 1 {
            "key"
        } else {
            "keys"
        },
        outcome.source_files_checked,
        if outcome.source_files_checked == 1 {
            "file"
        } else {
            "files"
        }
    );

    for language in &outcome.languages {
        print_language(language, writer);
    }

    print_summary(outcome, writer);
}

/// Print why the check stopped before validating any language.
pub fn print_aborted_to<W: Write>(err: &EnvironmentError, writer: &mut W) {
    let _ = writeln!(writer, "{}: {}", "error".bold().red(), err);

    if let EnvironmentError::NoReferenceKeys { .. } = err {
        let _ = writeln!(
            writer,
            "  {} {} check the source directory ({}), extension ({}) and regex ({})",
            "=".blue(),
            "hint:".bold().cyan(),
            "-s".cyan(),
            "-e".cyan(),
            "-r".cyan()
        );
    }
}

fn print_init(summary: &InitSummary) {
    if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", summary.path.display()).green()
        );
    } else {
        eprintln!("Error: {} already exists", summary.path.display());
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_language<W: Write>(language: &LanguageReport, writer: &mut W) {
    let _ = writeln!(writer);
    let _ = writeln!(writer, "{} {}", "Checking language:".bold(), language.name);

    for file in &language.files {
        let _ = writeln!(writer, "{} {}", "Validating file:".dimmed(), file.path);
        for issue in &file.issues {
            print_issue(issue, writer);
        }
    }

    for issue in &language.issues {
        print_issue(issue, writer);
    }
}

fn print_issue<W: Write>(issue: &Issue, writer: &mut W) {
    let severity_str = match issue.report_severity() {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );

    let location = match issue.location() {
        ReportLocation::Line(loc) => format!("{}:{}", loc.file_path, loc.line),
        ReportLocation::Path { path } => path.to_string(),
    };
    let _ = writeln!(writer, "  {} {}", "-->".blue(), location);

    if let Some(details) = issue.details() {
        let _ = writeln!(writer, "  {} {} {}", "=".blue(), "note:".bold(), details);
    }

    if let Some(hint) = issue.hint() {
        let _ = writeln!(writer, "  {} {} {}", "=".blue(), "hint:".bold().cyan(), hint);
    }
}

fn print_summary<W: Write>(outcome: &CheckOutcome, writer: &mut W) {
    let issues: Vec<&Issue> = outcome
        .languages
        .iter()
        .flat_map(LanguageReport::all_issues)
        .collect();
    let total_errors = issues.iter().filter(|i| i.is_error()).count();
    let total_warnings = issues.len() - total_errors;

    let _ = writeln!(writer);
    if !issues.is_empty() {
        let _ = writeln!(
            writer,
            "{} problems ({} {}, {} {})",
            issues.len(),
            total_errors,
            if total_errors == 1 { "error" } else { "errors" }.red(),
            total_warnings,
            if total_warnings == 1 {
                "warning"
            } else {
                "warnings"
            }
            .yellow()
        );
    }

    if outcome.is_success() {
        let succeeded = outcome.succeeded_languages();
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "The following languages were validated successfully: {}",
                join_or_none(&succeeded)
            )
            .green()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.red(),
            format!(
                "The following languages failed to validate: {}",
                outcome.failed_languages().join(", ")
            )
            .red()
        );
    }
}

fn join_or_none(names: &[&str]) -> String {
    if names.is_empty() {
        "NONE".to_string()
    } else {
        names.join(", ")
    }
}
