use owo_colors::OwoColorize;
use std::path::Path;

use mythic::language::{Issue, LoadingError, ParsingError, Severity};
use mythic::pack::{Missing, Report};

fn label(severity: Severity) -> String {
    match severity {
        Severity::Critical => "error"
            .bright_red()
            .to_string(),
        Severity::Warning => "warning"
            .bright_yellow()
            .to_string(),
        Severity::Info => "info"
            .bright_blue()
            .to_string(),
    }
}

/// Format a single issue as one line, with its suggestion (if any)
/// indented below it.
pub fn concise_issue(issue: &Issue, filename: &str, entry: Option<&str>) -> String {
    let location = match entry {
        Some(name) => format!("{}:{}", filename, name),
        None => filename.to_string(),
    };

    let mut result = format!(
        "{}: {} {} {}",
        label(issue.severity),
        location,
        issue
            .message
            .bold(),
        format!("[{}]", issue.tag).dimmed()
    );

    if let Some(suggestion) = &issue.suggestion {
        result.push_str(&format!("\n    {} {}", '|'.bright_blue(), suggestion));
    }

    result
}

/// Format an unresolved name along with every entry that uses it.
pub fn concise_missing(kind: &str, missing: &Missing) -> String {
    let users: Vec<String> = missing
        .referenced_by
        .iter()
        .map(|provenance| format!("{}:{}", provenance.file, provenance.entry))
        .collect();

    format!(
        "{}: {} '{}' is not defined, used by {}",
        label(Severity::Warning),
        kind,
        missing
            .name
            .bold(),
        users.join(", ")
    )
}

/// Every issue and unresolved name in a report, one after another.
pub fn report_lines(report: &Report, verbose: bool) -> Vec<String> {
    let mut lines = Vec::new();

    for file in &report.files {
        for issue in &file.issues {
            lines.push(concise_issue(issue, &file.path, None));
        }
        for entry in &file.entries {
            for issue in &entry.issues {
                if issue.severity == Severity::Info && !verbose {
                    continue;
                }
                lines.push(concise_issue(issue, &file.path, Some(&entry.name)));
            }
        }
    }

    let references = &report.references;
    for (kind, resolution) in [
        ("skill", &references.skills),
        ("item", &references.items),
        ("mob", &references.mobs),
        ("droptable", &references.droptables),
    ] {
        for missing in &resolution.missing {
            lines.push(concise_missing(kind, missing));
        }
    }

    lines
}

/// Format a ParsingError for a whole file with concise single-line output
pub fn concise_parsing_error(error: &ParsingError, filename: &Path) -> String {
    format!(
        "{}: {} {}",
        "error".bright_red(),
        filename.to_string_lossy(),
        error
            .message()
            .bold(),
    )
}

/// Format a LoadingError with concise single-line output
pub fn concise_loading_error(error: &LoadingError) -> String {
    if error
        .details
        .is_empty()
    {
        format!(
            "{}: {} {}",
            "error".bright_red(),
            error
                .filename
                .display(),
            error
                .problem
                .bold()
        )
    } else {
        format!(
            "{}: {} {}: {}",
            "error".bright_red(),
            error
                .filename
                .display(),
            error
                .problem
                .bold(),
            error.details
        )
    }
}
