//! Pack-level counters rolled up from the per-entry and per-file issues.

use serde::Serialize;

use super::FileReport;
use crate::language::{Issue, Severity};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_files: usize,
    pub total_entries: usize,
    pub valid_entries: usize,
    pub entries_with_warnings: usize,
    pub entries_with_errors: usize,
    pub critical_errors: usize,
    pub warnings: usize,
    pub info: usize,
    pub missing_references: usize,
}

/// How an entry is classified by the most severe issue it has. Critical
/// outranks Warning; Info does not count against an entry.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Standing {
    Valid,
    Warnings,
    Errors,
}

pub fn standing(issues: &[Issue]) -> Standing {
    if issues
        .iter()
        .any(|issue| issue.severity == Severity::Critical)
    {
        Standing::Errors
    } else if issues
        .iter()
        .any(|issue| issue.severity == Severity::Warning)
    {
        Standing::Warnings
    } else {
        Standing::Valid
    }
}

impl Summary {
    pub fn tally(files: &[FileReport], missing_references: usize) -> Summary {
        let mut summary = Summary {
            total_files: files.len(),
            missing_references,
            ..Default::default()
        };

        for file in files {
            summary.count(&file.issues);

            for entry in &file.entries {
                summary.total_entries += 1;
                summary.count(&entry.issues);

                match standing(&entry.issues) {
                    Standing::Valid => summary.valid_entries += 1,
                    Standing::Warnings => summary.entries_with_warnings += 1,
                    Standing::Errors => summary.entries_with_errors += 1,
                }
            }
        }

        summary
    }

    fn count(&mut self, issues: &[Issue]) {
        for issue in issues {
            match issue.severity {
                Severity::Critical => self.critical_errors += 1,
                Severity::Warning => self.warnings += 1,
                Severity::Info => self.info += 1,
            }
        }
    }

    pub fn is_clean(&self) -> bool {
        self.critical_errors == 0
    }
}
