//! A pack is every file of a MythicMobs configuration loaded together.
//! Validating one checks each entry on its own, then resolves the names the
//! entries use against what the pack defines.

use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, info};

use crate::checks::{validate_entry, Tables};
use crate::language::{EntityKind, Issue, Record, Severity};
use crate::parsing::parse_file;
use crate::references::{extract, Usage};

mod resolver;
mod summary;

pub use resolver::*;
pub use summary::*;

/// One source file of a pack and what it was found to define.
#[derive(Debug, Clone, PartialEq)]
pub struct PackFile {
    pub path: String,
    pub kind: EntityKind,
    pub records: Vec<Record>,
    /// Problems with the file as a whole, such as failing to parse.
    pub issues: Vec<Issue>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pack {
    pub files: Vec<PackFile>,
}

impl Pack {
    pub fn new() -> Pack {
        Pack::default()
    }

    /// Parse the content of a file and add it. A file that cannot be parsed
    /// is still added, carrying the failure as an issue, so that the rest of
    /// the pack can be validated.
    pub fn add(&mut self, path: &str, kind: EntityKind, content: &str) {
        match parse_file(content, kind) {
            Ok(records) => self.add_records(path, kind, records),
            Err(error) => {
                debug!(?error, "{}", path);
                self.files
                    .push(PackFile {
                        path: path.to_string(),
                        kind,
                        records: Vec::new(),
                        issues: vec![Issue::new(
                            "parse-failure",
                            Severity::Critical,
                            format!("Unable to parse {}: {}", path, error),
                        )],
                    });
            }
        }
    }

    pub fn add_records(&mut self, path: &str, kind: EntityKind, records: Vec<Record>) {
        self.files
            .push(PackFile {
                path: path.to_string(),
                kind,
                records,
                issues: Vec::new(),
            });
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.files
            .iter()
            .flat_map(|file| {
                file.records
                    .iter()
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryReport {
    pub name: String,
    pub kind: EntityKind,
    pub valid: bool,
    pub issues: Vec<Issue>,
    pub references: EntryReferences,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub path: String,
    pub kind: EntityKind,
    pub issues: Vec<Issue>,
    pub entries: Vec<EntryReport>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub summary: Summary,
    pub files: Vec<FileReport>,
    pub references: CrossReferences,
}

impl Report {
    pub fn entries(&self) -> impl Iterator<Item = &EntryReport> {
        self.files
            .iter()
            .flat_map(|file| {
                file.entries
                    .iter()
            })
    }

    pub fn entry(&self, name: &str) -> Option<&EntryReport> {
        self.entries()
            .find(|entry| entry.name == name)
    }
}

/// Validate a whole pack. Everything is worked out afresh from the pack on
/// each call, so validating an unchanged pack twice gives equal reports.
pub fn validate_pack(pack: &Pack, tables: &Tables) -> Report {
    let mut seen: HashMap<(EntityKind, &str), &str> = HashMap::new();
    let mut usages: Vec<Usage> = Vec::new();
    let mut files: Vec<FileReport> = Vec::new();

    for file in &pack.files {
        let mut entries = Vec::new();

        for record in &file.records {
            let mut validation = validate_entry(record, tables);

            let key = (record.kind(), record.name());
            if let Some(first) = seen.get(&key) {
                validation
                    .issues
                    .push(Issue::new(
                        "duplicate-name",
                        Severity::Critical,
                        format!(
                            "{} '{}' is also defined in {}",
                            record.kind(),
                            record.name(),
                            first
                        ),
                    ));
                validation.valid = false;
            } else {
                seen.insert(key, &file.path);
            }

            let found = extract(record);
            let references = EntryReferences::from_usages(&found);
            usages.extend(found);

            entries.push(EntryReport {
                name: record
                    .name()
                    .to_string(),
                kind: record.kind(),
                valid: validation.valid,
                issues: validation.issues,
                references,
            });
        }

        files.push(FileReport {
            path: file
                .path
                .clone(),
            kind: file.kind,
            issues: file
                .issues
                .clone(),
            entries,
        });
    }

    let definitions = Definitions::from_records(pack.records());
    let resolver = Resolver::new(definitions, tables);
    let references = resolver.resolve(&usages, &files);

    let summary = Summary::tally(&files, references.missing_count());

    info!(
        "Validated {} entries in {} files: {} with errors, {} missing references",
        summary.total_entries,
        summary.total_files,
        summary.entries_with_errors,
        summary.missing_references
    );

    Report {
        summary,
        files,
        references,
    }
}
