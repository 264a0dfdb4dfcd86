//! parser for MythicMobs pack files

use std::path::Path;
use tracing::debug;

use crate::language::{EntityKind, LoadingError, ParsingError, Record};

mod drops;
mod droptable;
mod fields;
mod item;
mod mob;
mod skill;
pub mod tree;

pub use drops::{classify, parse_attributes, parse_drop};

/// Read a file and return an owned String.
pub fn load(filename: &Path) -> Result<String, LoadingError> {
    match std::fs::read_to_string(filename) {
        Ok(content) => Ok(content),
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::NotFound => Err(LoadingError {
                    problem: "File not found".to_string(),
                    details: String::new(),
                    filename: filename.to_path_buf(),
                }),
                _ => Err(LoadingError {
                    problem: "Failed reading".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename: filename.to_path_buf(),
                }),
            }
        }
    }
}

/// Parse text into the first record it defines, or fail if it defines
/// none.
pub fn parse(content: &str, kind: EntityKind) -> Result<Record, ParsingError> {
    let records = parse_file(content, kind)?;

    records
        .into_iter()
        .next()
        .ok_or(ParsingError::NoRootEntity)
}

/// Parse text into every record it defines, one per root key. A file with
/// content but no usable root key is a failure, as is an empty one.
pub fn parse_file(content: &str, kind: EntityKind) -> Result<Vec<Record>, ParsingError> {
    let root = tree::build(content)?;

    let records: Vec<Record> = root
        .iter()
        .filter(|(name, _)| {
            !name
                .trim()
                .is_empty()
        })
        .map(|(name, body)| convert(kind, name, body))
        .collect();

    if records.is_empty() {
        debug!("No root entity found");
        return Err(ParsingError::NoRootEntity);
    }

    debug!(
        "Found {} {}{}",
        records.len(),
        kind,
        if records.len() == 1 { "" } else { "s" }
    );

    Ok(records)
}

/// Re-shape one root entry of the tree into the record for its kind.
pub fn convert(kind: EntityKind, name: &str, body: &tree::Node) -> Record {
    match kind {
        EntityKind::Mob => Record::Mob(mob::convert(name, body)),
        EntityKind::Item => Record::Item(item::convert(name, body)),
        EntityKind::Skill => Record::Skill(skill::convert(name, body)),
        EntityKind::DropTable => Record::DropTable(droptable::convert(name, body)),
    }
}
