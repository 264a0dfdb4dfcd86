//! Validators for lines and entries, and the tables they consult.

mod entries;
mod lines;
mod similar;
mod tables;

pub use entries::validate_entry;
pub use lines::*;
pub use similar::{distance, find_similar, MAXIMUM_DISTANCE};
pub use tables::{Tables, Vocabulary};

use crate::references::Role;

/// Check one free text line of the given sort.
pub fn validate_line(role: Role, line: &str, tables: &Tables) -> Validation {
    match role {
        Role::Skill => check_skill_line(line, tables),
        Role::Condition => check_condition_line(line, tables),
        Role::Drop => check_drop_line(&crate::parsing::parse_drop(line)),
    }
}
