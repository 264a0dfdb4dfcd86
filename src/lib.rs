//! Parser and cross-reference checker for MythicMobs configuration packs.
//!
//! Files are read into a [`parsing::tree`] of mappings and sequences, then
//! re-shaped into typed [`language::Record`]s. A [`pack::Pack`] of records is
//! validated as a whole by [`pack::validate_pack`], which runs every free
//! text line through the [`references`] extractor and the [`checks`]
//! validators and resolves the usages found against what the pack defines.

#[macro_use]
mod regex;

pub mod checks;
pub mod language;
pub mod pack;
pub mod parsing;
pub mod references;
