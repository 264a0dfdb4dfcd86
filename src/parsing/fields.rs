//! Readers for the small shapes that section values come in.

use super::tree::Node;
use crate::language::Settings;

pub(crate) fn text(node: &Node) -> Option<String> {
    node.as_scalar()
        .map(|value| value.as_text())
}

pub(crate) fn number(node: &Node) -> Option<f64> {
    node.as_scalar()
        .and_then(|value| value.as_number())
}

pub(crate) fn boolean(node: &Node) -> Option<bool> {
    node.as_scalar()
        .and_then(|value| value.as_bool())
}

/// A block of arbitrary keys. Only scalar values are kept; nested blocks
/// inside such a section carry nothing the validators look at.
pub(crate) fn settings(node: &Node) -> Settings {
    match node.as_mapping() {
        Some(mapping) => Settings(
            mapping
                .iter()
                .filter_map(|(key, value)| {
                    value
                        .as_scalar()
                        .map(|value| (key.to_string(), value.clone()))
                })
                .collect(),
        ),
        None => Settings::default(),
    }
}

/// A list of free text lines: skill lines, condition lines, lore.
pub(crate) fn lines(node: &Node) -> Vec<String> {
    node.lines()
        .into_iter()
        .filter(|line| {
            !line
                .trim()
                .is_empty()
        })
        .collect()
}

/// Section names are matched without regard to case.
pub(crate) fn section(key: &str) -> String {
    key.to_ascii_lowercase()
}
