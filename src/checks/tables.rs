//! Read-only vocabulary of the target game: the names the validators
//! compare against. These are data rather than code so they can be kept
//! current without touching the checks themselves.

use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use std::sync::OnceLock;
use tracing::debug;

use crate::language::LoadingError;

static BUILTIN: &str = include_str!("../../data/tables.json");

/// The lists as they are written in a tables file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct Source {
    entity_types: Vec<String>,
    biomes: Vec<String>,
    color_codes: String,
    mechanics: Vec<String>,
    targeters: Vec<String>,
    conditions: Vec<String>,
}

/// A set of names that keeps the order it was given in, for suggestions,
/// and answers membership without regard to case.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    names: Vec<String>,
    folded: HashSet<String>,
}

impl Vocabulary {
    pub fn new(names: Vec<String>) -> Vocabulary {
        let folded = names
            .iter()
            .map(|name| name.to_lowercase())
            .collect();
        Vocabulary { names, folded }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.folded
            .contains(&name.to_lowercase())
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.names
            .is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Tables {
    pub entity_types: Vocabulary,
    pub biomes: Vocabulary,
    pub color_codes: HashSet<char>,
    pub mechanics: Vocabulary,
    pub targeters: Vocabulary,
    pub conditions: Vocabulary,
}

impl Tables {
    /// The tables shipped with this program, loaded on first use.
    pub fn builtin() -> &'static Tables {
        static TABLES: OnceLock<Tables> = OnceLock::new();
        TABLES.get_or_init(|| {
            Tables::from_json(BUILTIN).unwrap_or_else(|e| panic!("builtin tables: {}", e))
        })
    }

    pub fn from_json(content: &str) -> Result<Tables, serde_json::Error> {
        let source: Source = serde_json::from_str(content)?;

        let tables = Tables {
            entity_types: Vocabulary::new(source.entity_types),
            biomes: Vocabulary::new(source.biomes),
            color_codes: source
                .color_codes
                .to_lowercase()
                .chars()
                .collect(),
            mechanics: Vocabulary::new(source.mechanics),
            targeters: Vocabulary::new(source.targeters),
            conditions: Vocabulary::new(source.conditions),
        };

        debug!(
            "Tables loaded: {} entity types, {} mechanics, {} targeters, {} conditions",
            tables
                .entity_types
                .len(),
            tables
                .mechanics
                .len(),
            tables
                .targeters
                .len(),
            tables
                .conditions
                .len()
        );

        Ok(tables)
    }

    /// Load replacement tables from a file.
    pub fn load(filename: &Path) -> Result<Tables, LoadingError> {
        let content = crate::parsing::load(filename)?;

        Tables::from_json(&content).map_err(|error| LoadingError {
            problem: "Invalid tables file".to_string(),
            details: error.to_string(),
            filename: filename.to_path_buf(),
        })
    }

    pub fn is_color_code(&self, code: char) -> bool {
        self.color_codes
            .contains(&code.to_ascii_lowercase())
    }
}
