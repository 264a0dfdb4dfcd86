//! Resolution of usages against what a pack defines.

use serde::Serialize;
use std::collections::BTreeSet;

use super::{EntryReport, FileReport};
use crate::checks::Tables;
use crate::language::{EntityKind, Record};
use crate::references::{Usage, UsageKind};

/// The names a single entry refers to, by kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EntryReferences {
    pub skills: BTreeSet<String>,
    pub items: BTreeSet<String>,
    pub mobs: BTreeSet<String>,
    pub droptables: BTreeSet<String>,
}

impl EntryReferences {
    pub fn from_usages(usages: &[Usage]) -> EntryReferences {
        let mut references = EntryReferences::default();
        for usage in usages {
            references
                .names_mut(usage.kind)
                .insert(usage.name.clone());
        }
        references
    }

    pub fn names(&self, kind: UsageKind) -> &BTreeSet<String> {
        match kind {
            UsageKind::Skill => &self.skills,
            UsageKind::Item => &self.items,
            UsageKind::Mob => &self.mobs,
            UsageKind::DropTable => &self.droptables,
        }
    }

    fn names_mut(&mut self, kind: UsageKind) -> &mut BTreeSet<String> {
        match kind {
            UsageKind::Skill => &mut self.skills,
            UsageKind::Item => &mut self.items,
            UsageKind::Mob => &mut self.mobs,
            UsageKind::DropTable => &mut self.droptables,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.skills
            .is_empty()
            && self
                .items
                .is_empty()
            && self
                .mobs
                .is_empty()
            && self
                .droptables
                .is_empty()
    }
}

/// The names defined locally in a pack, by kind.
#[derive(Debug, Clone, Default)]
pub struct Definitions {
    pub skills: BTreeSet<String>,
    pub items: BTreeSet<String>,
    pub mobs: BTreeSet<String>,
    pub droptables: BTreeSet<String>,
}

impl Definitions {
    pub fn from_records<'a>(records: impl Iterator<Item = &'a Record>) -> Definitions {
        let mut definitions = Definitions::default();
        for record in records {
            let name = record
                .name()
                .to_string();
            match record.kind() {
                EntityKind::Skill => definitions
                    .skills
                    .insert(name),
                EntityKind::Item => definitions
                    .items
                    .insert(name),
                EntityKind::Mob => definitions
                    .mobs
                    .insert(name),
                EntityKind::DropTable => definitions
                    .droptables
                    .insert(name),
            };
        }
        definitions
    }

    pub fn names(&self, kind: UsageKind) -> &BTreeSet<String> {
        match kind {
            UsageKind::Skill => &self.skills,
            UsageKind::Item => &self.items,
            UsageKind::Mob => &self.mobs,
            UsageKind::DropTable => &self.droptables,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Provenance {
    pub entry: String,
    pub file: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Missing {
    pub name: String,
    pub referenced_by: Vec<Provenance>,
}

/// The outcome for one kind of usage across the whole pack. Names are
/// sorted so the same pack always gives the same report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Resolution {
    #[serde(rename = "allReferences")]
    pub all: Vec<String>,
    #[serde(rename = "resolvedReferences")]
    pub resolved: Vec<String>,
    #[serde(rename = "missingReferences")]
    pub missing: Vec<Missing>,
    /// Every usage found, including repeats of the same name.
    pub usages: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CrossReferences {
    pub skills: Resolution,
    pub items: Resolution,
    pub mobs: Resolution,
    pub droptables: Resolution,
}

impl CrossReferences {
    pub fn get(&self, kind: UsageKind) -> &Resolution {
        match kind {
            UsageKind::Skill => &self.skills,
            UsageKind::Item => &self.items,
            UsageKind::Mob => &self.mobs,
            UsageKind::DropTable => &self.droptables,
        }
    }

    pub fn missing_count(&self) -> usize {
        self.skills
            .missing
            .len()
            + self
                .items
                .missing
                .len()
            + self
                .mobs
                .missing
                .len()
            + self
                .droptables
                .missing
                .len()
    }
}

/// Minecraft material names are not case sensitive, so anything made of
/// letters and underscores is taken to be one. This also accepts custom
/// item names that were never defined.
pub fn is_vanilla_item(name: &str) -> bool {
    let re = regex!(r"^[A-Za-z_]+$");

    re.is_match(name)
}

pub struct Resolver<'t> {
    definitions: Definitions,
    tables: &'t Tables,
}

impl<'t> Resolver<'t> {
    pub fn new(definitions: Definitions, tables: &'t Tables) -> Resolver<'t> {
        Resolver {
            definitions,
            tables,
        }
    }

    /// Whether a name of the given kind is defined, locally or by the game.
    pub fn resolves(&self, kind: UsageKind, name: &str) -> bool {
        let local = self
            .definitions
            .names(kind)
            .contains(name);

        match kind {
            UsageKind::Skill | UsageKind::DropTable => local,
            UsageKind::Item => local || is_vanilla_item(name),
            UsageKind::Mob => {
                local
                    || self
                        .tables
                        .entity_types
                        .contains(name)
            }
        }
    }

    pub fn resolve(&self, usages: &[Usage], files: &[FileReport]) -> CrossReferences {
        CrossReferences {
            skills: self.resolve_kind(UsageKind::Skill, usages, files),
            items: self.resolve_kind(UsageKind::Item, usages, files),
            mobs: self.resolve_kind(UsageKind::Mob, usages, files),
            droptables: self.resolve_kind(UsageKind::DropTable, usages, files),
        }
    }

    fn resolve_kind(&self, kind: UsageKind, usages: &[Usage], files: &[FileReport]) -> Resolution {
        let of_kind: Vec<&Usage> = usages
            .iter()
            .filter(|usage| usage.kind == kind)
            .collect();

        let unique: BTreeSet<&str> = of_kind
            .iter()
            .map(|usage| usage.name.as_str())
            .collect();

        let mut resolution = Resolution {
            usages: of_kind.len(),
            ..Default::default()
        };

        for name in unique {
            resolution
                .all
                .push(name.to_string());

            if self.resolves(kind, name) {
                resolution
                    .resolved
                    .push(name.to_string());
            } else {
                resolution
                    .missing
                    .push(Missing {
                        name: name.to_string(),
                        referenced_by: referenced_by(kind, name, files),
                    });
            }
        }

        resolution
    }
}

/// Every entry, in pack order, whose own references include the name.
fn referenced_by(kind: UsageKind, name: &str, files: &[FileReport]) -> Vec<Provenance> {
    files
        .iter()
        .flat_map(move |file| {
            file.entries
                .iter()
                .filter(move |entry: &&EntryReport| {
                    entry
                        .references
                        .names(kind)
                        .contains(name)
                })
                .map(move |entry| Provenance {
                    entry: entry
                        .name
                        .clone(),
                    file: file
                        .path
                        .clone(),
                })
        })
        .collect()
}
