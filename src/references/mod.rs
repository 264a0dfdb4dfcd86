//! Identifier usages embedded in free text lines.
//!
//! Each syntactic form that can name another entity is recognized by its
//! own [`Matcher`]. A line is offered to every matcher appropriate to the
//! kind of line it is, and a line matching several forms contributes a
//! usage for each. No deduplication happens here.

use serde::Serialize;
use std::fmt;

use crate::language::Record;

mod matchers;

pub use matchers::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UsageKind {
    Skill,
    Item,
    Mob,
    DropTable,
}

impl fmt::Display for UsageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UsageKind::Skill => write!(f, "skill"),
            UsageKind::Item => write!(f, "item"),
            UsageKind::Mob => write!(f, "mob"),
            UsageKind::DropTable => write!(f, "droptable"),
        }
    }
}

/// The syntactic form a usage was found in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Pattern {
    Skill,
    MetaSkill,
    Callback,
    CastInstead,
    OrElseCast,
    RandomSkill,
    InlineSkill,
    DropTable,
    DropItem,
    Summon,
}

/// A name found in a line, before it is attributed to an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reference {
    pub kind: UsageKind,
    pub name: String,
    pub pattern: Pattern,
}

impl Reference {
    pub fn new(kind: UsageKind, name: &str, pattern: Pattern) -> Reference {
        Reference {
            kind,
            name: name.to_string(),
            pattern,
        }
    }

    pub fn attributed_to(self, entry: &str) -> Usage {
        Usage {
            kind: self.kind,
            name: self.name,
            pattern: self.pattern,
            entry: entry.to_string(),
        }
    }
}

/// A name found in a line of a particular entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Usage {
    pub kind: UsageKind,
    pub name: String,
    pub pattern: Pattern,
    pub entry: String,
}

/// What sort of line is being scanned, which decides the matchers used.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Role {
    Skill,
    Condition,
    Drop,
}

/// Something that finds usages of one syntactic form in a line.
pub trait Matcher: Sync {
    fn scan(&self, line: &str) -> Vec<Reference>;
}

static SKILL_LINE: &[&dyn Matcher] = &[
    &SkillMechanic,
    &Callbacks,
    &CastInstead,
    &RandomSkill,
    &InlineSkill,
    &Summon,
];

static CONDITION_LINE: &[&dyn Matcher] = &[&SkillMechanic, &CastInstead, &InlineSkill];

static DROP_LINE: &[&dyn Matcher] = &[&DropTableReference, &DropItem, &Summon];

pub fn matchers(role: Role) -> &'static [&'static dyn Matcher] {
    match role {
        Role::Skill => SKILL_LINE,
        Role::Condition => CONDITION_LINE,
        Role::Drop => DROP_LINE,
    }
}

/// Every usage in one line, in matcher order.
pub fn scan(line: &str, role: Role) -> Vec<Reference> {
    matchers(role)
        .iter()
        .flat_map(|matcher| matcher.scan(line))
        .collect()
}

/// Every usage in every free text line of a record, attributed to it.
pub fn extract(record: &Record) -> Vec<Usage> {
    let mut lines: Vec<(&str, Role)> = Vec::new();

    match record {
        Record::Mob(mob) => {
            lines.extend(
                mob.skills
                    .iter()
                    .map(|line| (line.as_str(), Role::Skill)),
            );
            lines.extend(
                mob.drops
                    .iter()
                    .map(|drop| (drop.line.as_str(), Role::Drop)),
            );
        }
        Record::Item(item) => {
            lines.extend(
                item.skills
                    .iter()
                    .map(|line| (line.as_str(), Role::Skill)),
            );
        }
        Record::Skill(skill) => {
            lines.extend(
                skill
                    .skills
                    .iter()
                    .map(|line| (line.as_str(), Role::Skill)),
            );
            lines.extend(
                skill
                    .conditions
                    .iter()
                    .chain(skill.target_conditions.iter())
                    .chain(skill.trigger_conditions.iter())
                    .map(|line| (line.as_str(), Role::Condition)),
            );
        }
        Record::DropTable(table) => {
            lines.extend(
                table
                    .drops
                    .iter()
                    .map(|drop| (drop.line.as_str(), Role::Drop)),
            );
            lines.extend(
                table
                    .conditions
                    .iter()
                    .chain(table.trigger_conditions.iter())
                    .map(|line| (line.as_str(), Role::Condition)),
            );
        }
    }

    let entry = record.name();

    lines
        .into_iter()
        .flat_map(|(line, role)| scan(line, role))
        .map(|reference| reference.attributed_to(entry))
        .collect()
}
