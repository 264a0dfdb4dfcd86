//! Types representing the records of a MythicMobs pack once shape
//! conversion has been done.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::{ParsingError, Value};

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Mob,
    Item,
    Skill,
    DropTable,
}

impl EntityKind {
    pub fn name(&self) -> &'static str {
        match self {
            EntityKind::Mob => "mob",
            EntityKind::Item => "item",
            EntityKind::Skill => "skill",
            EntityKind::DropTable => "droptable",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for EntityKind {
    type Err = ParsingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s
            .to_ascii_lowercase()
            .as_str()
        {
            "mob" | "mobs" => Ok(EntityKind::Mob),
            "item" | "items" => Ok(EntityKind::Item),
            "skill" | "skills" => Ok(EntityKind::Skill),
            "droptable" | "droptables" => Ok(EntityKind::DropTable),
            _ => Err(ParsingError::UnknownKind(s.to_string())),
        }
    }
}

/// One named definition from a pack file.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Record {
    Mob(Mob),
    Item(Item),
    Skill(Skill),
    DropTable(DropTable),
}

impl Record {
    pub fn name(&self) -> &str {
        match self {
            Record::Mob(mob) => &mob.name,
            Record::Item(item) => &item.name,
            Record::Skill(skill) => &skill.name,
            Record::DropTable(table) => &table.name,
        }
    }

    pub fn kind(&self) -> EntityKind {
        match self {
            Record::Mob(_) => EntityKind::Mob,
            Record::Item(_) => EntityKind::Item,
            Record::Skill(_) => EntityKind::Skill,
            Record::DropTable(_) => EntityKind::DropTable,
        }
    }
}

/// Ordered key/value pairs from a section whose keys are not fixed, such as
/// Options or DropOptions. Keys keep their original spelling.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Settings(pub Vec<(String, Value)>);

impl Settings {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v)
    }

    pub fn is_empty(&self) -> bool {
        self.0
            .is_empty()
    }

    pub fn len(&self) -> usize {
        self.0
            .len()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Mob {
    pub name: String,
    pub entity_type: Option<String>,
    pub display: Option<String>,
    pub health: Option<f64>,
    pub damage: Option<f64>,
    pub armor: Option<f64>,
    pub faction: Option<String>,
    pub boss_bar: Option<BossBar>,
    pub equipment: Vec<Equipment>,
    pub damage_modifiers: Vec<DamageModifier>,
    pub kill_messages: Vec<String>,
    pub ai_goal_selectors: Vec<AiSelector>,
    pub ai_target_selectors: Vec<AiSelector>,
    pub modules: Settings,
    pub level_modifiers: Settings,
    pub options: Settings,
    pub display_options: Settings,
    pub skills: Vec<String>,
    pub drops: Vec<DropLine>,
    pub drop_options: Settings,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BossBar {
    pub enabled: bool,
    pub title: Option<String>,
    pub range: Option<f64>,
    pub color: Option<String>,
    pub style: Option<String>,
}

/// An `Equipment` line, `<item> <slot>`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Equipment {
    pub item: String,
    pub slot: Option<String>,
}

/// A `DamageModifiers` line, `<cause> <multiplier>`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DamageModifier {
    pub cause: String,
    pub multiplier: f64,
}

/// An `AIGoalSelectors` or `AITargetSelectors` line,
/// `<priority> <name> [params...]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AiSelector {
    pub priority: i32,
    pub name: String,
    pub parameters: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Item {
    pub name: String,
    pub material: Option<String>,
    pub display: Option<String>,
    pub amount: Option<f64>,
    pub lore: Vec<String>,
    pub enchantments: Vec<String>,
    pub skills: Vec<String>,
    pub options: Settings,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Skill {
    pub name: String,
    pub cooldown: Option<f64>,
    pub cancel_if_no_targets: Option<bool>,
    pub skills: Vec<String>,
    pub conditions: Vec<String>,
    pub target_conditions: Vec<String>,
    pub trigger_conditions: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DropTable {
    pub name: String,
    pub total_items: Option<f64>,
    pub min_items: Option<f64>,
    pub max_items: Option<f64>,
    pub drops: Vec<DropLine>,
    pub conditions: Vec<String>,
    pub trigger_conditions: Vec<String>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DropKind {
    Experience,
    MythicMob,
    McmmoExperience,
    Money,
    Command,
    MmoItems,
    ItemVariable,
    Nothing,
    DropTable,
    LootTable,
    VanillaItem,
    MythicItem,
}

/// A single drop, `<token>[{attributes}...] [amount] [chance]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DropLine {
    /// The line as written.
    pub line: String,
    pub kind: DropKind,
    /// The leading token with any attribute blocks removed.
    pub target: String,
    pub amount: String,
    pub chance: String,
    pub inline: Settings,
    pub fancy: Settings,
    pub specific: Settings,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Severity {
    Critical,
    Warning,
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Critical => write!(f, "critical"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// A problem found with a line or an entry. Issues are created by the
/// validators and are only ever counted or displayed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    #[serde(rename = "type")]
    pub tag: &'static str,
    pub severity: Severity,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl Issue {
    pub fn new(tag: &'static str, severity: Severity, message: impl Into<String>) -> Issue {
        Issue {
            tag,
            severity,
            message: message.into(),
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Issue {
        self.suggestion = Some(suggestion.into());
        self
    }
}
