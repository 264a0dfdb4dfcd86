//! Shape conversion for mob definitions.

use tracing::debug;

use super::drops::parse_drop;
use super::fields::{boolean, lines, number, section, settings, text};
use super::tree::Node;
use crate::language::{AiSelector, BossBar, DamageModifier, Equipment, Mob};

pub fn convert(name: &str, body: &Node) -> Mob {
    let mut mob = Mob {
        name: name.to_string(),
        ..Default::default()
    };

    let mapping = match body.as_mapping() {
        Some(mapping) => mapping,
        None => return mob,
    };

    for (key, node) in mapping.iter() {
        match section(key).as_str() {
            "type" => mob.entity_type = text(node),
            "display" => mob.display = text(node),
            "health" => mob.health = number(node),
            "damage" => mob.damage = number(node),
            "armor" => mob.armor = number(node),
            "faction" => mob.faction = text(node),
            "bossbar" => mob.boss_bar = Some(boss_bar(node)),
            "equipment" => {
                mob.equipment = lines(node)
                    .iter()
                    .map(|line| equipment(line))
                    .collect()
            }
            "damagemodifiers" => {
                mob.damage_modifiers = lines(node)
                    .iter()
                    .map(|line| damage_modifier(line))
                    .collect()
            }
            "killmessages" => mob.kill_messages = lines(node),
            "aigoalselectors" => {
                mob.ai_goal_selectors = lines(node)
                    .iter()
                    .map(|line| ai_selector(line))
                    .collect()
            }
            "aitargetselectors" => {
                mob.ai_target_selectors = lines(node)
                    .iter()
                    .map(|line| ai_selector(line))
                    .collect()
            }
            "modules" => mob.modules = settings(node),
            "levelmodifiers" => mob.level_modifiers = settings(node),
            "options" => mob.options = settings(node),
            "displayoptions" => mob.display_options = settings(node),
            "skills" => mob.skills = lines(node),
            "drops" => {
                mob.drops = lines(node)
                    .iter()
                    .map(|line| parse_drop(line))
                    .collect()
            }
            "dropoptions" => mob.drop_options = settings(node),
            _ => debug!("Ignoring section '{}' of mob '{}'", key, name),
        }
    }

    mob
}

fn boss_bar(node: &Node) -> BossBar {
    let mut bar = BossBar {
        enabled: false,
        title: None,
        range: None,
        color: None,
        style: None,
    };

    if let Some(mapping) = node.as_mapping() {
        for (key, node) in mapping.iter() {
            match section(key).as_str() {
                "enabled" => bar.enabled = boolean(node).unwrap_or(false),
                "title" => bar.title = text(node),
                "range" => bar.range = number(node),
                "color" => bar.color = text(node),
                "style" => bar.style = text(node),
                _ => {}
            }
        }
    }

    bar
}

/// `<item> <slot>`, also accepting the older `<item>:<slot>` form.
fn equipment(line: &str) -> Equipment {
    let mut parts = line.split_whitespace();
    let first = parts
        .next()
        .unwrap_or("");

    match parts.next() {
        Some(slot) => Equipment {
            item: first.to_string(),
            slot: Some(slot.to_string()),
        },
        None => match first.rsplit_once(':') {
            Some((item, slot)) => Equipment {
                item: item.to_string(),
                slot: Some(slot.to_string()),
            },
            None => Equipment {
                item: first.to_string(),
                slot: None,
            },
        },
    }
}

fn damage_modifier(line: &str) -> DamageModifier {
    let mut parts = line.split_whitespace();
    let cause = parts
        .next()
        .unwrap_or("")
        .to_string();
    let multiplier = parts
        .next()
        .and_then(|value| {
            value
                .parse::<f64>()
                .ok()
        })
        .unwrap_or(1.0);

    DamageModifier { cause, multiplier }
}

/// `<priority> <name> [params...]`. An unparseable priority becomes 0;
/// a line of a single non-numeric word is taken to be just the name.
fn ai_selector(line: &str) -> AiSelector {
    let parts: Vec<&str> = line
        .split_whitespace()
        .collect();

    match parts.as_slice() {
        [] => AiSelector {
            priority: 0,
            name: String::new(),
            parameters: Vec::new(),
        },
        [only] => match only.parse::<i32>() {
            Ok(priority) => AiSelector {
                priority,
                name: String::new(),
                parameters: Vec::new(),
            },
            Err(_) => AiSelector {
                priority: 0,
                name: only.to_string(),
                parameters: Vec::new(),
            },
        },
        [priority, name, parameters @ ..] => AiSelector {
            priority: priority
                .parse::<i32>()
                .unwrap_or(0),
            name: name.to_string(),
            parameters: parameters
                .iter()
                .map(|p| p.to_string())
                .collect(),
        },
    }
}
