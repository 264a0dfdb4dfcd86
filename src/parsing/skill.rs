//! Shape conversion for metaskill definitions.

use tracing::debug;

use super::fields::{boolean, lines, number, section};
use super::tree::Node;
use crate::language::Skill;

pub fn convert(name: &str, body: &Node) -> Skill {
    let mut skill = Skill {
        name: name.to_string(),
        ..Default::default()
    };

    let mapping = match body.as_mapping() {
        Some(mapping) => mapping,
        None => return skill,
    };

    for (key, node) in mapping.iter() {
        match section(key).as_str() {
            "cooldown" => skill.cooldown = number(node),
            "cancelifnotargets" => skill.cancel_if_no_targets = boolean(node),
            "skills" => skill.skills = lines(node),
            "conditions" => skill.conditions = lines(node),
            "targetconditions" => skill.target_conditions = lines(node),
            "triggerconditions" => skill.trigger_conditions = lines(node),
            _ => debug!("Ignoring section '{}' of skill '{}'", key, name),
        }
    }

    skill
}
