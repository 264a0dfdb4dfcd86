//! Shape conversion for item definitions.

use tracing::debug;

use super::fields::{lines, number, section, settings, text};
use super::tree::Node;
use crate::language::Item;

pub fn convert(name: &str, body: &Node) -> Item {
    let mut item = Item {
        name: name.to_string(),
        ..Default::default()
    };

    let mapping = match body.as_mapping() {
        Some(mapping) => mapping,
        None => return item,
    };

    for (key, node) in mapping.iter() {
        match section(key).as_str() {
            "id" | "material" => item.material = text(node),
            "display" => item.display = text(node),
            "amount" => item.amount = number(node),
            "lore" => item.lore = lines(node),
            "enchantments" => item.enchantments = lines(node),
            "skills" => item.skills = lines(node),
            "options" => item.options = settings(node),
            _ => debug!("Ignoring section '{}' of item '{}'", key, name),
        }
    }

    item
}
