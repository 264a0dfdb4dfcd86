//! Shape conversion for drop table definitions.

use tracing::debug;

use super::drops::parse_drop;
use super::fields::{lines, number, section};
use super::tree::Node;
use crate::language::DropTable;

pub fn convert(name: &str, body: &Node) -> DropTable {
    let mut table = DropTable {
        name: name.to_string(),
        ..Default::default()
    };

    let mapping = match body.as_mapping() {
        Some(mapping) => mapping,
        None => return table,
    };

    for (key, node) in mapping.iter() {
        match section(key).as_str() {
            "totalitems" => table.total_items = number(node),
            "minitems" => table.min_items = number(node),
            "maxitems" => table.max_items = number(node),
            "drops" => {
                table.drops = lines(node)
                    .iter()
                    .map(|line| parse_drop(line))
                    .collect()
            }
            "conditions" => table.conditions = lines(node),
            "triggerconditions" => table.trigger_conditions = lines(node),
            _ => debug!("Ignoring section '{}' of drop table '{}'", key, name),
        }
    }

    table
}
