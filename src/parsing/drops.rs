//! Drop lines and the attribute blocks that can be attached to them.
//!
//! A drop line is positional:
//!
//! ```text
//! <token>[{key=value;...}...] [amount] [chance]
//! ```
//!
//! and an attribute block is a semicolon separated list of `key=value`
//! pairs, where a semicolon inside a quoted value does not split.

use crate::language::{coerce, DropKind, DropLine, Settings, Value};

const DEFAULT_AMOUNT: &str = "1";
const DEFAULT_CHANCE: &str = "1.0";

/// Attributes describing the dropped item itself.
static INLINE: &[&str] = &[
    "display",
    "name",
    "lore",
    "enchants",
    "enchantments",
    "color",
    "model",
    "custommodeldata",
    "unbreakable",
    "hideflags",
    "potioneffects",
    "skulltexture",
    "durability",
];

/// Attributes controlling how the drop is presented in the world.
static FANCY: &[&str] = &[
    "glow",
    "glowcolor",
    "beam",
    "beamcolor",
    "beamheight",
    "vfx",
    "vfxmaterial",
    "vfxdata",
    "vfxcolor",
    "hologram",
    "hologramname",
    "lootsplosion",
    "billboard",
    "clientside",
];

/// Expand the documented shorthand attribute names.
fn canonical(key: &str) -> String {
    let key = key.to_ascii_lowercase();
    match key.as_str() {
        "hn" => "hologramname".to_string(),
        "ls" => "lootsplosion".to_string(),
        _ => key,
    }
}

pub fn parse_drop(line: &str) -> DropLine {
    let line = line.trim();

    let (token, rest) = split_leading(line);
    let (target, blocks) = extract_blocks(token);

    let mut fields = rest.split_whitespace();
    let amount = fields
        .next()
        .unwrap_or(DEFAULT_AMOUNT)
        .to_string();
    let chance = fields
        .next()
        .unwrap_or(DEFAULT_CHANCE)
        .to_string();

    let kind = classify(target, !blocks.is_empty());

    let mut inline = Vec::new();
    let mut fancy = Vec::new();
    let mut specific = Vec::new();

    for block in blocks {
        for (key, value) in parse_attributes(block) {
            let key = canonical(&key);
            if INLINE.contains(&key.as_str()) {
                inline.push((key, value));
            } else if FANCY.contains(&key.as_str()) {
                fancy.push((key, value));
            } else {
                specific.push((key, value));
            }
        }
    }

    DropLine {
        line: line.to_string(),
        kind,
        target: target.to_string(),
        amount,
        chance,
        inline: Settings(inline),
        fancy: Settings(fancy),
        specific: Settings(specific),
    }
}

/// Decide what a drop token refers to. The order of these tests matters:
/// reserved keywords first, then vanilla loot tables, then items.
pub fn classify(target: &str, has_attributes: bool) -> DropKind {
    match target
        .to_ascii_lowercase()
        .as_str()
    {
        "exp" => return DropKind::Experience,
        "mythicmob" => return DropKind::MythicMob,
        "mcmmo-exp" => return DropKind::McmmoExperience,
        "money" => return DropKind::Money,
        "cmd" => return DropKind::Command,
        "mmoitems" => return DropKind::MmoItems,
        "itemvariable" => return DropKind::ItemVariable,
        "nothing" => return DropKind::Nothing,
        "droptable" => return DropKind::DropTable,
        _ => {}
    }

    if target.contains(':') {
        DropKind::LootTable
    } else if has_attributes || is_upper_case(target) {
        DropKind::VanillaItem
    } else {
        DropKind::MythicItem
    }
}

fn is_upper_case(target: &str) -> bool {
    target
        .chars()
        .any(|c| c.is_alphabetic())
        && !target
            .chars()
            .any(|c| c.is_lowercase())
}

/// A quote only opens a quoted value when it comes straight after the
/// `=`, so an apostrophe inside a bare value is just a character.
fn is_value_start(before: &str) -> bool {
    before
        .trim_end()
        .ends_with('=')
}

/// Split off the leading token, which runs to the first whitespace that
/// is not inside an attribute block or a quoted value.
fn split_leading(line: &str) -> (&str, &str) {
    let mut depth = 0usize;
    let mut quote: Option<char> = None;

    for (i, c) in line.char_indices() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None => match c {
                '"' | '\'' if depth > 0 && is_value_start(&line[..i]) => quote = Some(c),
                '{' => depth += 1,
                '}' => depth = depth.saturating_sub(1),
                c if c.is_whitespace() && depth == 0 => {
                    return (&line[..i], line[i..].trim_start());
                }
                _ => {}
            },
        }
    }

    (line, "")
}

/// Separate `name{a=1}{b=2}` into the name and the content of each
/// top-level block. An unterminated block runs to the end of the token.
fn extract_blocks(token: &str) -> (&str, Vec<&str>) {
    let start = match token.find('{') {
        Some(start) => start,
        None => return (token, Vec::new()),
    };

    let name = &token[..start];
    let mut blocks = Vec::new();
    let mut depth = 0usize;
    let mut open = 0usize;
    let mut quote: Option<char> = None;

    for (i, c) in token[start..].char_indices() {
        let i = start + i;
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None => match c {
                '"' | '\'' if is_value_start(&token[..i]) => quote = Some(c),
                '{' => {
                    if depth == 0 {
                        open = i + 1;
                    }
                    depth += 1;
                }
                '}' if depth > 0 => {
                    depth -= 1;
                    if depth == 0 {
                        blocks.push(&token[open..i]);
                    }
                }
                _ => {}
            },
        }
    }

    if depth > 0 {
        blocks.push(&token[open..]);
    }

    (name, blocks)
}

/// Parse the inside of an attribute block. Keys are kept as written; a
/// piece with no `=` is recorded as a flag set to true.
pub fn parse_attributes(block: &str) -> Vec<(String, Value)> {
    split_outside_quotes(block, ';')
        .into_iter()
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(|piece| match piece.split_once('=') {
            Some((key, value)) => (
                key.trim()
                    .to_string(),
                coerce(value.trim()),
            ),
            None => (piece.to_string(), Value::Boolean(true)),
        })
        .collect()
}

/// Split on a separator, ignoring separators inside quotes or inside
/// nested braces and brackets.
fn split_outside_quotes(content: &str, separator: char) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut begin = 0;

    for (i, c) in content.char_indices() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None => match c {
                '"' | '\'' if is_value_start(&content[..i]) => quote = Some(c),
                '{' | '[' => depth += 1,
                '}' | ']' => depth = depth.saturating_sub(1),
                c if c == separator && depth == 0 => {
                    pieces.push(&content[begin..i]);
                    begin = i + c.len_utf8();
                }
                _ => {}
            },
        }
    }
    pieces.push(&content[begin..]);

    pieces
}
