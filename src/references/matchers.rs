use super::{Matcher, Pattern, Reference, UsageKind};

/// Leading words of a drop line that are never item names.
static NOT_ITEMS: &[&str] = &[
    "gold",
    "money",
    "exp",
    "experience",
    "skillapi",
    "mcmmo",
    "mcmmo-exp",
    "heroesexp",
    "championexp",
    "mythicmob",
    "cmd",
    "mmoitems",
    "itemvariable",
    "nothing",
    "droptable",
];

pub fn is_identifier(content: &str) -> bool {
    let re = regex!(r"^[A-Za-z_][A-Za-z0-9_-]*$");

    re.is_match(content)
}

/// `skill{s=Name}`, `skill{skill=Name}` and `metaskill{s=Name}`. The name
/// runs up to the next `;` or `}`. Inline skill lists, `s=[ - ... ]`, are
/// left for [`InlineSkill`].
pub struct SkillMechanic;

impl Matcher for SkillMechanic {
    fn scan(&self, line: &str) -> Vec<Reference> {
        let re = regex!(r"(?i)\b(meta)?skill\{(?:[^}]*?;)?\s*(?:s|skill)\s*=\s*([^;}]+)");

        re.captures_iter(line)
            .filter_map(|cap| {
                let name = cap
                    .get(2)?
                    .as_str()
                    .trim();
                if name.is_empty() || name.starts_with('[') {
                    return None;
                }
                let pattern = match cap.get(1) {
                    Some(_) => Pattern::MetaSkill,
                    None => Pattern::Skill,
                };
                Some(Reference::new(UsageKind::Skill, name, pattern))
            })
            .collect()
    }
}

/// `onTick=`, `onHit=`, `onStart=`, `onEnd=`, `onBounce=` and
/// `onInteract=` followed by a skill name.
pub struct Callbacks;

impl Matcher for Callbacks {
    fn scan(&self, line: &str) -> Vec<Reference> {
        let re = regex!(
            r"(?i)\bon(?:Tick|Hit|Start|End|Bounce|Interact)\s*=\s*([A-Za-z_][A-Za-z0-9_-]*)"
        );

        re.captures_iter(line)
            .filter_map(|cap| cap.get(1))
            .map(|name| Reference::new(UsageKind::Skill, name.as_str(), Pattern::Callback))
            .collect()
    }
}

/// `castinstead <Name>` and `orelsecast <Name>`, in any case.
pub struct CastInstead;

impl Matcher for CastInstead {
    fn scan(&self, line: &str) -> Vec<Reference> {
        let re = regex!(r"(?i)\b(castinstead|orelsecast)\s+([A-Za-z_][A-Za-z0-9_-]*)");

        re.captures_iter(line)
            .filter_map(|cap| {
                let keyword = cap.get(1)?;
                let name = cap.get(2)?;
                let pattern = if keyword
                    .as_str()
                    .eq_ignore_ascii_case("castinstead")
                {
                    Pattern::CastInstead
                } else {
                    Pattern::OrElseCast
                };
                Some(Reference::new(UsageKind::Skill, name.as_str(), pattern))
            })
            .collect()
    }
}

/// `randomskill{skills=A,B 10,C 5}`. Each entry may carry a weight after
/// a space; only the name before it is taken, and only if it is a valid
/// identifier.
pub struct RandomSkill;

impl Matcher for RandomSkill {
    fn scan(&self, line: &str) -> Vec<Reference> {
        let re = regex!(r"(?i)\brandomskill\{(?:[^}]*?;)?\s*skills\s*=\s*([^;}]+)");

        re.captures_iter(line)
            .filter_map(|cap| cap.get(1))
            .flat_map(|list| {
                list.as_str()
                    .split(',')
                    .filter_map(|entry| {
                        entry
                            .trim()
                            .split_whitespace()
                            .next()
                    })
                    .filter(|name| is_identifier(name))
                    .map(|name| Reference::new(UsageKind::Skill, name, Pattern::RandomSkill))
                    .collect::<Vec<_>>()
            })
            .collect()
    }
}

/// `[ - Name ]`, a bracketed reference to a single skill.
pub struct InlineSkill;

impl Matcher for InlineSkill {
    fn scan(&self, line: &str) -> Vec<Reference> {
        let re = regex!(r"\[\s*-\s*([A-Za-z_][A-Za-z0-9_-]*)\s*\]");

        re.captures_iter(line)
            .filter_map(|cap| cap.get(1))
            .map(|name| Reference::new(UsageKind::Skill, name.as_str(), Pattern::InlineSkill))
            .collect()
    }
}

/// `droptable{dt=Name}` and `droptable{table=Name}`. This is the only way
/// a drop table is referred to; an upper case word in a drop line is an
/// item.
pub struct DropTableReference;

impl Matcher for DropTableReference {
    fn scan(&self, line: &str) -> Vec<Reference> {
        let re = regex!(r"(?i)\bdroptable\{(?:[^}]*?;)?\s*(?:dt|table)\s*=\s*([^;}\s]+)");

        re.captures_iter(line)
            .filter_map(|cap| cap.get(1))
            .map(|name| Reference::new(UsageKind::DropTable, name.as_str(), Pattern::DropTable))
            .collect()
    }
}

/// The leading word of a drop line, when it looks like a custom item:
/// starts with an upper case letter, is not a reserved drop keyword, and
/// is not a namespaced loot table.
pub struct DropItem;

impl Matcher for DropItem {
    fn scan(&self, line: &str) -> Vec<Reference> {
        let token = line
            .trim()
            .split(|c: char| c.is_whitespace() || c == '{')
            .next()
            .unwrap_or("");

        if token.is_empty() || token.contains(':') {
            return Vec::new();
        }

        let lower = token.to_ascii_lowercase();
        if NOT_ITEMS.contains(&lower.as_str()) {
            return Vec::new();
        }

        match token
            .chars()
            .next()
        {
            Some(c) if c.is_ascii_uppercase() => {
                vec![Reference::new(UsageKind::Item, token, Pattern::DropItem)]
            }
            _ => Vec::new(),
        }
    }
}

/// `summon{type=Name}` and `mythicmob{m=Name}` and their spellings.
pub struct Summon;

impl Matcher for Summon {
    fn scan(&self, line: &str) -> Vec<Reference> {
        let re = regex!(
            r"(?i)\b(?:summon|mythicmob)\{(?:[^}]*?;)?\s*(?:type|mob|m|t)\s*=\s*([^;}\s]+)"
        );

        re.captures_iter(line)
            .filter_map(|cap| cap.get(1))
            .map(|name| Reference::new(UsageKind::Mob, name.as_str(), Pattern::Summon))
            .collect()
    }
}
