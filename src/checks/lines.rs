//! Rule checks on single lines of free text.
//!
//! Only structural problems (unbalanced braces, numbers and ranges that
//! cannot be read) are Critical. A name the tables don't know is at most
//! informational, since the game or another plugin may well define it.

use serde::Serialize;

use super::similar::find_similar;
use super::tables::Tables;
use crate::language::{DropKind, DropLine, Issue, Severity};

/// The result of checking a line or an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Validation {
    pub valid: bool,
    pub issues: Vec<Issue>,
}

impl Validation {
    pub(crate) fn from_issues(issues: Vec<Issue>) -> Validation {
        let valid = !issues
            .iter()
            .any(|issue| issue.severity == Severity::Critical);
        Validation { valid, issues }
    }
}

/// The result of a check on a single fact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub valid: bool,
    pub message: Option<String>,
    pub suggestion: Option<String>,
}

impl Verdict {
    fn pass() -> Verdict {
        Verdict {
            valid: true,
            message: None,
            suggestion: None,
        }
    }

    fn fail(message: String, suggestion: Option<String>) -> Verdict {
        Verdict {
            valid: false,
            message: Some(message),
            suggestion,
        }
    }
}

fn strip_dash(line: &str) -> &str {
    let line = line.trim();
    match line.strip_prefix('-') {
        Some(rest) => rest.trim_start(),
        None => line,
    }
}

fn did_you_mean(found: Option<&str>) -> Option<String> {
    found.map(|name| format!("Did you mean '{}'?", name))
}

/// Check the braces of a line balance. Reports the counts when they don't.
pub fn check_braces(line: &str) -> Option<Issue> {
    let open = line
        .chars()
        .filter(|c| *c == '{')
        .count();
    let close = line
        .chars()
        .filter(|c| *c == '}')
        .count();

    if open == close {
        None
    } else {
        Some(Issue::new(
            "unbalanced-braces",
            Severity::Critical,
            format!(
                "Unbalanced braces: {} opening '{{' and {} closing '}}'",
                open, close
            ),
        ))
    }
}

pub fn check_skill_line(line: &str, tables: &Tables) -> Validation {
    let line = strip_dash(line);
    let mut issues = Vec::new();

    if let Some(issue) = check_braces(line) {
        issues.push(issue);
    }

    let re = regex!(r"^([A-Za-z0-9_:\-]+)");
    if let Some(cap) = re.captures(line) {
        let mechanic = &cap[1];
        if !mechanic.contains(':')
            && !tables
                .mechanics
                .contains(mechanic)
        {
            let mut issue = Issue::new(
                "unknown-mechanic",
                Severity::Info,
                format!("Unknown mechanic '{}'", mechanic),
            );
            if let Some(suggestion) = did_you_mean(find_similar(
                mechanic,
                tables
                    .mechanics
                    .names(),
            )) {
                issue = issue.with_suggestion(suggestion);
            }
            issues.push(issue);
        }
    }

    let re = regex!(r"(?:^|[\s}])@([A-Za-z][A-Za-z0-9_]*)");
    for cap in re.captures_iter(line) {
        let targeter = &cap[1];
        if !tables
            .targeters
            .contains(targeter)
        {
            let mut issue = Issue::new(
                "unknown-targeter",
                Severity::Info,
                format!("Unknown targeter '@{}'", targeter),
            );
            if let Some(suggestion) = did_you_mean(find_similar(
                targeter,
                tables
                    .targeters
                    .names(),
            )) {
                issue = issue.with_suggestion(suggestion);
            }
            issues.push(issue);
        }
    }

    Validation::from_issues(issues)
}

/// Compound and inline conditions are accepted as they are; otherwise the
/// leading condition name, possibly negated with `!`, is looked up.
pub fn check_condition_line(line: &str, tables: &Tables) -> Validation {
    let line = strip_dash(line);
    let mut issues = Vec::new();

    if line.contains('(') || line.contains("&&") || line.contains("||") {
        return Validation::from_issues(issues);
    }

    let re = regex!(r"^!?\s*([A-Za-z_][A-Za-z0-9_]*)");
    if let Some(cap) = re.captures(line) {
        let condition = &cap[1];
        if !tables
            .conditions
            .contains(condition)
        {
            let mut issue = Issue::new(
                "unknown-condition",
                Severity::Info,
                format!("Unknown condition '{}'", condition),
            );
            if let Some(suggestion) = did_you_mean(find_similar(
                condition,
                tables
                    .conditions
                    .names(),
            )) {
                issue = issue.with_suggestion(suggestion);
            }
            issues.push(issue);
        }
    }

    let re = regex!(r"(?i)\bbiome\{\s*(?:b|biome)\s*=\s*([^;}]+)");
    if let Some(cap) = re.captures(line) {
        for biome in cap[1]
            .split(',')
            .map(str::trim)
            .filter(|biome| !biome.is_empty())
        {
            if let Some(issue) = check_biome(biome, tables) {
                issues.push(issue);
            }
        }
    }

    // an unknown name is never enough to make a condition invalid
    Validation {
        valid: true,
        issues,
    }
}

fn check_biome(biome: &str, tables: &Tables) -> Option<Issue> {
    if tables
        .biomes
        .contains(biome)
    {
        return None;
    }

    let issue = Issue::new(
        "unknown-biome",
        Severity::Info,
        format!("Unknown biome '{}'", biome),
    );

    match did_you_mean(find_similar(
        biome,
        tables
            .biomes
            .names(),
    )) {
        Some(suggestion) => Some(issue.with_suggestion(suggestion)),
        None => Some(issue),
    }
}

/// Enchantments are written `NAME:LEVEL`, `NAME:MIN-MAX`, `NAME:MINtoMAX`,
/// the same with a space instead of the colon, or as a bare name meaning
/// level 1.
pub fn check_enchantment(enchantment: &str) -> Verdict {
    let enchantment = strip_dash(enchantment);

    let bare = regex!(r"^[A-Za-z_]+$");
    if bare.is_match(enchantment) {
        return Verdict::pass();
    }

    let re = regex!(r"^[A-Za-z_]+(?::|\s+)(\d+)(?:(?:-|to)(\d+))?$");
    if let Some(cap) = re.captures(enchantment) {
        let low = cap[1].parse::<u32>();
        let high = cap
            .get(2)
            .map(|high| {
                high.as_str()
                    .parse::<u32>()
            });

        match (low, high) {
            (Ok(_), None) => return Verdict::pass(),
            (Ok(low), Some(Ok(high))) if low <= high => return Verdict::pass(),
            _ => {}
        }
    }

    Verdict::fail(
        format!("Invalid enchantment format: '{}'", enchantment),
        Some("Use NAME:LEVEL, NAME:MIN-MAX or NAME LEVEL, for example SHARPNESS:5".to_string()),
    )
}

pub fn check_entity_type(entity_type: &str, tables: &Tables) -> Verdict {
    if tables
        .entity_types
        .contains(entity_type)
    {
        return Verdict::pass();
    }

    let suggestion = match find_similar(
        entity_type,
        tables
            .entity_types
            .names(),
    ) {
        Some(name) => format!("Did you mean '{}'?", name),
        None => "Check the entity type name".to_string(),
    };

    Verdict::fail(
        format!("Unknown entity type '{}'", entity_type),
        Some(suggestion),
    )
}

/// Every `&x` sequence must name a known code; `&#` starts a hex colour.
pub fn check_color_codes(text: &str, tables: &Tables) -> Verdict {
    let mut invalid: Vec<String> = Vec::new();
    let mut chars = text
        .chars()
        .peekable();

    while let Some(c) = chars.next() {
        if c != '&' {
            continue;
        }
        let code = match chars.peek() {
            Some(code) if !code.is_whitespace() => *code,
            _ => continue,
        };
        chars.next();

        if code == '#' || tables.is_color_code(code) {
            continue;
        }

        let name = format!("&{}", code);
        if !invalid.contains(&name) {
            invalid.push(name);
        }
    }

    if invalid.is_empty() {
        Verdict::pass()
    } else {
        Verdict::fail(
            format!("Invalid color codes: {}", invalid.join(", ")),
            Some("Valid codes are &0-&9, &a-&f, &k-&o, &r and &# for hex colours".to_string()),
        )
    }
}

/// An amount is a number or a `MIN-MAX` / `MINtoMAX` range with MIN no
/// greater than MAX.
pub fn is_amount(amount: &str) -> bool {
    let re = regex!(r"^(\d+(?:\.\d+)?)(?:(?:-|to)(\d+(?:\.\d+)?))?$");

    match re.captures(amount) {
        Some(cap) => {
            let low = cap[1].parse::<f64>();
            match cap.get(2) {
                None => low.is_ok(),
                Some(high) => match (
                    low,
                    high.as_str()
                        .parse::<f64>(),
                ) {
                    (Ok(low), Ok(high)) => low <= high,
                    _ => false,
                },
            }
        }
        None => false,
    }
}

pub fn check_drop_line(drop: &DropLine) -> Validation {
    let mut issues = Vec::new();

    if let Some(issue) = check_braces(&drop.line) {
        issues.push(issue);
    }

    if drop.kind != DropKind::Nothing && !is_amount(&drop.amount) {
        issues.push(Issue::new(
            "invalid-amount",
            Severity::Critical,
            format!("Cannot read amount '{}'", drop.amount),
        ));
    }

    match drop
        .chance
        .parse::<f64>()
    {
        Ok(chance) if chance < 0.0 => issues.push(Issue::new(
            "invalid-chance",
            Severity::Critical,
            format!("Chance '{}' is negative", drop.chance),
        )),
        Ok(chance) if chance > 1.0 => issues.push(
            Issue::new(
                "chance-above-one",
                Severity::Warning,
                format!("Chance '{}' is greater than 1", drop.chance),
            )
            .with_suggestion("Chances are written as a fraction, 0.5 for half the time"),
        ),
        Ok(_) => {}
        Err(_) => issues.push(Issue::new(
            "invalid-chance",
            Severity::Critical,
            format!("Cannot read chance '{}'", drop.chance),
        )),
    }

    Validation::from_issues(issues)
}
