//! Checks on whole records, gathering the line checks of every free text
//! line they hold.

use super::lines::{
    check_color_codes, check_condition_line, check_drop_line, check_enchantment,
    check_entity_type, check_skill_line, Validation, Verdict,
};
use super::tables::Tables;
use crate::language::{DropLine, DropTable, Issue, Item, Mob, Record, Severity, Skill};

pub fn validate_entry(record: &Record, tables: &Tables) -> Validation {
    let issues = match record {
        Record::Mob(mob) => mob_issues(mob, tables),
        Record::Item(item) => item_issues(item, tables),
        Record::Skill(skill) => skill_issues(skill, tables),
        Record::DropTable(table) => table_issues(table, tables),
    };

    Validation::from_issues(issues)
}

/// Turn a failed single-fact check into an issue.
fn verdict_issue(verdict: Verdict, tag: &'static str, severity: Severity) -> Option<Issue> {
    if verdict.valid {
        return None;
    }

    let issue = Issue::new(tag, severity, verdict.message.unwrap_or_default());
    Some(match verdict.suggestion {
        Some(suggestion) => issue.with_suggestion(suggestion),
        None => issue,
    })
}

fn color_issues<'a>(
    texts: impl Iterator<Item = &'a String>,
    tables: &Tables,
    issues: &mut Vec<Issue>,
) {
    for text in texts {
        if let Some(issue) = verdict_issue(
            check_color_codes(text, tables),
            "invalid-color-code",
            Severity::Warning,
        ) {
            issues.push(issue);
        }
    }
}

fn skill_line_issues(lines: &[String], tables: &Tables, issues: &mut Vec<Issue>) {
    for line in lines {
        issues.extend(check_skill_line(line, tables).issues);
    }
}

fn condition_line_issues(lines: &[String], tables: &Tables, issues: &mut Vec<Issue>) {
    for line in lines {
        issues.extend(check_condition_line(line, tables).issues);
    }
}

fn drop_line_issues(drops: &[DropLine], issues: &mut Vec<Issue>) {
    for drop in drops {
        issues.extend(check_drop_line(drop).issues);
    }
}

fn mob_issues(mob: &Mob, tables: &Tables) -> Vec<Issue> {
    let mut issues = Vec::new();

    match &mob.entity_type {
        Some(entity_type) => {
            if let Some(issue) = verdict_issue(
                check_entity_type(entity_type, tables),
                "unknown-entity-type",
                Severity::Warning,
            ) {
                issues.push(issue);
            }
        }
        None => issues.push(Issue::new(
            "missing-type",
            Severity::Info,
            format!("Mob '{}' has no Type and will be a ZOMBIE", mob.name),
        )),
    }

    if let Some(health) = mob.health {
        if health <= 0.0 {
            issues.push(Issue::new(
                "invalid-health",
                Severity::Warning,
                format!("Health of {} is not positive", health),
            ));
        }
    }

    color_issues(
        mob.display
            .iter()
            .chain(
                mob.kill_messages
                    .iter(),
            ),
        tables,
        &mut issues,
    );
    skill_line_issues(&mob.skills, tables, &mut issues);
    drop_line_issues(&mob.drops, &mut issues);

    issues
}

fn item_issues(item: &Item, tables: &Tables) -> Vec<Issue> {
    let mut issues = Vec::new();

    if item
        .material
        .is_none()
    {
        issues.push(Issue::new(
            "missing-material",
            Severity::Warning,
            format!("Item '{}' has no Id or Material", item.name),
        ));
    }

    color_issues(
        item.display
            .iter()
            .chain(
                item.lore
                    .iter(),
            ),
        tables,
        &mut issues,
    );

    for enchantment in &item.enchantments {
        if let Some(issue) = verdict_issue(
            check_enchantment(enchantment),
            "invalid-enchantment",
            Severity::Warning,
        ) {
            issues.push(issue);
        }
    }

    skill_line_issues(&item.skills, tables, &mut issues);

    issues
}

fn skill_issues(skill: &Skill, tables: &Tables) -> Vec<Issue> {
    let mut issues = Vec::new();

    if skill
        .skills
        .is_empty()
    {
        issues.push(Issue::new(
            "empty-skill",
            Severity::Info,
            format!("Skill '{}' has no skill lines", skill.name),
        ));
    }

    if let Some(cooldown) = skill.cooldown {
        if cooldown < 0.0 {
            issues.push(Issue::new(
                "invalid-cooldown",
                Severity::Warning,
                format!("Cooldown of {} is negative", cooldown),
            ));
        }
    }

    skill_line_issues(&skill.skills, tables, &mut issues);
    condition_line_issues(&skill.conditions, tables, &mut issues);
    condition_line_issues(&skill.target_conditions, tables, &mut issues);
    condition_line_issues(&skill.trigger_conditions, tables, &mut issues);

    issues
}

fn table_issues(table: &DropTable, tables: &Tables) -> Vec<Issue> {
    let mut issues = Vec::new();

    if let (Some(min), Some(max)) = (table.min_items, table.max_items) {
        if min > max {
            issues.push(Issue::new(
                "invalid-range",
                Severity::Critical,
                format!("MinItems {} is greater than MaxItems {}", min, max),
            ));
        }
    }

    if table
        .drops
        .is_empty()
    {
        issues.push(Issue::new(
            "empty-droptable",
            Severity::Warning,
            format!("Drop table '{}' has no drops", table.name),
        ));
    }

    drop_line_issues(&table.drops, &mut issues);
    condition_line_issues(&table.conditions, tables, &mut issues);
    condition_line_issues(&table.trigger_conditions, tables, &mut issues);

    issues
}
