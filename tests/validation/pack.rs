#[cfg(test)]
mod pack {
    use mythic::checks::Tables;
    use mythic::language::{EntityKind, Severity};
    use mythic::pack::{validate_pack, Pack, Provenance};

    fn trim(s: &str) -> &str {
        s.strip_prefix('\n')
            .unwrap_or(s)
    }

    fn haunted() -> Pack {
        let mut pack = Pack::new();
        pack.add(
            "Mobs/haunted.yml",
            EntityKind::Mob,
            trim(
                r#"
TestMob:
  Type: ZOMBIE
  Health: 40
  Skills:
  - skill{s=Fireball} @target ~onAttack 1.0
  - skill{s=Ghost} @self ~onDeath
  Drops:
  - CreeperHead 1 0.05
  - droptable{dt=MyTable}

Wraith:
  Type: PHANTOMM
  Skills:
  - skill{s=Ghost;sync=true @self
            "#,
            ),
        );
        pack.add(
            "Skills/fire.yml",
            EntityKind::Skill,
            trim(
                r#"
Fireball:
  Skills:
  - damage{a=10} @target
            "#,
            ),
        );
        pack
    }

    #[test]
    fn missing_skill_is_reported_with_provenance() {
        let report = validate_pack(&haunted(), Tables::builtin());

        let skills = &report
            .references
            .skills;
        assert_eq!(skills.all, vec!["Fireball".to_string(), "Ghost".to_string()]);
        assert_eq!(skills.resolved, vec!["Fireball".to_string()]);
        assert_eq!(skills.missing.len(), 1);

        let ghost = &skills.missing[0];
        assert_eq!(ghost.name, "Ghost");
        assert!(ghost
            .referenced_by
            .contains(&Provenance {
                entry: "TestMob".to_string(),
                file: "Mobs/haunted.yml".to_string(),
            }));

        let droptables = &report
            .references
            .droptables;
        assert_eq!(droptables.missing[0].name, "MyTable");
        assert!(report
            .references
            .items
            .missing
            .is_empty());
    }

    #[test]
    fn counts_add_up() {
        let report = validate_pack(&haunted(), Tables::builtin());
        let summary = &report.summary;

        assert_eq!(summary.total_files, 2);
        assert_eq!(summary.total_entries, 3);
        assert_eq!(
            summary.valid_entries + summary.entries_with_warnings + summary.entries_with_errors,
            summary.total_entries
        );

        // Wraith has both a Critical (braces) and a Warning (entity type)
        let wraith = report
            .entry("Wraith")
            .unwrap();
        let severities: Vec<Severity> = wraith
            .issues
            .iter()
            .map(|issue| issue.severity)
            .collect();
        assert!(severities.contains(&Severity::Critical));
        assert!(severities.contains(&Severity::Warning));
        assert!(!wraith.valid);

        assert_eq!(summary.entries_with_errors, 1);
        assert_eq!(summary.entries_with_warnings, 0);
        assert_eq!(summary.valid_entries, 2);
        assert_eq!(summary.critical_errors, 1);
        assert_eq!(summary.warnings, 1);
        assert_eq!(summary.missing_references, 2);
    }

    #[test]
    fn validation_is_idempotent() {
        let pack = haunted();
        let tables = Tables::builtin();

        let first = validate_pack(&pack, tables);
        let second = validate_pack(&pack, tables);
        assert_eq!(first, second);

        let first = serde_json::to_string(&first).unwrap();
        let second = serde_json::to_string(&second).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn report_json_shape() {
        let report = validate_pack(&haunted(), Tables::builtin());
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["summary"]["totalEntries"], 3);
        assert_eq!(
            json["references"]["skills"]["missingReferences"][0]["name"],
            "Ghost"
        );
        assert_eq!(
            json["references"]["skills"]["missingReferences"][0]["referencedBy"][0]["entry"],
            "TestMob"
        );
        assert_eq!(json["files"][0]["entries"][1]["issues"][0]["type"], "unknown-entity-type");
    }
}
