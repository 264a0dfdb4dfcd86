#[cfg(test)]
mod lines {
    use mythic::checks::{
        check_color_codes, check_enchantment, check_entity_type, check_skill_line, find_similar,
        validate_line, Tables,
    };
    use mythic::language::Severity;
    use mythic::pack::is_vanilla_item;
    use mythic::references::Role;

    #[test]
    fn brace_balance() {
        let tables = Tables::builtin();

        for line in [
            "skill{s=Fireball} @target",
            "projectile{onTick=A;onHit=B;bulletType=MOB;mob={type=ZOMBIE}} @target",
            "message{m=hello} @self",
            "delay 20",
        ] {
            let result = check_skill_line(line, tables);
            assert!(result.valid, "{}", line);
            assert!(!result
                .issues
                .iter()
                .any(|issue| issue.tag == "unbalanced-braces"));
        }

        let result = check_skill_line("skill{s=Fireball @target", tables);
        assert!(!result.valid);
        assert_eq!(result.issues[0].severity, Severity::Critical);
        assert_eq!(
            result.issues[0].message,
            "Unbalanced braces: 1 opening '{' and 0 closing '}'"
        );

        let result = check_skill_line("skill{s=A}} @target", tables);
        assert!(!result.valid);
        assert_eq!(
            result.issues[0].message,
            "Unbalanced braces: 1 opening '{' and 2 closing '}'"
        );
    }

    #[test]
    fn unknown_names_are_not_fatal() {
        let tables = Tables::builtin();

        let result = validate_line(Role::Skill, "damagee{a=10} @trgt", tables);
        assert!(result.valid);
        assert_eq!(result.issues.len(), 2);
        assert_eq!(result.issues[0].tag, "unknown-mechanic");
        assert_eq!(result.issues[0].severity, Severity::Info);
        assert_eq!(
            result.issues[0].suggestion,
            Some("Did you mean 'damage'?".to_string())
        );
        assert_eq!(result.issues[1].tag, "unknown-targeter");

        let result = validate_line(Role::Condition, "!notacondition true", tables);
        assert!(result.valid);
        assert_eq!(result.issues[0].tag, "unknown-condition");

        let result = validate_line(Role::Condition, "(incombat && health{h=<10})", tables);
        assert!(result.valid);
        assert!(result
            .issues
            .is_empty());

        // namespaced mechanics belong to other plugins
        let result = validate_line(Role::Skill, "mmoitems:ability{a=1} @self", tables);
        assert!(result
            .issues
            .is_empty());
    }

    #[test]
    fn vanilla_items_ignore_case() {
        assert!(is_vanilla_item("bow"));
        assert!(is_vanilla_item("BOW"));
        assert!(is_vanilla_item("Bow"));
    }

    #[test]
    fn suggestions() {
        let tables = Tables::builtin();
        let entities = tables
            .entity_types
            .names();

        assert_eq!(find_similar("ZOMBIEE", entities), Some("ZOMBIE"));
        assert_eq!(find_similar("DRAGONFLY", entities), None);

        // ties go to whichever candidate comes first
        assert_eq!(find_similar("cat", ["bat", "hat", "rat"]), Some("bat"));
        assert_eq!(find_similar("cat", ["rat", "hat", "bat"]), Some("rat"));

        let verdict = check_entity_type("ZOMBIEE", tables);
        assert!(!verdict.valid);
        assert_eq!(verdict.suggestion, Some("Did you mean 'ZOMBIE'?".to_string()));

        let verdict = check_entity_type("DRAGONFLY", tables);
        assert!(!verdict.valid);
        assert_eq!(
            verdict.suggestion,
            Some("Check the entity type name".to_string())
        );

        assert!(check_entity_type("zombie", tables).valid);
    }

    #[test]
    fn enchantments() {
        for enchantment in [
            "SHARPNESS",
            "SHARPNESS:5",
            "SHARPNESS 5",
            "SHARPNESS:1-5",
            "SHARPNESS:1to5",
        ] {
            assert!(check_enchantment(enchantment).valid, "{}", enchantment);
        }

        let verdict = check_enchantment("SHARPNESS:five");
        assert!(!verdict.valid);
        assert!(verdict
            .suggestion
            .unwrap()
            .contains("NAME:LEVEL"));

        assert!(!check_enchantment("SHARPNESS:5-1").valid);
    }

    #[test]
    fn color_codes() {
        let tables = Tables::builtin();

        assert!(check_color_codes("&aGreen &lBold &#ff0000Red", tables).valid);

        let verdict = check_color_codes("&zBad &yWorse &zAgain", tables);
        assert!(!verdict.valid);
        assert_eq!(
            verdict.message,
            Some("Invalid color codes: &z, &y".to_string())
        );
    }
}
