#[cfg(test)]
mod drops {
    use mythic::language::{DropKind, Value};
    use mythic::parsing::parse_drop;
    use mythic::references::{scan, Role, UsageKind};

    #[test]
    fn custom_item_is_not_a_droptable() {
        let line = "CreeperHead 1 0.05";

        let drop = parse_drop(line);
        assert_eq!(drop.kind, DropKind::MythicItem);
        assert_eq!(drop.target, "CreeperHead");
        assert_eq!(drop.amount, "1");
        assert_eq!(drop.chance, "0.05");

        let references = scan(line, Role::Drop);
        assert_eq!(references.len(), 1);
        assert_eq!(references[0].kind, UsageKind::Item);
        assert_eq!(references[0].name, "CreeperHead");
    }

    #[test]
    fn droptable_is_not_an_item() {
        let line = "droptable{dt=MyTable}";

        let drop = parse_drop(line);
        assert_eq!(drop.kind, DropKind::DropTable);
        assert_eq!(drop.amount, "1");
        assert_eq!(drop.chance, "1.0");

        let references = scan(line, Role::Drop);
        assert_eq!(references.len(), 1);
        assert_eq!(references[0].kind, UsageKind::DropTable);
        assert_eq!(references[0].name, "MyTable");
    }

    #[test]
    fn reserved_keywords() {
        assert_eq!(parse_drop("exp 10").kind, DropKind::Experience);
        assert_eq!(parse_drop("EXP 10").kind, DropKind::Experience);
        assert_eq!(parse_drop("mcmmo-exp 5").kind, DropKind::McmmoExperience);
        assert_eq!(parse_drop("money 100").kind, DropKind::Money);
        assert_eq!(parse_drop("nothing 1 0.5").kind, DropKind::Nothing);
        assert_eq!(
            parse_drop("minecraft:chests/simple_dungeon 1 0.2").kind,
            DropKind::LootTable
        );
        assert_eq!(parse_drop("DIAMOND 2").kind, DropKind::VanillaItem);

        // reserved words never count as item usages
        assert!(scan("money 100", Role::Drop).is_empty());
        assert!(scan("exp 10", Role::Drop).is_empty());
    }

    #[test]
    fn attribute_buckets() {
        let drop = parse_drop(
            r#"diamond_sword{display="&bShiny; Sharp";enchants=SHARPNESS:5;glow=true;hn="Loot!";ls=true;unknownthing=7} 1 0.5"#,
        );

        assert_eq!(drop.kind, DropKind::VanillaItem);
        assert_eq!(drop.target, "diamond_sword");
        assert_eq!(drop.amount, "1");
        assert_eq!(drop.chance, "0.5");

        assert_eq!(
            drop.inline
                .get("display"),
            Some(&Value::Quoted("&bShiny; Sharp".to_string()))
        );
        assert_eq!(
            drop.inline
                .get("enchants"),
            Some(&Value::Text("SHARPNESS:5".to_string()))
        );
        assert_eq!(
            drop.fancy
                .get("glow"),
            Some(&Value::Boolean(true))
        );
        assert_eq!(
            drop.fancy
                .get("hologramname"),
            Some(&Value::Quoted("Loot!".to_string()))
        );
        assert_eq!(
            drop.fancy
                .get("lootsplosion"),
            Some(&Value::Boolean(true))
        );
        assert_eq!(
            drop.specific
                .get("unknownthing"),
            Some(&Value::Number(7.0))
        );
    }
}
