#[cfg(test)]
mod records {
    use mythic::language::{EntityKind, Record, Value};
    use mythic::parsing::{parse, parse_file};
    use mythic::references::{extract, Pattern, UsageKind};

    fn trim(s: &str) -> &str {
        s.strip_prefix('\n')
            .unwrap_or(s)
    }

    #[test]
    fn simple_mob() {
        let record = parse(
            trim(
                r#"
TestMob:
  Type: ZOMBIE
  Health: 40
  Skills:
  - skill{s=Fireball} @target ~onAttack 1.0
                "#,
            ),
            EntityKind::Mob,
        )
        .unwrap();

        assert_eq!(record.name(), "TestMob");

        let mob = match &record {
            Record::Mob(mob) => mob,
            _ => panic!("Expected a mob"),
        };
        assert_eq!(mob.entity_type, Some("ZOMBIE".to_string()));
        assert_eq!(mob.health, Some(40.0));
        assert_eq!(mob.skills.len(), 1);

        let usages = extract(&record);
        assert_eq!(usages.len(), 1);
        assert_eq!(usages[0].kind, UsageKind::Skill);
        assert_eq!(usages[0].name, "Fireball");
        assert_eq!(usages[0].pattern, Pattern::Skill);
        assert_eq!(usages[0].entry, "TestMob");
    }

    #[test]
    fn mob_sections() {
        let record = parse(
            trim(
                r#"
Knight:
  Type: SKELETON
  Display: '&7Knight'
  Faction: castle
  BossBar:
    Enabled: true
    Title: 'The Knight'
    Range: 40
  Equipment:
  - IRON_SWORD HAND
  - KnightHelm:HEAD
  DamageModifiers:
  - FALL 0
  - FIRE
  AIGoalSelectors:
  - 0 clear
  - 1 meleeattack
  - x randomstroll
  Options:
    MovementSpeed: 0.25
    Silent: true
  Frobnicate: yes
                "#,
            ),
            EntityKind::Mob,
        )
        .unwrap();

        let mob = match record {
            Record::Mob(mob) => mob,
            _ => panic!("Expected a mob"),
        };

        assert_eq!(mob.display, Some("&7Knight".to_string()));
        assert_eq!(mob.faction, Some("castle".to_string()));

        let bar = mob
            .boss_bar
            .unwrap();
        assert!(bar.enabled);
        assert_eq!(bar.title, Some("The Knight".to_string()));
        assert_eq!(bar.range, Some(40.0));

        assert_eq!(mob.equipment[0].item, "IRON_SWORD");
        assert_eq!(mob.equipment[0].slot, Some("HAND".to_string()));
        assert_eq!(mob.equipment[1].item, "KnightHelm");
        assert_eq!(mob.equipment[1].slot, Some("HEAD".to_string()));

        assert_eq!(mob.damage_modifiers[0].multiplier, 0.0);
        assert_eq!(mob.damage_modifiers[1].multiplier, 1.0);

        let priorities: Vec<i32> = mob
            .ai_goal_selectors
            .iter()
            .map(|selector| selector.priority)
            .collect();
        assert_eq!(priorities, vec![0, 1, 0]);
        assert_eq!(mob.ai_goal_selectors[1].name, "meleeattack");

        assert_eq!(
            mob.options
                .get("movementspeed"),
            Some(&Value::Number(0.25))
        );
        assert_eq!(
            mob.options
                .get("Silent"),
            Some(&Value::Boolean(true))
        );
    }

    #[test]
    fn several_entries_in_one_file() {
        let records = parse_file(
            trim(
                r#"
# Skills for the first boss
Fireball:
  Cooldown: 5
  Skills:
  - projectile{onTick=Fireball-Tick;onHit=Fireball-Hit} @target

Fireball-Tick:
  Skills:
  - effect:particles{p=flame} @origin

Fireball-Hit:
  Conditions:
  - incombat true
  Skills:
  - damage{a=10} @trackedlocation
                "#,
            ),
            EntityKind::Skill,
        )
        .unwrap();

        let names: Vec<&str> = records
            .iter()
            .map(|record| record.name())
            .collect();
        assert_eq!(names, vec!["Fireball", "Fireball-Tick", "Fireball-Hit"]);

        match &records[0] {
            Record::Skill(skill) => {
                assert_eq!(skill.cooldown, Some(5.0));
            }
            _ => panic!("Expected a skill"),
        }

        let callbacks: Vec<String> = extract(&records[0])
            .into_iter()
            .map(|usage| usage.name)
            .collect();
        assert_eq!(callbacks, vec!["Fireball-Tick", "Fireball-Hit"]);

        match &records[2] {
            Record::Skill(skill) => {
                assert_eq!(skill.conditions, vec!["incombat true".to_string()]);
            }
            _ => panic!("Expected a skill"),
        }
    }

    #[test]
    fn item_and_droptable() {
        let item = parse(
            trim(
                r#"
RubySword:
  Material: DIAMOND_SWORD
  Amount: 1
  Lore:
  - '&cA blade of ruby'
  - ''
  Enchantments:
  - SHARPNESS:3
                "#,
            ),
            EntityKind::Item,
        )
        .unwrap();

        match item {
            Record::Item(item) => {
                assert_eq!(item.material, Some("DIAMOND_SWORD".to_string()));
                assert_eq!(item.lore, vec!["&cA blade of ruby".to_string()]);
                assert_eq!(item.enchantments, vec!["SHARPNESS:3".to_string()]);
            }
            _ => panic!("Expected an item"),
        }

        let table = parse(
            trim(
                r#"
Treasure:
  TotalItems: 3
  MinItems: 1
  MaxItems: 3
  Drops:
  - RubySword 1 0.1
  - exp 10-20
                "#,
            ),
            EntityKind::DropTable,
        )
        .unwrap();

        match table {
            Record::DropTable(table) => {
                assert_eq!(table.total_items, Some(3.0));
                assert_eq!(table.min_items, Some(1.0));
                assert_eq!(table.max_items, Some(3.0));
                assert_eq!(table.drops.len(), 2);
                assert_eq!(table.drops[1].amount, "10-20");
                assert_eq!(table.drops[1].chance, "1.0");
            }
            _ => panic!("Expected a drop table"),
        }
    }
}
