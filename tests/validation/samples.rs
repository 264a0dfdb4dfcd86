#[cfg(test)]
mod samples {
    use std::fs;
    use std::path::Path;
    use std::str::FromStr;

    use mythic::checks::Tables;
    use mythic::language::EntityKind;
    use mythic::pack::{validate_pack, Pack};
    use mythic::parsing;

    fn load_samples() -> Pack {
        let dir = Path::new("tests/samples/");
        let mut pack = Pack::new();

        for kind in ["Mobs", "Skills", "Items", "DropTables"] {
            let mut paths: Vec<_> = fs::read_dir(dir.join(kind))
                .expect("Failed to read samples directory")
                .map(|entry| {
                    entry
                        .expect("Failed to read directory entry")
                        .path()
                })
                .collect();
            paths.sort();

            for path in paths {
                let content = parsing::load(&path)
                    .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", path, e));
                let name = format!(
                    "{}/{}",
                    kind,
                    path.file_name()
                        .unwrap()
                        .to_string_lossy()
                );
                pack.add(&name, EntityKind::from_str(kind).unwrap(), &content);
            }
        }

        pack
    }

    #[test]
    fn sample_pack() {
        let report = validate_pack(&load_samples(), Tables::builtin());

        assert_eq!(report.summary.total_entries, 6);
        assert_eq!(report.summary.entries_with_errors, 0);
        assert_eq!(report.summary.critical_errors, 0);

        let missing: Vec<&str> = report
            .references
            .skills
            .missing
            .iter()
            .map(|missing| missing.name.as_str())
            .collect();
        assert_eq!(missing, vec!["Ghost"]);
        assert_eq!(
            report
                .references
                .skills
                .missing[0]
                .referenced_by[0]
                .file,
            "Mobs/crypt.yml"
        );

        assert_eq!(report.summary.missing_references, 1);
        assert_eq!(
            report
                .references
                .mobs
                .resolved,
            vec!["CryptMinion".to_string()]
        );
        assert_eq!(
            report
                .references
                .droptables
                .resolved,
            vec!["CryptLoot".to_string()]
        );
        assert!(report
            .references
            .items
            .resolved
            .contains(&"CryptBlade".to_string()));
    }
}
