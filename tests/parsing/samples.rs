#[cfg(test)]
mod samples {
    use std::fs;
    use std::path::{Path, PathBuf};
    use std::str::FromStr;

    use mythic::language::EntityKind;
    use mythic::parsing;

    fn sample_files(dir: &Path, files: &mut Vec<(PathBuf, EntityKind)>) {
        for kind in ["Mobs", "Skills", "Items", "DropTables"] {
            let subdir = dir.join(kind);
            let entries = fs::read_dir(&subdir).expect("Failed to read samples directory");

            for entry in entries {
                let path = entry
                    .expect("Failed to read directory entry")
                    .path();

                if path
                    .extension()
                    .and_then(|s| s.to_str())
                    == Some("yml")
                {
                    files.push((path, EntityKind::from_str(kind).unwrap()));
                }
            }
        }
    }

    #[test]
    fn ensure_samples_parse() {
        let dir = Path::new("tests/samples/");

        assert!(dir.exists(), "samples directory missing");

        let mut files = Vec::new();
        sample_files(dir, &mut files);

        assert!(!files.is_empty(), "No .yml files found in samples directory");

        let mut failures = Vec::new();

        for (file, kind) in &files {
            let content = parsing::load(&file)
                .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));

            match parsing::parse_file(&content, *kind) {
                Ok(records) => {
                    for record in &records {
                        assert_eq!(record.kind(), *kind);
                    }
                }
                Err(e) => {
                    println!("File {:?} failed to parse: {:?}", file, e);
                    failures.push(file.clone());
                }
            }
        }

        if !failures.is_empty() {
            panic!(
                "Sample files should parse successfully, but {} files failed",
                failures.len()
            );
        }
    }
}
