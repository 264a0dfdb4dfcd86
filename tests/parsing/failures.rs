#[cfg(test)]
mod failures {
    use std::path::Path;

    use mythic::language::{EntityKind, ParsingError};
    use mythic::parsing::{self, parse, parse_file};

    #[test]
    fn nothing_to_parse() {
        assert_eq!(parse("", EntityKind::Mob), Err(ParsingError::Empty));
        assert_eq!(
            parse("# just a comment\n\n   \n", EntityKind::Skill),
            Err(ParsingError::Empty)
        );
    }

    #[test]
    fn no_root_entity() {
        assert_eq!(
            parse_file("- a list with no key\n- another\n", EntityKind::Mob),
            Err(ParsingError::NoRootEntity)
        );
        assert_eq!(
            parse_file("just some words\n", EntityKind::Item),
            Err(ParsingError::NoRootEntity)
        );
    }

    #[test]
    fn missing_file() {
        let error = parsing::load(Path::new("tests/samples/NoSuchFile.yml")).unwrap_err();
        assert_eq!(error.problem, "File not found");
    }

    #[test]
    fn malformed_lines_are_tolerated() {
        // stray text and a list item with nowhere to go are skipped
        let records = parse_file(
            "Orc:\n  this line has no colon\n  Type: ZOMBIE\n  Health: lots\n",
            EntityKind::Mob,
        )
        .unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name(), "Orc");
    }
}
