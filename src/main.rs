use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use mythic::checks::Tables;
use mythic::language::{EntityKind, LoadingError};
use mythic::pack::{validate_pack, Pack};
use mythic::parsing;

mod problem;

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    let matches = Command::new("mythic")
        .version(VERSION)
        .propagate_version(true)
        .author("Andrew Cowie")
        .about("Parse and cross-check MythicMobs configuration packs.")
        .disable_help_subcommand(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log what is being done to standard error, and show informational issues."),
        )
        .subcommand(
            Command::new("check")
                .about("Validate a pack and report problems and missing references")
                .arg(
                    Arg::new("tables")
                        .long("tables")
                        .value_name("FILE")
                        .help("A JSON file of entity types, mechanics, targeters, conditions and so on to use instead of the built in ones."),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Emit the full report as JSON."),
                )
                .arg(
                    Arg::new("kind")
                        .long("kind")
                        .value_name("KIND")
                        .help("Treat every file as this kind (mob, item, skill, droptable) rather than going by the directory it is in."),
                )
                .arg(
                    Arg::new("paths")
                        .required(true)
                        .action(ArgAction::Append)
                        .help("Files or directories making up the pack."),
                ),
        )
        .subcommand(
            Command::new("parse")
                .about("Parse a single file and print the records it defines as JSON")
                .arg(
                    Arg::new("kind")
                        .long("kind")
                        .value_name("KIND")
                        .help("The kind of records in the file, if it cannot be told from the directory it is in."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file to parse."),
                ),
        )
        .get_matches();

    let level = if matches.get_flag("verbose") {
        Level::DEBUG
    } else {
        Level::WARN
    };
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    match matches.subcommand() {
        Some(("check", submatches)) => check(submatches, matches.get_flag("verbose")),
        Some(("parse", submatches)) => parse(submatches),
        Some(_) => {
            println!("No valid subcommand was used")
        }
        None => {
            println!("usage: mythic [COMMAND] ...");
            println!("Try '--help' for more information.");
        }
    }
}

fn check(submatches: &ArgMatches, verbose: bool) {
    let tables = match submatches.get_one::<String>("tables") {
        Some(filename) => match Tables::load(Path::new(filename)) {
            Ok(tables) => tables,
            Err(error) => {
                eprintln!("{}", problem::concise_loading_error(&error));
                std::process::exit(2);
            }
        },
        None => Tables::builtin().clone(),
    };

    let forced = forced_kind(submatches);

    let mut filenames = Vec::new();
    for path in submatches
        .get_many::<String>("paths")
        .into_iter()
        .flatten()
    {
        if let Err(error) = collect(Path::new(path), &mut filenames) {
            eprintln!("{}", problem::concise_loading_error(&error));
            std::process::exit(2);
        }
    }

    let mut pack = Pack::new();
    for filename in &filenames {
        let kind = forced.unwrap_or_else(|| infer_kind(filename));

        let content = match parsing::load(filename) {
            Ok(content) => content,
            Err(error) => {
                eprintln!("{}", problem::concise_loading_error(&error));
                std::process::exit(2);
            }
        };

        debug!("Loaded {} as {}", filename.display(), kind);
        pack.add(&filename.to_string_lossy(), kind, &content);
    }

    info!("Checking {} files", pack.files.len());
    let report = validate_pack(&pack, &tables);

    if submatches.get_flag("json") {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(error) => {
                eprintln!("error: {}", error);
                std::process::exit(2);
            }
        }
    } else {
        for line in problem::report_lines(&report, verbose) {
            println!("{}", line);
        }
        match problem::render_summary(&report.summary) {
            Ok(text) => println!("{}", text),
            Err(error) => {
                debug!(?error);
                std::process::exit(2);
            }
        }
    }

    if !report
        .summary
        .is_clean()
    {
        std::process::exit(1);
    }
}

fn parse(submatches: &ArgMatches) {
    let filename = match submatches.get_one::<String>("filename") {
        Some(filename) => PathBuf::from(filename),
        None => std::process::exit(2),
    };

    let kind = forced_kind(submatches).unwrap_or_else(|| infer_kind(&filename));

    let content = match parsing::load(&filename) {
        Ok(content) => content,
        Err(error) => {
            eprintln!("{}", problem::concise_loading_error(&error));
            std::process::exit(2);
        }
    };

    match parsing::parse_file(&content, kind) {
        Ok(records) => match serde_json::to_string_pretty(&records) {
            Ok(json) => println!("{}", json),
            Err(error) => {
                debug!(?error);
                std::process::exit(2);
            }
        },
        Err(error) => {
            eprintln!("{}", problem::concise_parsing_error(&error, &filename));
            std::process::exit(1);
        }
    }
}

fn forced_kind(submatches: &ArgMatches) -> Option<EntityKind> {
    let value = submatches.get_one::<String>("kind")?;
    match EntityKind::from_str(value) {
        Ok(kind) => Some(kind),
        Err(error) => {
            eprintln!("{}", error);
            std::process::exit(2);
        }
    }
}

/// Pack files live in directories named for what they hold, such as
/// Mobs/ or Skills/bosses/. The nearest such directory decides; a file
/// outside any of them is taken to hold mobs.
fn infer_kind(filename: &Path) -> EntityKind {
    let found = filename
        .ancestors()
        .skip(1)
        .filter_map(|dir| dir.file_name())
        .find_map(|name| EntityKind::from_str(&name.to_string_lossy()).ok());

    match found {
        Some(kind) => kind,
        None => {
            warn!("Unable to tell what kind of file {} is; reading it as mobs", filename.display());
            EntityKind::Mob
        }
    }
}

fn is_pack_file(path: &Path) -> bool {
    matches!(
        path.extension()
            .and_then(|ext| ext.to_str()),
        Some("yml") | Some("yaml")
    )
}

/// Gather the pack files under a path, in a stable order.
fn collect(path: &Path, filenames: &mut Vec<PathBuf>) -> Result<(), LoadingError> {
    if !path.is_dir() {
        filenames.push(path.to_path_buf());
        return Ok(());
    }

    let listing = std::fs::read_dir(path).map_err(|error| LoadingError {
        problem: "Failed reading directory".to_string(),
        details: error
            .kind()
            .to_string(),
        filename: path.to_path_buf(),
    })?;

    let mut children: Vec<PathBuf> = listing
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .collect();
    children.sort();

    for child in children {
        if child.is_dir() {
            collect(&child, filenames)?;
        } else if is_pack_file(&child) {
            filenames.push(child);
        }
    }

    Ok(())
}
