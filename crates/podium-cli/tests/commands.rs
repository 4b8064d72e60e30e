//! Integration tests for the check, import and schema commands.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use tempfile::{TempDir, tempdir};

use podium_cli::cli::{CheckArgs, Cli, Command, ImportArgs, SchemaArg, SheetArgs};
use podium_cli::commands::{run_check, run_import, schema_table};
use podium_import::{DirectoryStore, ImportReport};
use podium_ingest::SheetKind;
use podium_model::EventId;

const CATALOG: &str = r#"[
    {"sport": "Alpine Skiing", "name": "Downhill", "event_key": "ski_100", "is_team_event": false, "sort_order": 1},
    {"sport": "Luge", "name": "Singles", "event_key": "luge_1", "is_team_event": false, "sort_order": 2,
     "entries": [
        {"entry_key": "ath:1", "entry_name": "Ann"}, {"entry_key": "ath:2", "entry_name": "Ben"},
        {"entry_key": "ath:3", "entry_name": "Cal"}, {"entry_key": "ath:4", "entry_name": "Dee"},
        {"entry_key": "ath:5", "entry_name": "Eve"}, {"entry_key": "ath:6", "entry_name": "Fay"},
        {"entry_key": "ath:7", "entry_name": "Gus"}, {"entry_key": "ath:8", "entry_name": "Hal"},
        {"entry_key": "ath:9", "entry_name": "Ivy"}, {"entry_key": "ath:10", "entry_name": "Jon"}
     ]}
]"#;

fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn sheet_args(input: PathBuf) -> SheetArgs {
    SheetArgs {
        input,
        schema: SchemaArg::Auto,
        all_errors: false,
    }
}

fn import_args(dir: &TempDir, sheet: &str) -> ImportArgs {
    ImportArgs {
        sheet: sheet_args(write(dir.path(), "sheet.csv", sheet)),
        catalog: write(dir.path(), "events.json", CATALOG),
        store: Some(dir.path().join("results")),
        report: Some(dir.path().join("report.json")),
        dry_run: false,
    }
}

#[test]
fn test_check_valid_placement_sheet() {
    let dir = tempdir().unwrap();
    let input = write(
        dir.path(),
        "sheet.csv",
        "event_key,place,entry_key,entry_name\nski_100,1,ath:1,Alice\nski_100,2,ath:2,Bob\n",
    );

    let result = run_check(&CheckArgs {
        sheet: sheet_args(input),
    })
    .unwrap();

    assert!(result.is_valid());
    assert_eq!(result.sheet, SheetKind::Placements);
    assert_eq!(result.rows, 2);
    assert_eq!(result.events[0].event_key, "ski_100");
    assert_eq!(result.events[0].placements, 2);
}

#[test]
fn test_check_collects_all_row_errors() {
    let dir = tempdir().unwrap();
    let input = write(
        dir.path(),
        "sheet.csv",
        "event_key,place,entry_key,entry_name\nski_100,0,a,A\nski_100,2,b,B\nski_100,x,c,C\n",
    );
    let mut sheet = sheet_args(input);
    sheet.all_errors = true;

    let result = run_check(&CheckArgs { sheet }).unwrap();

    assert_eq!(
        result.errors,
        vec![
            "line 2: place must be an integer between 1 and 10, got '0'",
            "line 4: place must be an integer between 1 and 10, got 'x'",
        ]
    );
}

#[test]
fn test_check_missing_column_is_an_error() {
    let dir = tempdir().unwrap();
    let input = write(dir.path(), "sheet.csv", "event_key,entry_key\nski_100,a\n");
    let mut sheet = sheet_args(input);
    sheet.schema = SchemaArg::Placements;

    let error = run_check(&CheckArgs { sheet }).unwrap_err();

    assert!(format!("{error:#}").contains("missing required column 'place'"));
}

#[test]
fn test_auto_schema_names_missing_placement_column() {
    let dir = tempdir().unwrap();
    let input = write(
        dir.path(),
        "sheet.csv",
        "event_key,place,entry_key,name\nski_100,1,ath:1,Alice\n",
    );

    let error = run_check(&CheckArgs {
        sheet: sheet_args(input),
    })
    .unwrap_err();

    let message = format!("{error:#}");
    assert!(message.contains("missing required column 'entry_name'"), "{message}");
    assert!(!message.contains("place_1"));
}

#[test]
fn test_import_writes_store_and_report() {
    let dir = tempdir().unwrap();
    let sheet = "event_key,place,entry_key,entry_name\n\
                 ski_100,2,ath:2,Bob\n\
                 ski_100,1,ath:1,Alice\n\
                 biathlon_9,1,ath:3,Cal\n";
    let args = import_args(&dir, sheet);

    let result = run_import(&args).unwrap();

    let rendered: Vec<String> = result
        .log
        .iter()
        .map(|o| format!("{} ok={} {}", o.event_key, o.ok, o.message))
        .collect();
    insta::assert_snapshot!(rendered.join("\n"), @r"
    biathlon_9 ok=false reference not found
    ski_100 ok=true Imported 2 placements
    ");
    assert!(result.has_errors());

    let store = DirectoryStore::new(dir.path().join("results"));
    let stored = store.load(&EventId::new("ski_100").unwrap()).unwrap().unwrap();
    assert_eq!(stored.placements[0].entry_name, "Alice");

    let report: ImportReport =
        serde_json::from_str(&fs::read_to_string(dir.path().join("report.json")).unwrap()).unwrap();
    assert_eq!(report.sheet, "placements");
    assert_eq!((report.imported, report.failed), (1, 1));
}

#[test]
fn test_import_skipped_when_validation_fails() {
    let dir = tempdir().unwrap();
    let sheet = "event_key,place,entry_key,entry_name\nski_100,1,ath:1,Alice\nski_100,1,ath:2,Bob\n";
    let args = import_args(&dir, sheet);

    let result = run_import(&args).unwrap();

    assert!(result.log.is_empty());
    assert!(result.check.errors[0].starts_with("event 'ski_100': duplicate place values"));
    assert!(!dir.path().join("results").exists());
    assert!(result.report_path.is_none());
}

#[test]
fn test_dry_run_leaderboard_import() {
    let dir = tempdir().unwrap();
    let sheet = "event_name,p1,p2,p3,p4,p5,p6,p7,p8,p9,p10\n\
                 Singles,Jon,Ivy,Hal,Gus,Fay,Eve,Dee,Cal,Ben,Ann\n";
    let mut args = import_args(&dir, sheet);
    args.dry_run = true;
    args.store = None;
    args.report = None;

    let result = run_import(&args).unwrap();

    assert_eq!(result.check.sheet, SheetKind::Leaderboard);
    assert!(!result.has_errors());
    assert_eq!(result.log.outcomes[0].message, "Imported 10 placements");
    assert!(!dir.path().join("results").exists());
}

#[test]
fn test_cli_parses_import_flags() {
    let cli = Cli::try_parse_from([
        "podium",
        "import",
        "sheet.csv",
        "--catalog",
        "events.json",
        "--dry-run",
        "--all-errors",
        "--schema",
        "leaderboard",
    ])
    .unwrap();

    let Command::Import(args) = cli.command else {
        panic!("expected import command");
    };
    assert!(args.dry_run);
    assert!(args.sheet.all_errors);
    assert_eq!(args.sheet.schema, SchemaArg::Leaderboard);
    assert!(args.store.is_none());
}

#[test]
fn test_cli_requires_store_without_dry_run() {
    let result = Cli::try_parse_from(["podium", "import", "sheet.csv", "--catalog", "events.json"]);
    assert!(result.is_err());
}

#[test]
fn test_schema_table_lists_aliases() {
    let rendered = schema_table().to_string();
    assert!(rendered.contains("entry_key"));
    assert!(rendered.contains("event_name"));
    assert!(rendered.contains("place_10"));
}
