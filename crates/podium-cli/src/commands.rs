use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use comfy_table::Table;
use tracing::{debug, info, info_span, trace};

use podium_import::{
    DirectoryStore, EventCatalog, ImportReport, MemoryStore, PlacementStore, import_groups,
    import_leaderboards,
};
use podium_ingest::{
    ErrorMode, FieldSpec, IngestError, LEADERBOARD_FIELDS, PLACEMENT_FIELDS, ParseOptions,
    SheetKind, parse_leaderboard_with_options, parse_placements_with_options, read_source,
};
use podium_model::{EventGroup, ImportLog, LeaderboardRow, PlacementRow};
use podium_validate::{check_groups, validate_groups};

use crate::cli::{CheckArgs, ImportArgs, SheetArgs};
use crate::logging::redact_value;
use crate::summary::apply_table_style;

/// Placements per event of a sheet that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventSummary {
    pub event_key: String,
    pub placements: usize,
}

/// Outcome of parsing and validating one sheet.
#[derive(Debug)]
pub struct CheckResult {
    pub path: PathBuf,
    pub sheet: SheetKind,
    /// Data rows decoded (0 when decoding failed).
    pub rows: usize,
    /// Events that passed validation, in sheet order.
    pub events: Vec<EventSummary>,
    /// Row and group errors, in the order they were found.
    pub errors: Vec<String>,
}

impl CheckResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Outcome of importing one sheet.
#[derive(Debug)]
pub struct ImportResult {
    pub check: CheckResult,
    pub log: ImportLog,
    pub dry_run: bool,
    pub report_path: Option<PathBuf>,
}

impl ImportResult {
    /// True when validation failed or any event failed to import.
    pub fn has_errors(&self) -> bool {
        !self.check.is_valid() || self.log.has_failures()
    }
}

/// Decoded and validated sheet contents, ready to import.
enum Validated {
    Placements(Vec<EventGroup>),
    Leaderboard(Vec<LeaderboardRow>),
}

struct Prepared {
    text: String,
    check: CheckResult,
    validated: Option<Validated>,
}

pub fn run_check(args: &CheckArgs) -> Result<CheckResult> {
    Ok(prepare(&args.sheet)?.check)
}

pub fn run_import(args: &ImportArgs) -> Result<ImportResult> {
    let prepared = prepare(&args.sheet)?;
    let Some(validated) = prepared.validated else {
        info!("sheet has errors, nothing imported");
        return Ok(ImportResult {
            check: prepared.check,
            log: ImportLog::default(),
            dry_run: args.dry_run,
            report_path: None,
        });
    };

    let catalog = EventCatalog::load(&args.catalog)
        .with_context(|| format!("load event catalog {}", args.catalog.display()))?;
    debug!(events = catalog.len(), "loaded event catalog");

    let span = info_span!("import", sheet = %prepared.check.sheet, dry_run = args.dry_run);
    let _guard = span.enter();
    let log = if args.dry_run {
        let mut memory = MemoryStore::new();
        let log = import_validated(&validated, &catalog, &mut memory);
        for (event_id, placements) in memory.iter() {
            debug!(%event_id, placements = placements.len(), "dry run kept results in memory");
        }
        info!(
            events = memory.len(),
            writes = memory.writes(),
            "dry run finished, nothing written"
        );
        log
    } else {
        let root = args
            .store
            .as_ref()
            .ok_or_else(|| anyhow!("--store is required unless --dry-run is given"))?;
        let mut store = DirectoryStore::new(root);
        debug!(root = %store.root().display(), "writing results");
        import_validated(&validated, &catalog, &mut store)
    };

    let report_path = match &args.report {
        Some(path) => {
            let report = ImportReport::new(prepared.check.sheet.as_str(), &prepared.text, &log);
            write_report(&report, path)?;
            Some(path.clone())
        }
        None => None,
    };

    Ok(ImportResult {
        check: prepared.check,
        log,
        dry_run: args.dry_run,
        report_path,
    })
}

fn import_validated<S>(validated: &Validated, catalog: &EventCatalog, store: &mut S) -> ImportLog
where
    S: PlacementStore + ?Sized,
{
    match validated {
        Validated::Placements(groups) => import_groups(groups, catalog, store),
        Validated::Leaderboard(rows) => import_leaderboards(rows, catalog, catalog, store),
    }
}

/// Accepted header names of both sheet schemas.
pub fn schema_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Sheet", "Field", "Accepted headers"]);
    apply_table_style(&mut table);
    add_schema_rows(&mut table, SheetKind::Placements, &PLACEMENT_FIELDS);
    add_schema_rows(&mut table, SheetKind::Leaderboard, &LEADERBOARD_FIELDS);
    table
}

pub fn run_schema() -> Result<()> {
    println!("{}", schema_table());
    Ok(())
}

fn add_schema_rows(table: &mut Table, sheet: SheetKind, fields: &[FieldSpec<'_>]) {
    for field in fields {
        table.add_row(vec![
            sheet.as_str().to_string(),
            field.name.to_string(),
            field.aliases.join(", "),
        ]);
    }
}

/// Read, decode and validate a sheet.
///
/// Source and header problems are returned as errors. Row and group problems
/// are collected into the check result; `validated` is only set when there
/// are none.
fn prepare(args: &SheetArgs) -> Result<Prepared> {
    let text = read_source(&args.input)
        .with_context(|| format!("read sheet {}", args.input.display()))?;
    let sheet = args
        .schema
        .sheet_kind(&text)
        .ok_or(IngestError::EmptyInput)
        .with_context(|| format!("parse sheet {}", args.input.display()))?;
    let error_mode = if args.all_errors {
        ErrorMode::CollectAll
    } else {
        ErrorMode::FailFast
    };
    let options = ParseOptions::default().with_error_mode(error_mode);
    debug!(path = %args.input.display(), %sheet, ?error_mode, "parsing sheet");

    let mut check = CheckResult {
        path: args.input.clone(),
        sheet,
        rows: 0,
        events: Vec::new(),
        errors: Vec::new(),
    };

    let validated = match sheet {
        SheetKind::Placements => {
            match parse_placements_with_options(&text, options) {
                Ok(rows) => validate_placements(&rows, args.all_errors, &mut check),
                Err(error) => {
                    collect_row_errors(error, &args.input, &mut check)?;
                    None
                }
            }
        }
        SheetKind::Leaderboard => match parse_leaderboard_with_options(&text, options) {
            Ok(rows) => {
                check.rows = rows.len();
                for row in &rows {
                    trace!(
                        line = row.line,
                        event_ref = %row.event_ref,
                        winner = redact_value(&row.leaderboard[0]),
                        "decoded leaderboard row"
                    );
                }
                check.events = rows
                    .iter()
                    .map(|row| EventSummary {
                        event_key: row.event_ref.clone(),
                        placements: row.leaderboard.len(),
                    })
                    .collect();
                Some(Validated::Leaderboard(rows))
            }
            Err(error) => {
                collect_row_errors(error, &args.input, &mut check)?;
                None
            }
        },
    };

    info!(
        rows = check.rows,
        events = check.events.len(),
        errors = check.errors.len(),
        "sheet checked"
    );
    Ok(Prepared {
        text,
        check,
        validated,
    })
}

fn validate_placements(
    rows: &[PlacementRow],
    all_errors: bool,
    check: &mut CheckResult,
) -> Option<Validated> {
    check.rows = rows.len();
    for row in rows {
        trace!(
            line = row.line,
            event_key = %row.event_key,
            place = row.place,
            entry_name = redact_value(&row.entry_name),
            "decoded placement row"
        );
    }

    let groups = if all_errors {
        let report = check_groups(rows);
        check.errors.extend(
            report
                .issues
                .iter()
                .map(|issue| issue.to_error().to_string()),
        );
        report.groups
    } else {
        match validate_groups(rows) {
            Ok(groups) => groups,
            Err(error) => {
                check.errors.push(error.to_string());
                Vec::new()
            }
        }
    };

    check.events = groups
        .iter()
        .map(|group| EventSummary {
            event_key: group.event_key.clone(),
            placements: group.len(),
        })
        .collect();

    check
        .errors
        .is_empty()
        .then_some(Validated::Placements(groups))
}

/// Keep row errors as check errors; anything else aborts.
fn collect_row_errors(error: IngestError, path: &Path, check: &mut CheckResult) -> Result<()> {
    if error.row_errors().is_empty() {
        return Err(error).with_context(|| format!("parse sheet {}", path.display()));
    }
    check
        .errors
        .extend(error.row_errors().iter().map(ToString::to_string));
    Ok(())
}

fn write_report(report: &ImportReport, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("serialize import report")?;
    fs::write(path, json).with_context(|| format!("write import report {}", path.display()))?;
    debug!(path = %path.display(), "wrote import report");
    Ok(())
}
