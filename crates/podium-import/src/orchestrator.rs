//! Sequential, partial-failure batch import.

use tracing::{debug, info, info_span, warn};

use podium_model::{
    EventGroup, EventId, ImportLog, ImportOutcome, LeaderboardRow, Placement,
};

use crate::traits::{EntryDirectory, EventResolver, PlacementStore};

/// Outcome message for a group whose event reference did not resolve.
pub const REFERENCE_NOT_FOUND: &str = "reference not found";

/// Import validated placement groups.
///
/// Groups are processed in ascending lexical `event_key` order regardless of
/// input order. Placements are handed to the store sorted by place. Lookup and
/// store failures are recorded per group and never stop the batch.
pub fn import_groups<R, S>(groups: &[EventGroup], resolver: &R, store: &mut S) -> ImportLog
where
    R: EventResolver + ?Sized,
    S: PlacementStore + ?Sized,
{
    let mut ordered: Vec<&EventGroup> = groups.iter().collect();
    ordered.sort_by(|a, b| a.event_key.cmp(&b.event_key));

    let mut log = ImportLog::default();
    for group in ordered {
        let span = info_span!("import_group", event_key = %group.event_key);
        let _guard = span.enter();

        let Some(event_id) = resolver.lookup(&group.event_key) else {
            warn!("event reference not found");
            log.push(ImportOutcome::failed(&group.event_key, REFERENCE_NOT_FOUND));
            continue;
        };

        let mut placements = group.placements.clone();
        placements.sort_by_key(|p| p.place);
        log.push(persist(store, &group.event_key, &event_id, &placements));
    }

    info!(
        imported = log.imported_count(),
        failed = log.failed_count(),
        "placement import complete"
    );
    log
}

/// Import global leaderboard rows.
///
/// Rows are processed in ascending `event_ref` order. Each name is matched to
/// an entry of the resolved event; position `i` becomes place `i + 1`. A row
/// whose event or any name cannot be resolved is recorded as failed.
pub fn import_leaderboards<R, D, S>(
    rows: &[LeaderboardRow],
    resolver: &R,
    entries: &D,
    store: &mut S,
) -> ImportLog
where
    R: EventResolver + ?Sized,
    D: EntryDirectory + ?Sized,
    S: PlacementStore + ?Sized,
{
    let mut ordered: Vec<&LeaderboardRow> = rows.iter().collect();
    ordered.sort_by(|a, b| a.event_ref.cmp(&b.event_ref));

    let mut log = ImportLog::default();
    for row in ordered {
        let span = info_span!("import_leaderboard", event_ref = %row.event_ref, line = row.line);
        let _guard = span.enter();

        let Some(event_id) = resolver.lookup(&row.event_ref) else {
            warn!("event reference not found");
            log.push(ImportOutcome::failed(&row.event_ref, REFERENCE_NOT_FOUND));
            continue;
        };

        match leaderboard_placements(row, &event_id, entries) {
            Ok(placements) => log.push(persist(store, &row.event_ref, &event_id, &placements)),
            Err(message) => {
                warn!(%message, "leaderboard entry not resolved");
                log.push(ImportOutcome::failed(&row.event_ref, message));
            }
        }
    }

    info!(
        imported = log.imported_count(),
        failed = log.failed_count(),
        "leaderboard import complete"
    );
    log
}

fn leaderboard_placements<D>(
    row: &LeaderboardRow,
    event_id: &EventId,
    entries: &D,
) -> Result<Vec<Placement>, String>
where
    D: EntryDirectory + ?Sized,
{
    let mut placements = Vec::with_capacity(row.leaderboard.len());
    for (place, name) in row.ranked() {
        let entry = entries
            .find_entry(event_id, name)
            .map_err(|error| error.to_string())?;
        placements.push(Placement::new(place, entry).map_err(|error| error.to_string())?);
    }
    Ok(placements)
}

fn persist<S>(
    store: &mut S,
    event_key: &str,
    event_id: &EventId,
    placements: &[Placement],
) -> ImportOutcome
where
    S: PlacementStore + ?Sized,
{
    match store.persist(event_id, placements) {
        Ok(()) => {
            debug!(%event_id, placements = placements.len(), "placements stored");
            ImportOutcome::imported(event_key, placements.len())
        }
        Err(error) => {
            warn!(%event_id, %error, "failed to store placements");
            ImportOutcome::failed(event_key, error.to_string())
        }
    }
}
