//! Grouping placement rows by event and checking each group.

use std::collections::{BTreeMap, HashMap};

use podium_model::{EventGroup, PlacementRow};

use crate::error::{GroupError, Result};
use crate::issue::Issue;
use crate::report::{GroupIssue, ValidationReport};

/// Group rows by `event_key`, keeping first-seen group order and row order.
pub fn group_by_event(rows: &[PlacementRow]) -> Vec<(&str, Vec<&PlacementRow>)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, Vec<&PlacementRow>)> = Vec::new();

    for row in rows {
        let key = row.event_key.as_str();
        let slot = *index.entry(key).or_insert_with(|| {
            groups.push((key, Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(row);
    }

    groups
}

/// Validate every group, stopping at the first invalid one.
///
/// Returned groups keep first-seen order; placements within a group are
/// sorted by place.
pub fn validate_groups(rows: &[PlacementRow]) -> Result<Vec<EventGroup>> {
    let mut groups = Vec::new();

    for (event_key, members) in group_by_event(rows) {
        if let Some(issue) = check_group(&members).into_iter().next() {
            tracing::debug!(
                event_key,
                code = issue.code(),
                line = ?issue.first_line(),
                "group rejected"
            );
            return Err(GroupError {
                event_key: event_key.to_string(),
                reason: issue.message(),
            });
        }
        groups.push(build_group(event_key, &members));
    }

    tracing::debug!(groups = groups.len(), rows = rows.len(), "validated groups");
    Ok(groups)
}

/// Check every group and collect all issues.
pub fn check_groups(rows: &[PlacementRow]) -> ValidationReport {
    let mut report = ValidationReport::default();

    for (event_key, members) in group_by_event(rows) {
        let issues = check_group(&members);
        if issues.is_empty() {
            report.groups.push(build_group(event_key, &members));
            continue;
        }
        report
            .issues
            .extend(issues.into_iter().map(|issue| GroupIssue {
                event_key: event_key.to_string(),
                issue,
            }));
    }

    tracing::debug!(
        valid = report.groups.len(),
        issues = report.issue_count(),
        "checked groups"
    );
    report
}

/// Checks in order: duplicate places, gaps, duplicate entries.
fn check_group(members: &[&PlacementRow]) -> Vec<Issue> {
    let mut issues = Vec::new();

    let mut lines_by_place: BTreeMap<u32, Vec<usize>> = BTreeMap::new();
    let mut lines_by_entry: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
    for row in members {
        lines_by_place.entry(row.place).or_default().push(row.line);
        lines_by_entry
            .entry(row.entry_key.as_str())
            .or_default()
            .push(row.line);
    }

    for (place, lines) in &lines_by_place {
        if lines.len() > 1 {
            issues.push(Issue::DuplicatePlace {
                place: *place,
                lines: lines.clone(),
            });
        }
    }

    if let Some(&max_place) = lines_by_place.keys().next_back() {
        let missing: Vec<u32> = (1..=max_place)
            .filter(|place| !lines_by_place.contains_key(place))
            .collect();
        if !missing.is_empty() {
            issues.push(Issue::NonContiguousPlaces { missing });
        }
    }

    for (entry_key, lines) in &lines_by_entry {
        if lines.len() > 1 {
            issues.push(Issue::DuplicateEntryKey {
                entry_key: (*entry_key).to_string(),
                lines: lines.clone(),
            });
        }
    }

    issues
}

fn build_group(event_key: &str, members: &[&PlacementRow]) -> EventGroup {
    EventGroup::new(
        event_key,
        members.iter().map(|row| row.placement()).collect(),
    )
}
