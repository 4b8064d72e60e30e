//! Integration tests: parse a placement sheet, then validate its groups.

use proptest::prelude::*;

use podium_ingest::parse_placements;
use podium_model::PlacementRow;
use podium_validate::{check_groups, validate_groups};

const HEADER: &str = "event_key,place,entry_key,entry_name\n";

#[test]
fn test_example_sheet_validates() {
    let text = format!("{HEADER}ski_100,1,ath:1,Alice\nski_100,2,ath:2,Bob\n");
    let rows = parse_placements(&text).unwrap();
    let groups = validate_groups(&rows).unwrap();

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].event_key, "ski_100");
    let names: Vec<&str> = groups[0]
        .placements
        .iter()
        .map(|p| p.entry_name.as_str())
        .collect();
    assert_eq!(names, vec!["Alice", "Bob"]);
}

#[test]
fn test_example_duplicate_place_fails() {
    let text = format!("{HEADER}ski_100,1,ath:1,Alice\nski_100,1,ath:2,Bob\n");
    let rows = parse_placements(&text).unwrap();
    let err = validate_groups(&rows).unwrap_err();

    assert_eq!(err.event_key, "ski_100");
    assert!(err.reason.starts_with("duplicate place values"));
}

#[test]
fn test_report_rendering() {
    let text = format!(
        "{HEADER}\
         luge_1,1,ath:1,Ann\n\
         luge_1,3,ath:2,Ben\n\
         ski_100,1,ath:3,Cal\n\
         ski_100,2,ath:3,Cal\n\
         ski_100,2,ath:4,Dee\n\
         curl_1,1,team:se,Sweden\n"
    );
    let rows = parse_placements(&text).unwrap();
    let report = check_groups(&rows);
    let rendered = report
        .issues
        .iter()
        .map(|i| format!("{}: {}", i.event_key, i.issue))
        .collect::<Vec<_>>()
        .join("\n");

    insta::assert_snapshot!(rendered, @r"
    luge_1: places must be contiguous from 1: missing 2
    ski_100: duplicate place values: place 2 on lines 5, 6
    ski_100: duplicate entry_key values: 'ath:3' on lines 4, 5
    ");
    assert_eq!(report.groups.len(), 1);
    assert_eq!(report.groups[0].event_key, "curl_1");
}

fn arbitrary_group() -> impl Strategy<Value = Vec<PlacementRow>> {
    prop::collection::vec((1u32..=10, 0usize..12), 1..12).prop_map(|cells| {
        cells
            .into_iter()
            .enumerate()
            .map(|(i, (place, entry))| PlacementRow {
                line: i + 2,
                event_key: "evt".to_string(),
                place,
                entry_key: format!("ath:{entry}"),
                entry_name: format!("Athlete {entry}"),
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn accepted_groups_are_contiguous(rows in arbitrary_group()) {
        if let Ok(groups) = validate_groups(&rows) {
            prop_assert_eq!(groups.len(), 1);
            let places: Vec<u32> = groups[0].placements.iter().map(|p| p.place).collect();
            let max = places.last().copied().unwrap_or(0);
            prop_assert_eq!(places, (1..=max).collect::<Vec<u32>>());
        }
    }

    #[test]
    fn fail_fast_agrees_with_report(rows in arbitrary_group()) {
        let report = check_groups(&rows);
        prop_assert_eq!(report.first_error(), validate_groups(&rows).err());
    }
}
