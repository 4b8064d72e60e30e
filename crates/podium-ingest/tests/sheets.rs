//! Integration tests for whole-sheet parsing.

use podium_ingest::{
    ErrorMode, IngestError, ParseOptions, parse_leaderboard, parse_placements,
    parse_placements_with_options,
};

const LEADERBOARD_HEADER: &str =
    "event_name,first,second,third,fourth,fifth,sixth,seventh,eighth,ninth,tenth";

#[test]
fn test_parse_placements_example() {
    let text = "event_key,place,entry_key,entry_name\n\
                ski_100,1,ath:1,Alice\n\
                ski_100,2,ath:2,Bob\n";
    let rows = parse_placements(text).unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].line, 2);
    assert_eq!(rows[0].event_key, "ski_100");
    assert_eq!(rows[0].place, 1);
    assert_eq!(rows[1].entry_name, "Bob");
}

#[test]
fn test_parse_placements_with_quoted_names() {
    let text = "entry_name,entry_key,place,event_key\r\n\
                \"Smith, Jane\",ath:7,1,luge_1\r\n\
                \"The \"\"Flying\"\" Finn\",ath:8,2,luge_1\r\n";
    let rows = parse_placements(text).unwrap();

    assert_eq!(rows[0].entry_name, "Smith, Jane");
    assert_eq!(rows[1].entry_name, "The \"Flying\" Finn");
    assert_eq!(rows[1].event_key, "luge_1");
}

#[test]
fn test_bad_place_names_line_and_range() {
    for bad in ["0", "11", "abc"] {
        let text = format!(
            "event_key,place,entry_key,entry_name\nski_100,1,ath:1,Alice\n\nski_100,{bad},ath:2,Bob\n"
        );
        let err = parse_placements(&text).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("line 4: place must be an integer between 1 and 10, got '{bad}'")
        );
    }
}

#[test]
fn test_row_line_counts_embedded_newlines() {
    let text = "event_key,place,entry_key,entry_name\n\
                ski_100,1,ath:1,\"Alice\nSecond Line\"\n\
                ski_100,x,ath:2,Bob\n";
    let err = parse_placements(text).unwrap_err();
    assert!(err.to_string().starts_with("line 4: "));
}

#[test]
fn test_collect_all_mode() {
    let text = "event_key,place,entry_key,entry_name\n\
                ski_100,1,,Alice\n\
                ski_100,2,ath:2,Bob\n\
                ,3,ath:3,Cara\n";
    let options = ParseOptions::default().with_error_mode(ErrorMode::CollectAll);
    let err = parse_placements_with_options(text, options).unwrap_err();

    let IngestError::InvalidRows { errors } = err else {
        panic!("expected InvalidRows");
    };
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].to_string(), "line 2: entry_key is required");
    assert_eq!(errors[1].to_string(), "line 4: event_key is required");
}

#[test]
fn test_parse_leaderboard() {
    let text = format!(
        "{LEADERBOARD_HEADER}\n\
         Men's Downhill,A,B,C,D,E,F,G,H,I,J\n\
         Women's Slalom,K,L,M,N,O,P,Q,R,S,T\n"
    );
    let rows = parse_leaderboard(&text).unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].event_ref, "Men's Downhill");
    assert_eq!(rows[1].leaderboard[9], "T");
}

#[test]
fn test_leaderboard_duplicate_name_is_fatal() {
    let text = format!(
        "{LEADERBOARD_HEADER}\n\
         Men's Downhill,A,B,C,D,E,F,G,H,I,J\n\
         Women's Slalom,K,L,M,N,O,P,Q,R,S,k\n"
    );
    let err = parse_leaderboard(&text).unwrap_err();
    assert_eq!(
        err.to_string(),
        "line 3: duplicate athlete name 'k' at places 1 and 10 (event 'Women's Slalom')"
    );
}

#[test]
fn test_leaderboard_missing_column() {
    let err = parse_leaderboard("event_ref,first,second\nx,a,b\n").unwrap_err();
    assert_eq!(
        err.to_string(),
        "missing required column 'place_3' (accepted: third, place_3, p3)"
    );
}
