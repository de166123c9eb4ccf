// Range-matcher scenarios: floor-set laws, fallback policy, ordering.

use shelfmap_core::model::LocationDataset;
use shelfmap_core::resolver::{match_ranges, resolve_floor};
use shelfmap_core::LookupError;

fn law_library() -> LocationDataset {
    serde_json::from_str(
        r#"{
            "name": "Law Library",
            "description": "Second floor atrium stacks.",
            "showRanges": true,
            "ranges": [
                {"floor": "2", "label": "KF100-KF200", "lc_from": "KF100", "lc_to": "KF200"}
            ]
        }"#,
    )
    .unwrap()
}

fn two_floor_dataset() -> LocationDataset {
    serde_json::from_str(
        r#"{
            "name": "Main Stacks",
            "description": "General collection.",
            "showRanges": false,
            "ranges": [
                {"floor": "3", "label": "A1-B99", "lc_from": "A1", "lc_to": "B99"},
                {"floor": "2", "label": "C1-D99", "lc_from": "C1", "lc_to": "D99"},
                {"floor": "3", "label": "E1-F99", "lc_from": "E1", "lc_to": "F99"}
            ]
        }"#,
    )
    .unwrap()
}

#[test]
fn query_inside_a_range_matches_it() {
    let result = match_ranges(&law_library(), "KF150");
    assert_eq!(result.matched_ranges.len(), 1);
    assert_eq!(result.matched_ranges[0].label, "KF100-KF200");
    assert_eq!(result.candidate_floors, vec!["2"]);
    assert!(result.matched_any());
}

#[test]
fn boundary_call_numbers_match_inclusively() {
    assert!(match_ranges(&law_library(), "KF100").matched_any());
    assert!(match_ranges(&law_library(), "KF200").matched_any());
    assert!(!match_ranges(&law_library(), "KF99").matched_any());
    assert!(!match_ranges(&law_library(), "KF201").matched_any());
}

#[test]
fn no_match_falls_back_to_all_floors() {
    let result = match_ranges(&law_library(), "KG1");
    assert!(result.matched_ranges.is_empty());
    assert_eq!(result.candidate_floors, vec!["2"]);
}

#[test]
fn matched_floors_keep_first_seen_order_and_deduplicate() {
    let dataset = two_floor_dataset();

    // "A5" only hits floor 3's first range.
    let result = match_ranges(&dataset, "A5");
    assert_eq!(result.candidate_floors, vec!["3"]);

    // No match at all: every distinct floor, in dataset order.
    let result = match_ranges(&dataset, "Z999");
    assert_eq!(result.candidate_floors, vec!["3", "2"]);
}

#[test]
fn matcher_is_idempotent() {
    let dataset = two_floor_dataset();
    let first = match_ranges(&dataset, "C50");
    let second = match_ranges(&dataset, "C50");
    assert_eq!(first, second);
}

#[test]
fn overlapping_ranges_all_match() {
    let dataset: LocationDataset = serde_json::from_str(
        r#"{
            "name": "Reserve",
            "description": "",
            "showRanges": true,
            "ranges": [
                {"floor": "1", "label": "KF1-KF500", "lc_from": "KF1", "lc_to": "KF500"},
                {"floor": "1", "label": "KF100-KF200", "lc_from": "KF100", "lc_to": "KF200"}
            ]
        }"#,
    )
    .unwrap();

    let result = match_ranges(&dataset, "KF150");
    assert_eq!(result.matched_ranges.len(), 2);
    assert_eq!(result.candidate_floors, vec!["1"]);
}

#[test]
fn single_candidate_floor_resolves() {
    let result = match_ranges(&law_library(), "KF150");
    assert_eq!(resolve_floor(&result).unwrap(), "2");
}

#[test]
fn cross_floor_matches_refuse_to_resolve() {
    let dataset = two_floor_dataset();
    // "C1-D99" on floor 2 and "E1-F99" on floor 3 are disjoint, so force
    // ambiguity through the fallback path instead.
    let result = match_ranges(&dataset, "Z999");
    match resolve_floor(&result) {
        Err(LookupError::AmbiguousFloor { floors }) => assert_eq!(floors, vec!["3", "2"]),
        other => panic!("expected AmbiguousFloor, got {other:?}"),
    }
}

#[test]
fn empty_dataset_has_no_floor_to_resolve() {
    let dataset: LocationDataset = serde_json::from_str(
        r#"{
            "name": "Offsite Storage",
            "description": "Request at the circulation desk.",
            "showRanges": false,
            "ranges": []
        }"#,
    )
    .unwrap();

    let result = match_ranges(&dataset, "KF150");
    assert!(result.matched_ranges.is_empty());
    assert!(result.candidate_floors.is_empty());

    match resolve_floor(&result) {
        Err(LookupError::AmbiguousFloor { floors }) => {
            assert!(floors.is_empty());
        }
        other => panic!("expected AmbiguousFloor, got {other:?}"),
    }
}

#[test]
fn inverted_bounds_yield_no_match_not_an_error() {
    let dataset: LocationDataset = serde_json::from_str(
        r#"{
            "name": "Broken",
            "description": "",
            "showRanges": false,
            "ranges": [
                {"floor": "1", "label": "KF200-KF100", "lc_from": "KF200", "lc_to": "KF100"}
            ]
        }"#,
    )
    .unwrap();

    let result = match_ranges(&dataset, "KF150");
    assert!(result.matched_ranges.is_empty());
    assert_eq!(result.candidate_floors, vec!["1"]);
}
