// Range matcher - scans a location's shelving ranges for a call number
// and resolves the candidate floor set.

use crate::callnumber::is_within;
use crate::error::LookupError;
use crate::model::{LocationDataset, StackRange};

/// Outcome of scanning one location's ranges for one call number.
/// Deterministic for a given (dataset, query) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    /// Ranges containing the query, in dataset order. Overlapping
    /// ranges are all kept; there is no ranking.
    pub matched_ranges: Vec<StackRange>,
    /// Floors to consider for rendering, first-seen order: the floors
    /// of the matched ranges, or every floor in the dataset when
    /// nothing matched. A missing match must not mean a missing map.
    pub candidate_floors: Vec<String>,
}

impl MatchResult {
    pub fn matched_any(&self) -> bool {
        !self.matched_ranges.is_empty()
    }
}

/// Scans the dataset in order and builds the match result.
pub fn match_ranges(dataset: &LocationDataset, call_number: &str) -> MatchResult {
    let mut matched_ranges = Vec::new();
    let mut matched_floors: Vec<String> = Vec::new();
    let mut all_floors: Vec<String> = Vec::new();

    for range in &dataset.ranges {
        if !all_floors.contains(&range.floor) {
            all_floors.push(range.floor.clone());
        }

        if is_within(&range.lc_from, &range.lc_to, call_number) {
            if !matched_floors.contains(&range.floor) {
                matched_floors.push(range.floor.clone());
            }
            matched_ranges.push(range.clone());
        }
    }

    let candidate_floors = if matched_ranges.is_empty() {
        all_floors
    } else {
        matched_floors
    };

    MatchResult {
        matched_ranges,
        candidate_floors,
    }
}

/// Picks the single floor to render. Only one floor map can be shown,
/// so anything other than exactly one candidate is refused.
pub fn resolve_floor(result: &MatchResult) -> Result<&str, LookupError> {
    match result.candidate_floors.as_slice() {
        [floor] => Ok(floor),
        floors => Err(LookupError::AmbiguousFloor {
            floors: floors.to_vec(),
        }),
    }
}
