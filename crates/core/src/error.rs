use thiserror::Error;

use crate::io_traits::FetchError;

pub type Result<T> = std::result::Result<T, LookupError>;

/// Fatal, user-visible lookup failures. No kind is retried; the
/// presentation layer decides how each is shown. A call number with no
/// matching range is deliberately not here: the lookup proceeds with
/// the location's fallback floor set and a notice in the summary.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("no location provided")]
    MissingLocation,

    #[error("no call number provided")]
    MissingCallNumber,

    #[error("could not load stack data for location '{location}': {source}")]
    DatasetUnavailable {
        location: String,
        source: FetchError,
    },

    #[error("could not determine a single floor to display ({})", floor_candidates(.floors))]
    AmbiguousFloor { floors: Vec<String> },

    #[error("could not load the floor map for floor '{floor}': {source}")]
    DiagramUnavailable { floor: String, source: FetchError },
}

fn floor_candidates(floors: &[String]) -> String {
    if floors.is_empty() {
        "no floors in dataset".to_string()
    } else {
        format!("candidates: {}", floors.join(", "))
    }
}
