// Lookup pipeline - drives one lookup end to end: fetch the stack
// dataset, match ranges, resolve the floor, fetch the floor diagram,
// highlight, summarize. Each stage returns explicit values; nothing is
// shared across invocations.

use tracing::debug;

use crate::diagram::highlight::{highlight_ranges, HighlightReport};
use crate::error::{LookupError, Result};
use crate::io_traits::{DiagramSource, FetchError, StackDataSource};
use crate::presentation::{assemble_summary, LookupSummary};
use crate::resolver::{match_ranges, resolve_floor, MatchResult};

/// Inputs for one lookup.
#[derive(Debug, Clone)]
pub struct LookupRequest {
    pub location_code: String,
    pub call_number: String,
    /// Display name for the summary heading.
    pub library_name: String,
}

/// Everything a front end needs to render one completed lookup.
#[derive(Debug, Clone)]
pub struct LookupOutcome {
    pub summary: LookupSummary,
    pub match_result: MatchResult,
    pub diagram: RenderedDiagram,
}

/// The highlighted floor diagram, serialized and ready to embed.
#[derive(Debug, Clone)]
pub struct RenderedDiagram {
    pub floor: String,
    pub svg: String,
    pub report: HighlightReport,
}

/// Runs one lookup. The two fetches are awaited in strict order: the
/// diagram fetch cannot start before floor resolution completes,
/// because the floor choice depends on the match result.
pub async fn execute_lookup(
    request: &LookupRequest,
    data_source: &dyn StackDataSource,
    diagram_source: &dyn DiagramSource,
) -> Result<LookupOutcome> {
    if request.location_code.trim().is_empty() {
        return Err(LookupError::MissingLocation);
    }
    if request.call_number.trim().is_empty() {
        return Err(LookupError::MissingCallNumber);
    }

    let location_id = request.location_code.to_lowercase();
    let dataset = data_source
        .fetch_dataset(&location_id)
        .await
        .map_err(|source| LookupError::DatasetUnavailable {
            location: request.location_code.clone(),
            source,
        })?;

    let match_result = match_ranges(&dataset, &request.call_number);
    debug!(
        matches = match_result.matched_ranges.len(),
        floors = ?match_result.candidate_floors,
        "range scan complete"
    );

    let floor = resolve_floor(&match_result)?.to_string();

    let mut document = diagram_source
        .fetch_diagram(&floor)
        .await
        .map_err(|source| LookupError::DiagramUnavailable {
            floor: floor.clone(),
            source,
        })?;

    document.make_responsive();
    let report = highlight_ranges(&mut document, &match_result.matched_ranges);

    let svg = document
        .to_svg_string()
        .map_err(|e| LookupError::DiagramUnavailable {
            floor: floor.clone(),
            source: FetchError::Malformed(e.to_string()),
        })?;

    let summary = assemble_summary(
        &request.library_name,
        &request.call_number,
        &dataset,
        &match_result,
        Some(&floor),
    );

    Ok(LookupOutcome {
        summary,
        match_result,
        diagram: RenderedDiagram { floor, svg, report },
    })
}
