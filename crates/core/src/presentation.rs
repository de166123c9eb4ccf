// Presentation assembler - turns a lookup's results into the
// human-readable summary shown alongside the map.

use std::fmt;

use crate::model::LocationDataset;
use crate::resolver::MatchResult;

/// The textual half of a lookup's output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupSummary {
    pub library_name: String,
    /// Present when a single floor was resolved; shown in the heading.
    pub floor: Option<String>,
    pub call_number: String,
    pub location_name: String,
    /// Labels of the matched ranges, present only when the dataset opts
    /// in via `showRanges` and something actually matched.
    pub matched_labels: Option<Vec<String>>,
    pub no_match_notice: bool,
    pub description: String,
}

pub fn assemble_summary(
    library_name: &str,
    call_number: &str,
    dataset: &LocationDataset,
    result: &MatchResult,
    floor: Option<&str>,
) -> LookupSummary {
    let matched_labels = (dataset.show_ranges && result.matched_any()).then(|| {
        result
            .matched_ranges
            .iter()
            .map(|range| range.label.clone())
            .collect()
    });

    LookupSummary {
        library_name: library_name.to_string(),
        floor: floor.map(str::to_string),
        call_number: call_number.to_string(),
        location_name: dataset.name.clone(),
        matched_labels,
        no_match_notice: !result.matched_any(),
        description: dataset.description.clone(),
    }
}

impl fmt::Display for LookupSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.floor {
            Some(floor) => writeln!(f, "{}, Floor {}", self.library_name, floor)?,
            None => writeln!(f, "{}", self.library_name)?,
        }
        writeln!(f, "Call Number: {}", self.call_number)?;
        writeln!(f, "Location: {}", self.location_name)?;

        if let Some(labels) = &self.matched_labels {
            let lead = if labels.len() > 1 {
                "Ranges found"
            } else {
                "Range found"
            };
            writeln!(f, "{}: {}", lead, labels.join(", "))?;
        }

        if self.no_match_notice {
            writeln!(
                f,
                "No shelf range matched this call number; showing the location's general area."
            )?;
        }

        write!(f, "{}", self.description)
    }
}
