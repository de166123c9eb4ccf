use serde::{Deserialize, Deserializer, Serialize};

/// One shelving range: a contiguous call-number span on one shelf
/// location, on one floor. `floor` doubles as the diagram file stem and
/// `label` as the source of the diagram feature id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StackRange {
    #[serde(deserialize_with = "floor_id")]
    pub floor: String,
    pub label: String,
    pub lc_from: String,
    pub lc_to: String,
}

/// The stack dataset for one library location. Loaded once per lookup,
/// never cached across lookups.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocationDataset {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Whether the summary should enumerate matched range labels.
    #[serde(default, rename = "showRanges")]
    pub show_ranges: bool,
    #[serde(default)]
    pub ranges: Vec<StackRange>,
}

/// Floors appear as strings or bare numbers in data files; accept both
/// and normalize to strings.
fn floor_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawFloor {
        Text(String),
        Number(i64),
    }

    Ok(match RawFloor::deserialize(deserializer)? {
        RawFloor::Text(text) => text,
        RawFloor::Number(number) => number.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_the_wire_format() {
        let dataset: LocationDataset = serde_json::from_str(
            r#"{
                "name": "Law Library",
                "description": "Second floor atrium stacks.",
                "showRanges": true,
                "ranges": [
                    {"floor": "2", "label": "KF100-KF200", "lc_from": "KF100", "lc_to": "KF200"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(dataset.name, "Law Library");
        assert!(dataset.show_ranges);
        assert_eq!(dataset.ranges.len(), 1);
        assert_eq!(dataset.ranges[0].floor, "2");
        assert_eq!(dataset.ranges[0].label, "KF100-KF200");
    }

    #[test]
    fn numeric_floors_normalize_to_strings() {
        let dataset: LocationDataset = serde_json::from_str(
            r#"{
                "name": "Annex",
                "ranges": [
                    {"floor": 3, "label": "A1-A99", "lc_from": "A1", "lc_to": "A99"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(dataset.ranges[0].floor, "3");
        assert!(!dataset.show_ranges);
        assert_eq!(dataset.description, "");
    }
}
