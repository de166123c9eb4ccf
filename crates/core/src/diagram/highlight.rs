// Feature highlighter - restyles matched shelf features and circles
// them with a pulsing overlay.

use tracing::debug;
use xmltree::{Element, XMLNode};

use crate::diagram::bbox::element_bbox;
use crate::diagram::document::DiagramDocument;
use crate::model::StackRange;

/// Fixed padding around a feature's bounding circle, in user units.
const OVERLAY_PADDING: f64 = 10.0;
const FEATURE_STYLE: &str = "opacity:1;fill:#ff0000";
const OVERLAY_STROKE: &str = "#ff0000";
const OVERLAY_STROKE_WIDTH: &str = "4";
const OVERLAY_CLASS: &str = "highlight-circle";

/// Pulsing-opacity animation for overlay circles: three keyframes
/// (0 -> 1 -> 0) over five seconds, repeated forever.
const PULSE_STYLESHEET: &str = "@keyframes hideshow {0% { opacity: 0; }50% { opacity: 1; }100% { opacity: 0; }}.highlight-circle {opacity:.5;animation: hideshow 5s ease infinite;}";

/// One drawn highlight, derived at render time.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureOverlay {
    pub feature_id: String,
    pub center: (f64, f64),
    pub radius: f64,
}

/// What the highlighter did for one diagram.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HighlightReport {
    /// Overlays drawn, in matched-range order.
    pub drawn: Vec<FeatureOverlay>,
    /// Feature ids with no corresponding diagram element. Skipping them
    /// silently is deliberate tolerance for incomplete diagrams.
    pub missing: Vec<String>,
}

/// Derives the diagram feature id for a shelf-range label.
pub fn feature_id(label: &str) -> String {
    format!("f-{label}").to_lowercase()
}

/// Highlights every matched range on the diagram. The pulse stylesheet
/// is injected exactly once, before any overlay element.
pub fn highlight_ranges(document: &mut DiagramDocument, ranges: &[StackRange]) -> HighlightReport {
    let mut report = HighlightReport::default();
    if ranges.is_empty() {
        return report;
    }

    document.append_element(pulse_style_element());

    for range in ranges {
        let id = feature_id(&range.label);

        let bbox = match document.find_feature(&id) {
            None => {
                debug!(feature = %id, label = %range.label, "no diagram element for feature, skipping");
                report.missing.push(id);
                continue;
            }
            Some(feature) => element_bbox(feature),
        };

        if let Some(feature) = document.find_feature_mut(&id) {
            feature
                .attributes
                .insert("style".to_string(), FEATURE_STYLE.to_string());
        }

        let Some(bbox) = bbox else {
            debug!(feature = %id, "feature has no computable geometry, no overlay drawn");
            continue;
        };

        let overlay = FeatureOverlay {
            feature_id: id,
            center: bbox.center(),
            radius: bbox.width.max(bbox.height) / 2.0 + OVERLAY_PADDING,
        };
        document.append_element(overlay_circle(&overlay));
        report.drawn.push(overlay);
    }

    report
}

fn overlay_circle(overlay: &FeatureOverlay) -> Element {
    let mut circle = Element::new("circle");
    circle
        .attributes
        .insert("cx".to_string(), overlay.center.0.to_string());
    circle
        .attributes
        .insert("cy".to_string(), overlay.center.1.to_string());
    circle
        .attributes
        .insert("r".to_string(), overlay.radius.to_string());
    circle
        .attributes
        .insert("stroke".to_string(), OVERLAY_STROKE.to_string());
    circle
        .attributes
        .insert("stroke-width".to_string(), OVERLAY_STROKE_WIDTH.to_string());
    circle.attributes.insert("fill".to_string(), "none".to_string());
    circle
        .attributes
        .insert("class".to_string(), OVERLAY_CLASS.to_string());
    circle
}

fn pulse_style_element() -> Element {
    let mut style = Element::new("style");
    style
        .attributes
        .insert("type".to_string(), "text/css".to_string());
    style
        .children
        .push(XMLNode::Text(PULSE_STYLESHEET.to_string()));
    style
}
