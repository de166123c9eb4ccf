pub mod bbox;
pub mod document;
pub mod highlight;

pub use bbox::BBox;
pub use document::{DiagramDocument, DiagramError};
pub use highlight::{feature_id, highlight_ranges, FeatureOverlay, HighlightReport};
