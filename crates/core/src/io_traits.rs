use async_trait::async_trait;
use thiserror::Error;

use crate::diagram::DiagramDocument;
use crate::model::LocationDataset;

/// Failure at a fetch boundary.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("transport failure: {0}")]
    Transport(String),

    #[error("malformed payload: {0}")]
    Malformed(String),
}

/// Supplies the stack dataset for a location identifier. The pipeline
/// passes the identifier already lowercased.
#[async_trait]
pub trait StackDataSource: Send + Sync {
    async fn fetch_dataset(&self, location_id: &str) -> Result<LocationDataset, FetchError>;
}

/// Supplies the floor-plan diagram for a floor identifier. The returned
/// document is fully parsed before the pipeline mutates it.
#[async_trait]
pub trait DiagramSource: Send + Sync {
    async fn fetch_diagram(&self, floor: &str) -> Result<DiagramDocument, FetchError>;
}
