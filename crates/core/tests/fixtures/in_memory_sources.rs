use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use shelfmap_core::diagram::DiagramDocument;
use shelfmap_core::io_traits::{DiagramSource, FetchError, StackDataSource};
use shelfmap_core::model::LocationDataset;

/// In-memory stand-in for the dataset fetch boundary. Counts fetches so
/// tests can assert how often the network would have been hit.
#[derive(Default)]
pub struct InMemoryStackData {
    datasets: Vec<(String, LocationDataset)>,
    failure: Option<String>,
    fetches: AtomicUsize,
}

impl InMemoryStackData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dataset(mut self, location_id: &str, dataset: LocationDataset) -> Self {
        self.datasets.push((location_id.to_string(), dataset));
        self
    }

    #[allow(dead_code)]
    pub fn with_failure(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }

    #[allow(dead_code)]
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StackDataSource for InMemoryStackData {
    async fn fetch_dataset(&self, location_id: &str) -> Result<LocationDataset, FetchError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = &self.failure {
            return Err(FetchError::Transport(message.clone()));
        }
        self.datasets
            .iter()
            .find(|(id, _)| id == location_id)
            .map(|(_, dataset)| dataset.clone())
            .ok_or_else(|| FetchError::NotFound(location_id.to_string()))
    }
}

/// In-memory stand-in for the diagram fetch boundary.
#[derive(Default)]
pub struct InMemoryDiagrams {
    diagrams: Vec<(String, String)>,
    failure: Option<String>,
    fetches: AtomicUsize,
}

impl InMemoryDiagrams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_diagram(mut self, floor: &str, svg: &str) -> Self {
        self.diagrams.push((floor.to_string(), svg.to_string()));
        self
    }

    #[allow(dead_code)]
    pub fn with_failure(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DiagramSource for InMemoryDiagrams {
    async fn fetch_diagram(&self, floor: &str) -> Result<DiagramDocument, FetchError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = &self.failure {
            return Err(FetchError::Transport(message.clone()));
        }
        let text = self
            .diagrams
            .iter()
            .find(|(id, _)| id == floor)
            .map(|(_, svg)| svg.clone())
            .ok_or_else(|| FetchError::NotFound(format!("{floor}.svg")))?;
        DiagramDocument::parse(&text).map_err(|e| FetchError::Malformed(e.to_string()))
    }
}
