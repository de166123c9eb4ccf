// HTTP implementations of the core fetch boundaries.

use async_trait::async_trait;
use shelfmap_core::diagram::DiagramDocument;
use shelfmap_core::io_traits::{DiagramSource, FetchError, StackDataSource};
use shelfmap_core::model::LocationDataset;
use tracing::debug;

/// Fetches `data-<location>.json` documents relative to a base URL.
pub struct HttpStackDataSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpStackDataSource {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn dataset_url(&self, location_id: &str) -> String {
        format!("{}data-{}.json", self.base_url, location_id)
    }
}

#[async_trait]
impl StackDataSource for HttpStackDataSource {
    async fn fetch_dataset(&self, location_id: &str) -> Result<LocationDataset, FetchError> {
        let url = self.dataset_url(location_id);
        debug!(%url, "fetching stack data");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound(url));
        }
        let response = response
            .error_for_status()
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        response
            .json()
            .await
            .map_err(|e| FetchError::Malformed(e.to_string()))
    }
}

/// Fetches `<floor>.svg` diagrams relative to a base URL.
pub struct HttpDiagramSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpDiagramSource {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn diagram_url(&self, floor: &str) -> String {
        format!("{}{}.svg", self.base_url, floor)
    }
}

#[async_trait]
impl DiagramSource for HttpDiagramSource {
    async fn fetch_diagram(&self, floor: &str) -> Result<DiagramDocument, FetchError> {
        let url = self.diagram_url(floor);
        debug!(%url, "fetching floor diagram");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound(url));
        }
        let response = response
            .error_for_status()
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        let text = response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        DiagramDocument::parse(&text).map_err(|e| FetchError::Malformed(e.to_string()))
    }
}
