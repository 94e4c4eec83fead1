//! Data Manager crate for the bar chart
//! Fetches the dataset document once and turns it into a [`Dataset`]

pub mod parser;
pub mod wasm_fetch;

use bar_chart_config::ChartConfig;
use bar_chart_shared::{ChartResult, Dataset, RawDataset};

pub use parser::{parse_dataset, parse_dataset_json, parse_date};
pub use wasm_fetch::FetchClient;

/// Loads the chart's dataset from a single remote document
pub struct DataLoader {
    client: FetchClient,
    url: String,
}

impl DataLoader {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: FetchClient::new(),
            url: url.into(),
        }
    }

    pub fn from_config(config: &ChartConfig) -> Self {
        let client = match config.fetch_timeout_ms {
            Some(timeout_ms) => FetchClient::with_timeout(timeout_ms),
            None => FetchClient::new(),
        };
        Self {
            client,
            url: config.data_url.clone(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// The document exactly as served
    pub async fn fetch_raw(&self) -> ChartResult<RawDataset> {
        self.client.fetch_json(&self.url).await
    }

    /// Fetch and parse. No retry: any failure is returned to the caller.
    pub async fn load(&self) -> ChartResult<Dataset> {
        log::debug!("Fetching dataset from {}", self.url);
        let raw = self.fetch_raw().await?;
        let dataset = parse_dataset(raw)?;
        log::info!(
            "Loaded dataset '{}' with {} points",
            dataset.name(),
            dataset.len()
        );
        Ok(dataset)
    }
}
