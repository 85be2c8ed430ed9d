use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use super::checksum::calculate_checksum;
use crate::core::error::{FareError, FareResult};
use crate::models::LinearModel;
use crate::parsing::json_parser;

/// Default timeout for remote model fetches, in seconds
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 20;

/// Where the model document lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelSource {
    File(PathBuf),
    Url(String),
}

impl ModelSource {
    pub fn is_remote(&self) -> bool {
        matches!(self, ModelSource::Url(_))
    }
}

impl FromStr for ModelSource {
    type Err = FareError;

    /// `http://` and `https://` locations are URLs, everything else is a path.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(FareError::Configuration(
                "model source must not be empty".to_string(),
            ));
        }

        let lower = s.to_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Ok(ModelSource::Url(s.to_string()))
        } else {
            Ok(ModelSource::File(PathBuf::from(s)))
        }
    }
}

impl fmt::Display for ModelSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelSource::File(path) => write!(f, "{}", path.display()),
            ModelSource::Url(url) => f.write_str(url),
        }
    }
}

/// Retrieves the raw model document.
#[async_trait]
pub trait ModelFetcher: Send + Sync {
    async fn fetch(&self, source: &ModelSource) -> FareResult<String>;
}

/// Reads files from disk and URLs over http(s).
#[derive(Debug, Clone)]
pub struct SourceFetcher {
    timeout: Duration,
}

impl SourceFetcher {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for SourceFetcher {
    fn default() -> Self {
        Self::new(Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS))
    }
}

#[async_trait]
impl ModelFetcher for SourceFetcher {
    async fn fetch(&self, source: &ModelSource) -> FareResult<String> {
        match source {
            ModelSource::File(path) => tokio::fs::read_to_string(path).await.map_err(|e| {
                FareError::ModelLoad(format!(
                    "Failed to read model file {}: {}",
                    path.display(),
                    e
                ))
            }),
            ModelSource::Url(url) => fetch_url(url, self.timeout).await,
        }
    }
}

#[cfg(feature = "remote-model")]
async fn fetch_url(url: &str, timeout: Duration) -> FareResult<String> {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| FareError::ModelLoad(format!("Failed to build HTTP client: {}", e)))?;

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| FareError::ModelLoad(format!("Failed to fetch {}: {}", url, e)))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FareError::ModelLoad(format!(
            "Fetching {} failed ({})",
            url, status
        )));
    }

    response
        .text()
        .await
        .map_err(|e| FareError::ModelLoad(format!("Failed to read body of {}: {}", url, e)))
}

#[cfg(not(feature = "remote-model"))]
async fn fetch_url(url: &str, _timeout: Duration) -> FareResult<String> {
    Err(FareError::ModelLoad(format!(
        "Cannot fetch {}: built without the remote-model feature",
        url
    )))
}

/// A parsed model together with its provenance
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedModel {
    pub model: LinearModel,
    pub source: ModelSource,
    pub checksum: String,
    pub loaded_at: DateTime<Utc>,
}

/// Fetches and parses the model document
#[derive(Clone)]
pub struct ModelLoader {
    fetcher: Arc<dyn ModelFetcher>,
}

impl Default for ModelLoader {
    fn default() -> Self {
        Self::with_fetcher(Arc::new(SourceFetcher::default()))
    }
}

impl ModelLoader {
    /// Loader using [`SourceFetcher`] with the given remote timeout
    pub fn new(timeout: Duration) -> Self {
        Self::with_fetcher(Arc::new(SourceFetcher::new(timeout)))
    }

    pub fn with_fetcher(fetcher: Arc<dyn ModelFetcher>) -> Self {
        Self { fetcher }
    }

    /// Fetch, parse and validate the model at `source`
    pub async fn load(&self, source: &ModelSource) -> FareResult<LoadedModel> {
        log::debug!("Fetching model from {}", source);
        let body = self.fetcher.fetch(source).await?;
        let model = json_parser::parse_model_json_str(&body)?;
        let checksum = calculate_checksum(&body);

        log::info!(
            "Loaded model from {} ({} coefficients, sha256 {})",
            source,
            model.dimension(),
            checksum
        );

        Ok(LoadedModel {
            model,
            source: source.clone(),
            checksum,
            loaded_at: Utc::now(),
        })
    }
}
