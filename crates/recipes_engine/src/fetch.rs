use std::time::Duration;

use futures_util::StreamExt;
use recipes_core::{RecordPage, RequestDescriptor, Statistics};
use recipes_logging::recipes_debug;
use serde::de::DeserializeOwned;
use url::Url;

use crate::{FailureKind, FetchError};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api/recipes";

#[derive(Debug, Clone)]
pub struct FetchSettings {
    /// Collection endpoint; search and stats live beneath it.
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub redirect_limit: usize,
    pub max_bytes: u64,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            redirect_limit: 5,
            max_bytes: 5 * 1024 * 1024,
        }
    }
}

/// Network side of the table: one call per page, plus collection statistics.
#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch_page(&self, request: &RequestDescriptor) -> Result<RecordPage, FetchError>;

    async fn fetch_stats(&self) -> Result<Statistics, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    settings: FetchSettings,
}

impl ReqwestFetcher {
    pub fn new(settings: FetchSettings) -> Self {
        Self { settings }
    }

    fn base_url(&self) -> Result<Url, FetchError> {
        Url::parse(&self.settings.base_url)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))
    }

    fn build_client(&self) -> Result<reqwest::Client, FetchError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .redirect(reqwest::redirect::Policy::limited(
                self.settings.redirect_limit,
            ))
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, FetchError> {
        recipes_debug!("GET {}", url);
        let client = self.build_client()?;
        let response = client.get(url).send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                format!("HTTP error! status: {}", status.as_u16()),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(self.too_large(Some(content_len)));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(self.too_large(Some(next_len)));
            }
            bytes.extend_from_slice(&chunk);
        }

        serde_json::from_slice(&bytes)
            .map_err(|err| FetchError::new(FailureKind::Parse, err.to_string()))
    }

    fn too_large(&self, actual: Option<u64>) -> FetchError {
        FetchError::new(
            FailureKind::TooLarge {
                max_bytes: self.settings.max_bytes,
                actual,
            },
            "response too large",
        )
    }
}

#[async_trait::async_trait]
impl Fetcher for ReqwestFetcher {
    async fn fetch_page(&self, request: &RequestDescriptor) -> Result<RecordPage, FetchError> {
        let url = request
            .to_url(&self.base_url()?)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        self.get_json(url).await
    }

    async fn fetch_stats(&self) -> Result<Statistics, FetchError> {
        let mut url = self.base_url()?;
        url.set_query(None);
        url.path_segments_mut()
            .map_err(|()| {
                FetchError::new(FailureKind::InvalidUrl, "base url cannot carry a path")
            })?
            .pop_if_empty()
            .push("stats");
        self.get_json(url).await
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return FetchError::new(FailureKind::Parse, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
