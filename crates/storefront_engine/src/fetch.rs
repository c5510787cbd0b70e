use std::time::Duration;

use futures_util::StreamExt;

use crate::decode::{decode_categories, decode_products, CategoryRecord, ProductRecord};
use crate::{FailureKind, FetchError};

pub const DEFAULT_BASE_URL: &str = "https://api.escuelajs.co/api/v1";

/// Connection limits and endpoint base for the catalog client.
#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 5 * 1024 * 1024,
        }
    }
}

#[async_trait::async_trait]
pub trait CatalogFetcher: Send + Sync {
    async fn fetch_products(&self) -> Result<Vec<ProductRecord>, FetchError>;
    async fn fetch_categories(&self) -> Result<Vec<CategoryRecord>, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestCatalogFetcher {
    settings: FetchSettings,
}

impl ReqwestCatalogFetcher {
    pub fn new(settings: FetchSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, FetchError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))
    }

    fn endpoint(&self, path: &str) -> Result<reqwest::Url, FetchError> {
        let raw = format!("{}/{}", self.settings.base_url.trim_end_matches('/'), path);
        reqwest::Url::parse(&raw)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))
    }

    async fn get_body(&self, path: &str) -> Result<Vec<u8>, FetchError> {
        let url = self.endpoint(path)?;
        let client = self.build_client()?;

        let response = client.get(url).send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes: self.settings.max_bytes,
                        actual: Some(content_len),
                    },
                    "response too large",
                ));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes: self.settings.max_bytes,
                        actual: Some(next_len),
                    },
                    "response too large",
                ));
            }
            bytes.extend_from_slice(&chunk);
        }

        Ok(bytes)
    }
}

#[async_trait::async_trait]
impl CatalogFetcher for ReqwestCatalogFetcher {
    async fn fetch_products(&self) -> Result<Vec<ProductRecord>, FetchError> {
        let bytes = self.get_body("products").await?;
        decode_products(&bytes)
            .map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))
    }

    async fn fetch_categories(&self) -> Result<Vec<CategoryRecord>, FetchError> {
        let bytes = self.get_body("categories").await?;
        decode_categories(&bytes)
            .map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
