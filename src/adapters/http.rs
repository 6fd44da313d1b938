use crate::domain::ports::{BackendClient, ConfigProvider};
use crate::utils::error::{FrontError, Result};
use reqwest::Client;
use url::Url;

/// HTTP client capability backed by reqwest. Resolves relative paths
/// against the configured base URL.
pub struct HttpBackend {
    base_url: Url,
    client: Client,
}

impl HttpBackend {
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            base_url: Url::parse(base_url)?,
            client: Client::new(),
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(config.backend_url())
    }
}

#[async_trait::async_trait]
impl BackendClient for HttpBackend {
    async fn get(&self, path: &str) -> Result<Vec<u8>> {
        let url = self.base_url.join(path)?;

        tracing::debug!("Making API request to: {}", url);
        let response = self.client.get(url).send().await?;
        tracing::debug!("API response status: {}", response.status());

        if !response.status().is_success() {
            return Err(FrontError::StatusError {
                status: response.status().as_u16(),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}
