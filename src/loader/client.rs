use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use tokio::time::timeout;

use crate::catalog::CountryRecord;
use crate::config::SourceConfig;
use crate::loader::error::LoadError;
use crate::loader::CountrySource;

const USER_AGENT: &str = concat!("countrydeck/", env!("CARGO_PKG_VERSION"));

/// Fetches the country list from a REST Countries compatible endpoint.
pub struct RestCountriesClient {
    client: Client,
    endpoint: String,
    request_timeout: Duration,
}

impl RestCountriesClient {
    pub fn new(source: &SourceConfig) -> Result<Self, LoadError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(source.connect_timeout_seconds.into()))
            .user_agent(USER_AGENT)
            .build()
            .map_err(LoadError::Client)?;

        Ok(Self {
            client,
            endpoint: source.endpoint.clone(),
            request_timeout: Duration::from_secs(source.timeout_seconds.into()),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn do_fetch(&self) -> Result<Vec<CountryRecord>, LoadError> {
        let response = self
            .client
            .get(&self.endpoint)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| LoadError::Transport {
                endpoint: self.endpoint.clone(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| LoadError::Transport {
            endpoint: self.endpoint.clone(),
            source: e,
        })?;

        serde_json::from_slice(&body).map_err(|e| LoadError::Decode { source: e })
    }
}

#[async_trait]
impl CountrySource for RestCountriesClient {
    async fn fetch_all(&self) -> Result<Vec<CountryRecord>, LoadError> {
        let started = Instant::now();
        tracing::info!(endpoint = %self.endpoint, "Fetching countries");

        let result = match timeout(self.request_timeout, self.do_fetch()).await {
            Ok(result) => result,
            Err(_) => Err(LoadError::Timeout {
                duration: self.request_timeout.as_secs(),
            }),
        };

        let elapsed_ms = started.elapsed().as_millis() as u64;
        match &result {
            Ok(records) => {
                tracing::info!(count = records.len(), elapsed_ms, "Countries loaded");
            }
            Err(err) => {
                tracing::warn!(error = %err, elapsed_ms, "Countries fetch failed");
            }
        }
        result
    }
}
