//! HTTP transport for querying the address-echo service

use crate::errors::{CheckerError, Result};
use crate::observation::Observation;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tokio::time::timeout;
use tracing::debug;

/// Anything that can produce the caller's external address.
///
/// The poller only talks to this trait, so tests drive it with scripted
/// fakes instead of a live endpoint.
#[async_trait]
pub trait AddressSource: Send + Sync {
    /// Perform one timed fetch of the external address.
    async fn fetch_address(&self) -> Result<Observation>;
}

/// Address source backed by a single shared HTTP client.
#[derive(Debug, Clone)]
pub struct HttpAddressSource {
    client: Client,
    endpoint: String,
    request_timeout: Duration,
}

impl HttpAddressSource {
    /// Create the source, building the shared client once.
    ///
    /// The session timeout bounds every request the client ever makes; the
    /// per-request timeout is applied around each fetch.
    pub fn new(
        endpoint: String,
        request_timeout: Duration,
        session_timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(session_timeout)
            .user_agent(format!("egress_ip_checker/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(CheckerError::Http)?;

        Ok(Self {
            client,
            endpoint,
            request_timeout,
        })
    }

    async fn request_body(&self) -> Result<String> {
        let response = self.client.get(&self.endpoint).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CheckerError::UnexpectedStatus(status));
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl AddressSource for HttpAddressSource {
    async fn fetch_address(&self) -> Result<Observation> {
        debug!("Fetching external address from {}", self.endpoint);

        let body = timeout(self.request_timeout, self.request_body())
            .await
            .map_err(|_| CheckerError::Timeout(self.request_timeout))??;

        Observation::from_body(&body)
    }
}
