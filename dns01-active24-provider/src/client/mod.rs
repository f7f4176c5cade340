//! Active24 REST API client

mod http;
mod matcher;
mod reconcile;
mod sign;

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::{ProviderError, Result};
use crate::types::ProviderConfig;

pub use matcher::{relative_name, resolve_record_id};
pub use sign::sign;

pub(crate) const ACTIVE24_API_BASE: &str = "https://rest.active24.cz";
/// 默认连接超时
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
/// 默认请求超时
pub(crate) const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Client for the DNS record endpoints of one Active24 service.
///
/// Holds no state besides its configuration: every operation re-queries the
/// API. Each method performs its HTTP calls sequentially and never retries.
pub struct Active24Client {
    pub(crate) client: Client,
    pub(crate) config: ProviderConfig,
    pub(crate) base_url: String,
}

/// Active24 Client Builder
pub struct Active24ClientBuilder {
    config: ProviderConfig,
    base_url: String,
    timeout: Duration,
}

impl Active24ClientBuilder {
    fn new(config: ProviderConfig) -> Self {
        Self {
            config,
            base_url: ACTIVE24_API_BASE.to_string(),
            timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Override the API base URL (scheme + host, optionally a path prefix).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<Active24Client> {
        let base_url = self.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url).map_err(|e| ProviderError::InvalidParameter {
            param: "base_url".to_string(),
            detail: format!("'{base_url}': {e}"),
        })?;

        let client = Client::builder()
            .connect_timeout(DEFAULT_CONNECT_TIMEOUT.min(self.timeout))
            .timeout(self.timeout)
            .build()
            .map_err(|e| ProviderError::InvalidParameter {
                param: "http_client".to_string(),
                detail: e.to_string(),
            })?;

        Ok(Active24Client {
            client,
            config: self.config,
            base_url,
        })
    }
}

impl Active24Client {
    pub fn new(config: ProviderConfig) -> Result<Self> {
        Self::builder(config).build()
    }

    pub fn builder(config: ProviderConfig) -> Active24ClientBuilder {
        Active24ClientBuilder::new(config)
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the record collection, or of one record when `record_id` is set.
    pub fn api_url(&self, record_id: Option<u64>) -> String {
        let suffix = record_id.map(|id| format!("/{id}")).unwrap_or_default();
        format!(
            "{}/v2/service/{}/dns/record{suffix}",
            self.base_url, self.config.service_id
        )
    }
}
