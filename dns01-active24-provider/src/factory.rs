//! Reconciler factory functions.

use std::sync::Arc;
use std::time::Duration;

use crate::client::Active24Client;
use crate::error::Result;
use crate::traits::{RecordReconciler, ReconcilerFactory};
use crate::types::ProviderConfig;

/// Creates a [`RecordReconciler`] for the given account configuration,
/// talking to the production API.
///
/// # Examples
///
/// ```rust,no_run
/// use dns01_active24_provider::{create_reconciler, ProviderConfig};
///
/// let reconciler = create_reconciler(ProviderConfig::new(
///     "api-key", "api-secret", "example.com", "12345",
/// )).unwrap();
/// ```
pub fn create_reconciler(config: ProviderConfig) -> Result<Arc<dyn RecordReconciler>> {
    Active24Factory::default().create(config)
}

/// [`ReconcilerFactory`] producing [`Active24Client`]s.
///
/// Client overrides set here apply to every client it builds.
#[derive(Debug, Clone, Default)]
pub struct Active24Factory {
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl Active24Factory {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl ReconcilerFactory for Active24Factory {
    fn create(&self, config: ProviderConfig) -> Result<Arc<dyn RecordReconciler>> {
        let mut builder = Active24Client::builder(config);
        if let Some(base_url) = &self.base_url {
            builder = builder.base_url(base_url.clone());
        }
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Arc::new(builder.build()?))
    }
}
