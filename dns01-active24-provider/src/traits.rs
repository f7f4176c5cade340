use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{DnsRecord, ProviderConfig, ReconcileOutcome};

/// Idempotent create/delete of a single record.
///
/// Implementations query the provider before every mutation and hold no state
/// between calls. Any lookup or transport error aborts the call unchanged.
#[async_trait]
pub trait RecordReconciler: Send + Sync {
    /// Zone the reconciler's record names are relative to.
    fn zone(&self) -> &str;

    /// Make sure exactly one record equal to `record` exists.
    ///
    /// Sends nothing when a matching record is already present.
    async fn create_record(&self, record: &DnsRecord) -> Result<ReconcileOutcome>;

    /// Make sure no record equal to `record` exists.
    ///
    /// Sends nothing when no matching record is present.
    async fn delete_record(&self, record: &DnsRecord) -> Result<ReconcileOutcome>;
}

/// Builds one [`RecordReconciler`] per provider account configuration.
pub trait ReconcilerFactory: Send + Sync {
    fn create(&self, config: ProviderConfig) -> Result<Arc<dyn RecordReconciler>>;
}
