//! RecordReconciler trait 实现

use async_trait::async_trait;
use reqwest::Method;

use crate::error::Result;
use crate::http_client::HttpUtils;
use crate::traits::RecordReconciler;
use crate::types::{DnsRecord, ReconcileOutcome};

use super::Active24Client;

#[async_trait]
impl RecordReconciler for Active24Client {
    fn zone(&self) -> &str {
        &self.config.dns_zone
    }

    async fn create_record(&self, record: &DnsRecord) -> Result<ReconcileOutcome> {
        if let Some(id) = self.record_id(record).await? {
            log::info!("record {record} already exists (id {id})");
            return Ok(ReconcileOutcome::AlreadyExists { id });
        }

        let payload = HttpUtils::to_json(record)?;

        log::info!("creating record {record}");
        self.send(Method::POST, None, Some(payload)).await?;
        Ok(ReconcileOutcome::Created)
    }

    async fn delete_record(&self, record: &DnsRecord) -> Result<ReconcileOutcome> {
        let Some(id) = self.record_id(record).await? else {
            log::info!("record {record} already gone");
            return Ok(ReconcileOutcome::AlreadyGone);
        };

        log::info!("deleting record {record} (id {id})");
        self.send(Method::DELETE, Some(id), None).await?;
        Ok(ReconcileOutcome::Deleted { id })
    }
}
