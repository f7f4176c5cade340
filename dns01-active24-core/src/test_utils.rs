//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use dns01_active24_provider::Result as ProviderResult;
use serde_json::json;
use tokio::sync::RwLock;

use crate::error::ProviderError;
use crate::traits::{InMemoryCredentialStore, RecordReconciler, ReconcilerFactory, SecretData};
use crate::types::{ChallengeAction, ChallengeRequest, DnsRecord, ProviderConfig, ReconcileOutcome};

// ===== MockReconciler =====

/// 内存中的 reconciler：按四个字段精确匹配，记录每次调用
#[derive(Default)]
pub struct MockReconciler {
    records: RwLock<Vec<DnsRecord>>,
    calls: RwLock<Vec<(ChallengeAction, DnsRecord)>>,
    /// 如果 Some，create/delete 返回此错误
    error: RwLock<Option<ProviderError>>,
}

impl MockReconciler {
    pub async fn fail_with(&self, err: ProviderError) {
        *self.error.write().await = Some(err);
    }

    pub async fn records(&self) -> Vec<DnsRecord> {
        self.records.read().await.clone()
    }

    pub async fn calls(&self) -> Vec<(ChallengeAction, DnsRecord)> {
        self.calls.read().await.clone()
    }

    async fn record_call(&self, action: ChallengeAction, record: &DnsRecord) -> ProviderResult<()> {
        self.calls.write().await.push((action, record.clone()));
        match self.error.read().await.clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl RecordReconciler for MockReconciler {
    fn zone(&self) -> &str {
        "example.com"
    }

    async fn create_record(&self, record: &DnsRecord) -> ProviderResult<ReconcileOutcome> {
        self.record_call(ChallengeAction::Present, record).await?;
        let mut records = self.records.write().await;
        if let Some(pos) = records.iter().position(|r| r == record) {
            return Ok(ReconcileOutcome::AlreadyExists { id: pos as u64 + 1 });
        }
        records.push(record.clone());
        Ok(ReconcileOutcome::Created)
    }

    async fn delete_record(&self, record: &DnsRecord) -> ProviderResult<ReconcileOutcome> {
        self.record_call(ChallengeAction::CleanUp, record).await?;
        let mut records = self.records.write().await;
        match records.iter().position(|r| r == record) {
            Some(pos) => {
                records.remove(pos);
                Ok(ReconcileOutcome::Deleted { id: pos as u64 + 1 })
            }
            None => Ok(ReconcileOutcome::AlreadyGone),
        }
    }
}

// ===== MockFactory =====

/// 总是返回同一个 `MockReconciler`，并记录收到的配置
pub struct MockFactory {
    pub reconciler: Arc<MockReconciler>,
    configs: Mutex<Vec<ProviderConfig>>,
    fail: bool,
}

impl MockFactory {
    pub fn new() -> Self {
        Self {
            reconciler: Arc::new(MockReconciler::default()),
            configs: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    /// 每次 create 都返回错误
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    pub fn configs(&self) -> Vec<ProviderConfig> {
        self.configs.lock().expect("configs lock poisoned").clone()
    }
}

impl ReconcilerFactory for MockFactory {
    fn create(&self, config: ProviderConfig) -> ProviderResult<Arc<dyn RecordReconciler>> {
        self.configs
            .lock()
            .expect("configs lock poisoned")
            .push(config);
        if self.fail {
            return Err(ProviderError::InvalidParameter {
                param: "base_url".to_string(),
                detail: "mock failure".to_string(),
            });
        }
        Ok(self.reconciler.clone())
    }
}

// ===== 测试数据 =====

pub fn challenge() -> ChallengeRequest {
    ChallengeRequest {
        resolved_fqdn: "_acme-challenge.example.com.".to_string(),
        resolved_zone: "example.com.".to_string(),
        key: "abc123".to_string(),
        resource_namespace: "default".to_string(),
        config: Some(json!({ "apiKeySecretRef": { "name": "active24-credentials" } })),
    }
}

pub fn secret_data() -> SecretData {
    SecretData::from([
        ("apiKey".to_string(), "test-key".to_string()),
        ("apiSecret".to_string(), "test-secret".to_string()),
        ("serviceId".to_string(), "12345".to_string()),
    ])
}

/// 包含 `default/active24-credentials` 的凭证存储
pub async fn credential_store() -> Arc<InMemoryCredentialStore> {
    let store = InMemoryCredentialStore::new();
    store
        .insert("default", "active24-credentials", secret_data())
        .await;
    Arc::new(store)
}
