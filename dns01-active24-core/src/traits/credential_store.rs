//! 凭证存储抽象 Trait

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::types::{Credentials, SecretKeySelector};

/// 原始 secret 数据：data key -> value
pub type SecretData = HashMap<String, String>;

/// 凭证存储 Trait
///
/// 实现:
/// - `InMemoryCredentialStore`（测试、嵌入使用）
/// - CLI: `FileCredentialStore`（挂载的 secret 目录）
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// 获取 Active24 账户凭证
    ///
    /// # Arguments
    /// * `namespace` - challenge 的 resource namespace
    /// * `reference` - config 中的 `apiKeySecretRef`
    ///
    /// # Errors
    /// secret 不存在、缺少 key 或值为空时返回 `CoreError::CredentialError`，
    /// 错误信息包含 `<namespace>/<name>`。
    async fn get_credential(
        &self,
        namespace: &str,
        reference: &SecretKeySelector,
    ) -> CoreResult<Credentials>;
}

/// In-memory credential store
///
/// Secrets are indexed by `(namespace, name)`.
#[derive(Clone, Default)]
pub struct InMemoryCredentialStore {
    secrets: Arc<RwLock<HashMap<(String, String), SecretData>>>,
}

impl InMemoryCredentialStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a secret.
    pub async fn insert(
        &self,
        namespace: impl Into<String>,
        name: impl Into<String>,
        data: SecretData,
    ) {
        self.secrets
            .write()
            .await
            .insert((namespace.into(), name.into()), data);
    }

    pub async fn remove(&self, namespace: &str, name: &str) {
        self.secrets
            .write()
            .await
            .remove(&(namespace.to_string(), name.to_string()));
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn get_credential(
        &self,
        namespace: &str,
        reference: &SecretKeySelector,
    ) -> CoreResult<Credentials> {
        let label = format!("{namespace}/{}", reference.name);
        let secrets = self.secrets.read().await;
        let data = secrets
            .get(&(namespace.to_string(), reference.name.clone()))
            .ok_or_else(|| {
                CoreError::CredentialError(format!("failed to load secret {label}: not found"))
            })?;
        Credentials::from_secret_data(data, &label)
    }
}
