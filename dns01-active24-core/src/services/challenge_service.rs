//! ACME DNS-01 challenge 服务

use std::sync::Arc;

use dns01_active24_provider::{Active24Factory, TXT_RECORD_TYPE, relative_name};
use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::traits::{CredentialStore, RecordReconciler, ReconcilerFactory};
use crate::types::{
    ChallengeAction, ChallengeRequest, Credentials, DnsRecord, ProviderConfig, ReconcileOutcome,
    SecretKeySelector, SolverConfig,
};

/// Name the host routes challenges for this solver by.
pub const SOLVER_NAME: &str = "active24cz";

/// TTL of the challenge TXT record, in seconds.
pub const CHALLENGE_RECORD_TTL: u32 = 300;

/// DNS-01 challenge solver for Active24.
///
/// Every call loads its own credentials and builds its own reconciler, so
/// `present`/`cleanup` for different challenges may run concurrently.
pub struct ChallengeSolver {
    factory: Arc<dyn ReconcilerFactory>,
    credential_store: RwLock<Option<Arc<dyn CredentialStore>>>,
}

impl ChallengeSolver {
    /// 创建使用生产 API 的 solver
    #[must_use]
    pub fn new() -> Self {
        Self::with_factory(Arc::new(Active24Factory::new()))
    }

    /// 使用自定义 reconciler 工厂创建 solver
    #[must_use]
    pub fn with_factory(factory: Arc<dyn ReconcilerFactory>) -> Self {
        Self {
            factory,
            credential_store: RwLock::new(None),
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        SOLVER_NAME
    }

    /// 安装凭证存储，必须在 `present`/`cleanup` 之前调用
    pub async fn initialize(&self, credential_store: Arc<dyn CredentialStore>) {
        *self.credential_store.write().await = Some(credential_store);
        log::debug!("solver {SOLVER_NAME} initialized");
    }

    /// 发布 challenge TXT 记录（幂等）
    pub async fn present(&self, challenge: &ChallengeRequest) -> CoreResult<ReconcileOutcome> {
        self.solve(ChallengeAction::Present, challenge).await
    }

    /// 删除 challenge TXT 记录（幂等）
    ///
    /// 只删除内容等于 challenge key 的记录，同名的其他记录不受影响。
    pub async fn cleanup(&self, challenge: &ChallengeRequest) -> CoreResult<ReconcileOutcome> {
        self.solve(ChallengeAction::CleanUp, challenge).await
    }

    /// 按 action 分发到 create/delete
    pub async fn solve(
        &self,
        action: ChallengeAction,
        challenge: &ChallengeRequest,
    ) -> CoreResult<ReconcileOutcome> {
        let reconciler = self.reconciler_for(challenge).await?;
        let record = challenge_record(challenge);

        log::debug!(
            "{action} {} in zone {} (namespace {})",
            record,
            reconciler.zone(),
            challenge.resource_namespace
        );

        let result = match action {
            ChallengeAction::Present => reconciler.create_record(&record).await,
            ChallengeAction::CleanUp => reconciler.delete_record(&record).await,
        };

        result.map_err(|e| {
            let err = CoreError::from(e);
            if err.is_expected() {
                log::warn!("{action} {} failed: {err}", challenge.resolved_fqdn);
            } else {
                log::error!("{action} {} failed: {err}", challenge.resolved_fqdn);
            }
            err
        })
    }

    async fn reconciler_for(
        &self,
        challenge: &ChallengeRequest,
    ) -> CoreResult<Arc<dyn RecordReconciler>> {
        let store = self
            .credential_store
            .read()
            .await
            .clone()
            .ok_or(CoreError::NotInitialized)?;

        let config = SolverConfig::from_blob(challenge.config.as_ref())?;
        let credentials = load_credentials(
            store.as_ref(),
            &challenge.resource_namespace,
            &config.api_key_secret_ref,
        )
        .await?;

        Ok(self.factory.create(provider_config(challenge, credentials))?)
    }
}

impl Default for ChallengeSolver {
    fn default() -> Self {
        Self::new()
    }
}

async fn load_credentials(
    store: &dyn CredentialStore,
    namespace: &str,
    reference: &SecretKeySelector,
) -> CoreResult<Credentials> {
    if reference.name.trim().is_empty() {
        return Err(CoreError::CredentialError(format!(
            "failed to load secret {namespace}/: apiKeySecretRef.name is not set"
        )));
    }
    store.get_credential(namespace, reference).await
}

/// Account configuration for a challenge: loaded credentials, zone without trailing dot.
pub fn provider_config(challenge: &ChallengeRequest, credentials: Credentials) -> ProviderConfig {
    ProviderConfig::new(
        credentials.api_key,
        credentials.api_secret,
        challenge.resolved_zone.trim_end_matches('.'),
        credentials.service_id,
    )
}

/// The TXT record a challenge asks for, named relative to its zone.
///
/// `_acme-challenge.example.com.` in zone `example.com.` becomes `_acme-challenge`.
pub fn challenge_record(challenge: &ChallengeRequest) -> DnsRecord {
    DnsRecord {
        record_type: TXT_RECORD_TYPE.to_string(),
        name: relative_name(&challenge.resolved_fqdn, &challenge.resolved_zone),
        content: challenge.key.clone(),
        ttl: CHALLENGE_RECORD_TTL,
    }
}
