//! 类型定义模块

mod challenge;
mod config;
mod credentials;

pub use challenge::{ChallengeAction, ChallengeRequest};
pub use config::{SecretKeySelector, SolverConfig};
pub use credentials::{API_KEY_DATA_KEY, API_SECRET_DATA_KEY, Credentials, SERVICE_ID_DATA_KEY};

// Re-export provider 库的公共类型
pub use dns01_active24_provider::{DnsRecord, ProviderConfig, ReconcileOutcome};
