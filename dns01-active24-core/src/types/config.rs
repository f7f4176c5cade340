//! Solver config blob

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Reference to the secret holding the Active24 account credentials.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretKeySelector {
    /// Name of the secret within the challenge's resource namespace
    #[serde(default)]
    pub name: String,
    /// Ignored. The data keys are fixed: `apiKey`, `apiSecret`, `serviceId`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

/// Decoded form of [`ChallengeRequest::config`](crate::types::ChallengeRequest::config).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolverConfig {
    #[serde(default)]
    pub api_key_secret_ref: SecretKeySelector,
}

impl SolverConfig {
    /// Decode the config blob. An absent blob yields the default config.
    pub fn from_blob(blob: Option<&serde_json::Value>) -> CoreResult<Self> {
        match blob {
            None | Some(serde_json::Value::Null) => Ok(Self::default()),
            Some(value) => Self::deserialize(value)
                .map_err(|e| CoreError::ConfigError(format!("error decoding solver config: {e}"))),
        }
    }
}
