//! Challenge request types

use std::fmt;

use serde::{Deserialize, Serialize};

/// A DNS-01 challenge as handed over by the ACME host.
///
/// Accepts the host's camelCase JSON, e.g.
///
/// ```json
/// {
///   "resolvedFQDN": "_acme-challenge.example.com.",
///   "resolvedZone": "example.com.",
///   "key": "abc123",
///   "resourceNamespace": "default",
///   "config": { "apiKeySecretRef": { "name": "active24-credentials" } }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeRequest {
    /// Fully qualified name of the TXT record, usually with a trailing dot
    #[serde(rename = "resolvedFQDN")]
    pub resolved_fqdn: String,
    /// Zone the record lives in, usually with a trailing dot
    pub resolved_zone: String,
    /// Challenge token, the TXT record content
    pub key: String,
    /// Namespace the credential reference is resolved in
    #[serde(default)]
    pub resource_namespace: String,
    /// Solver specific config blob, see [`SolverConfig`](crate::types::SolverConfig)
    #[serde(default)]
    pub config: Option<serde_json::Value>,
}

/// Which side of the challenge lifecycle to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChallengeAction {
    /// Publish the TXT record
    Present,
    /// Remove the TXT record
    #[serde(rename = "cleanup")]
    CleanUp,
}

impl fmt::Display for ChallengeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present => write!(f, "present"),
            Self::CleanUp => write!(f, "cleanup"),
        }
    }
}
