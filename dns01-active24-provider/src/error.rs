use serde::{Deserialize, Serialize};

use crate::types::{DnsRecord, DnsRecordWithId};

/// Identifier used as the prefix of every rendered error.
pub const PROVIDER_NAME: &str = "active24";

/// Error type for all Active24 record operations.
///
/// All variants are serializable for structured error reporting.
///
/// # Transient Errors
///
/// The following variants represent failures that may succeed if the whole
/// operation is attempted again later:
/// - [`NetworkError`](Self::NetworkError): network connectivity issues
/// - [`Timeout`](Self::Timeout): request timed out
/// - [`HttpStatus`](Self::HttpStatus) with status 429 or 5xx
///
/// The client itself never retries; see [`is_transient`](Self::is_transient).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Error details.
        detail: String,
    },

    /// The HTTP request did not complete within the configured timeout.
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The API answered with an HTTP status of 400 or above.
    HttpStatus {
        /// HTTP status code.
        status: u16,
        /// Response body, verbatim.
        body: String,
    },

    /// Failed to decode the API response.
    ParseError {
        /// Details about the parse failure.
        detail: String,
        /// The raw payload that could not be decoded.
        raw: String,
    },

    /// Failed to serialize a request body.
    SerializationError {
        /// Details about the serialization failure.
        detail: String,
    },

    /// A lookup did not resolve to exactly one record equal to the expected one.
    ///
    /// Raised for two or more candidates, and for a single candidate whose
    /// fields differ from the expected record after zone normalization.
    AmbiguousMatch {
        /// The record the lookup was made for.
        expected: DnsRecord,
        /// What the provider returned.
        found: Vec<DnsRecordWithId>,
    },

    /// A client parameter is invalid (e.g. malformed base URL).
    InvalidParameter {
        /// Name of the invalid parameter.
        param: String,
        /// Description of what's wrong.
        detail: String,
    },
}

impl ProviderError {
    /// Whether retrying the whole operation later has a chance to succeed.
    ///
    /// Used by hosts that own a retry policy; the client never retries.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::NetworkError { .. } | Self::Timeout { .. } => true,
            Self::HttpStatus { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    /// 是否为预期行为（用户输入、凭证错误等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::HttpStatus { status, .. } => (400..500).contains(status) && *status != 429,
            Self::AmbiguousMatch { .. } | Self::InvalidParameter { .. } => true,
            _ => false,
        }
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { detail } => {
                write!(f, "[{PROVIDER_NAME}] Network error: {detail}")
            }
            Self::Timeout { detail } => {
                write!(f, "[{PROVIDER_NAME}] Request timeout: {detail}")
            }
            Self::HttpStatus { status, body } => {
                write!(f, "[{PROVIDER_NAME}] API request failed (HTTP {status}): {body}")
            }
            Self::ParseError { detail, raw } => {
                write!(
                    f,
                    "[{PROVIDER_NAME}] Failed to decode API response {raw}: {detail}"
                )
            }
            Self::SerializationError { detail } => {
                write!(f, "[{PROVIDER_NAME}] Serialization error: {detail}")
            }
            Self::AmbiguousMatch { expected, found } => {
                let found = found
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(
                    f,
                    "[{PROVIDER_NAME}] Expected record {expected}, found [{found}]"
                )
            }
            Self::InvalidParameter { param, detail } => {
                write!(f, "[{PROVIDER_NAME}] Invalid parameter '{param}': {detail}")
            }
        }
    }
}

impl std::error::Error for ProviderError {}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;
