//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use dns01_active24_provider::ProviderError;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Credentials could not be loaded (missing secret, missing key, empty value)
    #[error("Credential error: {0}")]
    CredentialError(String),

    /// The solver config blob could not be decoded
    #[error("Config error: {0}")]
    ConfigError(String),

    /// `present`/`cleanup` called before `initialize`
    #[error("Solver not initialized: no credential store installed")]
    NotInitialized,

    /// Provider error (converting from library)
    #[error("{0}")]
    Provider(#[from] ProviderError),
}

impl CoreError {
    /// Whether it is expected behavior (bad user configuration, rejected request), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::CredentialError(_) | Self::ConfigError(_) => true,
            Self::NotInitialized => false,
            Self::Provider(e) => e.is_expected(),
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
