//! Active24 account credentials

use std::collections::HashMap;
use std::fmt;

use crate::error::{CoreError, CoreResult};

pub const API_KEY_DATA_KEY: &str = "apiKey";
pub const API_SECRET_DATA_KEY: &str = "apiSecret";
pub const SERVICE_ID_DATA_KEY: &str = "serviceId";

/// Credentials loaded from a secret.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: String,
    pub api_secret: String,
    pub service_id: String,
}

impl Credentials {
    /// Build credentials from raw secret data.
    ///
    /// `reference` (`<namespace>/<name>`) is only used in error messages.
    /// A missing key or an empty value is a [`CoreError::CredentialError`].
    pub fn from_secret_data(data: &HashMap<String, String>, reference: &str) -> CoreResult<Self> {
        let field = |key: &str| -> CoreResult<String> {
            match data.get(key).map(|v| v.trim()) {
                Some(value) if !value.is_empty() => Ok(value.to_string()),
                Some(_) => Err(CoreError::CredentialError(format!(
                    "secret {reference} has an empty '{key}'"
                ))),
                None => Err(CoreError::CredentialError(format!(
                    "secret {reference} has no '{key}'"
                ))),
            }
        };

        Ok(Self {
            api_key: field(API_KEY_DATA_KEY)?,
            api_secret: field(API_SECRET_DATA_KEY)?,
            service_id: field(SERVICE_ID_DATA_KEY)?,
        })
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<REDACTED>")
            .field("service_id", &self.service_id)
            .finish()
    }
}
