//! File-based credential store
//!
//! Reads secrets laid out the way a mounted secret volume is:
//!
//! ```text
//! <root>/<namespace>/<name>/apiKey
//! <root>/<namespace>/<name>/apiSecret
//! <root>/<namespace>/<name>/serviceId
//! ```

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use dns01_active24_core::error::{CoreError, CoreResult};
use dns01_active24_core::traits::{CredentialStore, SecretData};
use dns01_active24_core::types::{
    API_KEY_DATA_KEY, API_SECRET_DATA_KEY, Credentials, SERVICE_ID_DATA_KEY, SecretKeySelector,
};

/// Environment variable overriding the secrets root directory.
pub const SECRETS_DIR_ENV: &str = "DNS01_SECRETS_DIR";

/// Secrets root used when [`SECRETS_DIR_ENV`] is not set.
pub const DEFAULT_SECRETS_DIR: &str = "/var/run/secrets/dns01";

/// Credential store reading one file per secret data key.
pub struct FileCredentialStore {
    root: PathBuf,
}

impl FileCredentialStore {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Store rooted at `$DNS01_SECRETS_DIR`, or the default directory.
    #[must_use]
    pub fn from_env() -> Self {
        let root = std::env::var(SECRETS_DIR_ENV)
            .ok()
            .filter(|dir| !dir.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SECRETS_DIR.to_string());
        Self::new(root)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn secret_dir(&self, namespace: &str, name: &str) -> CoreResult<PathBuf> {
        for (what, segment) in [("namespace", namespace), ("secret name", name)] {
            if segment.is_empty()
                || segment == "."
                || segment == ".."
                || segment.contains(['/', '\\'])
            {
                return Err(CoreError::CredentialError(format!(
                    "invalid {what} '{segment}' in secret reference {namespace}/{name}"
                )));
            }
        }
        Ok(self.root.join(namespace).join(name))
    }
}

#[async_trait]
impl CredentialStore for FileCredentialStore {
    async fn get_credential(
        &self,
        namespace: &str,
        reference: &SecretKeySelector,
    ) -> CoreResult<Credentials> {
        let label = format!("{namespace}/{}", reference.name);
        let dir = self.secret_dir(namespace, &reference.name)?;

        if !tokio::fs::metadata(&dir).await.is_ok_and(|m| m.is_dir()) {
            return Err(CoreError::CredentialError(format!(
                "failed to load secret {label}: directory '{}' not found",
                dir.display()
            )));
        }

        let mut data = SecretData::new();
        for key in [API_KEY_DATA_KEY, API_SECRET_DATA_KEY, SERVICE_ID_DATA_KEY] {
            let path = dir.join(key);
            match tokio::fs::read_to_string(&path).await {
                Ok(value) => {
                    data.insert(key.to_string(), value);
                }
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => {
                    return Err(CoreError::CredentialError(format!(
                        "failed to read '{}' of secret {label}: {e}",
                        path.display()
                    )));
                }
            }
        }

        tracing::debug!(secret = %label, "Loaded credentials from {}", dir.display());
        Credentials::from_secret_data(&data, &label)
    }
}
