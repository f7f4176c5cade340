//! Platform adapters for the solver core

mod credential_store;

pub use credential_store::{DEFAULT_SECRETS_DIR, FileCredentialStore, SECRETS_DIR_ENV};
