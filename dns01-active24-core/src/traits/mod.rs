//! Storage layer abstraction trait definition

mod credential_store;

pub use credential_store::{CredentialStore, InMemoryCredentialStore, SecretData};

// Re-export reconciler seams of the provider library
pub use dns01_active24_provider::{RecordReconciler, ReconcilerFactory};
