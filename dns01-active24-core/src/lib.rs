//! ACME DNS-01 solver core for Active24
//!
//! Turns a challenge request from an ACME host into a TXT record operation:
//! - decodes the solver config blob (`apiKeySecretRef`)
//! - loads the account credentials through a [`CredentialStore`]
//! - builds a reconciler for the challenge zone and creates or deletes the record
//!
//! The library holds no process-wide state. The credential store is installed with
//! [`ChallengeSolver::initialize`], the reconciler factory is injected at construction.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

pub mod error;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::{ChallengeSolver, SOLVER_NAME};
pub use traits::{CredentialStore, InMemoryCredentialStore};
pub use types::{ChallengeAction, ChallengeRequest, SolverConfig};
