//! # dns01-active24-provider
//!
//! Client for the DNS record endpoints of the
//! [Active24](https://www.active24.cz/) REST API, scoped to what ACME DNS-01
//! challenges need: create one TXT record, delete it again.
//!
//! | Layer | Item | Role |
//! |-------|------|------|
//! | Signer | [`sign`] | HMAC-SHA1 over `"<METHOD> <PATH> <unix-seconds>"`, hex |
//! | Transport | [`Active24Client::send`] | Signed request, status >= 400 becomes [`ProviderError::HttpStatus`] |
//! | Matcher | [`Active24Client::find_records`], [`Active24Client::record_id`] | Lookup, resolve to at most one id |
//! | Reconciler | [`RecordReconciler`] | Idempotent create/delete |
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: use the platform's native TLS implementation.
//! - **`rustls`**: use rustls.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dns01_active24_provider::{create_reconciler, DnsRecord, ProviderConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let reconciler = create_reconciler(ProviderConfig::new(
//!         "api-key",
//!         "api-secret",
//!         "example.com",
//!         "12345",
//!     ))?;
//!
//!     let record = DnsRecord::txt("_acme-challenge", "token", 300);
//!     reconciler.create_record(&record).await?;
//!     // ... validation happens ...
//!     reconciler.delete_record(&record).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Nothing is retried. Every lookup or transport failure is returned as is:
//!
//! - [`ProviderError::HttpStatus`]: the API answered with status >= 400 (body kept verbatim)
//! - [`ProviderError::Timeout`] / [`ProviderError::NetworkError`]: the request did not complete
//! - [`ProviderError::ParseError`]: the response was not the expected JSON
//! - [`ProviderError::AmbiguousMatch`]: the lookup did not resolve to one exact record
//!
//! [`ProviderError::is_transient`] tells a caller whether retrying later can help.

mod client;
mod error;
mod factory;
mod http_client;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{PROVIDER_NAME, ProviderError, Result};

// Re-export client and its building blocks
pub use client::{Active24Client, Active24ClientBuilder, relative_name, resolve_record_id, sign};

// Re-export factory
pub use factory::{Active24Factory, create_reconciler};

pub use traits::{RecordReconciler, ReconcilerFactory};

// Re-export types
pub use types::{
    DnsFilters, DnsRecord, DnsRecordWithId, LookupQuery, ProviderConfig, ReconcileOutcome,
    RecordList, TXT_RECORD_TYPE,
};

// Re-export utils module
pub use utils::datetime;
