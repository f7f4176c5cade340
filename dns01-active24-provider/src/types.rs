//! Active24 DNS API types

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Record type used for ACME DNS-01 challenges.
pub const TXT_RECORD_TYPE: &str = "TXT";

// ============ Client configuration ============

/// Credentials and target scope for one Active24 account.
///
/// `dns_zone` is the zone name without a trailing dot (e.g. `example.com`);
/// record names returned by the API are made relative to it.
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    pub api_key: String,
    pub api_secret: String,
    pub dns_zone: String,
    pub service_id: String,
}

impl ProviderConfig {
    pub fn new(
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
        dns_zone: impl Into<String>,
        service_id: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            dns_zone: dns_zone.into(),
            service_id: service_id.into(),
        }
    }
}

// Custom Debug implementation that hides the credentials
impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_key", &"<REDACTED>")
            .field("api_secret", &"<REDACTED>")
            .field("dns_zone", &self.dns_zone)
            .field("service_id", &self.service_id)
            .finish()
    }
}

// ============ Records ============

/// A logical DNS record, as sent to and compared against the API.
///
/// `name` is relative to the configured zone. Two records are equal iff all
/// four fields are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DnsRecord {
    #[serde(rename = "type")]
    pub record_type: String,
    pub name: String,
    pub content: String,
    pub ttl: u32,
}

impl DnsRecord {
    /// Build a TXT record.
    pub fn txt(name: impl Into<String>, content: impl Into<String>, ttl: u32) -> Self {
        Self {
            record_type: TXT_RECORD_TYPE.to_string(),
            name: name.into(),
            content: content.into(),
            ttl,
        }
    }

    /// Server-side lookup query matching this record.
    pub fn lookup_query(&self) -> LookupQuery {
        LookupQuery {
            filters: DnsFilters {
                name: self.name.clone(),
                record_type: vec![self.record_type.clone()],
                content: self.content.clone(),
                ttl: self.ttl,
            },
        }
    }
}

impl fmt::Display for DnsRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} \"{}\" (ttl {})",
            self.record_type, self.name, self.content, self.ttl
        )
    }
}

/// A record as returned by the API, with its provider-assigned id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsRecordWithId {
    pub id: u64,
    #[serde(flatten)]
    pub record: DnsRecord,
}

impl fmt::Display for DnsRecordWithId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {}", self.id, self.record)
    }
}

// ============ Lookup ============

/// Record filters understood by the list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DnsFilters {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: Vec<String>,
    pub content: String,
    pub ttl: u32,
}

/// Body of the record lookup request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupQuery {
    pub filters: DnsFilters,
}

/// Response envelope of the record lookup request.
#[derive(Debug, Default, Deserialize)]
pub struct RecordList {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub data: Vec<DnsRecordWithId>,
}

/// `null` decodes the same as a missing list.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

// ============ Reconciliation ============

/// What a create/delete call actually did.
///
/// Informational only: every variant is a success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum ReconcileOutcome {
    /// The record was created.
    Created,
    /// A matching record already existed; nothing was sent.
    AlreadyExists { id: u64 },
    /// The record with this id was deleted.
    Deleted { id: u64 },
    /// No matching record existed; nothing was sent.
    AlreadyGone,
}
