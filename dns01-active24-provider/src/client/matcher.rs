//! Record lookup and match resolution

use reqwest::Method;

use crate::error::{ProviderError, Result};
use crate::http_client::HttpUtils;
use crate::types::{DnsRecord, DnsRecordWithId, RecordList};

use super::Active24Client;

/// Make a record name returned by the API relative to `zone`.
///
/// A trailing dot on either side is ignored. Names outside the zone are
/// returned unchanged (minus the trailing dot).
///
/// 如: "_acme-challenge.example.com" + "example.com" -> "_acme-challenge"
pub fn relative_name(name: &str, zone: &str) -> String {
    let name = name.trim_end_matches('.');
    let zone = zone.trim_end_matches('.');
    if zone.is_empty() {
        return name.to_string();
    }

    name.strip_suffix(zone)
        .and_then(|rest| rest.strip_suffix('.'))
        .filter(|rest| !rest.is_empty())
        .unwrap_or(name)
        .to_string()
}

/// Resolve lookup candidates to the id of the expected record.
///
/// - no candidate: `Ok(None)`
/// - one candidate equal to `expected` once its name is made relative to
///   `zone`: `Ok(Some(id))`
/// - anything else: [`ProviderError::AmbiguousMatch`]; the client never
///   guesses between candidates and never reads a mismatch as absence.
pub fn resolve_record_id(
    expected: &DnsRecord,
    found: Vec<DnsRecordWithId>,
    zone: &str,
) -> Result<Option<u64>> {
    match <[DnsRecordWithId; 1]>::try_from(found) {
        Ok([mut candidate]) => {
            candidate.record.name = relative_name(&candidate.record.name, zone);
            if candidate.record == *expected {
                Ok(Some(candidate.id))
            } else {
                Err(ProviderError::AmbiguousMatch {
                    expected: expected.clone(),
                    found: vec![candidate],
                })
            }
        }
        Err(found) if found.is_empty() => Ok(None),
        Err(found) => Err(ProviderError::AmbiguousMatch {
            expected: expected.clone(),
            found,
        }),
    }
}

impl Active24Client {
    /// Query the records matching all four fields of `record`.
    pub async fn find_records(&self, record: &DnsRecord) -> Result<Vec<DnsRecordWithId>> {
        let payload = HttpUtils::to_json(&record.lookup_query())?;
        let response = self.send(Method::GET, None, Some(payload)).await?;
        let list: RecordList = HttpUtils::parse_json(&response)?;
        Ok(list.data)
    }

    /// Id of the single record equal to `record`, if it exists.
    pub async fn record_id(&self, record: &DnsRecord) -> Result<Option<u64>> {
        let found = self.find_records(record).await?;
        resolve_record_id(record, found, &self.config.dns_zone)
    }
}
