//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use dns01_active24_provider::{
    Active24Client, DnsRecord, DnsRecordWithId, ProviderConfig, datetime, sign,
};
use serde_json::{Value, json};
use wiremock::matchers::path_regex;
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

pub const API_KEY: &str = "test-api-key";
pub const API_SECRET: &str = "test-api-secret";
pub const SERVICE_ID: &str = "12345";
pub const ZONE: &str = "example.com";

/// Path of the record collection for the test service.
pub fn records_path() -> String {
    format!("/v2/service/{SERVICE_ID}/dns/record")
}

pub fn test_config() -> ProviderConfig {
    ProviderConfig::new(API_KEY, API_SECRET, ZONE, SERVICE_ID)
}

/// Client pointed at the given mock server.
pub fn client_for(server: &MockServer) -> Active24Client {
    Active24Client::builder(test_config())
        .base_url(server.uri())
        .build()
        .expect("client should build against mock server")
}

pub fn challenge_record() -> DnsRecord {
    DnsRecord::txt("_acme-challenge", "abc123", 300)
}

/// Lookup response body as the API renders it (fully qualified names).
pub fn lookup_response(records: &[(u64, &DnsRecord)]) -> Value {
    let data: Vec<Value> = records
        .iter()
        .map(|(id, r)| {
            json!({
                "id": id,
                "type": r.record_type,
                "name": format!("{}.{ZONE}", r.name),
                "content": r.content,
                "ttl": r.ttl,
            })
        })
        .collect();
    json!({ "data": data })
}

/// Check the authentication headers of a request the client sent.
///
/// Returns a description of the first problem found.
pub fn verify_signed(request: &Request) -> Result<(), String> {
    let header = |name: &str| {
        request
            .headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string)
            .ok_or_else(|| format!("missing header {name}"))
    };

    let x_date = header("x-date")?;
    let timestamp = chrono::DateTime::parse_from_rfc3339(&x_date)
        .map_err(|e| format!("X-Date '{x_date}' is not RFC3339: {e}"))?
        .timestamp();
    if datetime::format_x_date(timestamp) != x_date {
        return Err(format!("X-Date '{x_date}' is not in UTC seconds form"));
    }

    let authorization = header("authorization")?;
    let encoded = authorization
        .strip_prefix("Basic ")
        .ok_or_else(|| format!("not basic auth: {authorization}"))?;
    let decoded = STANDARD
        .decode(encoded)
        .map_err(|e| format!("bad base64 in authorization: {e}"))?;
    let decoded = String::from_utf8(decoded).map_err(|e| e.to_string())?;
    let (user, password) = decoded
        .split_once(':')
        .ok_or_else(|| format!("no password in authorization: {decoded}"))?;

    if user != API_KEY {
        return Err(format!("username is '{user}', expected the API key"));
    }
    let expected = sign(
        API_SECRET,
        request.method.as_str(),
        request.url.path(),
        timestamp,
    );
    if password != expected {
        return Err(format!(
            "password '{password}' does not match signature '{expected}'"
        ));
    }
    Ok(())
}

/// In-memory stand-in for the record endpoints of one service.
///
/// Stores fully qualified names, answers lookups by exact filter match and
/// rejects unsigned requests with 401.
#[derive(Clone, Default)]
pub struct FakeActive24 {
    state: Arc<Mutex<FakeState>>,
}

#[derive(Default)]
struct FakeState {
    next_id: u64,
    records: Vec<DnsRecordWithId>,
}

impl FakeActive24 {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount the fake on every record path of the test service.
    pub async fn mount(&self, server: &MockServer) {
        Mock::given(path_regex(format!(r"^{}(/\d+)?$", records_path())))
            .respond_with(self.clone())
            .mount(server)
            .await;
    }

    /// Seed a record, as if created outside the client. Returns its id.
    pub fn seed(&self, record: &DnsRecord) -> u64 {
        let mut state = self.state.lock().expect("fake state poisoned");
        state.next_id += 1;
        let id = state.next_id;
        state.records.push(DnsRecordWithId {
            id,
            record: DnsRecord {
                name: format!("{}.{ZONE}", record.name),
                ..record.clone()
            },
        });
        id
    }

    /// Records currently stored, names fully qualified.
    pub fn records(&self) -> Vec<DnsRecordWithId> {
        self.state
            .lock()
            .expect("fake state poisoned")
            .records
            .clone()
    }

    fn lookup(state: &FakeState, body: &[u8]) -> ResponseTemplate {
        let Ok(query) = serde_json::from_slice::<Value>(body) else {
            return ResponseTemplate::new(400).set_body_string("invalid filters");
        };
        let filters = &query["filters"];
        let full_name = format!("{}.{ZONE}", filters["name"].as_str().unwrap_or_default());
        let types: Vec<&str> = filters["type"]
            .as_array()
            .map(|types| types.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default();

        let data: Vec<&DnsRecordWithId> = state
            .records
            .iter()
            .filter(|r| {
                r.record.name == full_name
                    && types.contains(&r.record.record_type.as_str())
                    && Some(r.record.content.as_str()) == filters["content"].as_str()
                    && Some(u64::from(r.record.ttl)) == filters["ttl"].as_u64()
            })
            .collect();

        ResponseTemplate::new(200).set_body_json(json!({ "data": data }))
    }
}

impl Respond for FakeActive24 {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        if let Err(problem) = verify_signed(request) {
            return ResponseTemplate::new(401).set_body_string(problem);
        }

        let mut state = self.state.lock().expect("fake state poisoned");
        let record_id = request
            .url
            .path()
            .strip_prefix(&format!("{}/", records_path()))
            .and_then(|id| id.parse::<u64>().ok());

        match (request.method.as_str(), record_id) {
            ("GET", None) => Self::lookup(&state, &request.body),
            ("POST", None) => {
                let Ok(record) = serde_json::from_slice::<DnsRecord>(&request.body) else {
                    return ResponseTemplate::new(400).set_body_string("invalid record");
                };
                state.next_id += 1;
                let id = state.next_id;
                state.records.push(DnsRecordWithId {
                    id,
                    record: DnsRecord {
                        name: format!("{}.{ZONE}", record.name),
                        ..record
                    },
                });
                ResponseTemplate::new(201)
            }
            ("DELETE", Some(id)) => {
                let before = state.records.len();
                state.records.retain(|r| r.id != id);
                if state.records.len() == before {
                    ResponseTemplate::new(404).set_body_string("record not found")
                } else {
                    ResponseTemplate::new(204)
                }
            }
            _ => ResponseTemplate::new(405),
        }
    }
}
