//! 请求时间戳工具
//!
//! The `X-Date` header and the request signature must be derived from the
//! same instant; both are computed from a single Unix timestamp.

use chrono::{DateTime, SecondsFormat, Utc};

/// Current time as whole Unix seconds.
pub fn unix_now() -> i64 {
    Utc::now().timestamp()
}

/// Render a Unix timestamp as an RFC3339 UTC string (`2024-01-15T08:00:00Z`).
///
/// Out-of-range timestamps fall back to the Unix epoch.
pub fn format_x_date(timestamp: i64) -> String {
    DateTime::from_timestamp(timestamp, 0)
        .unwrap_or_default()
        .to_rfc3339_opts(SecondsFormat::Secs, true)
}
