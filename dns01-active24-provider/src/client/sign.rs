//! Active24 HMAC-SHA1 签名

use hmac::{Hmac, Mac};
use sha1::Sha1;

use super::Active24Client;

type HmacSha1 = Hmac<Sha1>;

/// Compute the request signature.
///
/// HMAC-SHA1 keyed with `secret` over `"<METHOD> <PATH> <timestamp>"`,
/// rendered as lowercase hex. `path` is the URL path only (no scheme, host
/// or query) and `timestamp` is in Unix seconds.
pub fn sign(secret: &str, method: &str, path: &str, timestamp: i64) -> String {
    let mut mac =
        HmacSha1::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(format!("{method} {path} {timestamp}").as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

impl Active24Client {
    /// Signature for a request made with this client's secret.
    pub(crate) fn signature(&self, method: &str, path: &str, timestamp: i64) -> String {
        sign(&self.config.api_secret, method, path, timestamp)
    }
}
