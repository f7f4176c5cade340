//! Active24 HTTP 请求方法

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Method, Url};

use crate::error::{ProviderError, Result};
use crate::http_client::HttpUtils;
use crate::utils::datetime::{format_x_date, unix_now};

use super::Active24Client;

impl Active24Client {
    /// Send one signed request to the record endpoint.
    ///
    /// Targets the record collection, or a single record when `record_id` is
    /// set. Returns the raw response body for any status below 400.
    pub async fn send(
        &self,
        method: Method,
        record_id: Option<u64>,
        body: Option<String>,
    ) -> Result<String> {
        let url = self.api_url(record_id);
        let parsed = Url::parse(&url).map_err(|e| ProviderError::InvalidParameter {
            param: "url".to_string(),
            detail: format!("'{url}': {e}"),
        })?;

        // 签名与 X-Date 必须使用同一时间戳
        let timestamp = unix_now();
        let signature = self.signature(method.as_str(), parsed.path(), timestamp);

        let mut request = self
            .client
            .request(method.clone(), parsed)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .header("X-Date", format_x_date(timestamp))
            .basic_auth(&self.config.api_key, Some(signature));

        if let Some(payload) = body {
            log::debug!("Request Body: {payload}");
            request = request.body(payload);
        }

        HttpUtils::execute_request(request, method.as_str(), &url).await
    }
}
