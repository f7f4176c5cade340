//! Generic HTTP client tools
//!
//! Sending, logging, status handling and JSON decoding shared by every
//! Active24 endpoint. Request construction (URL, signature, headers) stays
//! with the caller.
//!
//! No retries happen here: every failure is returned on the first attempt.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::{PROVIDER_NAME, ProviderError, Result};
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the response body.
    ///
    /// # Arguments
    /// * `request_builder` - configured request constructor (URL, headers, body)
    /// * `method_name` - request method name, for logging
    /// * `url` - request URL, for logging
    ///
    /// # Returns
    /// * `Ok(body)` - the raw body of any response with status < 400
    /// * `Err(ProviderError::HttpStatus)` - status >= 400, body kept verbatim
    /// * `Err(ProviderError::Timeout)` / `Err(ProviderError::NetworkError)` - transport failure
    pub async fn execute_request(
        request_builder: RequestBuilder,
        method_name: &str,
        url: &str,
    ) -> Result<String> {
        log::debug!("[{PROVIDER_NAME}] {method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout {
                    detail: e.to_string(),
                }
            } else {
                ProviderError::NetworkError {
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("[{PROVIDER_NAME}] Response Status: {status_code}");

        let response_text = response.text().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout {
                    detail: format!("Failed to read response body: {e}"),
                }
            } else {
                ProviderError::NetworkError {
                    detail: format!("Failed to read response body: {e}"),
                }
            }
        })?;

        log::debug!(
            "[{PROVIDER_NAME}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        if status_code >= 400 {
            log::warn!("[{PROVIDER_NAME}] {method_name} {url} failed with HTTP {status_code}");
            return Err(ProviderError::HttpStatus {
                status: status_code,
                body: response_text,
            });
        }

        Ok(response_text)
    }

    /// Parse a JSON response.
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(ProviderError::ParseError)` - parsing failed; carries the raw payload
    pub fn parse_json<T>(response_text: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{PROVIDER_NAME}] JSON parse failed: {e}");
            log::error!(
                "[{PROVIDER_NAME}] Raw response: {}",
                truncate_for_log(response_text)
            );
            ProviderError::ParseError {
                detail: e.to_string(),
                raw: response_text.to_string(),
            }
        })
    }

    /// Serialize a request body to JSON text.
    pub fn to_json<T>(value: &T) -> Result<String>
    where
        T: serde::Serialize + ?Sized,
    {
        serde_json::to_string(value).map_err(|e| ProviderError::SerializationError {
            detail: e.to_string(),
        })
    }
}
