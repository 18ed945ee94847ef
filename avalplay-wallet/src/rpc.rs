//! JSON-RPC 2.0 client over HTTP.
//!
//! Used both for the wallet provider endpoint and for the read-only chain
//! endpoint. One client talks to exactly one URL; there is no failover.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::{Duration, Instant},
};
use thiserror::Error;
use tracing::debug;

/// JSON-RPC request ID counter
static REQUEST_ID: AtomicU64 = AtomicU64::new(1);

/// Errors talking to a JSON-RPC endpoint.
#[derive(Debug, Error)]
pub enum RpcError {
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP error: {0}")]
    Status(reqwest::StatusCode),

    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("Missing result in RPC response")]
    MissingResult,

    #[error("Invalid RPC response: {0}")]
    InvalidResponse(String),
}

impl RpcError {
    /// EIP-1193 code for "user rejected the request".
    pub const USER_REJECTED: i64 = 4001;

    /// Whether the wallet user declined the request.
    pub fn is_user_rejection(&self) -> bool {
        matches!(self, RpcError::Rpc { code, .. } if *code == Self::USER_REJECTED)
    }
}

/// JSON-RPC 2.0 request
#[derive(Debug, Serialize)]
struct JsonRpcRequest<'a> {
    jsonrpc: &'static str,
    method: &'a str,
    params: Value,
    id: u64,
}

/// JSON-RPC 2.0 response
#[derive(Debug, Deserialize)]
struct JsonRpcResponse {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<JsonRpcError>,
}

/// JSON-RPC error object
#[derive(Debug, Deserialize)]
struct JsonRpcError {
    code: i64,
    message: String,
}

/// A JSON-RPC connection to a single endpoint.
#[derive(Debug, Clone)]
pub struct RpcClient {
    client: reqwest::Client,
    url: String,
}

impl RpcClient {
    /// Create a client for `url` with the given per-request timeout.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, RpcError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Call `method` and deserialize its result.
    ///
    /// A `null` or absent result deserializes as such, so `T = Option<_>`
    /// observes it as `None`; any other `T` reports
    /// [`RpcError::MissingResult`].
    pub async fn call<T: DeserializeOwned>(&self, method: &str, params: Value) -> Result<T, RpcError> {
        let id = REQUEST_ID.fetch_add(1, Ordering::SeqCst);
        let request = JsonRpcRequest {
            jsonrpc: "2.0",
            method,
            params,
            id,
        };

        let start = Instant::now();

        let response = self.client.post(&self.url).json(&request).send().await?;

        if !response.status().is_success() {
            return Err(RpcError::Status(response.status()));
        }

        let body: JsonRpcResponse = response.json().await?;

        debug!(
            "{} #{} via {} took {}ms",
            method,
            id,
            self.url,
            start.elapsed().as_millis()
        );

        if let Some(error) = body.error {
            return Err(RpcError::Rpc {
                code: error.code,
                message: error.message,
            });
        }

        decode_result(body.result)
    }
}

fn decode_result<T: DeserializeOwned>(result: Option<Value>) -> Result<T, RpcError> {
    let value = result.unwrap_or(Value::Null);
    let is_null = value.is_null();
    serde_json::from_value(value).map_err(|e| {
        if is_null {
            RpcError::MissingResult
        } else {
            RpcError::InvalidResponse(e.to_string())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_present_result() {
        let chain: String = decode_result(Some(json!("0xa869"))).unwrap();
        assert_eq!(chain, "0xa869");
    }

    #[test]
    fn test_decode_null_as_option() {
        let receipt: Option<Value> = decode_result(Some(Value::Null)).unwrap();
        assert!(receipt.is_none());
        let absent: Option<Value> = decode_result(None).unwrap();
        assert!(absent.is_none());
    }

    #[test]
    fn test_decode_null_for_required_result() {
        let result: Result<String, _> = decode_result(None);
        assert!(matches!(result, Err(RpcError::MissingResult)));
    }

    #[test]
    fn test_decode_wrong_shape() {
        let result: Result<Vec<String>, _> = decode_result(Some(json!(42)));
        assert!(matches!(result, Err(RpcError::InvalidResponse(_))));
    }

    #[test]
    fn test_user_rejection() {
        let rejected = RpcError::Rpc {
            code: 4001,
            message: "User rejected the request.".into(),
        };
        assert!(rejected.is_user_rejection());
        assert!(!RpcError::MissingResult.is_user_rejection());
    }

    #[test]
    fn test_client_new() {
        let client = RpcClient::new("http://127.0.0.1:1248", Duration::from_secs(30)).unwrap();
        assert_eq!(client.url(), "http://127.0.0.1:1248");
    }
}
