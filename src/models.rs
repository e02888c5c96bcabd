/// Data models for the NiceHash API client.
///
/// Request payloads use string-serialized decimals for amounts and prices,
/// which is the format the hashpower endpoints expect.
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::Method;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::errors::NicehashError;

/// Bytes left unescaped in query components and path segments: alphanumerics
/// plus `- _ . ! ~ * ' ( )`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a single query component or path segment. Spaces become `%20`.
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

// ---------------------------------------------------------------------------
// Request / Response
// ---------------------------------------------------------------------------

/// A single logical API call, before it is signed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    pub method: Method,
    /// Canonical API path, without host or query string.
    pub path: String,
    /// Query parameters in the order they are serialized and signed.
    pub query: Vec<(String, String)>,
    /// JSON text of the body. Signed and sent byte-for-byte.
    pub body: Option<String>,
}

impl RequestDescriptor {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn with_query<K, V>(mut self, params: &[(K, V)]) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.query.extend(
            params
                .iter()
                .map(|(k, v)| (k.as_ref().to_string(), v.as_ref().to_string())),
        );
        self
    }

    /// Serialize `body` as JSON and attach it.
    pub fn with_json_body<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, NicehashError> {
        self.body = Some(serde_json::to_string(body)?);
        Ok(self)
    }

    /// The percent-encoded `key=value&...` query string, empty when there are
    /// no parameters.
    pub fn query_string(&self) -> String {
        self.query
            .iter()
            .map(|(k, v)| format!("{}={}", encode_component(k), encode_component(v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Path plus `?query` when the query is non-empty.
    pub fn path_and_query(&self) -> String {
        let query = self.query_string();
        if query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, query)
        }
    }
}

/// Raw result of an API call: the HTTP status and the decoded body.
///
/// Non-success statuses are returned as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: serde_json::Value,
}

impl ApiResponse {
    /// Build a response from raw body text. Empty bodies become `null` and
    /// bodies that are not JSON are kept as a JSON string.
    pub fn from_text(status: u16, text: &str) -> Self {
        let body = if text.trim().is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_str(text)
                .unwrap_or_else(|_| serde_json::Value::String(text.to_string()))
        };
        Self { status, body }
    }

    /// Returns true for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body into a caller-chosen type.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, NicehashError> {
        serde_json::from_value(self.body.clone())
            .map_err(|e| NicehashError::JsonError(format!("Failed to parse response: {e}")))
    }
}

// ---------------------------------------------------------------------------
// Hashpower Orders
// ---------------------------------------------------------------------------

/// Hashpower order type.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    Standard,
    Fixed,
}

/// Request body for POST /main/api/v2/hashpower/order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub market: String,
    pub algorithm: String,
    pub amount: Decimal,
    pub price: Decimal,
    pub limit: Decimal,
    pub pool_id: String,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_factor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_market_factor: Option<String>,
}

/// Request body for POST /main/api/v2/hashpower/order/{id}/refill.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RefillOrderRequest {
    pub amount: Decimal,
}

/// Request body for POST /main/api/v2/hashpower/order/{id}/updatePriceAndLimit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePriceAndLimitRequest {
    pub price: Decimal,
    pub limit: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_factor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_market_factor: Option<String>,
}

// ---------------------------------------------------------------------------
// Pools
// ---------------------------------------------------------------------------

/// Request body for POST /main/api/v2/pool.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreatePoolRequest {
    pub name: String,
    pub algorithm: String,
    pub stratum_hostname: String,
    pub stratum_port: u16,
    pub username: String,
    pub password: String,
}
