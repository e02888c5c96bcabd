/// Request signing for the NiceHash API.
///
/// Every request is authenticated with an HMAC-SHA256 over a fixed sequence of
/// segments:
///
/// ```text
/// apiKey, time, nonce, <absent>, organizationId, <absent>, METHOD, path, query [, body]
/// ```
///
/// A single `0x00` byte separates adjacent slots. Absent slots contribute no
/// bytes of their own but still take part in separation, so two adjacent absent
/// slots yield consecutive zero bytes. The server rebuilds the same sequence to
/// verify the signature, so both order and separators must match exactly.
use std::time::{SystemTime, UNIX_EPOCH};

use hmac::{Hmac, Mac};
use sha2::Sha256;
use uuid::Uuid;

use crate::config::Credentials;

type HmacSha256 = Hmac<Sha256>;

pub const HEADER_REQUEST_ID: &str = "X-Request-Id";
pub const HEADER_TIME: &str = "X-Time";
pub const HEADER_NONCE: &str = "X-Nonce";
pub const HEADER_AUTH: &str = "X-Auth";

/// One slot of the signed sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Present(&'a [u8]),
    Absent,
}

impl<'a> Segment<'a> {
    pub fn text(value: &'a str) -> Self {
        Segment::Present(value.as_bytes())
    }
}

/// Authentication headers attached to exactly one outbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthHeaders {
    pub request_id: String,
    pub time: String,
    pub nonce: String,
    pub auth: String,
}

impl AuthHeaders {
    /// Header name/value pairs in a fixed order.
    pub fn pairs(&self) -> [(&'static str, &str); 4] {
        [
            (HEADER_REQUEST_ID, self.request_id.as_str()),
            (HEADER_TIME, self.time.as_str()),
            (HEADER_NONCE, self.nonce.as_str()),
            (HEADER_AUTH, self.auth.as_str()),
        ]
    }
}

/// Build the ordered signing sequence. `method` must already be uppercase.
pub fn signing_segments<'a>(
    credentials: &'a Credentials,
    time: &'a str,
    nonce: &'a str,
    method: &'a str,
    path: &'a str,
    query: &'a str,
    body: Option<&'a str>,
) -> Vec<Segment<'a>> {
    let mut segments = vec![
        Segment::text(credentials.api_key()),
        Segment::text(time),
        Segment::text(nonce),
        Segment::Absent,
        Segment::text(credentials.organization_id()),
        Segment::Absent,
        Segment::text(method),
        Segment::text(path),
        Segment::text(query),
    ];
    if let Some(body) = body {
        segments.push(Segment::text(body));
    }
    segments
}

/// HMAC-SHA256 over `segments`, keyed by `secret`, returned as lowercase hex.
pub fn hmac_sha256_by_segments(secret: &[u8], segments: &[Segment<'_>]) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret).expect("HMAC-SHA256 accepts keys of any length");
    for (index, segment) in segments.iter().enumerate() {
        if index > 0 {
            mac.update(&[0]);
        }
        if let Segment::Present(bytes) = segment {
            mac.update(bytes);
        }
    }
    hex::encode(mac.finalize().into_bytes())
}

/// Sign a request with an explicit timestamp and nonce.
///
/// `query` is the serialized query string without a leading `?` (empty when
/// there is none) and `body` the exact JSON text that will be sent.
pub fn sign_at(
    credentials: &Credentials,
    method: &str,
    path: &str,
    query: &str,
    body: Option<&str>,
    timestamp_ms: u64,
    nonce: &str,
) -> AuthHeaders {
    let time = timestamp_ms.to_string();
    let method = method.to_ascii_uppercase();
    let segments = signing_segments(credentials, &time, nonce, &method, path, query, body);
    let digest = hmac_sha256_by_segments(credentials.api_secret().as_bytes(), &segments);

    AuthHeaders {
        request_id: time.clone(),
        time,
        nonce: nonce.to_string(),
        auth: format!("{}:{}", credentials.api_key(), digest),
    }
}

/// Sign a request with the current time and a fresh random nonce.
pub fn sign(
    credentials: &Credentials,
    method: &str,
    path: &str,
    query: &str,
    body: Option<&str>,
) -> AuthHeaders {
    let nonce = Uuid::new_v4().to_string();
    sign_at(credentials, method, path, query, body, now_millis(), &nonce)
}

/// Milliseconds since the Unix epoch.
pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
