//! In-process transport that records every request it receives.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use futures_util::future::BoxFuture;
use serde_json::json;
use tokio::time::Instant;

use nicehash_client::{
    ApiResponse, ClientConfig, Credentials, HttpTransport, NicehashApi, NicehashError,
    SignedRequest,
};

pub const BASE: &str = "https://api.mock";

#[derive(Debug, Clone)]
pub struct Sent {
    pub started_at: Instant,
    pub request: SignedRequest,
}

#[derive(Default)]
pub struct MockTransport {
    sent: Mutex<Vec<Sent>>,
    completed: Mutex<Vec<String>>,
    latency: HashMap<String, Duration>,
    failures: Vec<String>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delay the response for requests whose URL ends with `suffix`.
    pub fn with_latency(mut self, suffix: &str, delay: Duration) -> Self {
        self.latency.insert(suffix.to_string(), delay);
        self
    }

    /// Fail requests whose URL ends with `suffix` with a transport error.
    pub fn with_failure(mut self, suffix: &str) -> Self {
        self.failures.push(suffix.to_string());
        self
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    pub fn completed(&self) -> Vec<String> {
        self.completed.lock().unwrap().clone()
    }

    pub fn last(&self) -> SignedRequest {
        self.sent().last().expect("no request sent").request.clone()
    }
}

impl HttpTransport for MockTransport {
    fn send(&self, request: SignedRequest) -> BoxFuture<'_, Result<ApiResponse, NicehashError>> {
        Box::pin(async move {
            self.sent.lock().unwrap().push(Sent {
                started_at: Instant::now(),
                request: request.clone(),
            });

            let delay = self
                .latency
                .iter()
                .find(|(suffix, _)| request.url.ends_with(suffix.as_str()))
                .map(|(_, delay)| *delay);
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }
            self.completed.lock().unwrap().push(request.url.clone());

            if self
                .failures
                .iter()
                .any(|suffix| request.url.ends_with(suffix.as_str()))
            {
                return Err(NicehashError::HttpError("connection refused".into()));
            }
            Ok(ApiResponse {
                status: 200,
                body: json!({ "url": request.url }),
            })
        })
    }
}

pub fn credentials() -> Credentials {
    Credentials::new("k1", "s1", "org1")
}

pub fn api_with(transport: Arc<MockTransport>, min_interval: Duration) -> NicehashApi {
    let config = ClientConfig::default()
        .with_api_base(BASE)
        .with_min_interval(min_interval);
    NicehashApi::with_transport(credentials(), config, transport)
}
