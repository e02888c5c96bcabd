/// Throttled, signed request dispatch.
///
/// [`Dispatcher::dispatch`] waits for its turn at the shared [`Throttle`],
/// signs the request, and hands it to an [`HttpTransport`]. The transport's
/// result, success or failure, is returned to the caller unchanged. There are
/// no retries, and a failed request does not hold up the ones queued behind it.
use std::fmt;
use std::sync::Arc;

use futures_util::future::BoxFuture;
use log::debug;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, Method};
use url::Url;

use crate::config::{ClientConfig, Credentials};
use crate::crypto::{sign, AuthHeaders};
use crate::errors::NicehashError;
use crate::models::{ApiResponse, RequestDescriptor};
use crate::throttle::Throttle;

pub const HEADER_ORGANIZATION_ID: &str = "x-organization-id";

/// A fully formed request, ready for the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRequest {
    pub method: Method,
    /// Absolute URL including the query string.
    pub url: String,
    pub headers: AuthHeaders,
    /// JSON body text, identical to the signed segment.
    pub body: Option<String>,
}

/// The HTTP layer underneath the dispatcher.
///
/// Implementations own connection handling, TLS and timeouts, and attach
/// whatever static headers they were built with.
pub trait HttpTransport: Send + Sync {
    fn send(&self, request: SignedRequest) -> BoxFuture<'_, Result<ApiResponse, NicehashError>>;
}

/// [`HttpTransport`] backed by a pooled `reqwest` client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Build a client carrying the user agent, organization id, and timeout
    /// from `config`. Connections are kept alive and reused.
    pub fn new(config: &ClientConfig, credentials: &Credentials) -> Result<Self, NicehashError> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, header_value("User-Agent", &config.user_agent)?);
        headers.insert(
            HeaderName::from_static(HEADER_ORGANIZATION_ID),
            header_value("X-Organization-Id", credentials.organization_id())?,
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .tcp_keepalive(Some(std::time::Duration::from_secs(60)))
            .build()?;
        Ok(Self { client })
    }
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue, NicehashError> {
    HeaderValue::from_str(value).map_err(|e| NicehashError::InvalidHeader {
        name: name.to_string(),
        message: e.to_string(),
    })
}

impl HttpTransport for ReqwestTransport {
    fn send(&self, request: SignedRequest) -> BoxFuture<'_, Result<ApiResponse, NicehashError>> {
        Box::pin(async move {
            let mut builder = self.client.request(request.method, &request.url);
            for (name, value) in request.headers.pairs() {
                builder = builder.header(name, value);
            }
            if let Some(body) = request.body {
                builder = builder.header(CONTENT_TYPE, "application/json").body(body);
            }

            let response = builder.send().await?;
            let status = response.status().as_u16();
            let text = response.text().await?;
            debug!(
                "transport.response status={} body_len={}",
                status,
                text.len()
            );
            Ok(ApiResponse::from_text(status, &text))
        })
    }
}

/// Signs requests and sends them through a shared admission gate.
///
/// Clones share the same gate, credentials, and transport, so all of them are
/// rate limited together.
#[derive(Clone)]
pub struct Dispatcher {
    transport: Arc<dyn HttpTransport>,
    credentials: Arc<Credentials>,
    throttle: Arc<Throttle>,
    api_base: String,
}

impl Dispatcher {
    /// Create a dispatcher using [`ReqwestTransport`].
    pub fn new(config: &ClientConfig, credentials: Credentials) -> Result<Self, NicehashError> {
        Url::parse(&config.api_base)?;
        let transport = ReqwestTransport::new(config, &credentials)?;
        Ok(Self::with_transport(config, credentials, Arc::new(transport)))
    }

    /// Create a dispatcher over a custom transport.
    pub fn with_transport(
        config: &ClientConfig,
        credentials: Credentials,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        Self {
            transport,
            credentials: Arc::new(credentials),
            throttle: Arc::new(Throttle::new(config.min_interval)),
            api_base: config.api_base.trim_end_matches('/').to_string(),
        }
    }

    pub fn throttle(&self) -> &Throttle {
        &self.throttle
    }

    /// Wait for admission, sign, send, and relay the transport result.
    pub async fn dispatch(&self, request: RequestDescriptor) -> Result<ApiResponse, NicehashError> {
        self.throttle.admit().await;

        let query = request.query_string();
        let headers = sign(
            &self.credentials,
            request.method.as_str(),
            &request.path,
            &query,
            request.body.as_deref(),
        );
        let url = format!("{}{}", self.api_base, request.path_and_query());
        debug!(
            "dispatch.send method={} path={} has_body={}",
            request.method,
            request.path,
            request.body.is_some()
        );

        self.transport
            .send(SignedRequest {
                method: request.method,
                url,
                headers,
                body: request.body,
            })
            .await
    }
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("credentials", &self.credentials)
            .field("throttle", &self.throttle)
            .field("api_base", &self.api_base)
            .finish_non_exhaustive()
    }
}
