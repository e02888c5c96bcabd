//! NiceHash API client for Rust.
//!
//! A client for the NiceHash hashpower marketplace REST API. Every request is
//! signed with the API's HMAC-SHA256 segment scheme and passes through a single
//! FIFO admission gate that keeps request starts at least a fixed interval
//! apart (3 seconds by default).
//!
//! # What This Crate Provides
//!
//! - Typed endpoint access: [`NicehashApi`]
//! - The signed, throttled request path: [`Dispatcher`]
//! - Request signing primitives: [`crypto`]
//! - A pluggable HTTP layer: [`HttpTransport`] / [`ReqwestTransport`]
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use nicehash_client::{Credentials, NicehashApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), nicehash_client::NicehashError> {
//!     let credentials = Credentials::new("api-key", "api-secret", "organization-id");
//!     let api = NicehashApi::new(credentials)?;
//!
//!     let book = api.order_book(&[("algorithm", "SCRYPT"), ("size", "50")]).await?;
//!     println!("status={} body={}", book.status, book.body);
//!     Ok(())
//! }
//! ```
//!
//! # Placing an Order
//!
//! ```rust,no_run
//! use nicehash_client::{CreateOrderRequest, Credentials, NicehashApi, OrderType};
//! use rust_decimal::Decimal;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), nicehash_client::NicehashError> {
//!     let api = NicehashApi::new(Credentials::new("key", "secret", "org"))?;
//!     let order = CreateOrderRequest {
//!         market: "EU".into(),
//!         algorithm: "SCRYPT".into(),
//!         amount: Decimal::new(5, 3),
//!         price: Decimal::new(15, 1),
//!         limit: Decimal::new(1, 2),
//!         pool_id: "pool-id".into(),
//!         order_type: OrderType::Standard,
//!         market_factor: None,
//!         display_market_factor: None,
//!     };
//!     let created = api.create_order(&order).await?;
//!     if created.is_success() {
//!         println!("created: {}", created.body);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Throttling
//!
//! All clones of a [`NicehashApi`] share one gate. Starts happen strictly in
//! call order; responses may complete in any order. Use
//! [`ClientConfig::with_min_interval`] to change the spacing.
//!
//! # Logging
//!
//! This crate emits debug-level logs through the [`log`](https://docs.rs/log/) facade.
//! Configure any compatible logger in your binary, then set `RUST_LOG=debug`
//! to inspect request flow. Secrets and signatures are never logged.
//!
//! # Errors
//!
//! All fallible operations return [`NicehashError`]. Transport failures
//! (connection errors, timeouts) arrive as `HttpError` and are never retried.
//! Non-success HTTP statuses are not errors; check [`ApiResponse::is_success`].
pub mod api;
pub mod config;
pub mod crypto;
pub mod dispatch;
pub mod errors;
pub mod models;
pub mod throttle;

// Re-export primary types for convenience.
pub use api::NicehashApi;
pub use config::{ClientConfig, Credentials, Environment};
pub use crypto::{sign, sign_at, AuthHeaders, Segment};
pub use dispatch::{Dispatcher, HttpTransport, ReqwestTransport, SignedRequest};
pub use errors::NicehashError;
pub use models::*;
pub use throttle::Throttle;
