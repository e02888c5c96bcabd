/// REST API client for the NiceHash hashpower marketplace.
///
/// Each method maps onto one endpoint. Every call goes through the shared
/// [`Dispatcher`], so calls are signed and their starts are spaced by the
/// configured interval. Responses are returned raw, whatever the status.
use std::fmt::Display;
use std::sync::Arc;

use log::debug;
use reqwest::Method;
use serde::Serialize;

use crate::config::{ClientConfig, Credentials};
use crate::dispatch::{Dispatcher, HttpTransport};
use crate::errors::NicehashError;
use crate::models::{encode_component, ApiResponse, RequestDescriptor};

const HASHPOWER_ORDER_BOOK: &str = "/main/api/v2/hashpower/orderBook/";
const HASHPOWER_MY_ORDERS: &str = "/main/api/v2/hashpower/myOrders";
const HASHPOWER_ORDER: &str = "/main/api/v2/hashpower/order";
const POOLS: &str = "/main/api/v2/pools";
const POOL: &str = "/main/api/v2/pool";

/// Typed access to the NiceHash REST endpoints.
#[derive(Debug, Clone)]
pub struct NicehashApi {
    dispatcher: Dispatcher,
}

impl NicehashApi {
    /// Create a client for the production API.
    pub fn new(credentials: Credentials) -> Result<Self, NicehashError> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a client with a custom configuration.
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self, NicehashError> {
        Ok(Self {
            dispatcher: Dispatcher::new(&config, credentials)?,
        })
    }

    /// Create a client over a custom transport.
    pub fn with_transport(
        credentials: Credentials,
        config: ClientConfig,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        Self {
            dispatcher: Dispatcher::with_transport(&config, credentials, transport),
        }
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Send an arbitrary request through the signed, throttled path.
    pub async fn request(&self, request: RequestDescriptor) -> Result<ApiResponse, NicehashError> {
        self.dispatcher.dispatch(request).await
    }

    // -----------------------------------------------------------------------
    // Hashpower Orders
    // -----------------------------------------------------------------------

    /// GET /main/api/v2/hashpower/orderBook/ - Public order book.
    pub async fn order_book<K, V>(&self, query: &[(K, V)]) -> Result<ApiResponse, NicehashError>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        debug!("api.order_book params={}", query.len());
        self.request(RequestDescriptor::new(Method::GET, HASHPOWER_ORDER_BOOK).with_query(query))
            .await
    }

    /// GET /main/api/v2/hashpower/myOrders - Orders owned by the organization.
    pub async fn my_order_book<K, V>(&self, query: &[(K, V)]) -> Result<ApiResponse, NicehashError>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        debug!("api.my_order_book params={}", query.len());
        self.request(RequestDescriptor::new(Method::GET, HASHPOWER_MY_ORDERS).with_query(query))
            .await
    }

    /// POST /main/api/v2/hashpower/order - Create an order.
    pub async fn create_order<B>(&self, body: &B) -> Result<ApiResponse, NicehashError>
    where
        B: Serialize + ?Sized,
    {
        debug!("api.create_order");
        let request = RequestDescriptor::new(Method::POST, HASHPOWER_ORDER).with_json_body(body)?;
        self.request(request).await
    }

    /// GET /main/api/v2/hashpower/order/{id} - Get a single order.
    pub async fn get_order(&self, order_id: &str) -> Result<ApiResponse, NicehashError> {
        debug!("api.get_order order_id={}", order_id);
        self.request(RequestDescriptor::new(Method::GET, order_path(order_id)))
            .await
    }

    /// DELETE /main/api/v2/hashpower/order/{id} - Cancel an order.
    pub async fn delete_order(&self, order_id: &str) -> Result<ApiResponse, NicehashError> {
        debug!("api.delete_order order_id={}", order_id);
        self.request(RequestDescriptor::new(Method::DELETE, order_path(order_id)))
            .await
    }

    /// POST /main/api/v2/hashpower/order/{id}/refill - Add funds to an order.
    pub async fn refill_order<B>(&self, order_id: &str, body: &B) -> Result<ApiResponse, NicehashError>
    where
        B: Serialize + ?Sized,
    {
        debug!("api.refill_order order_id={}", order_id);
        let path = format!("{}/refill", order_path(order_id));
        let request = RequestDescriptor::new(Method::POST, path).with_json_body(body)?;
        self.request(request).await
    }

    /// POST /main/api/v2/hashpower/order/{id}/updatePriceAndLimit - Change price and speed limit.
    pub async fn update_order_price_and_limit<B>(
        &self,
        order_id: &str,
        body: &B,
    ) -> Result<ApiResponse, NicehashError>
    where
        B: Serialize + ?Sized,
    {
        debug!("api.update_order_price_and_limit order_id={}", order_id);
        let path = format!("{}/updatePriceAndLimit", order_path(order_id));
        let request = RequestDescriptor::new(Method::POST, path).with_json_body(body)?;
        self.request(request).await
    }

    /// GET /main/api/v2/hashpower/order/{id}/stats - Order statistics.
    pub async fn get_stats(&self, order_id: &str) -> Result<ApiResponse, NicehashError> {
        debug!("api.get_stats order_id={}", order_id);
        let path = format!("{}/stats", order_path(order_id));
        self.request(RequestDescriptor::new(Method::GET, path)).await
    }

    // -----------------------------------------------------------------------
    // Pools
    // -----------------------------------------------------------------------

    /// GET /main/api/v2/pools - List pools.
    pub async fn get_pools(
        &self,
        price: impl Display,
        size: impl Display,
    ) -> Result<ApiResponse, NicehashError> {
        let price = price.to_string();
        let size = size.to_string();
        debug!("api.get_pools price={} size={}", price, size);
        let request = RequestDescriptor::new(Method::GET, POOLS)
            .with_query(&[("price", price.as_str()), ("size", size.as_str())]);
        self.request(request).await
    }

    /// POST /main/api/v2/pool - Create a pool.
    pub async fn create_pool<B>(&self, body: &B) -> Result<ApiResponse, NicehashError>
    where
        B: Serialize + ?Sized,
    {
        debug!("api.create_pool");
        let request = RequestDescriptor::new(Method::POST, POOL).with_json_body(body)?;
        self.request(request).await
    }
}

fn order_path(order_id: &str) -> String {
    format!("{HASHPOWER_ORDER}/{}", encode_component(order_id))
}
