/// Endpoint catalog tests: every operation's verb, path, query and body.
mod common;

use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use rust_decimal_macros::dec;
use serde_json::json;

use nicehash_client::{
    CreateOrderRequest, CreatePoolRequest, OrderType, RefillOrderRequest,
    UpdatePriceAndLimitRequest,
};

use common::{api_with, MockTransport, BASE};

fn setup() -> (Arc<MockTransport>, nicehash_client::NicehashApi) {
    let transport = Arc::new(MockTransport::new());
    let api = api_with(transport.clone(), Duration::ZERO);
    (transport, api)
}

#[tokio::test]
async fn test_order_book() {
    let (transport, api) = setup();
    api.order_book(&[("algorithm", "SHA256ASICBOOST"), ("size", "100")])
        .await
        .unwrap();
    let sent = transport.last();
    assert_eq!(sent.method, Method::GET);
    assert_eq!(
        sent.url,
        format!("{BASE}/main/api/v2/hashpower/orderBook/?algorithm=SHA256ASICBOOST&size=100")
    );
    assert_eq!(sent.body, None);
}

#[tokio::test]
async fn test_order_book_without_query() {
    let (transport, api) = setup();
    let empty: &[(&str, &str)] = &[];
    api.order_book(empty).await.unwrap();
    assert_eq!(
        transport.last().url,
        format!("{BASE}/main/api/v2/hashpower/orderBook/")
    );
}

#[tokio::test]
async fn test_my_order_book() {
    let (transport, api) = setup();
    api.my_order_book(&[("algorithm", "SCRYPT"), ("active", "true")])
        .await
        .unwrap();
    let sent = transport.last();
    assert_eq!(sent.method, Method::GET);
    assert_eq!(
        sent.url,
        format!("{BASE}/main/api/v2/hashpower/myOrders?algorithm=SCRYPT&active=true")
    );
}

#[tokio::test]
async fn test_create_order_sends_signed_body() {
    let (transport, api) = setup();
    let order = CreateOrderRequest {
        market: "EU".into(),
        algorithm: "SCRYPT".into(),
        amount: dec!(0.005),
        price: dec!(1.5),
        limit: dec!(0.01),
        pool_id: "pool-1".into(),
        order_type: OrderType::Fixed,
        market_factor: None,
        display_market_factor: None,
    };
    api.create_order(&order).await.unwrap();

    let sent = transport.last();
    assert_eq!(sent.method, Method::POST);
    assert_eq!(sent.url, format!("{BASE}/main/api/v2/hashpower/order"));
    let body: serde_json::Value = serde_json::from_str(sent.body.as_deref().unwrap()).unwrap();
    assert_eq!(body["poolId"], "pool-1");
    assert_eq!(body["type"], "FIXED");
    assert_eq!(body["amount"], "0.005");
}

#[tokio::test]
async fn test_get_order() {
    let (transport, api) = setup();
    let response = api.get_order("abc-123").await.unwrap();
    let sent = transport.last();
    assert_eq!(sent.method, Method::GET);
    assert_eq!(sent.url, format!("{BASE}/main/api/v2/hashpower/order/abc-123"));
    assert_eq!(response.body["url"], sent.url);
}

#[tokio::test]
async fn test_delete_order() {
    let (transport, api) = setup();
    api.delete_order("abc-123").await.unwrap();
    let sent = transport.last();
    assert_eq!(sent.method, Method::DELETE);
    assert_eq!(sent.url, format!("{BASE}/main/api/v2/hashpower/order/abc-123"));
    assert_eq!(sent.body, None);
}

#[tokio::test]
async fn test_refill_order() {
    let (transport, api) = setup();
    api.refill_order("abc-123", &RefillOrderRequest { amount: dec!(0.01) })
        .await
        .unwrap();
    let sent = transport.last();
    assert_eq!(sent.method, Method::POST);
    assert_eq!(
        sent.url,
        format!("{BASE}/main/api/v2/hashpower/order/abc-123/refill")
    );
    assert_eq!(sent.body.as_deref(), Some(r#"{"amount":"0.01"}"#));
}

#[tokio::test]
async fn test_update_order_price_and_limit() {
    let (transport, api) = setup();
    let update = UpdatePriceAndLimitRequest {
        price: dec!(2.1),
        limit: dec!(0.5),
        market_factor: Some("1000000000000".into()),
        display_market_factor: Some("TH".into()),
    };
    api.update_order_price_and_limit("abc-123", &update)
        .await
        .unwrap();
    let sent = transport.last();
    assert_eq!(sent.method, Method::POST);
    assert_eq!(
        sent.url,
        format!("{BASE}/main/api/v2/hashpower/order/abc-123/updatePriceAndLimit")
    );
    assert_eq!(
        sent.body.as_deref(),
        Some(r#"{"price":"2.1","limit":"0.5","marketFactor":"1000000000000","displayMarketFactor":"TH"}"#)
    );
}

#[tokio::test]
async fn test_get_pools() {
    let (transport, api) = setup();
    api.get_pools("0.5", 25).await.unwrap();
    let sent = transport.last();
    assert_eq!(sent.method, Method::GET);
    assert_eq!(sent.url, format!("{BASE}/main/api/v2/pools?price=0.5&size=25"));
    assert_eq!(sent.body, None);
}

#[tokio::test]
async fn test_create_pool() {
    let (transport, api) = setup();
    let pool = CreatePoolRequest {
        name: "my pool".into(),
        algorithm: "SCRYPT".into(),
        stratum_hostname: "stratum.example.com".into(),
        stratum_port: 3333,
        username: "worker".into(),
        password: "x".into(),
    };
    api.create_pool(&pool).await.unwrap();
    let sent = transport.last();
    assert_eq!(sent.method, Method::POST);
    assert_eq!(sent.url, format!("{BASE}/main/api/v2/pool"));
    let body: serde_json::Value = serde_json::from_str(sent.body.as_deref().unwrap()).unwrap();
    assert_eq!(body["stratumHostname"], "stratum.example.com");
    assert_eq!(body["stratumPort"], 3333);
}

#[tokio::test]
async fn test_create_pool_accepts_untyped_payload() {
    let (transport, api) = setup();
    api.create_pool(&json!({ "name": "raw" })).await.unwrap();
    assert_eq!(transport.last().body.as_deref(), Some(r#"{"name":"raw"}"#));
}

#[tokio::test]
async fn test_get_stats() {
    let (transport, api) = setup();
    api.get_stats("abc-123").await.unwrap();
    let sent = transport.last();
    assert_eq!(sent.method, Method::GET);
    assert_eq!(
        sent.url,
        format!("{BASE}/main/api/v2/hashpower/order/abc-123/stats")
    );
}
