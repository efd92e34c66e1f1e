use anyhow::Result;
use sera_messaging::{
    clients::{health::HealthChecker, order_api::OrderApiClient},
    config::Config,
    models::{health::HealthStatus, order::OrderStatus},
};
use serde_json::json;
use std::time::Duration;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

fn config_for(server: &MockServer) -> Result<Config> {
    Config::from_pairs(vec![
        ("ORDER_API_URL".to_string(), server.uri()),
        ("MAX_RETRY_ATTEMPTS".to_string(), "3".to_string()),
        ("INITIAL_RETRY_DELAY_MS".to_string(), "10".to_string()),
        ("MAX_RETRY_DELAY_MS".to_string(), "20".to_string()),
        ("HEALTH_CHECK_TIMEOUT_MS".to_string(), "200".to_string()),
    ])
}

/// Test: Orders are fetched and decoded from the tracking API
#[tokio::test]
async fn test_fetch_order_success() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/orders/SK-101"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "orderId": "SK-101",
            "customerName": "Amina",
            "customerPhone": "0722000111",
            "status": "preparing",
            "estimatedTime": "30 minutes"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = OrderApiClient::new(&config_for(&server)?)?;
    let order = client.fetch_order("SK-101").await?;

    assert_eq!(order.order_id, "SK-101");
    assert_eq!(order.customer_name, "Amina");
    assert_eq!(order.status, OrderStatus::Preparing);
    assert_eq!(order.estimated_time.as_deref(), Some("30 minutes"));

    Ok(())
}

/// Test: Server errors are retried until the API recovers
#[tokio::test]
async fn test_fetch_order_retries_server_errors() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/orders/42"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(2)
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/orders/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "orderId": "42",
            "status": "delivered"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = OrderApiClient::new(&config_for(&server)?)?;
    let order = client.fetch_order("42").await?;

    assert_eq!(order.status, OrderStatus::Delivered);

    Ok(())
}

/// Test: Missing orders fail immediately without retrying
#[tokio::test]
async fn test_fetch_order_not_found() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/orders/missing"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let client = OrderApiClient::new(&config_for(&server)?)?;
    let err = client.fetch_order("missing").await.unwrap_err();

    assert!(err.to_string().contains("not found"), "unexpected error: {}", err);

    Ok(())
}

/// Test: Health reports degraded when the order API is slow or down
#[tokio::test]
async fn test_health_degrades_when_order_api_times_out() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(1_000)))
        .mount(&server)
        .await;

    let client = OrderApiClient::new(&config_for(&server)?)?;
    assert!(client.ping().await.is_err());

    let health = HealthChecker::new(client).check_all().await;

    assert_eq!(health.status, HealthStatus::Degraded);
    assert_eq!(health.checks["order_api"].status, HealthStatus::Degraded);
    assert_eq!(health.checks["template_catalog"].status, HealthStatus::Healthy);

    Ok(())
}

/// Test: Health is green when the order API answers
#[tokio::test]
async fn test_health_is_healthy_when_order_api_answers() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = OrderApiClient::new(&config_for(&server)?)?;
    let health = HealthChecker::new(client).check_all().await;

    assert_eq!(health.status, HealthStatus::Healthy);

    Ok(())
}
