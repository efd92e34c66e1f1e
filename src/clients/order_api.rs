use std::time::{Duration, Instant};

use anyhow::{Error, Result, anyhow};
use reqwest::{Client, StatusCode};
use tokio::time::timeout;
use tracing::{debug, info};

use crate::{
    config::Config,
    models::{order::OrderStatusData, retry::RetryConfig},
    utils::retry_with_backoff,
};

/// Read-only client for the remote order-tracking API.
#[derive(Debug, Clone)]
pub struct OrderApiClient {
    http_client: Client,
    base_url: String,
    retry_config: RetryConfig,
    health_check_timeout: Duration,
}

impl OrderApiClient {
    pub fn new(config: &Config) -> Result<Self, Error> {
        let http_client = Client::builder()
            .timeout(Duration::from_millis(config.order_api_timeout_ms))
            .build()
            .map_err(|_| anyhow!("Failed to create HTTP client"))?;

        info!(base_url = %config.order_api_url, "Order API client initialized");

        Ok(Self {
            http_client,
            base_url: config.order_api_url.trim_end_matches('/').to_string(),
            retry_config: config.retry_config(),
            health_check_timeout: Duration::from_millis(config.health_check_timeout_ms),
        })
    }

    pub async fn fetch_order(&self, order_id: &str) -> Result<OrderStatusData, Error> {
        let url = format!(
            "{}/api/orders/{}",
            self.base_url,
            urlencoding::encode(order_id)
        );

        debug!(order_id, "Fetching order from tracking API");

        let http_client = self.http_client.clone();

        retry_with_backoff(&self.retry_config, || {
            let url = url.clone();
            let client = http_client.clone();

            async move {
                let response = client.get(&url).send().await?;
                let status = response.status();

                if status == StatusCode::NOT_FOUND {
                    // Retrying will not make the order appear
                    return Ok(None);
                }

                if !status.is_success() {
                    return Err(anyhow!("Order API returned status {}", status));
                }

                let order = response
                    .json::<OrderStatusData>()
                    .await
                    .map_err(|e| anyhow!("Failed to parse order JSON: {}", e))?;
                Ok::<_, Error>(Some(order))
            }
        })
        .await
        .map_err(|e| anyhow!("Failed to fetch order {}: {}", order_id, e))?
        .ok_or_else(|| anyhow!("Order {} not found", order_id))
    }

    /// Round-trips the API's health endpoint, returning the latency in ms.
    pub async fn ping(&self) -> Result<u64, Error> {
        let url = format!("{}/health", self.base_url);
        let start = Instant::now();

        let response = timeout(self.health_check_timeout, self.http_client.get(&url).send())
            .await
            .map_err(|_| {
                anyhow!(
                    "Health check timed out after {}ms",
                    self.health_check_timeout.as_millis()
                )
            })??;

        if !response.status().is_success() {
            return Err(anyhow!("Health endpoint returned status {}", response.status()));
        }

        Ok(start.elapsed().as_millis() as u64)
    }
}
