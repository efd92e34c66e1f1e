use std::collections::{HashMap, HashSet};

use chrono::Utc;
use tracing::{debug, warn};

use crate::{
    clients::order_api::OrderApiClient,
    messaging::catalog,
    models::{
        health::{HealthCheckResponse, HealthStatus, ServiceHealth},
        order::OrderStatus,
    },
};

pub struct HealthChecker {
    order_api: OrderApiClient,
}

impl HealthChecker {
    pub fn new(order_api: OrderApiClient) -> Self {
        Self { order_api }
    }

    pub async fn check_all(&self) -> HealthCheckResponse {
        let mut checks = HashMap::new();

        checks.insert("order_api".to_string(), self.check_order_api().await);
        checks.insert("template_catalog".to_string(), check_catalog());

        let status = determine_overall_status(&checks);

        HealthCheckResponse {
            status,
            timestamp: Utc::now(),
            checks,
        }
    }

    async fn check_order_api(&self) -> ServiceHealth {
        match self.order_api.ping().await {
            Ok(elapsed) => {
                debug!(response_time_ms = elapsed, "Order API health check passed");
                ServiceHealth::healthy(elapsed)
            }
            Err(e) => {
                warn!(error = %e, "Order API health check failed");
                // Messages can still be generated from caller-supplied orders
                ServiceHealth::degraded(format!("Order API unreachable: {}", e))
            }
        }
    }
}

pub fn check_catalog() -> ServiceHealth {
    let mut seen = HashSet::new();

    if let Some(duplicate) = catalog::all().iter().find(|t| !seen.insert(t.id)) {
        return ServiceHealth::unhealthy(format!("Duplicate template id '{}'", duplicate.id));
    }

    let missing: Vec<String> = OrderStatus::known()
        .iter()
        .map(|status| status.template_id())
        .filter(|id| catalog::find(id).is_none())
        .collect();

    if !missing.is_empty() {
        return ServiceHealth::unhealthy(format!("Missing templates: {}", missing.join(", ")));
    }

    let categories: Vec<String> = catalog::all()
        .iter()
        .map(|t| t.category)
        .fold(Vec::new(), |mut seen, category| {
            if !seen.contains(&category) {
                seen.push(category);
            }
            seen
        })
        .iter()
        .map(|category| category.to_string())
        .collect();

    ServiceHealth::inspected(format!(
        "{} templates in {} categories: {}",
        catalog::all().len(),
        categories.len(),
        categories.join(", ")
    ))
}

pub fn determine_overall_status(checks: &HashMap<String, ServiceHealth>) -> HealthStatus {
    let has_unhealthy = checks
        .values()
        .any(|health| health.status == HealthStatus::Unhealthy);

    let has_degraded = checks
        .values()
        .any(|health| health.status == HealthStatus::Degraded);

    if has_unhealthy {
        HealthStatus::Unhealthy
    } else if has_degraded {
        HealthStatus::Degraded
    } else {
        HealthStatus::Healthy
    }
}
