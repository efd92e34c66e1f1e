use anyhow::{Error, Result, anyhow};
use tokio::time::{Duration, sleep};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::{
    clients::order_api::OrderApiClient,
    messaging::Messenger,
    models::{
        message::{Envelope, MessageOutcome, MessageRequest},
        retry::RetryConfig,
    },
};

pub async fn process_message(
    payload: &str,
    messenger: &Messenger,
    order_api: Option<&OrderApiClient>,
) -> Result<MessageOutcome, Error> {
    let envelope = serde_json::from_str::<Envelope>(payload)
        .map_err(|e| anyhow!("Malformed payload: {}", e))?;

    let trace_id = envelope
        .trace_id
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    match envelope.data {
        MessageRequest::OrderStatus { order } => {
            info!(
                trace_id = %trace_id,
                order_id = %order.order_id,
                status = %order.status,
                "Generating order status message"
            );
            Ok(messenger.order_update(&order, trace_id))
        }
        MessageRequest::OrderLookup { order_id } => {
            let order_api =
                order_api.ok_or_else(|| anyhow!("Order lookups need an order API client"))?;

            info!(trace_id = %trace_id, order_id = %order_id, "Looking up order");

            let order = order_api.fetch_order(&order_id).await?;
            Ok(messenger.order_update(&order, trace_id))
        }
        MessageRequest::Template {
            template_id,
            fields,
            phone,
        } => {
            info!(trace_id = %trace_id, template_id = %template_id, "Rendering template");
            messenger.render(&template_id, &fields, phone.as_deref(), trace_id)
        }
        MessageRequest::Suggest { text } => {
            let outcome = MessageOutcome::new(trace_id);

            match messenger.suggest(&text) {
                Some(template) => {
                    info!(
                        trace_id = %outcome.trace_id,
                        template_id = %template.id,
                        "Suggested auto-response"
                    );
                    Ok(outcome
                        .with_template(template.id)
                        .with_message(template.body.to_string()))
                }
                None => {
                    debug!(trace_id = %outcome.trace_id, "No auto-response matched");
                    Ok(outcome)
                }
            }
        }
        MessageRequest::Contact { message } => {
            let link = messenger.contact_link(&message);
            Ok(MessageOutcome::new(trace_id)
                .with_message(message)
                .with_link(link))
        }
    }
}

pub async fn retry_with_backoff<F, Fut, T, E>(config: &RetryConfig, operation: F) -> Result<T, E>
where
    F: Fn() -> Fut,
    Fut: std::future::Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let mut attempt = 0;
    let mut delay_ms = config.initial_delay_ms;

    loop {
        attempt += 1;

        match operation().await {
            Ok(result) => {
                if attempt > 1 {
                    info!(
                        attempt,
                        max_attempts = config.max_attempts,
                        "Retry succeeded"
                    );
                }
                return Ok(result);
            }
            Err(e) => {
                if attempt >= config.max_attempts {
                    warn!(
                        max_attempts = config.max_attempts,
                        error = %e,
                        "Retry failed after exhausting all attempts"
                    );
                    return Err(e);
                }

                debug!(
                    attempt,
                    max_attempts = config.max_attempts,
                    delay_ms,
                    error = %e,
                    "Retry attempt failed, backing off"
                );

                let jitter = rand::random_range(-0.1..=0.1);
                let jittered_delay = (delay_ms as f64 * (1.0 + jitter)) as u64;

                sleep(Duration::from_millis(jittered_delay)).await;

                delay_ms = std::cmp::min(
                    delay_ms.saturating_mul(config.backoff_multiplier),
                    config.max_delay_ms,
                );
            }
        }
    }
}
