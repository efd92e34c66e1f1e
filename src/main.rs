use anyhow::{Error, Result};
use sera_messaging::{
    clients::{health::HealthChecker, order_api::OrderApiClient},
    config::Config,
    messaging::Messenger,
    models::{message::MessageOutcome, response::ApiResponse},
    utils::process_message,
};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let messenger = Messenger::from_config(&config);
    let order_api = OrderApiClient::new(&config)?;

    let health = HealthChecker::new(order_api.clone()).check_all().await;
    info!(status = ?health.status, "Startup health check complete");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    info!("Worker is ready, reading envelopes from stdin");

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let response: ApiResponse<MessageOutcome> =
            match process_message(&line, &messenger, Some(&order_api)).await {
                Ok(outcome) => ApiResponse::success(outcome, "Message prepared".to_string()),
                Err(e) => {
                    warn!(error = %e, "Failed to process envelope");
                    ApiResponse::error(e.to_string(), "Message could not be prepared".to_string())
                }
            };

        let mut encoded = serde_json::to_string(&response)?;
        encoded.push('\n');
        stdout.write_all(encoded.as_bytes()).await?;
        stdout.flush().await?;
    }

    info!("Input closed, worker shutting down");

    Ok(())
}
