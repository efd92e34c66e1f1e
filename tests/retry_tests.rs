use anyhow::{Result, anyhow};
use sera_messaging::{models::retry::RetryConfig, utils::retry_with_backoff};
use std::sync::{
    Arc,
    atomic::{AtomicU32, Ordering},
};
use tokio::time::Instant;
use tokio_test::{assert_err, assert_ok};

fn quick_config(max_attempts: u32) -> RetryConfig {
    RetryConfig {
        max_attempts,
        initial_delay_ms: 20,
        max_delay_ms: 100,
        backoff_multiplier: 2,
    }
}

/// Test: Successful operations complete without retry
#[tokio::test]
async fn test_successful_operation_no_retry() -> Result<()> {
    let attempt_count = Arc::new(AtomicU32::new(0));
    let counter = Arc::clone(&attempt_count);

    let result = retry_with_backoff(&quick_config(3), || {
        let counter = Arc::clone(&counter);
        async move {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok::<_, anyhow::Error>("success")
        }
    })
    .await?;

    assert_eq!(result, "success");
    assert_eq!(attempt_count.load(Ordering::SeqCst), 1, "Should only attempt once");

    Ok(())
}

/// Test: Transient failures are retried until one succeeds
#[tokio::test]
async fn test_transient_failures_are_retried() -> Result<()> {
    let attempt_count = Arc::new(AtomicU32::new(0));
    let counter = Arc::clone(&attempt_count);

    let result = retry_with_backoff(&quick_config(5), || {
        let counter = Arc::clone(&counter);
        async move {
            let attempts = counter.fetch_add(1, Ordering::SeqCst);

            // Fail first 2 attempts, succeed on 3rd
            if attempts < 2 {
                Err(anyhow!("Order API unavailable"))
            } else {
                Ok("order")
            }
        }
    })
    .await;

    assert_ok!(&result);
    assert_eq!(attempt_count.load(Ordering::SeqCst), 3, "Should retry 2 times then succeed");

    Ok(())
}

/// Test: Permanent failures exhaust retries
#[tokio::test]
async fn test_permanent_failure_exhausts_retries() -> Result<()> {
    let attempt_count = Arc::new(AtomicU32::new(0));
    let counter = Arc::clone(&attempt_count);

    let result = retry_with_backoff(&quick_config(4), || {
        let counter = Arc::clone(&counter);
        async move {
            counter.fetch_add(1, Ordering::SeqCst);
            Err::<String, _>(anyhow!("Permanent failure"))
        }
    })
    .await;

    assert_err!(&result);
    assert_eq!(
        attempt_count.load(Ordering::SeqCst),
        4,
        "Should attempt exactly max_attempts times"
    );

    Ok(())
}

/// Test: Backoff waits between attempts but never beyond the cap
#[tokio::test]
async fn test_backoff_waits_between_attempts() -> Result<()> {
    let config = RetryConfig {
        max_attempts: 4,
        initial_delay_ms: 40,
        max_delay_ms: 60,
        backoff_multiplier: 2,
    };

    let start = Instant::now();
    let _ = retry_with_backoff(&config, || async { Err::<(), _>(anyhow!("Fail")) }).await;
    let elapsed = start.elapsed().as_millis();

    // 40 + 60 + 60 with up to 10% jitter either way
    assert!(elapsed >= 144, "Should back off between attempts (took {}ms)", elapsed);

    Ok(())
}
