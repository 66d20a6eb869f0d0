use futures_vigil::BlockingWaiter;
use std::time::Duration;
use tokio::runtime::Runtime;
use tracing::{info, warn};

async fn fetch_remote_config() -> Result<String, std::io::Error> {
  tokio::time::sleep(Duration::from_millis(200)).await;
  Err(std::io::Error::new(
    std::io::ErrorKind::NotFound,
    "config service offline",
  ))
}

fn main() {
  tracing_subscriber::fmt()
    .with_max_level(tracing::Level::DEBUG)
    .with_target(false)
    .init();

  info!("--- Handler Fallback Demo ---");

  let runtime = Runtime::new().expect("Failed to start runtime");
  let waiter = BlockingWaiter::new(runtime.handle().clone());

  let config = waiter
    .await_result_or(fetch_remote_config(), |wait_error| {
      warn!("Falling back to built-in defaults: {}", wait_error);
    })
    .unwrap_or_else(|| "defaults".to_string());

  info!("Running with config: {}", config);
  info!("--- Handler Fallback Demo End ---");
}
