use futures_vigil::BlockingWaiter;
use std::time::Duration;
use tokio::runtime::Runtime;
use tracing::info;

async fn crunch_report(id: usize, delay_ms: u64) -> String {
  info!("Report {} building, will take {}ms", id, delay_ms);
  tokio::time::sleep(Duration::from_millis(delay_ms)).await;
  format!("report_{}_ready", id)
}

fn main() {
  tracing_subscriber::fmt()
    .with_max_level(tracing::Level::DEBUG)
    .with_target(false) // Disable module paths for cleaner demo output
    .init();

  info!("--- Block For Result Demo ---");

  let runtime = Runtime::new().expect("Failed to start runtime");
  let waiter = BlockingWaiter::new(runtime.handle().clone());

  let handle = runtime.spawn(crunch_report(1, 400));
  info!("Task submitted; blocking the main thread on its result.");

  match waiter.await_result(handle) {
    Ok(value) => info!("Result: {}", value),
    Err(e) => tracing::error!("Wait failed: {:?}", e),
  }

  info!("--- Block For Result Demo End ---");
}
