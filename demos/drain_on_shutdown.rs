use futures_vigil::BlockingWaiter;
use std::time::Duration;
use tokio::runtime::Runtime;
use tokio_util::task::TaskTracker;
use tracing::info;

async fn drain_worker(id: u64) {
  let busy_ms = 150 + id * 100;
  info!("Worker {} running for {}ms", id, busy_ms);
  tokio::time::sleep(Duration::from_millis(busy_ms)).await;
  info!("Worker {} finished", id);
}

fn main() {
  tracing_subscriber::fmt()
    .with_max_level(tracing::Level::DEBUG)
    .with_target(false)
    .init();

  info!("--- Drain On Shutdown Demo ---");

  let runtime = Runtime::new().expect("Failed to start runtime");
  let waiter = BlockingWaiter::new(runtime.handle().clone());

  let tracker = TaskTracker::new();
  for worker_id in 0..5 {
    runtime.spawn(tracker.track_future(drain_worker(worker_id)));
  }
  tracker.close();

  info!("All workers launched; draining before exit.");
  waiter
    .await_drain(&tracker)
    .expect("Drain wait was interrupted");
  info!("Pool drained; exiting.");

  info!("--- Drain On Shutdown Demo End ---");
}
