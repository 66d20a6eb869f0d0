//! Blocking wait helpers for Tokio task handles and pools.
//!
//! The helpers bridge plain threads and a Tokio runtime: block until a pool
//! drains, until a single task's result is ready, until a whole batch is
//! done, or just for a while. Interruption is carried by a shared
//! [`CancellationToken`](tokio_util::sync::CancellationToken) and surfaced at
//! every blocking boundary instead of being swallowed.

mod error;
mod pool;
mod waiter;

pub use error::{SleepInterrupted, WaitError};
pub use pool::{DrainWait, Drainable};
pub use waiter::{BlockingWaiter, MAX_DRAIN_WAIT};
