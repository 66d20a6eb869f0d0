use crate::error::{SleepInterrupted, WaitError};
use crate::pool::Drainable;

use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::time::Duration;

use futures::FutureExt;
use tokio::runtime::Handle as TokioHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace, warn};

/// Upper bound on a single [`BlockingWaiter::await_drain`] call.
///
/// A pool that has not drained by then is treated as wedged: the call logs
/// and returns instead of holding its thread forever.
pub const MAX_DRAIN_WAIT: Duration = Duration::from_secs(24 * 60 * 60);

/// Blocks a plain thread on asynchronous work owned by a Tokio runtime.
///
/// A waiter bundles the two pieces of ambient context every blocking wait
/// needs: the runtime handle the wait is driven on, and the interrupt token
/// checked at each blocking boundary. It carries no state of its own.
/// Cloning is cheap, and clones share the interrupt signal.
///
/// # Panics
///
/// Every wait method panics if called from a thread that is itself driving a
/// Tokio runtime, the same restriction as [`TokioHandle::block_on`]. The
/// waiter belongs on dedicated coordinator or main threads.
#[derive(Debug, Clone)]
pub struct BlockingWaiter {
  runtime: TokioHandle,
  interrupt: CancellationToken,
}

impl BlockingWaiter {
  /// Creates a waiter whose interrupt token starts out unasserted.
  pub fn new(runtime: TokioHandle) -> Self {
    Self::with_interrupt(runtime, CancellationToken::new())
  }

  /// Creates a waiter that treats `interrupt` as its interruption signal.
  ///
  /// Cancelling the token aborts any wait in progress on this waiter and
  /// fails every later one; the token is never reset.
  pub fn with_interrupt(runtime: TokioHandle, interrupt: CancellationToken) -> Self {
    Self { runtime, interrupt }
  }

  /// Returns a clone of the interrupt token, for wiring into shutdown logic.
  pub fn interrupt_token(&self) -> CancellationToken {
    self.interrupt.clone()
  }

  /// Checks whether the interruption signal has been asserted.
  pub fn is_interrupted(&self) -> bool {
    self.interrupt.is_cancelled()
  }

  /// Blocks until `pool` has drained, bounded by [`MAX_DRAIN_WAIT`].
  ///
  /// Returns `Ok(())` both when the pool drained and when the bound elapsed
  /// first; a pool still busy after a full day is logged and left behind.
  ///
  /// # Errors
  ///
  /// Returns [`WaitError::Interrupted`] if the interrupt token fires while
  /// waiting.
  pub fn await_drain<P>(&self, pool: &P) -> Result<(), WaitError>
  where
    P: Drainable + ?Sized,
  {
    self.runtime.block_on(async {
      tokio::select! {
        biased;

        _ = self.interrupt.cancelled() => {
          debug!("Drain wait interrupted.");
          Err(WaitError::Interrupted)
        }

        drained = tokio::time::timeout(MAX_DRAIN_WAIT, pool.drained()) => {
          match drained {
            Ok(()) => trace!("Pool drained."),
            Err(_elapsed) => {
              warn!(
                bound_secs = MAX_DRAIN_WAIT.as_secs(),
                "Pool did not drain within the wait bound. Giving up on it."
              );
            }
          }
          Ok(())
        }
      }
    })
  }

  /// Blocks until `handle` resolves and returns its value.
  ///
  /// The handle is consumed: its terminal outcome is observed exactly once,
  /// by this call. An interrupted wait drops the handle without observing an
  /// outcome, and the token stays asserted so the caller's surroundings see
  /// the interruption too.
  ///
  /// # Errors
  ///
  /// Returns [`WaitError::TaskFailed`] when the handle resolves to an error,
  /// [`WaitError::TaskPanicked`] when the polled future panics, and
  /// [`WaitError::Interrupted`] when the interrupt token fires first.
  pub fn await_result<F, T, E>(&self, handle: F) -> Result<T, WaitError>
  where
    F: Future<Output = Result<T, E>>,
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
  {
    self.runtime.block_on(async {
      tokio::select! {
        biased;

        _ = self.interrupt.cancelled() => {
          debug!("Result wait interrupted.");
          Err(WaitError::Interrupted)
        }

        outcome = AssertUnwindSafe(handle).catch_unwind() => match outcome {
          Ok(Ok(value)) => Ok(value),
          Ok(Err(task_error)) => Err(WaitError::TaskFailed(task_error.into())),
          Err(_panic_payload) => {
            warn!("Awaited future panicked while being polled.");
            Err(WaitError::TaskPanicked)
          }
        },
      }
    })
  }

  /// Blocks until `handle` resolves, routing any failure to `on_error`.
  ///
  /// Whatever [`await_result`](Self::await_result) would have returned as an
  /// error is handed to `on_error` exactly once and the call yields `None`;
  /// a success comes back as `Some`.
  pub fn await_result_or<F, T, E, H>(&self, handle: F, on_error: H) -> Option<T>
  where
    F: Future<Output = Result<T, E>>,
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
    H: FnOnce(WaitError),
  {
    match self.await_result(handle) {
      Ok(value) => Some(value),
      Err(wait_error) => {
        trace!(error = %wait_error, "Routing wait failure to caller-supplied handler.");
        on_error(wait_error);
        None
      }
    }
  }

  /// Blocks until every handle in `handles` resolves.
  ///
  /// Values come back in input order regardless of the order the underlying
  /// tasks actually complete in.
  ///
  /// # Errors
  ///
  /// The first handle whose wait fails aborts the batch with that handle's
  /// [`await_result`](Self::await_result) error; later handles are dropped
  /// without being waited on.
  pub fn await_all<I, F, T, E>(&self, handles: I) -> Result<Vec<T>, WaitError>
  where
    I: IntoIterator<Item = F>,
    F: Future<Output = Result<T, E>>,
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
  {
    let handles = handles.into_iter();
    let mut values = Vec::with_capacity(handles.size_hint().0);
    for handle in handles {
      values.push(self.await_result(handle)?);
    }
    Ok(values)
  }

  /// Suspends the calling thread for `duration`.
  ///
  /// # Errors
  ///
  /// Returns [`SleepInterrupted`] if the interrupt token fires mid-sleep.
  /// This is the one wait that surfaces interruption as a recoverable signal
  /// instead of a [`WaitError`].
  pub fn sleep(&self, duration: Duration) -> Result<(), SleepInterrupted> {
    self.runtime.block_on(async {
      tokio::select! {
        biased;

        _ = self.interrupt.cancelled() => Err(SleepInterrupted),
        _ = tokio::time::sleep(duration) => Ok(()),
      }
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn interrupt_token_is_shared_between_clones() {
    let runtime = tokio::runtime::Builder::new_multi_thread()
      .enable_all()
      .build()
      .unwrap();
    let waiter = BlockingWaiter::new(runtime.handle().clone());
    let sibling = waiter.clone();

    assert!(!waiter.is_interrupted());
    sibling.interrupt_token().cancel();
    assert!(waiter.is_interrupted());
    assert!(sibling.is_interrupted());
  }
}
