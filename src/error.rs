use thiserror::Error;

/// Failures surfaced by the blocking wait helpers.
///
/// Every failure leg of a wait collapses into this one category, so callers
/// propagate it with `?` without caring which leg broke. Only
/// [`BlockingWaiter::sleep`](crate::BlockingWaiter::sleep) opts out, via
/// [`SleepInterrupted`].
#[derive(Error, Debug)]
pub enum WaitError {
  /// The interrupt token fired before the awaited work resolved.
  #[error("blocking wait was interrupted")]
  Interrupted,

  /// The awaited handle resolved, but with a failure of its own.
  #[error("awaited task failed")]
  TaskFailed(#[source] Box<dyn std::error::Error + Send + Sync>),

  /// The awaited future panicked while being polled.
  #[error("awaited task panicked while being polled")]
  TaskPanicked,
}

/// Signal that a [`BlockingWaiter::sleep`](crate::BlockingWaiter::sleep) was
/// cut short by the interrupt token.
///
/// Unlike [`WaitError::Interrupted`] this is a recoverable signal: the caller
/// decides whether to resume sleeping, back off, or wind down.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("sleep was interrupted before the full duration elapsed")]
pub struct SleepInterrupted;
