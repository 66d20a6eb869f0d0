use std::future::Future;
use std::pin::Pin;

use tokio_util::task::TaskTracker;

/// The future a pool hands out to signal that it has fully drained.
pub type DrainWait<'a> = Pin<Box<dyn Future<Output = ()> + Send + 'a>>;

/// An executor or work queue that can report having fully drained.
///
/// The returned future resolves once no submitted work is running or queued
/// and no further work will start. `drained` may be called any number of
/// times; every returned future resolves under the same condition.
pub trait Drainable {
  fn drained(&self) -> DrainWait<'_>;
}

impl<P: Drainable + ?Sized> Drainable for &P {
  fn drained(&self) -> DrainWait<'_> {
    (**self).drained()
  }
}

/// A closed [`TaskTracker`] drains once its last tracked task finishes.
///
/// An unclosed tracker never reports drained, matching a pool that may still
/// accept work.
impl Drainable for TaskTracker {
  fn drained(&self) -> DrainWait<'_> {
    Box::pin(self.wait())
  }
}
