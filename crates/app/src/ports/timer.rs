//! Timer port — a recurring callback owned through a handle.

use std::rc::Rc;
use std::time::Duration;

/// Schedules a callback every `period` until the returned handle is dropped.
pub trait IntervalTimer {
    /// Keeps the timer alive; dropping it cancels the timer.
    type Handle;

    /// Start calling `tick` every `period`. The first call happens after
    /// one full period, never immediately.
    fn start(&self, period: Duration, tick: Rc<dyn Fn()>) -> Self::Handle;
}
