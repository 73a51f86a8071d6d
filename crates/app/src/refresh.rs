//! Refresh controller — owns the polling timer.
//!
//! Two states: `Running` holds exactly one live timer handle, `Paused`
//! holds none. Page visibility drives the transitions; a manual refresh
//! polls once without touching the state.

use std::rc::Rc;
use std::time::Duration;

use crate::ports::IntervalTimer;

/// Poll period used when the configuration does not override it.
pub const DEFAULT_REFRESH_PERIOD: Duration = Duration::from_millis(5000);

/// Whether the page is currently shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    Hidden,
}

impl Visibility {
    #[must_use]
    pub fn from_hidden(hidden: bool) -> Self {
        if hidden { Self::Hidden } else { Self::Visible }
    }
}

/// Whether a key press is the manual refresh shortcut (Ctrl+R).
///
/// Only a lowercase `r` matches, so Ctrl+Shift+R still hard-reloads.
#[must_use]
pub fn is_refresh_shortcut(key: &str, ctrl: bool) -> bool {
    ctrl && key == "r"
}

/// Polling state of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshState {
    Running,
    Paused,
}

impl RefreshState {
    /// Status line text.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Running => "Live refresh",
            Self::Paused => "Refresh paused",
        }
    }
}

/// Drives a poll callback from an [`IntervalTimer`].
pub struct RefreshController<T: IntervalTimer> {
    timer: T,
    period: Duration,
    on_tick: Rc<dyn Fn()>,
    active: Option<T::Handle>,
}

impl<T: IntervalTimer> RefreshController<T> {
    /// Create the controller and start it right away.
    pub fn new(timer: T, period: Duration, on_tick: impl Fn() + 'static) -> Self {
        let mut controller = Self {
            timer,
            period,
            on_tick: Rc::new(on_tick),
            active: None,
        };
        controller.start();
        controller
    }

    /// Start polling. Any existing timer is cancelled first.
    pub fn start(&mut self) {
        let restarted = self.active.take().is_some();
        let handle = self.timer.start(self.period, Rc::clone(&self.on_tick));
        self.active = Some(handle);
        tracing::debug!(
            period_ms = self.period.as_millis(),
            restarted,
            "auto refresh started"
        );
    }

    /// Cancel the timer. In-flight polls are left to complete.
    ///
    /// Returns `false` when the controller was already paused.
    pub fn stop(&mut self) -> bool {
        let paused = self.active.take().is_some();
        if paused {
            tracing::debug!("auto refresh paused");
        }
        paused
    }

    /// Pause while hidden, resume when shown again.
    pub fn on_visibility_change(&mut self, visibility: Visibility) {
        match visibility {
            Visibility::Hidden => {
                self.stop();
            }
            Visibility::Visible => self.start(),
        }
    }

    /// Poll once now, out of band.
    pub fn refresh_now(&self) {
        tracing::debug!("manual refresh");
        (self.on_tick)();
    }

    #[must_use]
    pub fn state(&self) -> RefreshState {
        if self.active.is_some() {
            RefreshState::Running
        } else {
            RefreshState::Paused
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    type Slots = Rc<RefCell<Vec<Option<(Duration, Rc<dyn Fn()>)>>>>;

    /// Timer that only fires when told to, and tracks live handles.
    #[derive(Default, Clone)]
    struct ManualTimer {
        slots: Slots,
    }

    struct ManualHandle {
        slots: Slots,
        index: usize,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            self.slots.borrow_mut()[self.index] = None;
        }
    }

    impl IntervalTimer for ManualTimer {
        type Handle = ManualHandle;

        fn start(&self, period: Duration, tick: Rc<dyn Fn()>) -> ManualHandle {
            let mut slots = self.slots.borrow_mut();
            slots.push(Some((period, tick)));
            ManualHandle {
                slots: Rc::clone(&self.slots),
                index: slots.len() - 1,
            }
        }
    }

    impl ManualTimer {
        fn active(&self) -> usize {
            self.slots.borrow().iter().flatten().count()
        }

        fn started(&self) -> usize {
            self.slots.borrow().len()
        }

        fn fire(&self) {
            let ticks: Vec<Rc<dyn Fn()>> = self
                .slots
                .borrow()
                .iter()
                .flatten()
                .map(|(_, tick)| Rc::clone(tick))
                .collect();
            for tick in ticks {
                tick();
            }
        }
    }

    fn controller() -> (RefreshController<ManualTimer>, ManualTimer, Rc<Cell<usize>>) {
        let timer = ManualTimer::default();
        let polls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&polls);
        let controller = RefreshController::new(timer.clone(), DEFAULT_REFRESH_PERIOD, move || {
            counter.set(counter.get() + 1);
        });
        (controller, timer, polls)
    }

    #[test]
    fn should_start_running_with_one_timer() {
        let (controller, timer, polls) = controller();
        assert_eq!(controller.state(), RefreshState::Running);
        assert_eq!(timer.active(), 1);
        assert_eq!(polls.get(), 0);
    }

    #[test]
    fn should_poll_on_each_tick() {
        let (_controller, timer, polls) = controller();
        timer.fire();
        timer.fire();
        assert_eq!(polls.get(), 2);
    }

    #[test]
    fn should_use_configured_period() {
        let (_controller, timer, _) = controller();
        let period = timer.slots.borrow()[0].as_ref().map(|(period, _)| *period);
        assert_eq!(period, Some(Duration::from_millis(5000)));
    }

    #[test]
    fn should_stop_polling_while_hidden() {
        let (mut controller, timer, polls) = controller();
        controller.on_visibility_change(Visibility::Hidden);

        timer.fire();

        assert_eq!(controller.state(), RefreshState::Paused);
        assert_eq!(timer.active(), 0);
        assert_eq!(polls.get(), 0);
    }

    #[test]
    fn should_resume_with_single_timer_after_repeated_cycles() {
        let (mut controller, timer, polls) = controller();
        for _ in 0..5 {
            controller.on_visibility_change(Visibility::Hidden);
            controller.on_visibility_change(Visibility::Visible);
        }
        controller.on_visibility_change(Visibility::Visible);

        assert_eq!(controller.state(), RefreshState::Running);
        assert_eq!(timer.active(), 1);

        timer.fire();
        assert_eq!(polls.get(), 1);
    }

    #[test]
    fn should_replace_timer_when_started_twice() {
        let (mut controller, timer, _) = controller();
        controller.start();
        controller.start();
        assert_eq!(timer.started(), 3);
        assert_eq!(timer.active(), 1);
    }

    #[test]
    fn should_restart_without_pausing() {
        let (mut controller, timer, _) = controller();
        controller.start();
        controller.on_visibility_change(Visibility::Visible);

        assert_eq!(controller.state(), RefreshState::Running);
        assert_eq!(timer.active(), 1);
        assert!(controller.stop());
    }

    #[test]
    fn should_pause_only_once() {
        let (mut controller, timer, _) = controller();
        assert!(controller.stop());
        assert!(!controller.stop());
        controller.on_visibility_change(Visibility::Hidden);

        assert_eq!(controller.state(), RefreshState::Paused);
        assert_eq!(timer.active(), 0);
    }

    #[test]
    fn should_refresh_now_without_changing_state() {
        let (mut controller, timer, polls) = controller();
        controller.refresh_now();
        assert_eq!(polls.get(), 1);
        assert_eq!(controller.state(), RefreshState::Running);

        controller.on_visibility_change(Visibility::Hidden);
        controller.refresh_now();
        assert_eq!(polls.get(), 2);
        assert_eq!(controller.state(), RefreshState::Paused);
        assert_eq!(timer.active(), 0);
    }

    #[test]
    fn should_cancel_timer_on_drop() {
        let (controller, timer, _) = controller();
        drop(controller);
        assert_eq!(timer.active(), 0);
    }

    #[test]
    fn should_match_ctrl_r_only() {
        assert!(is_refresh_shortcut("r", true));
        assert!(!is_refresh_shortcut("r", false));
        assert!(!is_refresh_shortcut("R", true));
        assert!(!is_refresh_shortcut("t", true));
    }

    #[test]
    fn should_map_document_hidden_flag() {
        assert_eq!(Visibility::from_hidden(true), Visibility::Hidden);
        assert_eq!(Visibility::from_hidden(false), Visibility::Visible);
    }
}
