//! Browser implementations of the application ports, plus DOM listeners.

use std::rc::Rc;
use std::time::Duration;

use gloo_timers::callback::Interval;
use hostwatch_app::ports::{Confirmation, IntervalTimer};
use hostwatch_app::refresh::{Visibility, is_refresh_shortcut};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{EventTarget, KeyboardEvent};

/// [`IntervalTimer`] backed by `setInterval`. Dropping the handle clears it.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTimer;

impl IntervalTimer for BrowserTimer {
    type Handle = Interval;

    fn start(&self, period: Duration, tick: Rc<dyn Fn()>) -> Interval {
        let millis = u32::try_from(period.as_millis()).unwrap_or(u32::MAX);
        Interval::new(millis, move || tick())
    }
}

/// [`Confirmation`] through the blocking `window.confirm` dialog.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserConfirm;

impl Confirmation for BrowserConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        let Some(window) = web_sys::window() else {
            return false;
        };
        window.confirm_with_message(prompt).unwrap_or(false)
    }
}

/// Guard that removes a DOM event listener on drop.
pub struct ListenerGuard {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl ListenerGuard {
    fn attach(
        target: EventTarget,
        event: &'static str,
        handler: impl FnMut(web_sys::Event) + 'static,
    ) -> Option<Self> {
        let callback = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
        if let Err(err) =
            target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        {
            tracing::warn!(event, error = ?err, "failed to add event listener");
            return None;
        }
        Some(Self {
            target,
            event,
            callback,
        })
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// Call `handler` whenever the page is hidden or shown again.
///
/// Returns `None` when there is no document to listen on.
pub fn on_visibility_change(handler: impl Fn(Visibility) + 'static) -> Option<ListenerGuard> {
    let document = web_sys::window()?.document()?;
    let target: EventTarget = document.clone().into();
    ListenerGuard::attach(target, "visibilitychange", move |_| {
        handler(Visibility::from_hidden(document.hidden()));
    })
}

/// Call `handler` on Ctrl+R instead of reloading the page.
pub fn on_refresh_shortcut(handler: impl Fn() + 'static) -> Option<ListenerGuard> {
    let window = web_sys::window()?;
    ListenerGuard::attach(window.into(), "keydown", move |event| {
        let Some(key) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        if is_refresh_shortcut(&key.key(), key.ctrl_key()) {
            event.prevent_default();
            handler();
        }
    })
}
