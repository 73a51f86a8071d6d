//! Live monitoring page.
//!
//! Owns the monitoring view (cards plus per-host chart history) and the
//! refresh controller for as long as the page is mounted.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::Local;
use hostwatch_app::config::DashboardConfig;
use hostwatch_app::monitoring::{MonitoringFrame, MonitoringState, MonitoringView, PollOutcome, poll};
use hostwatch_app::refresh::{RefreshController, RefreshState};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::GlooApiClient;
use crate::browser::{self, BrowserTimer};
use crate::components::{HostCardView, Loading};

fn refresh_class(state: RefreshState) -> &'static str {
    match state {
        RefreshState::Running => "refresh-status refresh-running",
        RefreshState::Paused => "refresh-status refresh-paused",
    }
}

fn last_update_label(frame: &MonitoringFrame) -> String {
    match frame.last_updated {
        Some(at) => format!("Last update: {}", at.with_timezone(&Local).format("%H:%M:%S")),
        None => "Last update: never".to_string(),
    }
}

fn render_frame(frame: MonitoringFrame) -> AnyView {
    match frame.state.clone() {
        MonitoringState::Loading => {
            view! { <Loading message="Loading monitoring data\u{2026}"/> }.into_any()
        }
        MonitoringState::Empty => view! {
            <div class="empty-state">"No monitoring data yet. Add a host to start monitoring."</div>
        }
        .into_any(),
        MonitoringState::NoneOnline => view! {
            <div class="empty-state">"No host is online right now."</div>
        }
        .into_any(),
        MonitoringState::Failed(message) => view! {
            <div class="error">"Failed to load monitoring data: " {message}</div>
        }
        .into_any(),
        MonitoringState::Cards(cards) => view! {
            <div class="hosts-grid">
                {cards
                    .into_iter()
                    .map(|card| {
                        let samples = frame.history_of(card.host_id).to_vec();
                        view! { <HostCardView card samples/> }
                    })
                    .collect_view()}
            </div>
        }
        .into_any(),
    }
}

/// Monitoring dashboard with one card and one chart per host.
#[component]
pub fn Monitoring() -> impl IntoView {
    let config = expect_context::<DashboardConfig>();
    let client = expect_context::<GlooApiClient>();

    let view_state = Rc::new(RefCell::new(MonitoringView::new(config.monitoring_options())));
    let (frame, set_frame) = signal(view_state.borrow().frame());
    let (refresh_state, set_refresh_state) = signal(RefreshState::Running);

    let poll_once = move || {
        let view_state = Rc::clone(&view_state);
        let client = client.clone();
        spawn_local(async move {
            if poll(&view_state, &client).await == PollOutcome::Applied {
                set_frame.set(view_state.borrow().frame());
            }
        });
    };

    let controller = StoredValue::new_local(RefCell::new(RefreshController::new(
        BrowserTimer,
        config.refresh_period(),
        poll_once,
    )));
    let refresh_now = move || controller.with_value(|c| c.borrow().refresh_now());

    let visibility = browser::on_visibility_change(move |visibility| {
        let state = controller.with_value(|c| {
            let mut c = c.borrow_mut();
            c.on_visibility_change(visibility);
            c.state()
        });
        set_refresh_state.set(state);
    });
    let shortcut = browser::on_refresh_shortcut(refresh_now);
    let _listeners = StoredValue::new_local((visibility, shortcut));

    refresh_now();

    view! {
        <div class="monitoring">
            <header class="monitoring-header">
                <h1>"Monitoring"</h1>
                <span class=move || refresh_class(refresh_state.get())>
                    {move || refresh_state.get().label()}
                </span>
                <span class="last-update">{move || frame.with(last_update_label)}</span>
                <button class="btn btn-secondary" on:click=move |_| refresh_now()>
                    "Refresh"
                </button>
            </header>
            <div id="hostsContainer">{move || render_frame(frame.get())}</div>
        </div>
    }
}
