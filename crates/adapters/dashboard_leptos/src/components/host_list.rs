use chrono::Local;
use hostwatch_app::services::host_registry::{DeleteOutcome, HostListState, HostRegistry};
use hostwatch_domain::host::Host;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::use_toasts;
use crate::api::GlooApiClient;
use crate::browser::BrowserConfirm;

/// Registered hosts, or the matching placeholder when there are none.
#[component]
pub fn HostList(
    state: HostListState,
    /// Called after a host was deleted.
    #[prop(into)]
    on_deleted: Callback<()>,
) -> impl IntoView {
    match state {
        HostListState::Empty => view! {
            <div class="empty-state">"No monitored hosts yet. Add one above."</div>
        }
        .into_any(),
        HostListState::Failed(message) => view! {
            <div class="error">"Failed to load hosts: " {message}</div>
        }
        .into_any(),
        HostListState::Hosts(hosts) => view! {
            <div class="host-list">
                {hosts
                    .into_iter()
                    .map(|host| view! { <HostListItem host on_deleted/> })
                    .collect_view()}
            </div>
        }
        .into_any(),
    }
}

#[component]
fn HostListItem(host: Host, #[prop(into)] on_deleted: Callback<()>) -> impl IntoView {
    let registry = expect_context::<HostRegistry<GlooApiClient>>();
    let toasts = use_toasts();
    let (deleting, set_deleting) = signal(false);

    let id = host.id;
    let created = host
        .created_at
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string();

    let delete = move |_| {
        let registry = registry.clone();
        set_deleting.set(true);
        spawn_local(async move {
            match registry.delete(id, &BrowserConfirm).await {
                Ok(DeleteOutcome::Deleted) => {
                    toasts.success("Host deleted");
                    on_deleted.run(());
                }
                Ok(DeleteOutcome::Cancelled) => {}
                Err(err) => toasts.error(format!("Failed to delete host: {err}")),
            }
            set_deleting.set(false);
        });
    };

    view! {
        <div class="host-list-item">
            <div class="host-info">
                <div><strong>"IP address: "</strong>{host.host_ip}</div>
                <div><strong>"SSH user: "</strong>{host.ssh_user}</div>
                <div><strong>"SSH port: "</strong>{host.ssh_port}</div>
                <div><strong>"Added: "</strong>{created}</div>
            </div>
            <button class="btn-danger" on:click=delete disabled=move || deleting.get()>
                "Delete"
            </button>
        </div>
    }
}
