//! Add-host form with an SSH reachability test.

use hostwatch_app::services::host_registry::HostRegistry;
use hostwatch_domain::host::HostDraft;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::use_toasts;
use crate::api::GlooApiClient;

/// Form registering a new host.
///
/// The address is checked locally before anything is sent. Fields are
/// cleared only after the backend accepted the host.
#[component]
pub fn HostForm(
    /// Called after a host was added.
    #[prop(into)]
    on_added: Callback<()>,
) -> impl IntoView {
    let registry = expect_context::<HostRegistry<GlooApiClient>>();
    let toasts = use_toasts();

    let (host_ip, set_host_ip) = signal(String::new());
    let (ssh_user, set_ssh_user) = signal(String::new());
    let (ssh_password, set_ssh_password) = signal(String::new());
    let (ssh_port, set_ssh_port) = signal(String::new());
    let (busy, set_busy) = signal(false);

    let draft = move || {
        HostDraft::from_form(
            &host_ip.get_untracked(),
            &ssh_user.get_untracked(),
            &ssh_password.get_untracked(),
            &ssh_port.get_untracked(),
        )
    };

    let submit = {
        let registry = registry.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();
            let draft = draft();
            let registry = registry.clone();
            set_busy.set(true);
            spawn_local(async move {
                match registry.add(&draft).await {
                    Ok(host) => {
                        set_host_ip.set(String::new());
                        set_ssh_user.set(String::new());
                        set_ssh_password.set(String::new());
                        set_ssh_port.set(String::new());
                        toasts.success(format!("Host {} added", host.host_ip));
                        on_added.run(());
                    }
                    Err(err) => toasts.error(format!("Failed to add host: {err}")),
                }
                set_busy.set(false);
            });
        }
    };

    let test_ssh = move |_| {
        let draft = draft();
        let registry = registry.clone();
        set_busy.set(true);
        spawn_local(async move {
            match registry.test_connection(&draft).await {
                Ok(probe) if probe.ok => toasts.success(format!("SSH OK: {}", probe.message)),
                Ok(probe) => toasts.error(format!("SSH test failed: {}", probe.message)),
                Err(err) => toasts.error(err.to_string()),
            }
            set_busy.set(false);
        });
    };

    view! {
        <form class="host-form" on:submit=submit>
            <label>
                "IP address"
                <input
                    type="text"
                    name="hostIp"
                    placeholder="192.168.1.10"
                    required
                    prop:value=host_ip
                    on:input=move |ev| set_host_ip.set(event_target_value(&ev))
                />
            </label>
            <label>
                "SSH user"
                <input
                    type="text"
                    name="sshUser"
                    placeholder="root"
                    required
                    prop:value=ssh_user
                    on:input=move |ev| set_ssh_user.set(event_target_value(&ev))
                />
            </label>
            <label>
                "SSH password"
                <input
                    type="password"
                    name="sshPassword"
                    prop:value=ssh_password
                    on:input=move |ev| set_ssh_password.set(event_target_value(&ev))
                />
            </label>
            <label>
                "SSH port"
                <input
                    type="text"
                    name="sshPort"
                    placeholder="22"
                    prop:value=ssh_port
                    on:input=move |ev| set_ssh_port.set(event_target_value(&ev))
                />
            </label>
            <div class="form-actions">
                <button type="submit" class="btn btn-primary" disabled=move || busy.get()>
                    "Add host"
                </button>
                <button
                    type="button"
                    class="btn btn-secondary"
                    disabled=move || busy.get()
                    on:click=test_ssh
                >
                    "Test SSH"
                </button>
            </div>
        </form>
    }
}
