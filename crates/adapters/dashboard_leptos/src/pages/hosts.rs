use hostwatch_app::services::host_registry::HostRegistry;
use leptos::prelude::*;

use crate::api::GlooApiClient;
use crate::components::{HostForm, HostList, Loading};

/// Host management page: add form plus the registered hosts.
#[component]
pub fn Hosts() -> impl IntoView {
    let registry = expect_context::<HostRegistry<GlooApiClient>>();
    let (reload_trigger, set_reload_trigger) = signal(0);

    let hosts = LocalResource::new(move || {
        reload_trigger.track();
        let registry = registry.clone();
        async move { registry.load().await }
    });

    let reload = move || {
        set_reload_trigger.update(|v| *v += 1);
    };

    view! {
        <div>
            <h1>"Hosts"</h1>
            <HostForm on_added=reload/>
            <h2>"Monitored hosts"</h2>
            <Suspense fallback=move || view! { <Loading message="Loading hosts\u{2026}"/> }>
                {move || {
                    hosts
                        .read()
                        .as_ref()
                        .map(|state| view! { <HostList state=state.clone() on_deleted=reload/> })
                }}
            </Suspense>
        </div>
    }
}
