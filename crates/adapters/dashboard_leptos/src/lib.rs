use hostwatch_app::config::DashboardConfig;
use hostwatch_app::services::host_registry::HostRegistry;
use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

pub mod api;
pub mod browser;
mod components;
pub mod config;
mod pages;

use api::GlooApiClient;
use components::{Nav, ToastContainer};
use pages::{Hosts, Monitoring, NotFound};

/// Root application component.
///
/// Builds the API client and the host registry once and shares them, with
/// the configuration, through context.
#[component]
pub fn App(config: DashboardConfig) -> impl IntoView {
    let client = GlooApiClient::new(&config.api.base_url);
    provide_context(HostRegistry::new(client.clone()));
    provide_context(client);
    provide_context(config);

    view! {
        <ToastContainer>
            <Router>
                <Nav/>
                <main>
                    <Routes fallback=|| view! { <NotFound/> }>
                        <Route path=path!("/") view=Monitoring/>
                        <Route path=path!("hosts") view=Hosts/>
                    </Routes>
                </main>
            </Router>
        </ToastContainer>
    }
}
