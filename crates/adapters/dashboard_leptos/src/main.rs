use hostwatch_dashboard::{App, config};
use leptos::prelude::*;
use tracing_wasm::WASMLayerConfigBuilder;

fn main() {
    console_error_panic_hook::set_once();

    let config = config::load();
    let layer = WASMLayerConfigBuilder::default()
        .set_max_level(config.log_level())
        .build();
    tracing_wasm::set_as_global_default_with_config(layer);

    tracing::info!(base_url = %config.api.base_url, "starting hostwatch dashboard");
    mount_to_body(move || view! { <App config=config/> });
}
