//! Configuration embedded in the WASM bundle.

use hostwatch_app::config::DashboardConfig;

const EMBEDDED: &str = include_str!("../hostwatch.toml");

/// Load the embedded configuration, falling back to defaults when invalid.
///
/// Runs before the tracing subscriber is installed, so failures go to the
/// browser console directly.
#[must_use]
pub fn load() -> DashboardConfig {
    match DashboardConfig::from_toml_str(EMBEDDED) {
        Ok(config) => config,
        Err(err) => {
            leptos::logging::warn!("invalid hostwatch.toml, using defaults: {err}");
            DashboardConfig::default()
        }
    }
}
