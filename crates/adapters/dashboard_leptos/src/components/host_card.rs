use hostwatch_app::monitoring::{ChartSample, Gauge, HostCard};
use hostwatch_domain::metrics::{DataSource, HostStatus};
use leptos::prelude::*;

use super::HostChartView;

fn status_class(status: HostStatus) -> &'static str {
    if status.is_online() {
        "host-status status-online"
    } else {
        "host-status status-offline"
    }
}

fn source_class(source: DataSource) -> &'static str {
    match source {
        DataSource::Real => "data-source source-real",
        DataSource::Simulated => "data-source source-simulated",
    }
}

/// One usage metric with its progress bar.
#[component]
fn GaugeRow(gauge: Gauge) -> impl IntoView {
    let class = format!("metric-progress {}", gauge.level.css_class());
    view! {
        <div class="metric-item">
            <div class="metric-label">{gauge.label}</div>
            <div class="metric-value">{gauge.value}</div>
            <div class="metric-bar">
                <div class=class style:width=format!("{}%", gauge.width)></div>
            </div>
            {gauge.detail.map(|detail| view! { <div class="metric-detail">{detail}</div> })}
        </div>
    }
}

/// Monitoring card of a single host, rebuilt on every poll.
#[component]
pub fn HostCardView(card: HostCard, samples: Vec<ChartSample>) -> impl IntoView {
    let canvas_id = card.canvas_id();
    let network = format!("in {} \u{00B7} out {}", card.network_in, card.network_out);

    view! {
        <div class="host-card" data-host-id=card.host_id.to_string()>
            <div class="host-header">
                <div class="host-ip">{card.host_ip}</div>
                <div class="host-badges">
                    <span class=status_class(card.status)>{card.status.label()}</span>
                    <span class=source_class(card.source)>{card.source.label()}</span>
                </div>
            </div>
            <div class="metrics-grid">
                <GaugeRow gauge=card.cpu/>
                <GaugeRow gauge=card.memory/>
                <GaugeRow gauge=card.disk/>
                <div class="metric-item">
                    <div class="metric-label">"Network"</div>
                    <div class="metric-value">{network}</div>
                </div>
            </div>
            <div class="chart-container">
                <HostChartView canvas_id samples/>
            </div>
        </div>
    }
}
