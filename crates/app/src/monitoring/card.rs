//! Typed card model for one host of a snapshot.

use hostwatch_domain::format::{
    UsageLevel, format_bytes, format_celsius, format_percent, format_rate,
};
use hostwatch_domain::id::HostId;
use hostwatch_domain::metrics::{DataSource, HostMetrics, HostStatus};
use hostwatch_domain::time::Timestamp;

/// A labelled percentage with its progress bar.
#[derive(Debug, Clone, PartialEq)]
pub struct Gauge {
    pub label: &'static str,
    /// Formatted percentage, e.g. `"12.3%"`.
    pub value: String,
    /// Bar width in percent, clamped to `0..=100`.
    pub width: f64,
    pub level: UsageLevel,
    /// Secondary line under the bar.
    pub detail: Option<String>,
}

impl Gauge {
    fn new(label: &'static str, percent: f64, detail: Option<String>) -> Self {
        let percent = if percent.is_finite() { percent } else { 0.0 };
        Self {
            label,
            value: format_percent(percent),
            width: percent.clamp(0.0, 100.0),
            level: UsageLevel::from_percent(percent),
            detail,
        }
    }
}

/// Everything a host card displays, already formatted.
#[derive(Debug, Clone, PartialEq)]
pub struct HostCard {
    pub host_id: HostId,
    pub host_ip: String,
    pub status: HostStatus,
    pub source: DataSource,
    pub cpu: Gauge,
    pub memory: Gauge,
    pub disk: Gauge,
    pub network_in: String,
    pub network_out: String,
    pub sampled_at: Timestamp,
}

impl HostCard {
    /// Build the card of one snapshot entry.
    #[must_use]
    pub fn from_metrics(metrics: &HostMetrics) -> Self {
        let set = &metrics.metrics;
        let memory_detail = (set.memory.total > 0.0 && set.memory.used > 0.0).then(|| {
            format!(
                "{} / {}",
                format_bytes(set.memory.used),
                format_bytes(set.memory.total)
            )
        });
        let disk_detail = (set.disk.total > 0.0).then(|| format!("{:.0} GB total", set.disk.total));

        Self {
            host_id: metrics.host_id,
            host_ip: metrics.host_ip.clone(),
            status: metrics.status,
            source: metrics.data_source,
            cpu: Gauge::new("CPU", set.cpu.usage, set.cpu.temperature.map(format_celsius)),
            memory: Gauge::new("Memory", set.memory.usage, memory_detail),
            disk: Gauge::new("Disk", set.disk.usage, disk_detail),
            network_in: format_rate(set.network.inbound),
            network_out: format_rate(set.network.outbound),
            sampled_at: metrics.timestamp,
        }
    }

    /// DOM id of the chart canvas for this host.
    #[must_use]
    pub fn canvas_id(&self) -> String {
        canvas_id(self.host_id)
    }
}

/// DOM id of the chart canvas for `host_id`.
#[must_use]
pub fn canvas_id(host_id: HostId) -> String {
    format!("chart-{host_id}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use hostwatch_domain::metrics::{
        CpuMetrics, DiskMetrics, MemoryMetrics, MetricSet, NetworkMetrics,
    };

    fn sample() -> HostMetrics {
        HostMetrics {
            host_id: HostId::new(7),
            host_ip: "10.0.0.7".to_string(),
            status: HostStatus::Online,
            data_source: DataSource::Real,
            timestamp: hostwatch_domain::time::now(),
            metrics: MetricSet {
                cpu: CpuMetrics {
                    usage: 42.04,
                    temperature: Some(55.0),
                },
                memory: MemoryMetrics {
                    usage: 65.0,
                    total: 8.0 * 1024.0 * 1024.0 * 1024.0,
                    used: 4.0 * 1024.0 * 1024.0 * 1024.0,
                },
                disk: DiskMetrics {
                    usage: 120.0,
                    total: 500.0,
                    used: 0.0,
                },
                network: NetworkMetrics {
                    inbound: 3.26,
                    outbound: 0.04,
                },
            },
        }
    }

    #[test]
    fn should_format_every_metric() {
        let card = HostCard::from_metrics(&sample());
        assert_eq!(card.cpu.value, "42.0%");
        assert_eq!(card.cpu.detail.as_deref(), Some("55.0 \u{b0}C"));
        assert_eq!(card.memory.detail.as_deref(), Some("4.0 GB / 8.0 GB"));
        assert_eq!(card.disk.detail.as_deref(), Some("500 GB total"));
        assert_eq!(card.network_in, "3.3 MB/s");
        assert_eq!(card.network_out, "0.0 MB/s");
    }

    #[test]
    fn should_assign_usage_levels() {
        let card = HostCard::from_metrics(&sample());
        assert_eq!(card.cpu.level, UsageLevel::Low);
        assert_eq!(card.memory.level, UsageLevel::Medium);
        assert_eq!(card.disk.level, UsageLevel::High);
    }

    #[test]
    fn should_clamp_bar_width() {
        let card = HostCard::from_metrics(&sample());
        assert!((card.disk.width - 100.0).abs() < f64::EPSILON);
        assert_eq!(card.disk.value, "120.0%");
    }

    #[test]
    fn should_omit_details_without_totals() {
        let mut metrics = sample();
        metrics.metrics.memory.total = 0.0;
        metrics.metrics.disk.total = 0.0;
        metrics.metrics.cpu.temperature = None;

        let card = HostCard::from_metrics(&metrics);
        assert!(card.cpu.detail.is_none());
        assert!(card.memory.detail.is_none());
        assert!(card.disk.detail.is_none());
    }

    #[test]
    fn should_omit_memory_detail_when_used_is_not_reported() {
        let json = serde_json::json!({
            "hostId": 1,
            "hostIp": "10.0.0.1",
            "status": "online",
            "dataSource": "real",
            "timestamp": "2024-01-01T00:00:00",
            "metrics": {
                "cpu": {"usage": 12.5, "temperature": 48},
                "memory": {"usage": 40, "total": 17_179_869_184_u64, "used": 0},
                "disk": {"usage": 70, "total": 500, "used": 0},
                "network": {"in": 1.5, "out": 0.3}
            }
        });
        let metrics: HostMetrics = serde_json::from_value(json).unwrap();

        let card = HostCard::from_metrics(&metrics);
        assert!(card.memory.detail.is_none());
        assert_eq!(card.memory.value, "40.0%");
        assert_eq!(card.disk.detail.as_deref(), Some("500 GB total"));
    }

    #[test]
    fn should_derive_canvas_id_from_host_id() {
        let card = HostCard::from_metrics(&sample());
        assert_eq!(card.canvas_id(), "chart-7");
    }
}
