//! Monitoring snapshot — one point-in-time metric bundle per known host.
//!
//! Snapshots are transient: each poll replaces the previous one wholesale.

use serde::{Deserialize, Serialize};

use crate::id::HostId;
use crate::time::Timestamp;

/// Reachability reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostStatus {
    Online,
    /// Also used for any status string the backend may add later.
    #[serde(other)]
    Offline,
}

impl HostStatus {
    #[must_use]
    pub fn is_online(self) -> bool {
        matches!(self, Self::Online)
    }

    /// Human readable badge text.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Online => "Online",
            Self::Offline => "Offline",
        }
    }
}

/// Where a metric bundle came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    /// Collected from the host by a live probe.
    Real,
    /// Produced by the backend's generator.
    #[default]
    #[serde(other)]
    Simulated,
}

impl DataSource {
    /// Human readable badge text.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Real => "Live data",
            Self::Simulated => "Simulated",
        }
    }
}

/// CPU usage and temperature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CpuMetrics {
    /// Usage in percent.
    pub usage: f64,
    /// Package temperature in °C, when the backend knows it.
    #[serde(default)]
    pub temperature: Option<f64>,
}

/// Memory usage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryMetrics {
    /// Usage in percent.
    pub usage: f64,
    /// Installed memory in bytes.
    #[serde(default)]
    pub total: f64,
    /// Used memory in bytes.
    #[serde(default)]
    pub used: f64,
}

/// Disk usage of the root volume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiskMetrics {
    /// Usage in percent.
    pub usage: f64,
    /// Capacity in GB.
    #[serde(default)]
    pub total: f64,
    /// Used space in GB.
    #[serde(default)]
    pub used: f64,
}

/// Network throughput in MB/s.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkMetrics {
    #[serde(rename = "in")]
    pub inbound: f64,
    #[serde(rename = "out")]
    pub outbound: f64,
}

/// The four metric groups of a bundle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSet {
    pub cpu: CpuMetrics,
    pub memory: MemoryMetrics,
    pub disk: DiskMetrics,
    pub network: NetworkMetrics,
}

/// Metrics of a single host at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostMetrics {
    pub host_id: HostId,
    pub host_ip: String,
    pub status: HostStatus,
    #[serde(default)]
    pub data_source: DataSource,
    #[serde(with = "crate::time::lenient")]
    pub timestamp: Timestamp,
    pub metrics: MetricSet,
}

/// Metrics of every host the backend knows about, in backend order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot {
    pub hosts: Vec<HostMetrics>,
}

impl Snapshot {
    #[must_use]
    pub fn new(hosts: Vec<HostMetrics>) -> Self {
        Self { hosts }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HostMetrics> {
        self.hosts.iter()
    }
}

impl<'a> IntoIterator for &'a Snapshot {
    type Item = &'a HostMetrics;
    type IntoIter = std::slice::Iter<'a, HostMetrics>;

    fn into_iter(self) -> Self::IntoIter {
        self.hosts.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SNAPSHOT_JSON: &str = r#"[
        {
            "hostId": 1,
            "hostIp": "10.0.0.1",
            "status": "online",
            "dataSource": "real",
            "timestamp": "2024-05-01T10:00:00.000001",
            "metrics": {
                "cpu": {"usage": 12.5, "temperature": 48},
                "memory": {"usage": 40, "total": 17179869184, "used": 6871947673},
                "disk": {"usage": 70, "total": 500, "used": 350},
                "network": {"in": 1.5, "out": 0.25}
            }
        },
        {
            "hostId": 2,
            "hostIp": "10.0.0.2",
            "status": "offline",
            "timestamp": "2024-05-01T10:00:00Z",
            "metrics": {
                "cpu": {"usage": 0},
                "memory": {"usage": 0},
                "disk": {"usage": 0},
                "network": {"in": 0, "out": 0}
            }
        }
    ]"#;

    #[test]
    fn should_decode_backend_snapshot() {
        let snapshot: Snapshot = serde_json::from_str(SNAPSHOT_JSON).unwrap();
        assert_eq!(snapshot.len(), 2);

        let first = &snapshot.hosts[0];
        assert_eq!(first.host_id, HostId::new(1));
        assert_eq!(first.status, HostStatus::Online);
        assert_eq!(first.data_source, DataSource::Real);
        assert_eq!(first.metrics.cpu.temperature, Some(48.0));
        assert!((first.metrics.network.inbound - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn should_default_optional_fields() {
        let snapshot: Snapshot = serde_json::from_str(SNAPSHOT_JSON).unwrap();
        let second = &snapshot.hosts[1];
        assert_eq!(second.status, HostStatus::Offline);
        assert_eq!(second.data_source, DataSource::Simulated);
        assert_eq!(second.metrics.cpu.temperature, None);
        assert!(second.metrics.memory.total.abs() < f64::EPSILON);
    }

    #[test]
    fn should_decode_empty_snapshot() {
        let snapshot: Snapshot = serde_json::from_str("[]").unwrap();
        assert!(snapshot.is_empty());
    }

    #[test]
    fn should_treat_unknown_status_as_offline() {
        let status: HostStatus = serde_json::from_str(r#""unreachable""#).unwrap();
        assert_eq!(status, HostStatus::Offline);
    }

    #[test]
    fn should_treat_unknown_source_as_simulated() {
        let source: DataSource = serde_json::from_str(r#""mock""#).unwrap();
        assert_eq!(source, DataSource::Simulated);
    }
}
