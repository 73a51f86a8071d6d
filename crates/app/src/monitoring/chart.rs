//! Per-host chart widgets and their registry.
//!
//! A widget is created the first time a host is rendered and then reused
//! across polls, so its rolling history survives the card being rebuilt.

use std::collections::{HashMap, HashSet, VecDeque};

use hostwatch_domain::id::HostId;
use hostwatch_domain::metrics::HostMetrics;
use hostwatch_domain::time::Timestamp;

/// Default number of samples kept per host (ten 5 s polls).
pub const DEFAULT_CHART_POINTS: usize = 10;

/// One point of a host chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartSample {
    pub at: Timestamp,
    pub cpu: f64,
    pub memory: f64,
    pub disk: f64,
}

impl ChartSample {
    #[must_use]
    pub fn from_metrics(metrics: &HostMetrics) -> Self {
        Self {
            at: metrics.timestamp,
            cpu: metrics.metrics.cpu.usage,
            memory: metrics.metrics.memory.usage,
            disk: metrics.metrics.disk.usage,
        }
    }
}

/// Rolling usage history of one host.
#[derive(Debug, Clone)]
pub struct HostChart {
    samples: VecDeque<ChartSample>,
    capacity: usize,
}

impl HostChart {
    /// A chart keeping at most `capacity` samples (at least one).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a sample, dropping the oldest one when full.
    pub fn push(&mut self, sample: ChartSample) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    /// Samples from oldest to newest.
    pub fn samples(&self) -> impl Iterator<Item = &ChartSample> {
        self.samples.iter()
    }

    #[must_use]
    pub fn latest(&self) -> Option<&ChartSample> {
        self.samples.back()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Chart widgets keyed by host id.
#[derive(Debug, Clone)]
pub struct ChartRegistry {
    charts: HashMap<HostId, HostChart>,
    capacity: usize,
    created: usize,
}

impl ChartRegistry {
    /// An empty registry whose charts keep `capacity` samples.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            charts: HashMap::new(),
            capacity,
            created: 0,
        }
    }

    /// Feed `metrics` to its host's chart, creating the chart on first sight.
    pub fn record(&mut self, metrics: &HostMetrics) -> &HostChart {
        let capacity = self.capacity;
        let created = &mut self.created;
        let chart = self.charts.entry(metrics.host_id).or_insert_with(|| {
            *created += 1;
            tracing::debug!(host_id = %metrics.host_id, "chart created");
            HostChart::new(capacity)
        });
        chart.push(ChartSample::from_metrics(metrics));
        chart
    }

    /// Drop the charts of hosts not in `keep`. Returns how many were evicted.
    pub fn retain_hosts(&mut self, keep: &HashSet<HostId>) -> usize {
        let before = self.charts.len();
        self.charts.retain(|id, _| {
            let kept = keep.contains(id);
            if !kept {
                tracing::debug!(host_id = %id, "chart evicted");
            }
            kept
        });
        before - self.charts.len()
    }

    #[must_use]
    pub fn get(&self, id: HostId) -> Option<&HostChart> {
        self.charts.get(&id)
    }

    #[must_use]
    pub fn contains(&self, id: HostId) -> bool {
        self.charts.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.charts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }

    /// Total number of charts ever created by this registry.
    #[must_use]
    pub fn created(&self) -> usize {
        self.created
    }
}

impl Default for ChartRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_CHART_POINTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hostwatch_domain::metrics::Snapshot;

    fn metrics(id: u64, cpu: f64) -> HostMetrics {
        let json = serde_json::json!([{
            "hostId": id,
            "hostIp": format!("10.0.0.{id}"),
            "status": "online",
            "timestamp": "2024-05-01T10:00:00Z",
            "metrics": {
                "cpu": {"usage": cpu},
                "memory": {"usage": 10},
                "disk": {"usage": 20},
                "network": {"in": 0, "out": 0}
            }
        }]);
        let snapshot: Snapshot = serde_json::from_value(json).unwrap();
        snapshot.hosts.into_iter().next().unwrap()
    }

    #[test]
    fn should_create_chart_once_per_host() {
        let mut registry = ChartRegistry::default();
        registry.record(&metrics(7, 10.0));
        registry.record(&metrics(7, 20.0));

        assert_eq!(registry.created(), 1);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(HostId::new(7)).unwrap().len(), 2);
    }

    #[test]
    fn should_keep_rolling_window() {
        let mut chart = HostChart::new(3);
        for cpu in [1.0, 2.0, 3.0, 4.0] {
            chart.push(ChartSample::from_metrics(&metrics(1, cpu)));
        }
        let cpus: Vec<f64> = chart.samples().map(|s| s.cpu).collect();
        assert_eq!(cpus, vec![2.0, 3.0, 4.0]);
        assert!((chart.latest().unwrap().cpu - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn should_never_use_zero_capacity() {
        let mut chart = HostChart::new(0);
        chart.push(ChartSample::from_metrics(&metrics(1, 5.0)));
        assert_eq!(chart.len(), 1);
    }

    #[test]
    fn should_evict_charts_not_kept() {
        let mut registry = ChartRegistry::default();
        registry.record(&metrics(1, 10.0));
        registry.record(&metrics(2, 10.0));

        let keep = HashSet::from([HostId::new(2)]);
        assert_eq!(registry.retain_hosts(&keep), 1);
        assert!(!registry.contains(HostId::new(1)));
        assert!(registry.contains(HostId::new(2)));
    }

    #[test]
    fn should_recreate_chart_after_eviction() {
        let mut registry = ChartRegistry::default();
        registry.record(&metrics(1, 10.0));
        registry.retain_hosts(&HashSet::new());
        registry.record(&metrics(1, 10.0));

        assert_eq!(registry.created(), 2);
        assert_eq!(registry.get(HostId::new(1)).unwrap().len(), 1);
    }
}
