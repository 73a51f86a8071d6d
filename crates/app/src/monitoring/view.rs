//! The monitoring view state machine.
//!
//! Each poll takes a ticket before the request goes out. Responses are
//! applied in ticket order: a response older than the last applied one is
//! dropped, so a slow request can never overwrite newer data.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use hostwatch_domain::error::ApiError;
use hostwatch_domain::id::HostId;
use hostwatch_domain::metrics::Snapshot;
use hostwatch_domain::time::{self, Timestamp};

use super::card::HostCard;
use super::chart::{ChartRegistry, ChartSample, DEFAULT_CHART_POINTS};
use crate::ports::MonitoringApi;

/// Rendering policy of the monitoring view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonitoringOptions {
    /// Hide offline hosts instead of showing them with a badge.
    pub online_only: bool,
    /// Samples kept per host chart.
    pub chart_points: usize,
}

impl Default for MonitoringOptions {
    fn default() -> Self {
        Self {
            online_only: false,
            chart_points: DEFAULT_CHART_POINTS,
        }
    }
}

/// What the card container shows.
#[derive(Debug, Clone, PartialEq)]
pub enum MonitoringState {
    /// No poll has completed yet.
    Loading,
    /// The backend reported no hosts at all.
    Empty,
    /// Hosts exist but the online-only policy filtered every one out.
    NoneOnline,
    Cards(Vec<HostCard>),
    /// The last poll failed; carries the error message.
    Failed(String),
}

/// Whether a poll response was rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    Applied,
    /// A newer response had already been applied.
    Stale,
}

/// Ticket identifying one poll request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PollTicket(u64);

/// Owned copy of everything the page renders after a poll.
#[derive(Debug, Clone, PartialEq)]
pub struct MonitoringFrame {
    pub state: MonitoringState,
    /// Chart samples of every rendered host, oldest first.
    pub history: HashMap<HostId, Vec<ChartSample>>,
    pub last_updated: Option<Timestamp>,
}

impl MonitoringFrame {
    /// Samples to plot for `host_id`.
    #[must_use]
    pub fn history_of(&self, host_id: HostId) -> &[ChartSample] {
        self.history.get(&host_id).map(Vec::as_slice).unwrap_or_default()
    }
}

/// Monitoring view: latest rendered state plus the chart registry.
#[derive(Debug, Clone)]
pub struct MonitoringView {
    options: MonitoringOptions,
    state: MonitoringState,
    charts: ChartRegistry,
    issued: u64,
    applied: u64,
    last_updated: Option<Timestamp>,
}

impl MonitoringView {
    #[must_use]
    pub fn new(options: MonitoringOptions) -> Self {
        Self {
            options,
            state: MonitoringState::Loading,
            charts: ChartRegistry::new(options.chart_points),
            issued: 0,
            applied: 0,
            last_updated: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> &MonitoringState {
        &self.state
    }

    #[must_use]
    pub fn charts(&self) -> &ChartRegistry {
        &self.charts
    }

    /// Time of the last successful poll.
    #[must_use]
    pub fn last_updated(&self) -> Option<Timestamp> {
        self.last_updated
    }

    /// Reserve a ticket for a poll about to be sent.
    pub fn begin_poll(&mut self) -> PollTicket {
        self.issued += 1;
        PollTicket(self.issued)
    }

    /// Apply the response of the poll identified by `ticket`.
    ///
    /// A failure replaces the cards with an error placeholder but leaves
    /// the charts and the last-update time untouched.
    pub fn apply(
        &mut self,
        ticket: PollTicket,
        result: Result<Snapshot, ApiError>,
        received_at: Timestamp,
    ) -> PollOutcome {
        if ticket.0 <= self.applied {
            tracing::debug!(
                ticket = ticket.0,
                applied = self.applied,
                "discarding stale monitoring response"
            );
            return PollOutcome::Stale;
        }
        self.applied = ticket.0;

        match result {
            Ok(snapshot) => self.render(&snapshot, received_at),
            Err(err) => {
                tracing::warn!(error = %err, "failed to load monitoring data");
                self.state = MonitoringState::Failed(err.to_string());
            }
        }
        PollOutcome::Applied
    }

    fn render(&mut self, snapshot: &Snapshot, received_at: Timestamp) {
        self.last_updated = Some(received_at);
        if snapshot.is_empty() {
            self.state = MonitoringState::Empty;
            return;
        }

        let online_only = self.options.online_only;
        let visible: Vec<_> = snapshot
            .iter()
            .filter(|metrics| !online_only || metrics.status.is_online())
            .collect();

        let mut rendered = HashSet::with_capacity(visible.len());
        for metrics in &visible {
            self.charts.record(metrics);
            rendered.insert(metrics.host_id);
        }
        let evicted = self.charts.retain_hosts(&rendered);

        tracing::debug!(
            hosts = snapshot.len(),
            rendered = visible.len(),
            evicted,
            "monitoring snapshot applied"
        );

        self.state = if visible.is_empty() {
            MonitoringState::NoneOnline
        } else {
            MonitoringState::Cards(visible.into_iter().map(HostCard::from_metrics).collect())
        };
    }

    /// Copy out what the page needs to render.
    #[must_use]
    pub fn frame(&self) -> MonitoringFrame {
        let history = match &self.state {
            MonitoringState::Cards(cards) => cards
                .iter()
                .filter_map(|card| {
                    let chart = self.charts.get(card.host_id)?;
                    Some((card.host_id, chart.samples().copied().collect()))
                })
                .collect(),
            _ => HashMap::new(),
        };
        MonitoringFrame {
            state: self.state.clone(),
            history,
            last_updated: self.last_updated,
        }
    }
}

impl Default for MonitoringView {
    fn default() -> Self {
        Self::new(MonitoringOptions::default())
    }
}

/// Run one poll against `api` and apply its response to `view`.
///
/// The view is only borrowed around the request, never across it, so
/// overlapping polls are allowed; ordering is settled by the ticket.
pub async fn poll<A: MonitoringApi>(view: &RefCell<MonitoringView>, api: &A) -> PollOutcome {
    let ticket = view.borrow_mut().begin_poll();
    let result = api.monitoring_snapshot().await;
    view.borrow_mut().apply(ticket, result, time::now())
}
