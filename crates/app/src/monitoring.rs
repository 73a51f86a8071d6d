//! Monitoring view — turns polled snapshots into cards and chart histories.

pub mod card;
pub mod chart;
pub mod view;

pub use card::{Gauge, HostCard, canvas_id};
pub use chart::{ChartRegistry, ChartSample, HostChart};
pub use view::{
    MonitoringFrame, MonitoringOptions, MonitoringState, MonitoringView, PollOutcome, PollTicket,
    poll,
};
