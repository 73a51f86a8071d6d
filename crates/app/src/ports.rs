//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the dashboard logic and the browser.
//! None of them require `Send`: the dashboard runs on the single UI thread.

pub mod confirmation;
pub mod host_api;
pub mod timer;

pub use confirmation::Confirmation;
pub use host_api::{HostApi, MonitoringApi};
pub use timer::IntervalTimer;
