//! # hostwatch-app
//!
//! Application layer — dashboard use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - `HostApi` — list, add, delete and probe hosts on the backend
//!   - `MonitoringApi` — fetch the current monitoring snapshot
//!   - `Confirmation` — ask the user before destructive actions
//!   - `IntervalTimer` — recurring timer whose handle cancels on drop
//! - Provide the use-cases built on those ports:
//!   - `HostRegistry` — host list loading, add / delete / test-SSH
//!   - `MonitoringView` — snapshot → cards, per-host chart lifecycle, stale-poll guard
//!   - `RefreshController` — visibility-aware polling state machine
//! - Load and validate the dashboard configuration
//!
//! ## Dependency rule
//! Depends on `hostwatch-domain` only. Never imports browser or HTTP crates;
//! everything here runs single-threaded and is tested natively.

pub mod config;
pub mod monitoring;
pub mod ports;
pub mod refresh;
pub mod services;
