//! Backend ports — the REST surface the dashboard consumes.
//!
//! Every call performs a single request: no retries, no cancellation.

use std::future::Future;

use hostwatch_domain::error::ApiError;
use hostwatch_domain::host::{Host, HostDraft};
use hostwatch_domain::id::HostId;
use hostwatch_domain::metrics::Snapshot;
use hostwatch_domain::probe::ConnectionProbe;

/// Host inventory operations.
pub trait HostApi {
    /// `GET /hosts` — every registered host, in backend order.
    ///
    /// Fails with [`ApiError::Transport`] on network failure or non-2xx.
    fn list_hosts(&self) -> impl Future<Output = Result<Vec<Host>, ApiError>>;

    /// `POST /hosts` — register a host and return the created record.
    ///
    /// Fails with [`ApiError::Validation`] when the backend explains the
    /// rejection in an `{error}` body, otherwise [`ApiError::Transport`].
    fn add_host(&self, draft: &HostDraft) -> impl Future<Output = Result<Host, ApiError>>;

    /// `DELETE /hosts/{id}`.
    ///
    /// Fails with [`ApiError::Transport`] on network failure or non-2xx.
    fn delete_host(&self, id: HostId) -> impl Future<Output = Result<(), ApiError>>;

    /// `POST /test-ssh` — live reachability probe with the draft credentials.
    ///
    /// Never fails: network errors resolve to a probe with `ok == false`.
    fn test_connection(&self, draft: &HostDraft) -> impl Future<Output = ConnectionProbe>;
}

/// Monitoring data source.
pub trait MonitoringApi {
    /// `GET /monitoring/data` — the current snapshot for every host.
    ///
    /// Fails with [`ApiError::Transport`] on network failure or non-2xx.
    fn monitoring_snapshot(&self) -> impl Future<Output = Result<Snapshot, ApiError>>;
}
