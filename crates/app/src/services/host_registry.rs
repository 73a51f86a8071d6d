//! Host registry — use-cases behind the host management page.

use hostwatch_domain::error::{ApiError, ValidationError};
use hostwatch_domain::host::{Host, HostDraft};
use hostwatch_domain::id::HostId;
use hostwatch_domain::probe::ConnectionProbe;

use crate::ports::{Confirmation, HostApi};

/// Question asked before deleting a host.
pub const DELETE_PROMPT: &str = "Delete this host? Monitoring for it will stop.";

/// What the host list should show. Empty and failed are distinct.
#[derive(Debug, Clone, PartialEq)]
pub enum HostListState {
    Empty,
    Hosts(Vec<Host>),
    Failed(String),
}

/// Errors from host management actions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostRegistryError {
    /// Rejected locally, the backend was never called.
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    /// The backend call failed.
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Result of a delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// The user declined the confirmation.
    Cancelled,
}

/// Application service for the host inventory.
#[derive(Debug, Clone)]
pub struct HostRegistry<A> {
    api: A,
}

impl<A: HostApi> HostRegistry<A> {
    /// Create a new registry backed by the given API.
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Access the underlying API.
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Fetch the host list. Failures degrade to [`HostListState::Failed`].
    pub async fn load(&self) -> HostListState {
        match self.api.list_hosts().await {
            Ok(hosts) if hosts.is_empty() => HostListState::Empty,
            Ok(hosts) => {
                tracing::debug!(count = hosts.len(), "host list loaded");
                HostListState::Hosts(hosts)
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to load host list");
                HostListState::Failed(err.to_string())
            }
        }
    }

    /// Register a host after validating its address locally.
    ///
    /// # Errors
    ///
    /// Returns [`HostRegistryError::Invalid`] without calling the backend
    /// when the address is malformed, or [`HostRegistryError::Api`] when
    /// the backend call fails.
    pub async fn add(&self, draft: &HostDraft) -> Result<Host, HostRegistryError> {
        draft.validate()?;
        let host = self.api.add_host(draft).await.inspect_err(|err| {
            tracing::warn!(error = %err, host_ip = %draft.host_ip, "failed to add host");
        })?;
        tracing::info!(host_id = %host.id, host_ip = %host.host_ip, "host added");
        Ok(host)
    }

    /// Delete a host once the user has confirmed.
    ///
    /// # Errors
    ///
    /// Returns [`HostRegistryError::Api`] when the backend call fails.
    pub async fn delete(
        &self,
        id: HostId,
        confirmation: &impl Confirmation,
    ) -> Result<DeleteOutcome, HostRegistryError> {
        if !confirmation.confirm(DELETE_PROMPT) {
            tracing::debug!(host_id = %id, "host deletion cancelled");
            return Ok(DeleteOutcome::Cancelled);
        }
        self.api.delete_host(id).await.inspect_err(|err| {
            tracing::warn!(error = %err, host_id = %id, "failed to delete host");
        })?;
        tracing::info!(host_id = %id, "host deleted");
        Ok(DeleteOutcome::Deleted)
    }

    /// Probe SSH reachability with the draft credentials.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when the address is malformed; backend
    /// and network failures are reported inside the probe instead.
    pub async fn test_connection(
        &self,
        draft: &HostDraft,
    ) -> Result<ConnectionProbe, ValidationError> {
        draft.validate()?;
        let probe = self.api.test_connection(draft).await;
        tracing::debug!(host_ip = %draft.host_ip, ok = probe.ok, "ssh probe finished");
        Ok(probe)
    }
}
