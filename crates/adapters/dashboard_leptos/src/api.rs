//! HTTP API client wrapping `gloo-net` for calls to the monitoring backend.

use gloo_net::http::{Request, Response};
use hostwatch_app::ports::{HostApi, MonitoringApi};
use hostwatch_domain::error::ApiError;
use hostwatch_domain::host::{Host, HostDraft};
use hostwatch_domain::id::HostId;
use hostwatch_domain::metrics::Snapshot;
use hostwatch_domain::probe::ConnectionProbe;

/// Client for the REST backend, rooted at a configurable base path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlooApiClient {
    base_url: String,
}

impl GlooApiClient {
    /// Create a client for `base_url`, e.g. `/api`.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }
}

fn transport(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

/// Check the HTTP response status and turn non-2xx into a transport error.
fn check_response(resp: Response) -> Result<Response, ApiError> {
    if resp.ok() {
        Ok(resp)
    } else {
        Err(ApiError::status(resp.status()))
    }
}

impl HostApi for GlooApiClient {
    async fn list_hosts(&self) -> Result<Vec<Host>, ApiError> {
        let resp = Request::get(&self.url("hosts"))
            .send()
            .await
            .map_err(transport)?;
        let hosts: Vec<Host> = check_response(resp)?.json().await.map_err(transport)?;
        Ok(hosts)
    }

    async fn add_host(&self, draft: &HostDraft) -> Result<Host, ApiError> {
        let resp = Request::post(&self.url("hosts"))
            .json(draft)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::rejection(status, &body));
        }
        let host: Host = resp.json().await.map_err(transport)?;
        Ok(host)
    }

    async fn delete_host(&self, id: HostId) -> Result<(), ApiError> {
        let resp = Request::delete(&self.url(&format!("hosts/{id}")))
            .send()
            .await
            .map_err(transport)?;
        check_response(resp)?;
        Ok(())
    }

    async fn test_connection(&self, draft: &HostDraft) -> ConnectionProbe {
        let request = match Request::post(&self.url("test-ssh")).json(draft) {
            Ok(request) => request,
            Err(err) => return ConnectionProbe::failed(err.to_string()),
        };
        let resp = match request.send().await {
            Ok(resp) => resp,
            Err(err) => return ConnectionProbe::failed(err.to_string()),
        };
        let status = resp.status();
        match resp.text().await {
            Ok(body) => ConnectionProbe::from_response(status, &body),
            Err(err) => ConnectionProbe::failed(err.to_string()),
        }
    }
}

impl MonitoringApi for GlooApiClient {
    async fn monitoring_snapshot(&self) -> Result<Snapshot, ApiError> {
        let resp = Request::get(&self.url("monitoring/data"))
            .send()
            .await
            .map_err(transport)?;
        let snapshot: Snapshot = check_response(resp)?.json().await.map_err(transport)?;
        Ok(snapshot)
    }
}
