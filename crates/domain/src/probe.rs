//! SSH reachability probe result.

use serde::{Deserialize, Serialize};

use crate::error::error_message;

/// Outcome of a `test-ssh` call.
///
/// Unlike the other backend calls, a probe never fails: transport
/// problems are folded into a result with `ok == false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionProbe {
    #[serde(rename = "success")]
    pub ok: bool,
    #[serde(default)]
    pub message: String,
}

impl ConnectionProbe {
    /// A failed probe carrying `message`.
    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }

    /// Classify a `test-ssh` response.
    ///
    /// A decodable `{success, message}` body is returned as-is on 2xx. On
    /// any other status the probe is failed, keeping the body message (or
    /// an `{error}` message) when there is one, otherwise `HTTP <status>`.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        let success = (200..300).contains(&status);
        match serde_json::from_str::<Self>(body) {
            Ok(probe) if success => probe,
            Ok(probe) if !probe.message.is_empty() => Self::failed(probe.message),
            Ok(_) => Self::failed(format!("HTTP {status}")),
            Err(err) if success => Self::failed(format!("invalid probe response: {err}")),
            Err(_) => Self::failed(error_message(body).unwrap_or_else(|| format!("HTTP {status}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_pass_through_successful_probe() {
        let probe = ConnectionProbe::from_response(200, r#"{"success":true,"message":"connected"}"#);
        assert_eq!(
            probe,
            ConnectionProbe {
                ok: true,
                message: "connected".to_string()
            }
        );
    }

    #[test]
    fn should_pass_through_failed_probe_body() {
        let probe =
            ConnectionProbe::from_response(200, r#"{"success":false,"message":"auth failed"}"#);
        assert!(!probe.ok);
        assert_eq!(probe.message, "auth failed");
    }

    #[test]
    fn should_never_report_success_on_error_status() {
        let probe = ConnectionProbe::from_response(500, r#"{"success":true,"message":"odd"}"#);
        assert!(!probe.ok);
        assert_eq!(probe.message, "odd");
    }

    #[test]
    fn should_use_error_body_on_error_status() {
        let probe = ConnectionProbe::from_response(400, r#"{"error":"missing sshUser"}"#);
        assert_eq!(probe, ConnectionProbe::failed("missing sshUser"));
    }

    #[test]
    fn should_fall_back_to_status_on_unreadable_error() {
        let probe = ConnectionProbe::from_response(503, "");
        assert_eq!(probe, ConnectionProbe::failed("HTTP 503"));
    }

    #[test]
    fn should_fail_on_unreadable_success_body() {
        let probe = ConnectionProbe::from_response(200, "ok");
        assert!(!probe.ok);
        assert!(probe.message.starts_with("invalid probe response"));
    }
}
