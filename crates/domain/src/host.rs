//! Host — a machine registered with the backend for monitoring.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ValidationError;
use crate::id::HostId;
use crate::ip::validate_ipv4;
use crate::time::Timestamp;

/// SSH port used when the form leaves it blank.
pub const DEFAULT_SSH_PORT: &str = "22";

/// A host record as stored by the backend.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Host {
    pub id: HostId,
    pub host_ip: String,
    pub ssh_user: String,
    #[serde(default)]
    pub ssh_password: String,
    #[serde(default = "default_port", deserialize_with = "port_from_string_or_number")]
    pub ssh_port: String,
    #[serde(with = "crate::time::lenient")]
    pub created_at: Timestamp,
}

impl fmt::Debug for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Host")
            .field("id", &self.id)
            .field("host_ip", &self.host_ip)
            .field("ssh_user", &self.ssh_user)
            .field("ssh_password", &"***")
            .field("ssh_port", &self.ssh_port)
            .field("created_at", &self.created_at)
            .finish()
    }
}

/// The add-host / test-SSH request body.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostDraft {
    pub host_ip: String,
    pub ssh_user: String,
    pub ssh_password: String,
    pub ssh_port: String,
}

impl fmt::Debug for HostDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostDraft")
            .field("host_ip", &self.host_ip)
            .field("ssh_user", &self.ssh_user)
            .field("ssh_password", &"***")
            .field("ssh_port", &self.ssh_port)
            .finish()
    }
}

impl HostDraft {
    /// Build a draft from raw form fields.
    ///
    /// Address, user and port are trimmed; a blank port becomes
    /// [`DEFAULT_SSH_PORT`]. The password is kept verbatim.
    #[must_use]
    pub fn from_form(host_ip: &str, ssh_user: &str, ssh_password: &str, ssh_port: &str) -> Self {
        let port = ssh_port.trim();
        Self {
            host_ip: host_ip.trim().to_string(),
            ssh_user: ssh_user.trim().to_string(),
            ssh_password: ssh_password.to_string(),
            ssh_port: if port.is_empty() {
                DEFAULT_SSH_PORT.to_string()
            } else {
                port.to_string()
            },
        }
    }

    /// Check the fields that are validated before reaching the backend.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidIp`] when `host_ip` is not a
    /// dotted-quad IPv4 address.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_ipv4(&self.host_ip)
    }
}

fn default_port() -> String {
    DEFAULT_SSH_PORT.to_string()
}

fn port_from_string_or_number<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Port {
        Text(String),
        Number(u32),
    }

    Ok(match Port::deserialize(deserializer)? {
        Port::Text(text) => text,
        Port::Number(number) => number.to_string(),
    })
}
