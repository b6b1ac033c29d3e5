//! Server records and the payloads that create or change servers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::nullable;

/// A port exposed through the DDoS protection proxy.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Port {
    /// Port number.
    #[serde(deserialize_with = "nullable")]
    pub port_number: u16,
    /// Protocol (`tcp` or `udp`).
    #[serde(deserialize_with = "nullable")]
    pub protocol: String,
}

impl Port {
    /// A TCP port.
    #[must_use]
    pub fn tcp(port_number: u16) -> Self {
        Self {
            port_number,
            protocol: "tcp".to_string(),
        }
    }

    /// A UDP port.
    #[must_use]
    pub fn udp(port_number: u16) -> Self {
        Self {
            port_number,
            protocol: "udp".to_string(),
        }
    }
}

/// Proxy fronting a protected server.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ProtectionProxy {
    /// Public address of the proxy.
    #[serde(deserialize_with = "nullable")]
    pub ip: String,
    /// Proxy region.
    #[serde(deserialize_with = "nullable")]
    pub region: String,
    /// Ports forwarded to the server.
    #[serde(deserialize_with = "nullable")]
    pub ports: Vec<Port>,
    /// Address traffic is forwarded to.
    #[serde(deserialize_with = "nullable")]
    pub target: String,
}

/// DDoS protection state of a server.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Protection {
    /// Whether protection is on.
    #[serde(deserialize_with = "nullable")]
    pub enabled: bool,
    /// Proxy details while protection is on.
    #[serde(deserialize_with = "nullable")]
    pub proxy: ProtectionProxy,
}

/// A server as returned by the API.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Server {
    /// Server ID. A record without one fails to decode.
    pub id: String,
    /// Server name.
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    /// ID of the host the server runs on.
    #[serde(rename = "host", default, deserialize_with = "nullable")]
    pub host_id: u32,
    /// Public IPv4 address.
    #[serde(default, deserialize_with = "nullable")]
    pub ipv4: String,
    /// Region slug.
    #[serde(default, deserialize_with = "nullable")]
    pub region: String,
    /// Size slug.
    #[serde(default, deserialize_with = "nullable")]
    pub size: String,
    /// Human-readable size.
    #[serde(rename = "sizeDescription", default, deserialize_with = "nullable")]
    pub size_description: String,
    /// Image slug.
    #[serde(default, deserialize_with = "nullable")]
    pub image: String,
    /// Human-readable image.
    #[serde(rename = "imageDescription", default, deserialize_with = "nullable")]
    pub image_description: String,
    /// Creation time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    /// Hourly rate.
    #[serde(default, deserialize_with = "nullable")]
    pub rate: i64,
    /// Bandwidth used this period.
    #[serde(default, deserialize_with = "nullable")]
    pub bandwidth_used: u64,
    /// Bandwidth included this period.
    #[serde(default, deserialize_with = "nullable")]
    pub bandwidth_allowance: u64,
    /// Lifecycle status reported by the provider.
    #[serde(default, deserialize_with = "nullable")]
    pub status: String,
    /// Provisioning error, if any.
    #[serde(default, deserialize_with = "nullable")]
    pub error_text: String,
    /// Whether backups are enabled.
    #[serde(default, deserialize_with = "nullable")]
    pub backups_enabled: bool,
    /// Image version.
    #[serde(default, deserialize_with = "nullable")]
    pub version: String,
    /// Whether the server is flagged for abuse.
    #[serde(default, deserialize_with = "nullable")]
    pub abuse: bool,
    /// Disk size in GB.
    #[serde(rename = "diskGB", default, deserialize_with = "nullable")]
    pub disk_gb: u32,
    /// DDoS protection state.
    #[serde(default, deserialize_with = "nullable")]
    pub protection: Protection,
}

/// Payload for creating a server.
///
/// Sent to the API wrapped as `{"server": {...}}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateServerOptions {
    /// Server name.
    pub name: String,
    /// Host to create the server on.
    #[serde(rename = "hostID")]
    pub host_id: u32,
    /// Image (or image version) to install.
    #[serde(
        rename = "HostImageID",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub host_image_id: Option<String>,
    /// Size ID from the host's create options.
    #[serde(rename = "sizeID")]
    pub size_id: String,
    /// Region ID from the host's create options.
    #[serde(rename = "regionID")]
    pub region_id: String,
    /// IDs of SSH keys to install.
    #[serde(rename = "sshKeys", default)]
    pub ssh_keys: Vec<String>,
    /// Root password, for images that support one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Script run on first boot.
    #[serde(rename = "initscript", default, skip_serializing_if = "Option::is_none")]
    pub init_script: Option<String>,
}

impl CreateServerOptions {
    /// Options with the required fields set.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        host_id: u32,
        size_id: impl Into<String>,
        region_id: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            host_id,
            size_id: size_id.into(),
            region_id: region_id.into(),
            ..Self::default()
        }
    }

    /// Set the image to install.
    #[must_use]
    pub fn with_image(mut self, host_image_id: impl Into<String>) -> Self {
        self.host_image_id = Some(host_image_id.into());
        self
    }

    /// Add an SSH key ID.
    #[must_use]
    pub fn with_ssh_key(mut self, key_id: impl Into<String>) -> Self {
        self.ssh_keys.push(key_id.into());
        self
    }

    /// Set the root password.
    #[must_use]
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Set the first-boot script.
    #[must_use]
    pub fn with_init_script(mut self, script: impl Into<String>) -> Self {
        self.init_script = Some(script.into());
        self
    }
}

/// Payload for rebuilding a server onto another image.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RebuildOptions {
    /// Image to install.
    #[serde(rename = "hostImageID")]
    pub host_image_id: String,
    /// Human-readable image description.
    #[serde(rename = "imageDescription", default)]
    pub image_description: String,
}
