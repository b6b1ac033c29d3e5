//! SSH key records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::nullable;

/// An SSH key stored on the account.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SshKey {
    /// Key ID.
    #[serde(deserialize_with = "nullable")]
    pub id: String,
    /// Key name.
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    /// Fingerprint computed by the provider.
    #[serde(deserialize_with = "nullable")]
    pub fingerprint: String,
    /// Public key in OpenSSH format.
    #[serde(deserialize_with = "nullable")]
    pub content: String,
    /// Upload time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
}

/// Payload for uploading an SSH key.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateSshKeyOptions {
    /// Key name.
    pub name: String,
    /// Public key in OpenSSH format.
    pub content: String,
}

impl CreateSshKeyOptions {
    /// Options for a named public key.
    #[must_use]
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}
