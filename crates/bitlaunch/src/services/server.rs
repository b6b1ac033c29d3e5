use crate::models::{CreateServerOptions, Port, RebuildOptions, Server};
use crate::Result;
use bitlaunch_core::ServiceClient;
use reqwest::Method;
use serde::{Deserialize, Serialize};

/// Proxy region used when DDoS protection is switched on.
const PROTECTION_REGION: &str = "bvm-lux";

#[derive(Serialize)]
struct CreateServerRequest<'a> {
    server: &'a CreateServerOptions,
}

#[derive(Serialize)]
struct ResizeRequest<'a> {
    size: &'a str,
}

#[derive(Serialize)]
struct ProtectionRequest<'a> {
    enable: bool,
    region: &'a str,
}

/// `{"server": {...}}`, returned by create and show.
#[derive(Deserialize)]
struct ServerEnvelope {
    server: Server,
}

/// Server lifecycle.
#[derive(Debug, Clone, Copy)]
pub struct ServerService<'a> {
    client: &'a ServiceClient,
}

impl<'a> ServerService<'a> {
    pub(crate) const fn new(client: &'a ServiceClient) -> Self {
        Self { client }
    }

    /// Create a server.
    pub async fn create(&self, options: &CreateServerOptions) -> Result<Server> {
        let request = CreateServerRequest { server: options };
        let envelope: ServerEnvelope = self
            .client
            .send_json(Method::POST, &["servers"], &[], Some(&request))
            .await?;
        Ok(envelope.server)
    }

    /// Fetch a server by ID.
    pub async fn show(&self, id: &str) -> Result<Server> {
        let envelope: ServerEnvelope = self.client.get_json(&["servers", id], &[]).await?;
        Ok(envelope.server)
    }

    /// List every server on the account.
    pub async fn list(&self) -> Result<Vec<Server>> {
        self.client.get_json(&["servers"], &[]).await
    }

    /// Destroy a server.
    pub async fn destroy(&self, id: &str) -> Result<()> {
        self.client
            .send_empty(Method::DELETE, &["servers", id], &[], Option::<&()>::None)
            .await
    }

    /// Reinstall a server with another image.
    pub async fn rebuild(&self, id: &str, options: &RebuildOptions) -> Result<()> {
        self.client
            .send_empty(Method::POST, &["servers", id, "rebuild"], &[], Some(options))
            .await
    }

    /// Move a server to another size.
    pub async fn resize(&self, id: &str, size: &str) -> Result<()> {
        let request = ResizeRequest { size };
        self.client
            .send_empty(Method::POST, &["servers", id, "resize"], &[], Some(&request))
            .await
    }

    /// Restart a server.
    pub async fn restart(&self, id: &str) -> Result<()> {
        self.client
            .send_empty(
                Method::POST,
                &["servers", id, "restart"],
                &[],
                Option::<&()>::None,
            )
            .await
    }

    /// Switch DDoS protection on or off.
    ///
    /// The response is the bare server object.
    pub async fn protection(&self, id: &str, enabled: bool) -> Result<Server> {
        let request = ProtectionRequest {
            enable: enabled,
            region: if enabled { PROTECTION_REGION } else { "" },
        };
        self.client
            .send_json(Method::POST, &["servers", id, "protection"], &[], Some(&request))
            .await
    }

    /// Replace the ports forwarded by the protection proxy.
    ///
    /// Protection must already be enabled on the server. The response is the
    /// bare server object.
    pub async fn set_ports(&self, id: &str, ports: &[Port]) -> Result<Server> {
        self.client
            .send_json(
                Method::POST,
                &["servers", id, "protection", "ports"],
                &[],
                Some(ports),
            )
            .await
    }
}
