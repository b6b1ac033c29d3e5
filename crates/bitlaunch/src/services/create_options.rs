use crate::models::ServerCreateOptions;
use crate::Result;
use bitlaunch_core::ServiceClient;

/// Catalogue of images, regions and sizes per host.
#[derive(Debug, Clone, Copy)]
pub struct CreateOptionsService<'a> {
    client: &'a ServiceClient,
}

impl<'a> CreateOptionsService<'a> {
    pub(crate) const fn new(client: &'a ServiceClient) -> Self {
        Self { client }
    }

    /// Fetch what can be chosen when creating a server on `host_id`.
    pub async fn show(&self, host_id: u32) -> Result<ServerCreateOptions> {
        let host_id = host_id.to_string();
        self.client
            .get_json(&["hosts-create-options", host_id.as_str()], &[])
            .await
    }
}
