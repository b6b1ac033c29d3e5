use crate::models::{nullable, CreateSshKeyOptions, SshKey};
use crate::Result;
use bitlaunch_core::ServiceClient;
use reqwest::Method;
use serde::Deserialize;

#[derive(Deserialize)]
struct SshKeyList {
    #[serde(alias = "Keys", default, deserialize_with = "nullable")]
    keys: Vec<SshKey>,
}

/// SSH key management.
#[derive(Debug, Clone, Copy)]
pub struct SshKeyService<'a> {
    client: &'a ServiceClient,
}

impl<'a> SshKeyService<'a> {
    pub(crate) const fn new(client: &'a ServiceClient) -> Self {
        Self { client }
    }

    /// Upload a public key.
    pub async fn create(&self, options: &CreateSshKeyOptions) -> Result<SshKey> {
        self.client
            .send_json(Method::POST, &["ssh-keys"], &[], Some(options))
            .await
    }

    /// List the keys on the account.
    pub async fn list(&self) -> Result<Vec<SshKey>> {
        let list: SshKeyList = self.client.get_json(&["ssh-keys"], &[]).await?;
        Ok(list.keys)
    }

    /// Delete a key.
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client
            .send_empty(Method::DELETE, &["ssh-keys", id], &[], Option::<&()>::None)
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::models::CreateSshKeyOptions;
    use crate::services::test_support::test_client;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const PUBLIC_KEY: &str = "ssh-ed25519 AAAAC3NzaC1lZDI1NTE5AAAAIF8r ops@laptop";

    #[tokio::test]
    async fn create_uploads_key() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/ssh-keys"))
            .and(body_json(json!({"name": "laptop", "content": PUBLIC_KEY})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "k-1",
                "name": "laptop",
                "fingerprint": "SHA256:abc",
                "content": PUBLIC_KEY,
                "created": "2024-01-01T00:00:00Z"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let key = client
            .ssh_keys()
            .create(&CreateSshKeyOptions::new("laptop", PUBLIC_KEY))
            .await
            .unwrap();
        assert_eq!(key.id, "k-1");
        assert_eq!(key.fingerprint, "SHA256:abc");
    }

    #[tokio::test]
    async fn list_unwraps_keys() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ssh-keys"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "keys": [{"id": "k-1", "name": "laptop"}, {"id": "k-2", "name": "ci"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let keys = client.ssh_keys().list().await.unwrap();
        assert_eq!(keys.len(), 2);
        assert_eq!(keys[1].name, "ci");
    }

    #[tokio::test]
    async fn delete_accepts_empty_body() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/ssh-keys/k-1"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        client.ssh_keys().delete("k-1").await.unwrap();
    }

    #[tokio::test]
    async fn delete_escapes_id() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/ssh-keys/k-1%2F..%2Fservers"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        client.ssh_keys().delete("k-1/../servers").await.unwrap();
    }

    #[tokio::test]
    async fn list_treats_null_keys_as_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ssh-keys"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"keys": null})))
            .mount(&server)
            .await;

        let client = test_client(&server);
        assert!(client.ssh_keys().list().await.unwrap().is_empty());
    }
}
