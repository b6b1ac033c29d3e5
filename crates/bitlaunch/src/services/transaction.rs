use crate::models::{nullable, CreateTransactionOptions, Transaction};
use crate::Result;
use bitlaunch_core::query::QueryParams;
use bitlaunch_core::ServiceClient;
use reqwest::Method;
use serde::Deserialize;

#[derive(Deserialize)]
struct TransactionHistory {
    #[serde(alias = "History", default, deserialize_with = "nullable")]
    history: Vec<Transaction>,
}

/// Billing transactions.
#[derive(Debug, Clone, Copy)]
pub struct TransactionService<'a> {
    client: &'a ServiceClient,
}

impl<'a> TransactionService<'a> {
    pub(crate) const fn new(client: &'a ServiceClient) -> Self {
        Self { client }
    }

    /// Start a crypto top-up.
    pub async fn create(&self, options: &CreateTransactionOptions) -> Result<Transaction> {
        self.client
            .send_json(Method::POST, &["transactions"], &[], Some(options))
            .await
    }

    /// Fetch a transaction by ID.
    pub async fn show(&self, id: &str) -> Result<Transaction> {
        self.client.get_json(&["transactions", id], &[]).await
    }

    /// Fetch one page of transactions.
    pub async fn list(&self, page: u32, per_page: u32) -> Result<Vec<Transaction>> {
        let params = QueryParams::paged(page, per_page);
        let history: TransactionHistory = self
            .client
            .get_json(&["transactions"], params.as_pairs())
            .await?;
        Ok(history.history)
    }
}

#[cfg(test)]
mod tests {
    use crate::models::CreateTransactionOptions;
    use crate::services::test_support::test_client;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn create_posts_options() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/transactions"))
            .and(body_json(json!({
                "amountUsd": 25,
                "cryptoSymbol": "BTC",
                "lightningNetwork": true
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "t-1",
                "cryptoSymbol": "BTC",
                "amountUsd": 25.0,
                "status": "waiting"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let options = CreateTransactionOptions {
            amount_usd: 25,
            crypto_symbol: "BTC".into(),
            lightning_network: true,
        };
        let tx = client.transactions().create(&options).await.unwrap();
        assert_eq!(tx.id, "t-1");
        assert_eq!(tx.status, "waiting");
    }

    #[tokio::test]
    async fn show_fetches_by_id() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/transactions/t-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "t-1",
                "address": "bc1qexample",
                "status": "complete"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let tx = client.transactions().show("t-1").await.unwrap();
        assert_eq!(tx.address, "bc1qexample");
    }

    #[tokio::test]
    async fn list_unwraps_history_page() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/transactions"))
            .and(query_param("page", "1"))
            .and(query_param("items", "10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "history": [{"id": "t-1"}, {"id": "t-2"}, {"id": "t-3"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let page = client.transactions().list(1, 10).await.unwrap();
        assert_eq!(page.len(), 3);
        assert_eq!(page[2].id, "t-3");
    }
}
