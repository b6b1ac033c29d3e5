//! Billing transaction records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::nullable;

/// A crypto payment topping up the account balance.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Transaction {
    /// Transaction ID.
    #[serde(deserialize_with = "nullable")]
    pub id: String,
    /// Payment processor's transaction ID.
    #[serde(deserialize_with = "nullable")]
    pub transaction_id: String,
    /// Creation time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    /// Address to pay to.
    #[serde(deserialize_with = "nullable")]
    pub address: String,
    /// Cryptocurrency symbol.
    #[serde(deserialize_with = "nullable")]
    pub crypto_symbol: String,
    /// Amount in USD.
    #[serde(deserialize_with = "nullable")]
    pub amount_usd: f64,
    /// Amount in the chosen cryptocurrency.
    #[serde(deserialize_with = "nullable")]
    pub amount_crypto: String,
    /// Payment status.
    #[serde(deserialize_with = "nullable")]
    pub status: String,
    /// Page showing payment status.
    #[serde(deserialize_with = "nullable")]
    pub status_url: String,
    /// QR code for the payment.
    #[serde(deserialize_with = "nullable")]
    pub qr_code_url: String,
}

/// Payload for starting a top-up.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionOptions {
    /// Amount in whole USD.
    pub amount_usd: u32,
    /// Cryptocurrency to pay with.
    pub crypto_symbol: String,
    /// Pay over the Lightning Network.
    #[serde(default)]
    pub lightning_network: bool,
}
