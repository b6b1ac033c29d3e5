//! Account records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::nullable;

/// The authenticated account.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Account {
    /// Account ID.
    #[serde(deserialize_with = "nullable")]
    pub id: String,
    /// Login email address.
    #[serde(deserialize_with = "nullable")]
    pub email: String,
    /// Whether the email address has been confirmed.
    #[serde(deserialize_with = "nullable")]
    pub email_confirmed: bool,
    /// Signup time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    /// Amount used in the current period.
    #[serde(deserialize_with = "nullable")]
    pub used: i64,
    /// Spending limit.
    #[serde(deserialize_with = "nullable")]
    pub limit: i64,
    /// Whether two-factor authentication is enabled.
    #[serde(deserialize_with = "nullable")]
    pub twofa: bool,
    /// Account balance.
    #[serde(deserialize_with = "nullable")]
    pub balance: i64,
    /// Current hourly cost across all servers.
    #[serde(rename = "costPerHr", deserialize_with = "nullable")]
    pub cost_per_hour: i64,
    /// Days of remaining balance at which a low-balance alert is sent.
    #[serde(rename = "billingAlert", deserialize_with = "nullable")]
    pub low_balance_alert_days: i64,
    /// How far the balance may go negative.
    #[serde(deserialize_with = "nullable")]
    pub negative_allowance: i64,
}

/// One billed line of account usage.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct UsageEntry {
    /// Human-readable description.
    #[serde(deserialize_with = "nullable")]
    pub description: String,
    /// Start of the billed interval.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime<Utc>>,
    /// End of the billed interval.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>,
    /// Cost of the line.
    #[serde(deserialize_with = "nullable")]
    pub cost: i64,
    /// Hours billed.
    #[serde(deserialize_with = "nullable")]
    pub hours: i64,
    /// Quantity billed.
    #[serde(deserialize_with = "nullable")]
    pub amount: i64,
    /// Kind of usage.
    #[serde(rename = "type", deserialize_with = "nullable")]
    pub kind: String,
}

/// Usage breakdown for one billing period.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct AccountUsage {
    /// Server usage lines.
    #[serde(rename = "serverUsage", deserialize_with = "nullable")]
    pub server: Vec<UsageEntry>,
    /// Backup usage lines.
    #[serde(rename = "backupUsage", deserialize_with = "nullable")]
    pub backup: Vec<UsageEntry>,
    /// Bandwidth usage lines.
    #[serde(rename = "bandwidthUsage", deserialize_with = "nullable")]
    pub bandwidth: Vec<UsageEntry>,
    /// DDoS protection usage lines.
    #[serde(rename = "protectionUsage", deserialize_with = "nullable")]
    pub protection: Vec<UsageEntry>,
    /// Total for the period in USD.
    #[serde(rename = "totalUsd", deserialize_with = "nullable")]
    pub total_usd: i64,
    /// Identifier of the previous period.
    #[serde(deserialize_with = "nullable")]
    pub prev_month: String,
    /// Identifier of the requested period.
    #[serde(deserialize_with = "nullable")]
    pub this_month: String,
    /// Identifier of the following period.
    #[serde(deserialize_with = "nullable")]
    pub next_month: String,
}

/// One entry of the account activity log.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HistoryEntry {
    /// Entry ID.
    #[serde(deserialize_with = "nullable")]
    pub id: String,
    /// When the activity happened.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<DateTime<Utc>>,
    /// What happened.
    #[serde(deserialize_with = "nullable")]
    pub description: String,
}

/// A page of the account activity log.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AccountHistory {
    /// Entries on this page.
    #[serde(deserialize_with = "nullable")]
    pub history: Vec<HistoryEntry>,
    /// Total number of entries across all pages.
    #[serde(deserialize_with = "nullable")]
    pub total: u64,
}
