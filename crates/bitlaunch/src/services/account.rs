use crate::models::{Account, AccountHistory, AccountUsage};
use crate::Result;
use bitlaunch_core::query::QueryParams;
use bitlaunch_core::{Error, ServiceClient};

/// Usage period requested when no filter is given.
const LATEST_PERIOD: &str = "latest";

/// Account details, usage and activity history.
#[derive(Debug, Clone, Copy)]
pub struct AccountService<'a> {
    client: &'a ServiceClient,
}

impl<'a> AccountService<'a> {
    pub(crate) const fn new(client: &'a ServiceClient) -> Self {
        Self { client }
    }

    /// Fetch the authenticated account.
    pub async fn show(&self) -> Result<Account> {
        self.client.get_json(&["user"], &[]).await
    }

    /// Fetch usage for a billing period.
    ///
    /// `filter` holds at most one period identifier (as found in
    /// [`AccountUsage::prev_month`] and friends); an empty slice asks for the
    /// latest period. Passing more than one is rejected before any request
    /// is made.
    pub async fn usage(&self, filter: &[&str]) -> Result<AccountUsage> {
        let period = match filter {
            [] => LATEST_PERIOD,
            [period] => *period,
            _ => return Err(Error::InvalidArgument("too many arguments".to_string())),
        };

        let mut params = QueryParams::new();
        params.push("period", period);
        self.client.get_json(&["usage"], params.as_pairs()).await
    }

    /// Fetch one page of the account activity log.
    pub async fn history(&self, page: u32, per_page: u32) -> Result<AccountHistory> {
        let params = QueryParams::paged(page, per_page);
        self.client
            .get_json(&["security", "history"], params.as_pairs())
            .await
    }
}
