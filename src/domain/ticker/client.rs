//! Tickers sub-client — full ticker list and category views.

use crate::client::HitbtcClient;
use crate::domain::ticker::{filter_by_category, Ticker};
use crate::error::FetchError;
use crate::shared::CategoryToken;

/// Sub-client for ticker operations.
pub struct Tickers<'a> {
    pub(crate) client: &'a HitbtcClient,
}

impl<'a> Tickers<'a> {
    /// Fetch every ticker, unfiltered, in server order (never cached).
    pub async fn all(&self) -> Result<Vec<Ticker>, FetchError> {
        let resp = self.client.http.get_tickers().await?;
        Ok(resp.into_iter().map(Ticker::from).collect())
    }

    /// Fetch every ticker and keep the ones in `category`.
    pub async fn by_category(&self, category: &CategoryToken) -> Result<Vec<Ticker>, FetchError> {
        let all = self.all().await?;
        Ok(filter_by_category(&all, category))
    }
}
