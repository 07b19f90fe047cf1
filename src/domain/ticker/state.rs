//! Ticker list state container — app-owned, SDK-provided update logic.

use super::filter::matches_category;
use super::format::{TickerDetail, TickerRow};
use super::Ticker;
use crate::error::FetchError;
use crate::shared::{CategoryToken, LoadStatus, RefreshSequence, RefreshTicket};

/// The ticker list screen: one owned list plus the active category and query.
///
/// The visible view (category, then query) is cached as indices into the
/// owned list and recomputed by every update, so index reads are O(1).
///
/// The app owns instances of this type. The SDK provides update methods.
#[derive(Debug, Clone, Default)]
pub struct TickerBoard {
    tickers: Vec<Ticker>,
    category: CategoryToken,
    query: String,
    status: LoadStatus,
    sequence: RefreshSequence,
    /// Indices into `tickers`, in list order.
    visible: Vec<usize>,
}

impl TickerBoard {
    pub fn new(category: CategoryToken) -> Self {
        Self {
            category,
            ..Self::default()
        }
    }

    // ── Updates ──────────────────────────────────────────────────────────

    /// Start a refresh. Pass the ticket back to [`apply`](Self::apply) with
    /// the fetch result.
    pub fn begin_refresh(&mut self) -> RefreshTicket {
        self.status = LoadStatus::Loading;
        self.sequence.begin()
    }

    /// Apply a fetch result. Returns `false` if the result was stale (a newer
    /// refresh has already been applied) and was dropped.
    ///
    /// A failure keeps the previous list and flips the status to `Failed`.
    pub fn apply(
        &mut self,
        ticket: RefreshTicket,
        result: Result<Vec<Ticker>, FetchError>,
    ) -> bool {
        if !self.sequence.accept(ticket) {
            tracing::debug!(ticket = ticket.value(), "Dropping stale ticker refresh");
            return false;
        }

        match result {
            Ok(tickers) => {
                tracing::debug!(count = tickers.len(), "Ticker list refreshed");
                self.tickers = tickers;
                self.refresh_view();
                self.status = LoadStatus::Ready;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Ticker refresh failed");
                self.status = LoadStatus::Failed;
            }
        }
        if self.sequence.in_flight() {
            self.status = LoadStatus::Loading;
        }
        true
    }

    pub fn select_category(&mut self, category: CategoryToken) {
        self.category = category;
        self.refresh_view();
    }

    /// Set the search text. An empty string deactivates search.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.refresh_view();
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
        self.refresh_view();
    }

    fn refresh_view(&mut self) {
        let query = self.query.to_lowercase();
        self.visible = self
            .tickers
            .iter()
            .enumerate()
            .filter(|(_, t)| {
                let symbol = t.symbol().as_str();
                matches_category(symbol, &self.category)
                    && (query.is_empty() || symbol.to_lowercase().contains(&query))
            })
            .map(|(i, _)| i)
            .collect();
    }

    // ── Reads ────────────────────────────────────────────────────────────

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    pub fn category(&self) -> &CategoryToken {
        &self.category
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_searching(&self) -> bool {
        !self.query.is_empty()
    }

    /// Every ticker from the last successful fetch, unfiltered.
    pub fn all(&self) -> &[Ticker] {
        &self.tickers
    }

    /// The visible list: the category view, refined by the query when active.
    pub fn visible(&self) -> Vec<&Ticker> {
        self.visible.iter().map(|&i| &self.tickers[i]).collect()
    }

    pub fn count(&self) -> usize {
        self.visible.len()
    }

    pub fn ticker_at(&self, index: usize) -> Option<&Ticker> {
        self.visible.get(index).map(|&i| &self.tickers[i])
    }

    pub fn item_at(&self, index: usize) -> Option<TickerRow> {
        self.ticker_at(index)
            .map(|t| TickerRow::new(t, &self.category))
    }

    /// Detail header for the row at `index`, for when it is selected.
    pub fn selected(&self, index: usize) -> Option<TickerDetail> {
        self.ticker_at(index)
            .map(|t| TickerDetail::new(t, &self.category))
    }

    pub fn rows(&self) -> Vec<TickerRow> {
        self.visible
            .iter()
            .map(|&i| TickerRow::new(&self.tickers[i], &self.category))
            .collect()
    }
}
