//! One ticker's dashboard data, fetched as a unit.

use chrono::NaiveDate;

use crate::core::{DashClient, DashError, PriceBar};
use crate::news::{self, NewsItem};
use crate::profile::{self, CompanyProfile};
use crate::{history, indicators};

/// Everything the dashboard needs for one (ticker, date range) request:
/// the daily price series, the company profile, and recent news.
///
/// An empty [`history`](Self::history) is the "no data" state (unknown
/// ticker or a range with no trading days); the accessors guard for it so
/// consumers never index into an empty series.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Uppercased ticker symbol this snapshot was fetched for.
    pub symbol: String,
    /// Start of the requested range (inclusive).
    pub start: NaiveDate,
    /// End of the requested range (inclusive).
    pub end: NaiveDate,
    /// Daily bars, strictly increasing by date. May be empty.
    pub history: Vec<PriceBar>,
    /// Profile fields; any may be absent.
    pub profile: CompanyProfile,
    /// Full news list as returned by the provider; cap with [`Self::top_news`].
    pub news: Vec<NewsItem>,
}

impl Snapshot {
    /// Close price of the most recent bar, if any.
    #[must_use]
    pub fn latest_close(&self) -> Option<f64> {
        self.history.last().map(|b| b.close)
    }

    /// Absolute and percent change between the last two closes.
    ///
    /// `None` when fewer than two bars exist.
    #[must_use]
    pub fn daily_change(&self) -> Option<(f64, f64)> {
        let [.., prev, last] = self.history.as_slice() else {
            return None;
        };
        let change = last.close - prev.close;
        Some((change, change / prev.close * 100.0))
    }

    /// At most the first `n` news items, for display.
    #[must_use]
    pub fn top_news(&self, n: usize) -> &[NewsItem] {
        &self.news[..self.news.len().min(n)]
    }

    /// Simple moving average of closes, aligned with [`history`](Self::history).
    #[must_use]
    pub fn moving_average(&self, window: usize) -> crate::DerivedSeries {
        indicators::moving_average(&self.history, window)
    }

    /// RSI of closes, aligned with [`history`](Self::history).
    #[must_use]
    pub fn rsi(&self, window: usize) -> crate::DerivedSeries {
        indicators::rsi(&self.history, window)
    }
}

/// Fetch a full snapshot for `symbol` over the inclusive `[start, end]` range.
///
/// The symbol is uppercased before use. The three provider calls run in
/// sequence; the first failure aborts the fetch.
///
/// # Errors
///
/// Returns [`DashError::InvalidRange`] when `start > end` (checked before any
/// network activity), or any endpoint error otherwise.
pub async fn fetch(
    client: &DashClient,
    symbol: &str,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Snapshot, DashError> {
    if start > end {
        return Err(DashError::InvalidRange);
    }
    let symbol = symbol.trim().to_uppercase();

    let history = history::fetch_daily(client, &symbol, start, end).await?;
    let profile = profile::fetch_profile(client, &symbol).await?;
    let news = news::fetch_news(client, &symbol).await?;

    tracing::debug!(
        %symbol,
        bars = history.len(),
        articles = news.len(),
        "snapshot assembled"
    );

    Ok(Snapshot {
        symbol,
        start,
        end,
        history,
        profile,
        news,
    })
}
