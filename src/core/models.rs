use chrono::NaiveDate;
use serde::Serialize;

/// One trading day of OHLCV data.
///
/// Series of bars are ordered by strictly increasing `date`; rows with any
/// missing OHLC field are dropped at the wire boundary, so every bar here is
/// fully populated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceBar {
    /// Calendar day in the market's local timezone.
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

/// A computed series aligned index-for-index with the price series it was
/// derived from. `None` marks positions where the lookback window is not yet
/// full.
pub type DerivedSeries = Vec<Option<f64>>;
