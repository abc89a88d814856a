//! stockdash: data core for a single-user stock market dashboard.
//!
//! Fetches daily OHLCV history, company profile fields, and recent news for a
//! ticker over a date range, memoizes the combined snapshot with a TTL, and
//! computes indicator series (SMA 20/50/200, RSI 14) on demand. Rendering is
//! left to the consumer; everything here is presentation-ready data.

pub mod cache;
pub mod core;
pub mod history;
pub mod indicators;
pub mod news;
pub mod profile;
pub mod snapshot;

pub use crate::cache::SnapshotCache;
pub use crate::core::{DashClient, DashClientBuilder, DashError, DerivedSeries, PriceBar};
pub use crate::indicators::{MA_WINDOWS, RSI_WINDOW, moving_average, rsi};
pub use crate::news::NewsItem;
pub use crate::profile::CompanyProfile;
pub use crate::snapshot::Snapshot;
