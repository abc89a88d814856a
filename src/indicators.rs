//! Pure indicator math over a daily price series.
//!
//! Every function maps a `&[PriceBar]` to a [`DerivedSeries`] of the same
//! length, `None` until the lookback window fills. No I/O, no state; a short
//! or empty input simply yields an all-`None` series.

use crate::core::{DerivedSeries, PriceBar};

/// Moving-average windows the dashboard charts.
pub const MA_WINDOWS: [usize; 3] = [20, 50, 200];

/// Standard RSI lookback.
pub const RSI_WINDOW: usize = 14;

/// Simple moving average of closing prices.
///
/// Entry `i` is `mean(close[i-window+1..=i])` once `window` bars are
/// available, else `None`. Weekends and holidays are simply absent bars; no
/// gap filling.
#[must_use]
pub fn moving_average(series: &[PriceBar], window: usize) -> DerivedSeries {
    let mut out: DerivedSeries = vec![None; series.len()];
    if window == 0 || series.len() < window {
        return out;
    }

    let mut sum: f64 = series[..window - 1].iter().map(|b| b.close).sum();
    for i in (window - 1)..series.len() {
        sum += series[i].close;
        out[i] = Some(sum / window as f64);
        sum -= series[i + 1 - window].close;
    }
    out
}

/// Relative Strength Index over close-to-close changes.
///
/// Gains and losses are simple trailing means over `window` daily deltas
/// (the first delta needs two bars, so the first defined entry is index
/// `window`). Zero-division policy for flat or one-sided runs: when the
/// average loss is zero, RSI is 100 if the average gain is positive and a
/// neutral 50 when both averages are zero.
#[must_use]
pub fn rsi(series: &[PriceBar], window: usize) -> DerivedSeries {
    let n = series.len();
    let mut out: DerivedSeries = vec![None; n];
    if window == 0 || n < window + 1 {
        return out;
    }

    // gains[i] / losses[i] hold the move into bar i; index 0 has no delta.
    let mut gains = vec![0.0f64; n];
    let mut losses = vec![0.0f64; n];
    for i in 1..n {
        let delta = series[i].close - series[i - 1].close;
        if delta > 0.0 {
            gains[i] = delta;
        } else {
            losses[i] = -delta;
        }
    }

    let mut gain_sum: f64 = gains[1..window].iter().sum();
    let mut loss_sum: f64 = losses[1..window].iter().sum();
    for i in window..n {
        gain_sum += gains[i];
        loss_sum += losses[i];

        let avg_gain = gain_sum / window as f64;
        let avg_loss = loss_sum / window as f64;
        out[i] = Some(if avg_loss == 0.0 {
            if avg_gain > 0.0 { 100.0 } else { 50.0 }
        } else {
            let rs = avg_gain / avg_loss;
            100.0 - (100.0 / (1.0 + rs))
        });

        gain_sum -= gains[i + 1 - window];
        loss_sum -= losses[i + 1 - window];
    }
    out
}
