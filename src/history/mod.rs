//! Daily OHLCV history via the provider's chart endpoint.

mod wire;

use chrono::{DateTime, Days, NaiveDate, NaiveTime};

use crate::core::{DashClient, DashError, PriceBar};

/// Fetch daily bars for `symbol` over the inclusive `[start, end]` range.
///
/// An unrecognized symbol or a range with no trading days yields an empty
/// series, not an error. Rows with any missing OHLC field are dropped.
///
/// # Errors
///
/// Returns a `DashError` on transport failure, a non-success HTTP status
/// (other than the provider's not-found envelope), or a malformed response.
pub async fn fetch_daily(
    client: &DashClient,
    symbol: &str,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<PriceBar>, DashError> {
    let mut url = client.base_chart().join(symbol)?;
    {
        let mut qp = url.query_pairs_mut();
        // period2 is exclusive on the wire, so push it one day past `end`.
        let period1 = start.and_time(NaiveTime::MIN).and_utc().timestamp();
        let end_excl = end.checked_add_days(Days::new(1)).unwrap_or(end);
        let period2 = end_excl.and_time(NaiveTime::MIN).and_utc().timestamp();
        qp.append_pair("period1", &period1.to_string());
        qp.append_pair("period2", &period2.to_string());
        qp.append_pair("interval", "1d");
        qp.append_pair("includePrePost", "false");
    }

    tracing::debug!(symbol, %start, %end, "requesting daily history");
    let resp = client.http().get(url.clone()).send().await?;
    let status = resp.status();
    let body = resp.text().await?;

    if !status.is_success() {
        // The not-found envelope rides on a 404; treat it as "no data".
        if serde_json::from_str::<wire::ChartEnvelope>(&body)
            .ok()
            .is_some_and(|e| is_not_found(&e))
        {
            tracing::debug!(symbol, "symbol not recognized by chart endpoint");
            return Ok(Vec::new());
        }
        return Err(DashError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    let parsed: wire::ChartEnvelope = serde_json::from_str(&body)
        .map_err(|e| DashError::Data(format!("chart json parse error: {e}")))?;

    let chart = parsed
        .chart
        .ok_or_else(|| DashError::Data("missing chart".into()))?;

    if let Some(err) = chart.error {
        if err.code == "Not Found" {
            return Ok(Vec::new());
        }
        return Err(DashError::Data(format!(
            "chart error: {} - {}",
            err.code, err.description
        )));
    }

    let result = chart
        .result
        .ok_or_else(|| DashError::Data("missing result".into()))?;
    let Some(r0) = result.first() else {
        return Ok(Vec::new());
    };

    let ts = r0.timestamp.as_deref().unwrap_or(&[]);
    if ts.is_empty() {
        return Ok(Vec::new());
    }
    let q = r0
        .indicators
        .quote
        .first()
        .ok_or_else(|| DashError::Data("missing quote block".into()))?;

    let gmtoffset = r0.meta.as_ref().and_then(|m| m.gmtoffset).unwrap_or(0);

    let mut out: Vec<PriceBar> = Vec::with_capacity(ts.len());
    for (i, &t) in ts.iter().enumerate() {
        let getter = |v: &Vec<Option<f64>>| v.get(i).and_then(|x| *x);
        let (Some(open), Some(high), Some(low), Some(close)) = (
            getter(&q.open),
            getter(&q.high),
            getter(&q.low),
            getter(&q.close),
        ) else {
            continue;
        };
        let Some(date) = DateTime::from_timestamp(t + gmtoffset, 0).map(|d| d.date_naive()) else {
            tracing::warn!(symbol, ts = t, "bar timestamp out of range, skipping");
            continue;
        };
        // Keep dates strictly increasing; a duplicate day (e.g., a partial
        // session echoed at the tail) keeps the first occurrence.
        if out.last().is_some_and(|prev| prev.date >= date) {
            continue;
        }
        out.push(PriceBar {
            date,
            open,
            high,
            low,
            close,
            volume: q.volume.get(i).and_then(|x| *x).unwrap_or(0),
        });
    }

    Ok(out)
}

fn is_not_found(envelope: &wire::ChartEnvelope) -> bool {
    envelope
        .chart
        .as_ref()
        .and_then(|c| c.error.as_ref())
        .is_some_and(|e| e.code == "Not Found")
}
