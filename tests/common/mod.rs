#![allow(dead_code)]

use chrono::{NaiveDate, NaiveTime};
use httpmock::{Method::GET, Method::POST, Mock, MockServer};
use serde_json::{Value, json};
use stockdash::DashClient;
use url::Url;

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn ts(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp()
}

/// A client with every endpoint pointed at the mock server.
pub fn client_for(server: &MockServer) -> DashClient {
    DashClient::builder()
        .base_chart(Url::parse(&format!("{}/v8/finance/chart/", server.base_url())).unwrap())
        .base_quote_summary(
            Url::parse(&format!("{}/v10/finance/quoteSummary/", server.base_url())).unwrap(),
        )
        .base_news(Url::parse(&server.base_url()).unwrap())
        .build()
        .unwrap()
}

/// Chart envelope with one flat bar per `(date, close)` pair
/// (open = high = low = close, volume 1000).
pub fn chart_body(bars: &[(NaiveDate, f64)]) -> Value {
    let timestamps: Vec<i64> = bars.iter().map(|(d, _)| ts(*d)).collect();
    let closes: Vec<f64> = bars.iter().map(|(_, c)| *c).collect();
    json!({
        "chart": {
            "result": [{
                "meta": { "gmtoffset": 0 },
                "timestamp": timestamps,
                "indicators": {
                    "quote": [{
                        "open": closes.clone(),
                        "high": closes.clone(),
                        "low": closes.clone(),
                        "close": closes,
                        "volume": vec![1000u64; bars.len()],
                    }]
                }
            }],
            "error": null
        }
    })
}

/// Chart envelope for a range with zero trading days.
pub fn empty_chart_body() -> Value {
    json!({
        "chart": {
            "result": [{
                "meta": { "gmtoffset": 0 },
                "indicators": { "quote": [{}] }
            }],
            "error": null
        }
    })
}

/// The provider's unknown-symbol envelope (served with a 404).
pub fn not_found_chart_body(symbol: &str) -> Value {
    json!({
        "chart": {
            "result": null,
            "error": {
                "code": "Not Found",
                "description": format!("No data found, symbol may be delisted: {symbol}")
            }
        }
    })
}

pub fn profile_body() -> Value {
    json!({
        "quoteSummary": {
            "result": [{
                "summaryProfile": {
                    "sector": "Technology",
                    "industry": "Consumer Electronics"
                },
                "summaryDetail": {
                    "marketCap": { "raw": 3_000_000_000_000u64, "fmt": "3T" },
                    "beta": { "raw": 1.25, "fmt": "1.25" },
                    "trailingPE": { "raw": 31.4, "fmt": "31.40" },
                    "forwardPE": { "raw": 28.9, "fmt": "28.90" },
                    "dividendYield": { "raw": 0.0044, "fmt": "0.44%" },
                    "fiftyTwoWeekHigh": { "raw": 237.23, "fmt": "237.23" },
                    "fiftyTwoWeekLow": { "raw": 164.08, "fmt": "164.08" }
                },
                "defaultKeyStatistics": {}
            }],
            "error": null
        }
    })
}

pub fn news_body(items: &[Value]) -> Value {
    json!({
        "data": {
            "tickerStream": {
                "stream": items
            }
        }
    })
}

pub fn news_item(title: &str, click_through: Option<&str>, canonical: Option<&str>) -> Value {
    json!({
        "content": {
            "title": title,
            "pubDate": "2026-08-28T14:30:00Z",
            "summary": format!("{title} summary"),
            "provider": { "displayName": "Reuters" },
            "clickThroughUrl": click_through.map(|u| json!({ "url": u })),
            "canonicalUrl": canonical.map(|u| json!({ "url": u })),
        }
    })
}

/// Mount chart, quoteSummary, and news mocks for one symbol so a full
/// snapshot fetch succeeds. Returns the chart mock for call-count asserts.
pub fn mount_snapshot<'a>(server: &'a MockServer, symbol: &str, chart: Value) -> Mock<'a> {
    let chart_mock = server.mock(|when, then| {
        when.method(GET).path(format!("/v8/finance/chart/{symbol}"));
        then.status(200)
            .header("content-type", "application/json")
            .json_body(chart);
    });
    server.mock(|when, then| {
        when.method(GET)
            .path(format!("/v10/finance/quoteSummary/{symbol}"));
        then.status(200)
            .header("content-type", "application/json")
            .json_body(profile_body());
    });
    server.mock(|when, then| {
        when.method(POST).path("/xhr/ncp");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(news_body(&[news_item(
                "Sample headline",
                Some("https://example.com/a"),
                None,
            )]));
    });
    chart_mock
}
