mod common;

use std::time::Duration;

use common::{chart_body, client_for, day, mount_snapshot};
use httpmock::MockServer;
use stockdash::{DashError, SnapshotCache};

fn sample_bars() -> Vec<(chrono::NaiveDate, f64)> {
    vec![
        (day(2026, 8, 24), 100.0),
        (day(2026, 8, 25), 101.0),
        (day(2026, 8, 26), 102.0),
    ]
}

#[tokio::test]
async fn second_call_within_ttl_issues_one_provider_call() {
    let server = MockServer::start();
    let sym = "AAPL";
    let chart_mock = mount_snapshot(&server, sym, chart_body(&sample_bars()));

    let cache = SnapshotCache::new(client_for(&server));

    let first = cache.get(sym, day(2026, 8, 24), day(2026, 8, 26)).await.unwrap();
    chart_mock.assert_calls(1);

    let second = cache.get(sym, day(2026, 8, 24), day(2026, 8, 26)).await.unwrap();
    chart_mock.assert_calls(1);

    assert_eq!(first.history, second.history);
    assert_eq!(first.profile, second.profile);
}

#[tokio::test]
async fn stale_entry_is_refetched_after_ttl() {
    let server = MockServer::start();
    let sym = "MSFT";
    let chart_mock = mount_snapshot(&server, sym, chart_body(&sample_bars()));

    let cache = SnapshotCache::with_ttl(client_for(&server), Duration::from_millis(50));

    let _ = cache.get(sym, day(2026, 8, 24), day(2026, 8, 26)).await.unwrap();
    let _ = cache.get(sym, day(2026, 8, 24), day(2026, 8, 26)).await.unwrap();
    chart_mock.assert_calls(1);

    tokio::time::sleep(Duration::from_millis(80)).await;

    let _ = cache.get(sym, day(2026, 8, 24), day(2026, 8, 26)).await.unwrap();
    chart_mock.assert_calls(2);
}

#[tokio::test]
async fn distinct_ranges_are_distinct_entries() {
    let server = MockServer::start();
    let sym = "AAPL";
    let chart_mock = mount_snapshot(&server, sym, chart_body(&sample_bars()));

    let cache = SnapshotCache::new(client_for(&server));

    let _ = cache.get(sym, day(2026, 8, 24), day(2026, 8, 26)).await.unwrap();
    let _ = cache.get(sym, day(2026, 8, 24), day(2026, 8, 25)).await.unwrap();
    chart_mock.assert_calls(2);
}

#[tokio::test]
async fn symbol_is_normalized_before_keying() {
    let server = MockServer::start();
    let chart_mock = mount_snapshot(&server, "AAPL", chart_body(&sample_bars()));

    let cache = SnapshotCache::new(client_for(&server));

    let snap = cache.get("aapl", day(2026, 8, 24), day(2026, 8, 26)).await.unwrap();
    assert_eq!(snap.symbol, "AAPL");

    let _ = cache.get(" AAPL ", day(2026, 8, 24), day(2026, 8, 26)).await.unwrap();
    chart_mock.assert_calls(1);
}

#[tokio::test]
async fn invalid_range_is_rejected_before_any_fetch() {
    let server = MockServer::start();
    let chart_mock = mount_snapshot(&server, "AAPL", chart_body(&sample_bars()));

    let cache = SnapshotCache::new(client_for(&server));

    let err = cache
        .get("AAPL", day(2026, 8, 26), day(2026, 8, 24))
        .await
        .unwrap_err();
    assert!(matches!(err, DashError::InvalidRange));
    chart_mock.assert_calls(0);
}

#[tokio::test]
async fn failures_are_not_cached() {
    let server = MockServer::start();
    let sym = "AAPL";

    // chart endpoint is down; every attempt should go back to the network
    let chart_mock = server.mock(|when, then| {
        when.method(httpmock::Method::GET)
            .path(format!("/v8/finance/chart/{sym}"));
        then.status(500).body("maintenance");
    });

    let cache = SnapshotCache::new(client_for(&server));

    let err = cache.get(sym, day(2026, 8, 24), day(2026, 8, 26)).await.unwrap_err();
    assert!(matches!(err, DashError::Status { status: 500, .. }));
    chart_mock.assert_calls(1);

    let err = cache.get(sym, day(2026, 8, 24), day(2026, 8, 26)).await.unwrap_err();
    assert!(matches!(err, DashError::Status { status: 500, .. }));
    chart_mock.assert_calls(2);
}
