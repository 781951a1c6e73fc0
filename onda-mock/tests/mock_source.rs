use chrono::{DateTime, Duration, Utc};
use onda_core::connector::BarSource;
use onda_core::{OndaError, Period};
use onda_mock::MockBarSource;

fn ts(s: &str) -> DateTime<Utc> {
    s.parse().unwrap()
}

#[tokio::test]
async fn fixture_pair_returns_the_recorded_bars() {
    let source = MockBarSource::new();
    let bars = source
        .fetch_bars(
            "binance",
            "ETH-USDT",
            Period::M1,
            ts("2023-02-26T11:57:00Z"),
            ts("2023-02-26T12:02:00Z"),
        )
        .await
        .unwrap();

    assert_eq!(bars.len(), 6);
    assert_eq!(bars[0].time, ts("2023-02-26T11:57:00Z"));
    assert_eq!(bars[5].time, ts("2023-02-26T12:02:00Z"));
    assert_eq!(bars[5].close, 1604.47);
}

#[tokio::test]
async fn fixture_bars_are_filtered_to_the_requested_range() {
    let source = MockBarSource::new();
    let bars = source
        .fetch_bars(
            "binance",
            "ETH-USDT",
            Period::M1,
            ts("2023-02-26T11:59:00Z"),
            ts("2023-02-26T12:00:00Z"),
        )
        .await
        .unwrap();

    assert_eq!(bars.len(), 2);
    assert_eq!(bars[0].time, ts("2023-02-26T11:59:00Z"));
}

#[tokio::test]
async fn synthetic_pairs_cover_any_aligned_range_deterministically() {
    let source = MockBarSource::new();
    let start = ts("2024-01-01T00:00:00Z");
    let end = ts("2024-01-01T00:30:00Z");

    let first = source
        .fetch_bars("binance", "BTC-USDT", Period::M1, start, end)
        .await
        .unwrap();
    let second = source
        .fetch_bars("binance", "BTC-USDT", Period::M1, start, end)
        .await
        .unwrap();

    assert_eq!(first.len(), 31);
    assert_eq!(first, second);
    for (i, bar) in first.iter().enumerate() {
        assert_eq!(bar.time, start + Duration::minutes(i as i64));
        assert!(bar.close > 0.0);
    }
}

#[tokio::test]
async fn fail_exchange_forces_an_upstream_error() {
    let source = MockBarSource::new();
    let err = source
        .fetch_bars(
            "FAIL",
            "BTC-USDT",
            Period::M1,
            ts("2024-01-01T00:00:00Z"),
            ts("2024-01-01T00:05:00Z"),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, OndaError::Upstream { .. }));
}
