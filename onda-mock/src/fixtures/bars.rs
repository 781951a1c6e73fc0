use onda_core::Bar;

/// Static 1-minute fixtures for known pairs.
///
/// `ETH-USDT` reproduces a short binance window whose window-3 close SMA at
/// 12:00, 12:01 and 12:02 is `1603.8966666666668`, `1604.17` and
/// `1604.3533333333335`. `NODATA-USDT` has a zero close on every bar, so any
/// close-based average over it is invalid.
pub fn by_pair(pair: &str) -> Option<Vec<Bar>> {
    match pair {
        "ETH-USDT" => Some(build(vec![
            ("2023-02-26T11:57:00Z", 1602.71, 1602.85),
            ("2023-02-26T11:58:00Z", 1602.85, 1603.39),
            ("2023-02-26T11:59:00Z", 1603.39, 1603.92),
            ("2023-02-26T12:00:00Z", 1603.92, 1604.38),
            ("2023-02-26T12:01:00Z", 1604.38, 1604.21),
            ("2023-02-26T12:02:00Z", 1604.21, 1604.47),
        ])),
        "NODATA-USDT" => Some(build(vec![
            ("2023-02-26T11:57:00Z", 0.0, 0.0),
            ("2023-02-26T11:58:00Z", 0.0, 0.0),
            ("2023-02-26T11:59:00Z", 0.0, 0.0),
            ("2023-02-26T12:00:00Z", 0.0, 0.0),
            ("2023-02-26T12:01:00Z", 0.0, 0.0),
            ("2023-02-26T12:02:00Z", 0.0, 0.0),
        ])),
        _ => None,
    }
}

fn build(rows: Vec<(&str, f64, f64)>) -> Vec<Bar> {
    rows.into_iter()
        .map(|(time, open, close)| Bar {
            time: time.parse().expect("fixture timestamp"),
            open,
            high: open.max(close) + 0.30,
            low: open.min(close) - 0.30,
            close,
            volume: 118.2,
        })
        .collect()
}
