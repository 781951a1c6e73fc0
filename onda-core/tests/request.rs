use chrono::{DateTime, Duration, Utc};
use onda_core::{OndaError, Period, PriceField, SmaRequest};
use proptest::prelude::*;

fn t(min: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(min * 60, 0).unwrap()
}

fn valid() -> SmaRequest {
    SmaRequest {
        exchange: "binance".into(),
        pair: "ETH-USDT".into(),
        period: Period::M1,
        window_size: 3,
        price_field: PriceField::Close,
        start: t(100),
        end: t(110),
    }
}

#[test]
fn valid_request_passes() {
    assert!(valid().validate().is_ok());
}

#[test]
fn missing_fields_fail_fast() {
    let mut r = valid();
    r.exchange = String::new();
    assert!(matches!(r.validate(), Err(OndaError::InvalidRequest(_))));

    let mut r = valid();
    r.pair = String::new();
    assert!(matches!(r.validate(), Err(OndaError::InvalidRequest(_))));

    let mut r = valid();
    r.window_size = 0;
    assert!(matches!(r.validate(), Err(OndaError::InvalidRequest(_))));

    let mut r = valid();
    r.end = r.start - Duration::minutes(1);
    assert!(matches!(r.validate(), Err(OndaError::InvalidRequest(_))));
}

#[test]
fn start_equal_to_end_is_allowed() {
    let mut r = valid();
    r.end = r.start;
    assert!(r.validate().is_ok());
}

#[test]
fn normalized_rounds_down_to_boundaries() {
    let mut r = valid();
    r.start += Duration::seconds(59);
    r.end += Duration::milliseconds(1);
    let n = r.normalized();
    assert_eq!(n.start, t(100));
    assert_eq!(n.end, t(110));
}

#[test]
fn lookback_extends_one_window_before_start() {
    let r = valid();
    assert_eq!(r.normalized().lookback_start(), t(97));
}

#[test]
fn key_carries_everything_but_time() {
    let k = valid().key();
    assert_eq!(k.exchange, "binance");
    assert_eq!(k.pair, "ETH-USDT");
    assert_eq!(k.period, Period::M1);
    assert_eq!(k.window_size, 3);
    assert_eq!(k.price_field, PriceField::Close);
    assert_eq!(k.to_string(), "binance:ETH-USDT:M1:3:close");
}

proptest! {
    // Rounding to boundaries is idempotent: a request one microsecond past a
    // boundary resolves exactly like the boundary itself.
    #[test]
    fn normalization_is_idempotent(
        start_min in 0i64..1_000_000,
        span_min in 0i64..10_000,
        start_offset_us in 0i64..60_000_000,
        end_offset_us in 0i64..60_000_000,
    ) {
        let mut r = valid();
        r.start = t(start_min) + Duration::microseconds(start_offset_us);
        r.end = t(start_min + span_min) + Duration::microseconds(end_offset_us);

        let once = r.normalized();
        prop_assert_eq!(once.start, t(start_min));
        prop_assert_eq!(once.end, t(start_min + span_min));
        prop_assert_eq!(once.normalized(), once);
    }
}
