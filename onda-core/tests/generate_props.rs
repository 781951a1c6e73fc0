use chrono::{DateTime, Utc};
use onda_core::{Bar, GenerateParams, Period, PriceField, generate};
use proptest::prelude::*;

fn t(min: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(min * 60, 0).unwrap()
}

fn bar(min: i64, close: f64) -> Bar {
    Bar {
        time: t(min),
        open: close,
        high: close,
        low: close,
        close,
        volume: 1.0,
    }
}

proptest! {
    #[test]
    fn output_length_and_ordering_hold(
        window in 1u32..=6,
        points in 1i64..=40,
        start_min in 0i64..=10_000,
        closes in proptest::collection::vec(1.0f64..100_000.0, 60),
    ) {
        let end_min = start_min + points - 1;
        let lookback_min = start_min - i64::from(window);
        let bars: Vec<Bar> = (lookback_min..=end_min)
            .map(|m| bar(m, closes[(m - lookback_min) as usize % closes.len()]))
            .collect();

        let series = generate(GenerateParams {
            bars: &bars,
            price_field: PriceField::Close,
            start: t(start_min),
            end: t(end_min),
            window_size: window,
            period: Period::M1,
        })
        .unwrap();

        // Exactly (end - start) / period + 1 points.
        prop_assert_eq!(series.len() as i64, points);

        // Ascending, unique, boundary-aligned times; all values computed
        // since every close is nonzero.
        let mut prev: Option<DateTime<Utc>> = None;
        for (time, value) in series.iter() {
            if let Some(p) = prev {
                prop_assert_eq!(time - p, Period::M1.duration());
            }
            prev = Some(time);
            prop_assert!(value.value().is_some());
        }
        prop_assert_eq!(series.first_time(), Some(t(start_min)));
        prop_assert_eq!(series.last_time(), Some(t(end_min)));
    }

    #[test]
    fn dropping_any_required_bar_fails_generation(
        window in 1u32..=4,
        points in 1i64..=12,
        drop_offset in 0usize..16,
    ) {
        let start_min = 100i64;
        let end_min = start_min + points - 1;
        let lookback_min = start_min - i64::from(window);
        let mut bars: Vec<Bar> = (lookback_min..=end_min).map(|m| bar(m, 50.0)).collect();
        let drop_at = drop_offset % bars.len();
        bars.remove(drop_at);

        let res = generate(GenerateParams {
            bars: &bars,
            price_field: PriceField::Close,
            start: t(start_min),
            end: t(end_min),
            window_size: window,
            period: Period::M1,
        });
        prop_assert!(res.is_err());
    }
}
