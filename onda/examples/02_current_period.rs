use std::sync::Arc;

use chrono::{Duration, Utc};
use onda::{Onda, Period, PriceField, SmaRequest};
use onda_mock::{MemoryStore, MockBarSource};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let onda = Onda::builder()
        .with_store(Arc::new(MemoryStore::new()))
        .with_source(Arc::new(MockBarSource::new()))
        .build()?;

    // A range ending at the current daily boundary: the last point covers a
    // still-open bar, so the series is recomputed on every request.
    let end = Period::D1.round_down(Utc::now());
    let req = SmaRequest {
        exchange: "binance".into(),
        pair: "BTC-USDT".into(),
        period: Period::D1,
        window_size: 2,
        price_field: PriceField::Close,
        start: end - Duration::days(5),
        end,
    };

    let series = onda.sma(&req).await?;
    println!("{} points ending in the open period:", series.len());
    for point in series.to_points() {
        println!("{}  {:?}", point.time, point.value);
    }

    Ok(())
}
