use std::sync::Arc;

use onda::{Onda, Period, PriceField, SmaRequest};
use onda_mock::{MemoryStore, MockBarSource};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Build the engine with an in-memory store and the mock bar source.
    let onda = Onda::builder()
        .with_store(Arc::new(MemoryStore::new()))
        .with_source(Arc::new(MockBarSource::new()))
        .build()?;

    // 2. Ask for a three-bar close-price SMA over a short historical range.
    let req = SmaRequest {
        exchange: "binance".into(),
        pair: "ETH-USDT".into(),
        period: Period::M1,
        window_size: 3,
        price_field: PriceField::Close,
        start: "2023-02-26T12:00:00Z".parse()?,
        end: "2023-02-26T12:02:00Z".parse()?,
    };

    // 3. First call computes from bars and writes the series to the cache.
    let series = onda.sma(&req).await?;
    for point in series.to_points() {
        println!("{}  {:?}", point.time, point.value);
    }

    // 4. Second call is served straight from the cache.
    let cached = onda.sma(&req).await?;
    assert_eq!(cached, series);
    println!("second call returned the cached series");

    Ok(())
}
