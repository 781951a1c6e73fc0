use crate::Onda;

impl Onda {
    /// Version of the engine, as reported by the service-info surface.
    #[must_use]
    pub const fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}
