use std::sync::Arc;

use onda_core::{BarSource, CacheStore, OndaError};

/// Engine that answers moving-average requests through the cache-read,
/// recompute, cache-write pipeline.
///
/// Holds no state of its own beyond the two injected boundaries; every
/// request runs as one sequential pipeline, and any concurrency (parallel
/// requests, retries, timeouts, cancellation) belongs to the caller.
pub struct Onda {
    pub(crate) store: Arc<dyn CacheStore>,
    pub(crate) source: Arc<dyn BarSource>,
}

// The boundaries are trait objects, so print their names instead.
impl std::fmt::Debug for Onda {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Onda")
            .field("store", &self.store.name())
            .field("source", &self.source.name())
            .finish()
    }
}

/// Builder for constructing an [`Onda`] engine with its two boundaries.
pub struct OndaBuilder {
    store: Option<Arc<dyn CacheStore>>,
    source: Option<Arc<dyn BarSource>>,
}

impl Default for OndaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl OndaBuilder {
    /// Create a new builder with no boundaries registered.
    ///
    /// Both a cache store and a bar source must be provided before
    /// [`build`](Self::build) succeeds; there are no defaults, because the
    /// engine is meaningless without its collaborators.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            store: None,
            source: None,
        }
    }

    /// Register the persistent cache the engine reads and writes through.
    ///
    /// Registering a second store replaces the first. Any `CacheStore`
    /// implementation works, from a SQL-backed table to the in-memory store
    /// shipped in `onda-mock`.
    #[must_use]
    pub fn with_store(mut self, store: Arc<dyn CacheStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Register the upstream source of raw price bars.
    ///
    /// Registering a second source replaces the first.
    #[must_use]
    pub fn with_source(mut self, source: Arc<dyn BarSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Build the [`Onda`] engine.
    ///
    /// # Errors
    /// Returns `InvalidRequest` if either boundary is missing.
    pub fn build(self) -> Result<Onda, OndaError> {
        let store = self.store.ok_or_else(|| {
            OndaError::invalid_request("no cache store registered; add one via with_store(...)")
        })?;
        let source = self.source.ok_or_else(|| {
            OndaError::invalid_request("no bar source registered; add one via with_source(...)")
        })?;
        Ok(Onda { store, source })
    }
}

impl Onda {
    /// Start building a new `Onda` engine.
    ///
    /// Typical usage chains the two boundaries:
    ///
    /// ```rust,ignore
    /// let onda = Onda::builder()
    ///     .with_store(Arc::new(MemoryStore::new()))
    ///     .with_source(Arc::new(MockBarSource::new()))
    ///     .build()?;
    /// ```
    #[must_use]
    pub fn builder() -> OndaBuilder {
        OndaBuilder::new()
    }
}
