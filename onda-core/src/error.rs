use chrono::{DateTime, Utc};
use thiserror::Error;

/// Unified error type for the onda workspace.
///
/// This wraps request validation failures, boundary-tagged failures from the
/// cache store and the upstream bar source, and the insufficient-data
/// condition raised by the generator.
///
/// None of these are retried locally: the execution host driving the
/// pipeline owns retry policy, so boundary failures are surfaced verbatim.
#[derive(Debug, Error)]
pub enum OndaError {
    /// Invalid input; fails before any boundary call and is never retried.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The cache store boundary failed.
    #[error("cache store {store} failed: {msg}")]
    Cache {
        /// Store name that failed.
        store: String,
        /// Human-readable error message.
        msg: String,
    },

    /// The upstream bar source boundary failed.
    ///
    /// The field is named `provider` rather than `source` so the derive does
    /// not treat it as an error cause.
    #[error("bar source {provider} failed: {msg}")]
    Upstream {
        /// Source name that failed.
        provider: String,
        /// Human-readable error message.
        msg: String,
    },

    /// Fetched bars do not cover the required lookback-plus-range window.
    ///
    /// Retrying without more data cannot help, so this is surfaced rather
    /// than retried.
    #[error("insufficient bars: no bar at boundary {missing}")]
    InsufficientData {
        /// First period boundary with no bar.
        missing: DateTime<Utc>,
    },
}

impl OndaError {
    /// Helper: build an `InvalidRequest` error from a message.
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    /// Helper: build a `Cache` error with the store name and message.
    pub fn cache(store: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Cache {
            store: store.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build an `Upstream` error with the source name and message.
    pub fn upstream(provider: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Upstream {
            provider: provider.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build an `InsufficientData` error for the first uncovered
    /// boundary.
    #[must_use]
    pub const fn insufficient_data(missing: DateTime<Utc>) -> Self {
        Self::InsufficientData { missing }
    }
}
