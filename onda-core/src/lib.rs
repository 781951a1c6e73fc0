//! onda-core
//!
//! Core types, traits, and utilities shared across the onda ecosystem.
//!
//! - `types`: common data structures (bars, periods, requests, points).
//! - `series`: the ordered time-to-value container cached answers live in.
//! - `sma`: the averaging engine and the windowed series generator.
//! - `freshness`: classification of cached answers against a request.
//! - `connector`: the `CacheStore` and `BarSource` boundary traits.
//!
//! Async runtime (Tokio)
//! ---------------------
//! This crate assumes the Tokio ecosystem as the async runtime: the boundary
//! traits in `connector` are `async_trait` interfaces and are expected to be
//! driven from a Tokio 1.x runtime. Everything else in the crate is pure,
//! synchronous computation.
#![warn(missing_docs)]

/// Boundary traits for the persistent cache and the upstream bar provider.
pub mod connector;
/// Unified error type for the onda workspace.
pub mod error;
/// Staleness classification of cached series reads.
pub mod freshness;
/// Ordered series container with unique, ascending time keys.
pub mod series;
/// Averaging engine and windowed series generation.
pub mod sma;
pub mod types;

pub use connector::{BarSource, CacheStore, SeriesKey};
pub use error::OndaError;
pub use freshness::{Freshness, StaleReason, evaluate};
pub use series::Series;
pub use sma::generate::{GenerateParams, generate};
pub use sma::point::window_average;
pub use types::*;
