//! Simple-moving-average computation.
//!
//! Modules include:
//! - `point`: the averaging engine, one window of bars to one value
//! - `generate`: slide a fixed-width window across a range to build a series
/// Windowed series generation across a time range.
pub mod generate;
/// Averaging engine for a single window of bars.
pub mod point;
