//! Canonical in-memory representation of a weekly price bar (OHLCV).
//!
//! This struct is the standard output of every
//! [`SeriesProvider`](crate::providers::SeriesProvider) implementation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single weekly bar (OHLCV) anchored at a week boundary.
///
/// The close is already adjusted for splits and dividends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// The week-boundary timestamp for this bar (UTC).
    pub timestamp: DateTime<Utc>,

    /// Opening price.
    pub open: f64,

    /// Highest price during the week.
    pub high: f64,

    /// Lowest price during the week.
    pub low: f64,

    /// Closing price, adjusted for splits and dividends.
    pub close: f64,

    /// Volume traded during the week. Not all symbols supply this.
    pub volume: Option<u64>,
}
