use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::models::interval::Interval;

/// Parameters for requesting a historical price series from a provider.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SeriesRequest {
    /// The symbol to request (e.g., "GOLDBEES.NS").
    pub symbol: String,

    /// The bar interval.
    pub interval: Interval,

    /// Start of the requested time range (inclusive, UTC).
    pub start: DateTime<Utc>,

    /// End of the requested time range (UTC).
    pub end: DateTime<Utc>,
}

impl SeriesRequest {
    /// Builds a request covering the trailing `years` of history, ending now.
    pub fn trailing_years(symbol: impl Into<String>, interval: Interval, years: u32) -> Self {
        let end = Utc::now();
        let start = end - Duration::days(365 * i64::from(years));
        Self {
            symbol: symbol.into(),
            interval,
            start,
            end,
        }
    }
}
