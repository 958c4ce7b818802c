//! A collection of weekly bars for a specific symbol and interval.

use serde::{Deserialize, Serialize};

use crate::models::{bar::Bar, interval::Interval};

/// Represents a complete price series for a single symbol.
///
/// Bars are ascending by timestamp with no duplicate timestamps; providers
/// uphold this before handing a series out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarSeries {
    /// The symbol this data represents (e.g., "NIFTYBEES.NS").
    pub symbol: String,
    /// The bar interval of the series.
    pub interval: Interval,
    /// The collection of OHLCV bars.
    pub bars: Vec<Bar>,
}

impl BarSeries {
    /// Closing prices in series order.
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    /// The trailing `n` bars (the whole series when it is shorter).
    pub fn tail(&self, n: usize) -> &[Bar] {
        let start = self.bars.len().saturating_sub(n);
        &self.bars[start..]
    }
}
